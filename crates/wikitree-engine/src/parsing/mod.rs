//! # Section Tree Parsing
//!
//! Turns a Markdown configuration reference page into a tree of [`Section`]s
//! holding [`Setting`](crate::models::Setting)s.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own
//!    into a [`LineClass`] (hint fence, table row, table separator, heading, text).
//!
//! 2. **Tree Construction** (`builder`): a [`SectionTreeBuilder`] walks the
//!    classified lines once, tracking the start gate, hint blocks and table
//!    regions, and appends sections and settings under an anchor section.
//!
//! Table cells become settings through the helpers in `fields`.
//!
//! ## Heading Tiers
//!
//! Only two tiers exist: `##` opens a section and `###` (or deeper) opens a
//! subsection. Placement follows the pop rules in `SectionTreeBuilder`;
//! skipping a tier can put a section under an unexpected parent.

pub mod builder;
pub mod classify;
pub mod fields;


use serde::{Deserialize, Serialize};

use crate::models::Section;

pub use builder::{Flow, SectionTreeBuilder};
pub use classify::{LineClass, Tier, classify};
pub use fields::{format_description, get_name, get_range_or_option, parse_row};

/// Per-document parse parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Lines are ignored until one starts with this prefix.
    pub start_marker: String,
    /// Lines starting with any of these are dropped.
    #[serde(default)]
    pub skip_prefixes: Vec<String>,
    /// Stop the document once its first table ends.
    #[serde(default)]
    pub first_table_only: bool,
    /// Wrapper section created under the anchor when `first_table_only` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic_name: Option<String>,
}

impl ParseOptions {
    pub fn new(start_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
            ..Self::default()
        }
    }

    pub fn skip<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Keep only the first table, nested under a section called `name`.
    pub fn first_table_only(mut self, name: impl Into<String>) -> Self {
        self.first_table_only = true;
        self.synthetic_name = Some(name.into());
        self
    }
}

/// Parse one document and append what it contains under `anchor`.
pub fn parse_document<I, S>(lines: I, options: &ParseOptions, anchor: &mut Section)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = SectionTreeBuilder::new(anchor, options);
    for line in lines {
        if builder.push(line.as_ref()) == Flow::Stop {
            break;
        }
    }
}

/// Like [`parse_document`], for line sources that can fail.
///
/// Stops at the first error and returns it. Anything already parsed from
/// this document stays in the tree.
pub fn try_parse_document<I, S, E>(
    lines: I,
    options: &ParseOptions,
    anchor: &mut Section,
) -> Result<(), E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
{
    let mut builder = SectionTreeBuilder::new(anchor, options);
    for line in lines {
        if builder.push(line?.as_ref()) == Flow::Stop {
            break;
        }
    }
    Ok(())
}
