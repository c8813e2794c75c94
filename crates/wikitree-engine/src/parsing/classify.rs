/// Prefix that opens and closes a hint block.
pub const HINT_FENCE: &str = "{{";

/// Heading tier in the two-level section model.
///
/// `##` headings are sections, `###` and deeper are subsections. Markdown
/// `#` titles are not headings here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Section = 1,
    Subsection = 2,
}

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; the builder decides what a class
/// means given its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opens or closes a hint block.
    HintFence,
    /// A table alignment row such as `|---|---|` or `| :-- | --: |`.
    TableSeparator,
    /// Any other line starting with `|`.
    TableRow,
    Heading {
        tier: Tier,
        /// Text after the heading marker, trimmed.
        title: &'a str,
    },
    Text,
}

/// Classifies a line into a [`LineClass`].
pub fn classify(line: &str) -> LineClass<'_> {
    if line.starts_with(HINT_FENCE) {
        return LineClass::HintFence;
    }

    if line.starts_with('|') {
        return if is_separator(line) {
            LineClass::TableSeparator
        } else {
            LineClass::TableRow
        };
    }

    // Only the marker itself is stripped, so `#### x` keeps a leading `#`.
    if let Some(rest) = line.strip_prefix("###") {
        return LineClass::Heading {
            tier: Tier::Subsection,
            title: rest.trim(),
        };
    }
    if let Some(rest) = line.strip_prefix("##") {
        return LineClass::Heading {
            tier: Tier::Section,
            title: rest.trim(),
        };
    }

    LineClass::Text
}

/// Every cell must be `---` or longer, optionally wrapped in `:` for alignment.
fn is_separator(line: &str) -> bool {
    let cells = line.trim().trim_matches('|');
    !cells.is_empty() && cells.split('|').all(is_separator_cell)
}

fn is_separator_cell(cell: &str) -> bool {
    let dashes = cell.trim();
    let dashes = dashes.strip_prefix(':').unwrap_or(dashes);
    let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
    dashes.len() >= 3 && dashes.chars().all(|c| c == '-')
}
