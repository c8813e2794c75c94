use crate::models::Section;

use super::{
    ParseOptions,
    classify::{LineClass, Tier, classify},
    fields::parse_row,
};

/// Table regions a `first_table_only` document may close before it stops.
const TABLE_LIMIT: usize = 1;

/// Whether the builder wants more lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Single-pass state machine that appends sections and settings under an
/// anchor section, one line at a time.
///
/// The insertion point is a path of child indices from the anchor. An empty
/// path means the anchor itself; popping an empty path is a no-op.
pub struct SectionTreeBuilder<'a> {
    anchor: &'a mut Section,
    options: &'a ParseOptions,
    path: Vec<usize>,
    tier: Tier,
    started: bool,
    in_hint: bool,
    in_table: bool,
    tables_closed: usize,
}

impl<'a> SectionTreeBuilder<'a> {
    pub fn new(anchor: &'a mut Section, options: &'a ParseOptions) -> Self {
        let mut path = Vec::new();
        match (&options.synthetic_name, options.first_table_only) {
            (Some(name), true) => {
                path.push(anchor.push_subsection(Section::new(name.clone())));
            }
            (Some(name), false) => {
                log::debug!("Ignoring synthetic section {name:?}: only used with first_table_only");
            }
            _ => {}
        }

        Self {
            anchor,
            options,
            path,
            tier: Tier::Section,
            started: false,
            in_hint: false,
            in_table: false,
            tables_closed: 0,
        }
    }

    pub fn push(&mut self, line: &str) -> Flow {
        if !self.started {
            if line.starts_with(self.options.start_marker.as_str()) {
                self.started = true;
            }
            return Flow::Continue;
        }

        let class = classify(line);

        if class == LineClass::HintFence {
            self.in_hint = !self.in_hint;
            return Flow::Continue;
        }
        if self.in_hint {
            return Flow::Continue;
        }

        match class {
            LineClass::TableSeparator => return Flow::Continue,
            LineClass::TableRow if !self.in_table => {
                // Header row
                self.in_table = true;
                return Flow::Continue;
            }
            LineClass::TableRow => {}
            _ if self.in_table => {
                self.in_table = false;
                if self.options.first_table_only {
                    self.tables_closed += 1;
                    if self.tables_closed >= TABLE_LIMIT {
                        log::debug!("Table limit reached, stopping document");
                        return Flow::Stop;
                    }
                }
            }
            _ => {}
        }

        if self.is_skipped(line) {
            return Flow::Continue;
        }

        if let LineClass::Heading { tier, title } = class {
            self.open_section(tier, title);
        }

        if !self.in_table {
            return Flow::Continue;
        }

        match parse_row(line) {
            Some(setting) => self.current().push_setting(setting),
            None => log::debug!("Skipping short table row: {line:?}"),
        }
        Flow::Continue
    }

    fn is_skipped(&self, line: &str) -> bool {
        self.options
            .skip_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }

    fn open_section(&mut self, tier: Tier, title: &str) {
        let has_parent = !self.path.is_empty();
        match tier {
            Tier::Subsection => {
                if self.tier > Tier::Section && has_parent {
                    self.path.pop();
                }
            }
            Tier::Section => {
                if self.tier > Tier::Section && has_parent {
                    self.path.pop();
                    self.path.pop();
                } else if has_parent {
                    self.path.pop();
                }
            }
        }

        let index = self.current().push_subsection(Section::new(title));
        self.path.push(index);
        self.tier = tier;
        log::trace!("Opened {tier:?} {title:?} at {:?}", self.path);
    }

    fn current(&mut self) -> &mut Section {
        let path = &self.path;
        let anchor = &mut *self.anchor;
        match anchor.descendant_mut(path) {
            Some(section) => section,
            // The path only ever holds indices of sections this builder pushed.
            None => unreachable!("insertion path {path:?} left the tree"),
        }
    }
}
