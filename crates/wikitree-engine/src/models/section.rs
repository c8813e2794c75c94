use serde::Serialize;

/// A named node in the settings tree.
///
/// Children are stored in document order. There is no parent link: the
/// parser tracks its position with a path of child indices instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "childs", skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<Setting>,
    #[serde(rename = "subsection", skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Section>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a child section and return its index.
    pub fn push_subsection(&mut self, section: Section) -> usize {
        self.subsections.push(section);
        self.subsections.len() - 1
    }

    pub fn push_setting(&mut self, setting: Setting) {
        self.settings.push(setting);
    }

    /// First direct child with the given name
    pub fn subsection(&self, name: &str) -> Option<&Section> {
        self.subsections.iter().find(|s| s.name == name)
    }

    /// Follow a path of child indices down from this node.
    ///
    /// Returns `None` if any index is out of range.
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut Section> {
        path.iter()
            .try_fold(self, |node, &index| node.subsections.get_mut(index))
    }

    /// Number of settings in this section and everything below it.
    pub fn total_settings(&self) -> usize {
        self.settings.len()
            + self
                .subsections
                .iter()
                .map(Section::total_settings)
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty() && self.subsections.is_empty()
    }
}

/// One configuration variable, taken from a single table data row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Setting {
    /// Human-readable label derived from `variable`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// The raw identifier as written in the table.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub variable: String,
    /// Sentence-cased description, always ending in a period.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub value_type: String,
    #[serde(rename = "default", skip_serializing_if = "String::is_empty")]
    pub default_value: String,
    /// Range or option list from a trailing `[...]` in the description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub range: String,
}
