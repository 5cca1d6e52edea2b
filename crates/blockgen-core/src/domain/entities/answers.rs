use crate::domain::value_objects::{FieldFlag, FieldSet};

/// Everything the operator told us about the block to generate.
///
/// Raw input: nothing here is normalized. Identifiers are derived from it by
/// [`BlockIdentifiers::derive`](super::BlockIdentifiers::derive), which is
/// also where an unusable title is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockAnswers {
    pub namespace: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub icon: String,
    pub fields: FieldSet,
}

impl BlockAnswers {
    /// Answers with empty description, no keywords, no fields, and the
    /// `star-filled` dashicon.
    pub fn new(namespace: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            title: title.into(),
            description: String::new(),
            keywords: Vec::new(),
            icon: "star-filled".into(),
            fields: FieldSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_fields(mut self, fields: impl Into<FieldSet>) -> Self {
        self.fields = fields.into();
        self
    }

    pub fn with_field(mut self, flag: FieldFlag) -> Self {
        self.fields.insert(flag);
        self
    }
}

/// Split a comma separated keyword answer into trimmed, non-empty keywords.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
