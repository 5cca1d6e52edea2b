//! Template vocabulary: which stubs exist, the tokens and markers they
//! contain, and the values a render fills them with.
//!
//! ## Text stubs
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  block.php.txt                                               │
//! │  ├── tokens   XYZ → title, QWY → slug, DX9S → namespace key   │
//! │  └── markers  @@FIELD_DECLARATIONS@@, @@FIELD_CONTENT@@      │
//! │  config.php.txt                                              │
//! │  └── markers  @@FIELD_LIST@@                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tokens are replaced everywhere they occur, in one pass, so a value that
//! happens to contain another token's text is left alone. A marker occupies
//! a whole line and is replaced once by an assembled fragment.
//!
//! ## JSON stub
//!
//! `block.json.txt` is never searched for tokens; it is parsed and the
//! fields of [`ManifestPatch`] are assigned onto it.

use std::fmt;

use crate::domain::{
    entities::{answers::BlockAnswers, identifiers::BlockIdentifiers},
    fields::ComposedFields,
};

/// Token replaced by the block title.
pub const TITLE_TOKEN: &str = "XYZ";
/// Token replaced by the block slug.
pub const SLUG_TOKEN: &str = "QWY";
/// Token replaced by the namespace key.
pub const NAMESPACE_TOKEN: &str = "DX9S";

/// `editorStyle` written into every manifest.
pub const EDITOR_STYLE: &str = "file:./editor.css";

/// A stub file supplied by the template store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    RenderTemplate,
    FieldConfig,
    Manifest,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::RenderTemplate, Self::FieldConfig, Self::Manifest];

    /// File name of the stub inside the stubs directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::RenderTemplate => "block.php.txt",
            Self::FieldConfig => "config.php.txt",
            Self::Manifest => "block.json.txt",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A single-occurrence insertion point in a text stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    FieldDeclarations,
    FieldContent,
    FieldList,
}

impl Marker {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FieldDeclarations => "@@FIELD_DECLARATIONS@@",
            Self::FieldContent => "@@FIELD_CONTENT@@",
            Self::FieldList => "@@FIELD_LIST@@",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values for one text render.
///
/// A **Value Object**: immutable after creation, transformations return new
/// instances (see [`with_token`](Self::with_token)).
///
/// Tokens are kept in insertion order. When two tokens could match at the
/// same position the one added first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    tokens: Vec<(String, String)>,
    markers: Vec<(Marker, String)>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for `view.php`: identity tokens plus the declaration and
    /// content markers.
    pub fn for_render_template(
        ids: &BlockIdentifiers,
        answers: &BlockAnswers,
        fields: &ComposedFields,
    ) -> Self {
        Self::new()
            .with_token(NAMESPACE_TOKEN, php_single_quoted(ids.namespace_key()))
            .with_token(SLUG_TOKEN, php_single_quoted(ids.slug()))
            .with_token(TITLE_TOKEN, php_single_quoted(&answers.title))
            .with_marker(Marker::FieldDeclarations, fields.declarations_fragment())
            .with_marker(Marker::FieldContent, fields.content_fragment())
    }

    /// Context for `config.php`: only the field list marker.
    pub fn for_field_config(fields: &ComposedFields) -> Self {
        Self::new().with_marker(Marker::FieldList, fields.config_fragment())
    }

    pub fn with_token(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        let token = token.into();
        let value = value.into();
        match self.tokens.iter_mut().find(|(t, _)| *t == token) {
            Some(slot) => slot.1 = value,
            None => self.tokens.push((token, value)),
        }
        self
    }

    pub fn with_marker(mut self, marker: Marker, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        match self.markers.iter_mut().find(|(m, _)| *m == marker) {
            Some(slot) => slot.1 = fragment,
            None => self.markers.push((marker, fragment)),
        }
        self
    }

    pub fn tokens(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    pub fn markers(&self) -> impl Iterator<Item = (Marker, &str)> {
        self.markers.iter().map(|(m, f)| (*m, f.as_str()))
    }

    pub fn token(&self, token: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn fragment(&self, marker: Marker) -> Option<&str> {
        self.markers
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, f)| f.as_str())
    }
}

/// Fields assigned onto the manifest stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPatch {
    pub name: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub keywords: Vec<String>,
    pub editor_style: String,
    /// Goes to the nested `acf.renderTemplate`.
    pub render_template: String,
}

impl ManifestPatch {
    pub fn for_block(ids: &BlockIdentifiers, answers: &BlockAnswers) -> Self {
        Self {
            name: ids.qualified_name(),
            title: answers.title.clone(),
            description: answers.description.clone(),
            icon: answers.icon.clone(),
            keywords: answers.keywords.clone(),
            editor_style: EDITOR_STYLE.to_string(),
            render_template: crate::domain::ArtifactKind::RenderTemplate
                .file_name()
                .to_string(),
        }
    }
}

/// Escape `value` for use inside a PHP single-quoted string literal.
pub fn php_single_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
