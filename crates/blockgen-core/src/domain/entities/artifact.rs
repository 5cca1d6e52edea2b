use std::fmt;

use crate::domain::entities::template::TemplateKind;

/// One file of the generated block, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    BlockStylesheet,
    EditorCss,
    EditorStylesheet,
    FieldConfig,
    RenderTemplate,
    Manifest,
}

impl ArtifactKind {
    /// Every artifact, in the order the generator writes them.
    pub const WRITE_ORDER: [ArtifactKind; 6] = [
        Self::BlockStylesheet,
        Self::EditorCss,
        Self::EditorStylesheet,
        Self::FieldConfig,
        Self::RenderTemplate,
        Self::Manifest,
    ];

    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::BlockStylesheet => "_block.scss",
            Self::EditorCss => "editor.css",
            Self::EditorStylesheet => "editor.scss",
            Self::FieldConfig => "config.php",
            Self::RenderTemplate => "view.php",
            Self::Manifest => "block.json",
        }
    }

    /// The stub this artifact is rendered from, if any.
    ///
    /// Stylesheets are generated directly from the CSS prefix.
    pub const fn template(&self) -> Option<TemplateKind> {
        match self {
            Self::BlockStylesheet | Self::EditorCss | Self::EditorStylesheet => None,
            Self::FieldConfig => Some(TemplateKind::FieldConfig),
            Self::RenderTemplate => Some(TemplateKind::RenderTemplate),
            Self::Manifest => Some(TemplateKind::Manifest),
        }
    }

    /// Content of a stylesheet artifact: the block selector, commented out.
    pub fn stylesheet(&self, css_prefix: &str) -> Option<String> {
        let rule = format!(".{css_prefix} {{}}");
        match self {
            Self::BlockStylesheet | Self::EditorStylesheet => Some(format!("// {rule}")),
            Self::EditorCss => Some(format!("/* {rule} */")),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
