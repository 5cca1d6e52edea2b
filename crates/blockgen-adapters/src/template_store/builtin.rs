use blockgen_core::{
    application::ports::TemplateStore, domain::TemplateKind, error::BlockgenResult,
};

const RENDER_TEMPLATE: &str = include_str!("../../stubs/block.php.txt");
const FIELD_CONFIG: &str = include_str!("../../stubs/config.php.txt");
const MANIFEST: &str = include_str!("../../stubs/block.json.txt");

/// Stubs compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Raw text of a built-in stub.
    pub fn source(kind: TemplateKind) -> &'static str {
        match kind {
            TemplateKind::RenderTemplate => RENDER_TEMPLATE,
            TemplateKind::FieldConfig => FIELD_CONFIG,
            TemplateKind::Manifest => MANIFEST,
        }
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn load(&self, kind: TemplateKind) -> BlockgenResult<String> {
        Ok(Self::source(kind).to_string())
    }

    fn describe(&self) -> String {
        "built-in stubs".to_string()
    }
}

#[cfg(test)]
mod tests {
    use blockgen_core::domain::{Marker, NAMESPACE_TOKEN, SLUG_TOKEN, TITLE_TOKEN};

    use super::*;

    #[test]
    fn render_template_carries_tokens_and_markers() {
        let stub = BuiltinTemplateStore::source(TemplateKind::RenderTemplate);
        for needle in [TITLE_TOKEN, SLUG_TOKEN, NAMESPACE_TOKEN] {
            assert!(stub.contains(needle), "missing {needle}");
        }
        for marker in [Marker::FieldDeclarations, Marker::FieldContent] {
            assert_eq!(stub.lines().filter(|l| l.trim() == marker.as_str()).count(), 1);
        }
    }

    #[test]
    fn field_config_has_one_list_marker() {
        let stub = BuiltinTemplateStore::source(TemplateKind::FieldConfig);
        assert_eq!(stub.matches(Marker::FieldList.as_str()).count(), 1);
        assert!(!stub.contains(TITLE_TOKEN));
    }

    #[test]
    fn manifest_is_a_json_object() {
        let stub = BuiltinTemplateStore::new().load(TemplateKind::Manifest).unwrap();
        let value: serde_json::Value = serde_json::from_str(&stub).unwrap();
        assert!(value.is_object());
        assert!(value["acf"].is_object());
    }
}
