//! Structural patching of the `block.json` stub.

use blockgen_core::{
    application::{ApplicationError, ports::DocumentPatcher},
    domain::{ManifestPatch, TemplateKind},
    error::{BlockgenError, BlockgenResult},
};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};
use tracing::instrument;

/// Parses the manifest stub, assigns the block's fields, and writes it back
/// tab-indented with the stub's key order preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestPatcher;

impl JsonManifestPatcher {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentPatcher for JsonManifestPatcher {
    #[instrument(skip_all, fields(name = %patch.name))]
    fn patch(&self, template: &str, patch: &ManifestPatch) -> BlockgenResult<String> {
        let mut document: Value = serde_json::from_str(template).map_err(parse_error)?;

        let Some(root) = document.as_object_mut() else {
            return Err(parse_error("root is not an object"));
        };

        root.insert("name".into(), Value::from(patch.name.as_str()));
        root.insert("title".into(), Value::from(patch.title.as_str()));
        root.insert("description".into(), Value::from(patch.description.as_str()));
        root.insert("icon".into(), Value::from(patch.icon.as_str()));
        root.insert("keywords".into(), Value::from(patch.keywords.clone()));
        root.insert("editorStyle".into(), Value::from(patch.editor_style.as_str()));

        let acf = root
            .entry("acf")
            .or_insert_with(|| Value::Object(Map::new()));
        if !acf.is_object() {
            *acf = Value::Object(Map::new());
        }
        if let Some(acf) = acf.as_object_mut() {
            acf.insert(
                "renderTemplate".into(),
                Value::from(patch.render_template.as_str()),
            );
        }

        to_tab_indented(&document)
    }
}

fn parse_error(reason: impl ToString) -> BlockgenError {
    ApplicationError::TemplateParseError {
        template: TemplateKind::Manifest.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn to_tab_indented(value: &Value) -> BlockgenResult<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .map_err(|e| BlockgenError::Internal {
            message: format!("serializing manifest: {e}"),
        })?;

    String::from_utf8(buf).map_err(|e| BlockgenError::Internal {
        message: format!("manifest is not UTF-8: {e}"),
    })
}
