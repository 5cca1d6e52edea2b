//! Renderers for the two stub formats.

mod json;
mod text;

pub use json::JsonManifestPatcher;
pub use text::MarkerRenderer;
