//! Token and marker substitution for the PHP stubs.

use blockgen_core::{
    application::ports::TextRenderer, domain::RenderContext, error::BlockgenResult,
};
use tracing::{error, instrument, trace};

/// Renders text stubs.
///
/// Tokens are replaced in one left-to-right pass, then each marker line is
/// replaced by its fragment, indented like the marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerRenderer;

impl MarkerRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TextRenderer for MarkerRenderer {
    #[instrument(skip_all)]
    fn render(&self, template: &str, context: &RenderContext) -> BlockgenResult<String> {
        let normalized = template.replace("\r\n", "\n");
        let substituted = replace_tokens(&normalized, context);
        Ok(splice_markers(&substituted, context))
    }
}

/// Replace every token occurrence without re-scanning inserted values.
fn replace_tokens(input: &str, context: &RenderContext) -> String {
    let tokens: Vec<(&str, &str)> = context.tokens().filter(|(t, _)| !t.is_empty()).collect();
    if tokens.is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        match tokens.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

fn splice_markers(input: &str, context: &RenderContext) -> String {
    let mut lines: Vec<String> = input.split('\n').map(str::to_string).collect();

    for (marker, fragment) in context.markers() {
        let Some(index) = lines.iter().position(|l| l.trim() == marker.as_str()) else {
            error!(%marker, "Marker not found in template, fragment dropped");
            continue;
        };

        if fragment.is_empty() {
            trace!(%marker, "Empty fragment, removing marker line");
            lines.remove(index);
        } else {
            let indent_len = lines[index].len() - lines[index].trim_start().len();
            let indent = &lines[index][..indent_len];
            lines[index] = format!("{indent}{fragment}");
        }
    }

    lines.join("\n")
}
