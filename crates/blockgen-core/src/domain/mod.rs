// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for blockgen.
//!
//! Pure block logic with no I/O. Reading stubs, rendering them, and writing
//! files are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or signal handling
//! - **No heavy crates**: Only std library + thiserror
//! - **Immutable values**: identifiers are derived once and never mutated
//! - **Table-driven composition**: field fragments come from one registry
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod fields;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    answers::{BlockAnswers, parse_keywords},
    artifact::ArtifactKind,
    identifiers::{BlockIdentifiers, slugify},
    template::{
        EDITOR_STYLE, ManifestPatch, Marker, NAMESPACE_TOKEN, RenderContext, SLUG_TOKEN,
        TITLE_TOKEN, TemplateKind, php_single_quoted,
    },
};

pub use error::DomainError;

pub use fields::{CONFIG_ENTRY_INDENT, ComposedFields, FIELD_REGISTRY, FieldDef, compose};

pub use value_objects::{FieldFlag, FieldSet};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::error::ErrorCategory;

    // ========================================================================
    // Scenario Tests
    // ========================================================================

    fn hero_banner() -> BlockAnswers {
        BlockAnswers::new("Acme", "Hero Banner")
            .with_fields([FieldFlag::Title, FieldFlag::Text, FieldFlag::BgColor])
            .with_icon("star-filled")
    }

    #[test]
    fn hero_banner_identifiers() {
        let ids = BlockIdentifiers::derive(&hero_banner(), Path::new("blocks")).unwrap();

        assert_eq!(ids.slug(), "hero-banner");
        assert_eq!(ids.namespace_key(), "acme");
        assert_eq!(ids.qualified_name(), "acme/hero-banner");
    }

    #[test]
    fn hero_banner_manifest_patch() {
        let answers = hero_banner();
        let ids = BlockIdentifiers::derive(&answers, Path::new("blocks")).unwrap();
        let patch = ManifestPatch::for_block(&ids, &answers);

        assert_eq!(patch.name, "acme/hero-banner");
        assert_eq!(patch.title, "Hero Banner");
        assert!(patch.description.is_empty());
        assert!(patch.keywords.is_empty());
        assert_eq!(patch.icon, "star-filled");
    }

    #[test]
    fn hero_banner_composition() {
        let composed = compose(&hero_banner().fields);

        assert_eq!(composed.declarations.len(), 3);
        assert_eq!(composed.content_sections.len(), 2);
        assert!(composed.declarations_fragment().contains("'bg-'"));
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_accepts_reasonable_answers() {
        assert!(DomainValidator::validate_answers(&hero_banner()).is_ok());
    }

    #[test]
    fn validator_checks_namespace_before_title() {
        let answers = BlockAnswers::new("", "");
        assert!(matches!(
            DomainValidator::validate_answers(&answers),
            Err(DomainError::InvalidNamespace { .. })
        ));
    }

    #[test]
    fn validation_errors_are_categorized() {
        let err = DomainValidator::validate_title("").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
