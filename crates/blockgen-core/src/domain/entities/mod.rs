pub mod answers;
pub mod artifact;
pub mod identifiers;
pub mod template;

pub use crate::domain::DomainError;
pub use answers::BlockAnswers;
pub use artifact::ArtifactKind;
pub use identifiers::BlockIdentifiers;
pub use template::{ManifestPatch, Marker, RenderContext, TemplateKind};
