use crate::domain::{
    entities::{BlockAnswers, identifiers},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Prompt validators and the generator both go through here so an answer
/// accepted interactively is never rejected later.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        identifiers::validate_title(title)
    }

    pub fn validate_namespace(namespace: &str) -> Result<(), DomainError> {
        identifiers::validate_namespace(namespace)
    }

    pub fn validate_answers(answers: &BlockAnswers) -> Result<(), DomainError> {
        Self::validate_namespace(&answers.namespace)?;
        Self::validate_title(&answers.title)
    }
}
