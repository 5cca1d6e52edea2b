//! Interactive question flow.
//!
//! [`PromptFlow`] is the CLI's [`AnswerCollector`]. The terminal widgets sit
//! behind [`Prompter`] so the question order and cancellation rules can be
//! tested without a TTY.

use std::io;

use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};
use tracing::{debug, instrument};

use blockgen_core::{
    application::{AnswerCollector, ApplicationError, CancellationToken},
    domain::{BlockAnswers, DomainValidator, FieldFlag, FieldSet, parse_keywords},
    error::{BlockgenError, BlockgenResult},
};

/// Rejects an answer with a message shown under the prompt.
pub type Validator = fn(&str) -> Result<(), String>;

/// One terminal widget per question type.
///
/// `Ok(None)` means the operator declined the prompt: Ctrl-C anywhere, or
/// Esc on the field picker. `dialoguer::Input` has no Esc handling, so Esc
/// on a text prompt does nothing.
pub trait Prompter {
    fn text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> BlockgenResult<Option<String>>;

    /// Returns the indices of the checked items.
    fn multi_select(&self, prompt: &str, items: &[&str]) -> BlockgenResult<Option<Vec<usize>>>;
}

/// [`Prompter`] backed by `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(
        &self,
        prompt: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> BlockgenResult<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);

        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        if let Some(validate) = validator {
            input = input.validate_with(move |answer: &String| validate(answer));
        }

        declined_as_none(input.interact_text())
    }

    fn multi_select(&self, prompt: &str, items: &[&str]) -> BlockgenResult<Option<Vec<usize>>> {
        let result = MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact_opt();

        // Esc yields Ok(None), Ctrl-C an Interrupted error
        declined_as_none(result).map(Option::flatten)
    }
}

fn declined_as_none<T>(result: dialoguer::Result<T>) -> BlockgenResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(prompt_failure(e)),
    }
}

fn prompt_failure(err: dialoguer::Error) -> BlockgenError {
    BlockgenError::Internal {
        message: format!("reading answer from terminal: {err}"),
    }
}

/// Defaults offered by the namespace and icon prompts.
#[derive(Debug, Clone)]
pub struct PromptDefaults {
    pub namespace: String,
    pub icon: String,
}

/// Asks namespace, title, fields, description, keywords and icon, in that
/// order.
pub struct PromptFlow<P> {
    prompter: P,
    defaults: PromptDefaults,
}

impl<P: Prompter> PromptFlow<P> {
    pub fn new(prompter: P, defaults: PromptDefaults) -> Self {
        Self { prompter, defaults }
    }

    fn text(
        &self,
        cancel: &CancellationToken,
        prompt: &str,
        default: Option<&str>,
        validator: Option<Validator>,
    ) -> BlockgenResult<String> {
        let answer = self.prompter.text(prompt, default, validator)?;
        answered(answer, cancel)
    }

    fn fields(&self, cancel: &CancellationToken) -> BlockgenResult<FieldSet> {
        let labels: Vec<&str> = FieldFlag::SELECTION_ORDER
            .iter()
            .map(FieldFlag::label)
            .collect();

        let picked = self.prompter.multi_select(
            "Fields (space to toggle, enter to confirm)",
            &labels,
        )?;

        Ok(answered(picked, cancel)?
            .into_iter()
            .filter_map(|i| FieldFlag::SELECTION_ORDER.get(i).copied())
            .collect())
    }
}

impl<P: Prompter> AnswerCollector for PromptFlow<P> {
    #[instrument(skip_all)]
    fn collect(&self, cancel: &CancellationToken) -> BlockgenResult<BlockAnswers> {
        cancel.checkpoint()?;

        let namespace = self.text(
            cancel,
            "Namespace",
            Some(&self.defaults.namespace),
            Some(check_namespace),
        )?;
        let title = self.text(cancel, "Block title", None, Some(check_title))?;
        let fields = self.fields(cancel)?;
        let description = self.text(cancel, "Description", Some(""), None)?;
        let keywords = self.text(cancel, "Keywords (comma separated)", Some(""), None)?;
        let icon = self.text(cancel, "Dashicon", Some(&self.defaults.icon), None)?;

        debug!(%namespace, %title, %fields, "Answers collected");

        Ok(BlockAnswers::new(namespace, title)
            .with_fields(fields)
            .with_description(description)
            .with_keywords(parse_keywords(&keywords))
            .with_icon(icon))
    }
}

/// A declined prompt and a pending interrupt both end the flow.
fn answered<T>(answer: Option<T>, cancel: &CancellationToken) -> BlockgenResult<T> {
    let value = answer.ok_or(ApplicationError::CancelledByOperator)?;
    cancel.checkpoint()?;
    Ok(value)
}

fn check_title(title: &str) -> Result<(), String> {
    DomainValidator::validate_title(title).map_err(|e| e.to_string())
}

fn check_namespace(namespace: &str) -> Result<(), String> {
    DomainValidator::validate_namespace(namespace).map_err(|e| e.to_string())
}
