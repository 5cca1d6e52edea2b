use std::path::{Path, PathBuf};

use crate::domain::{entities::answers::BlockAnswers, error::DomainError};

/// Lowercase `s` and replace every maximal run of whitespace with one `-`.
///
/// Total: never fails. Leading and trailing whitespace runs also become `-`.
/// Lowercasing is done on the whole string so context-sensitive mappings
/// (a word-final `Σ` becomes `ς`) apply.
pub fn slugify(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());
    let mut in_whitespace = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                collapsed.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            collapsed.push(c);
        }
    }

    collapsed.to_lowercase()
}

/// Check that `title` produces a slug usable as a directory name.
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    let reject = |reason: &str| {
        Err(DomainError::InvalidTitle {
            title: title.to_string(),
            reason: reason.to_string(),
        })
    };

    if title.trim().is_empty() {
        return reject("cannot be empty");
    }

    let slug = slugify(title);
    if slug == "." || slug == ".." {
        return reject("cannot be a relative path component");
    }
    if slug.contains('/') || slug.contains('\\') {
        return reject("cannot contain path separators");
    }

    Ok(())
}

/// Check that `namespace` produces a usable namespace key.
pub fn validate_namespace(namespace: &str) -> Result<(), DomainError> {
    let reject = |reason: &str| {
        Err(DomainError::InvalidNamespace {
            namespace: namespace.to_string(),
            reason: reason.to_string(),
        })
    };

    if namespace.trim().is_empty() {
        return reject("cannot be empty");
    }
    if namespace.contains('/') {
        return reject("cannot contain '/'");
    }

    Ok(())
}

/// Names derived once from the answers and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIdentifiers {
    slug: String,
    namespace_key: String,
    destination: PathBuf,
}

impl BlockIdentifiers {
    /// Derive identifiers for `answers`, placing the block under `blocks_root`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidTitle`] when the title would slugify to nothing
    /// (the destination would collapse onto `blocks_root` itself) or to a
    /// path, and [`DomainError::InvalidNamespace`] for an empty namespace.
    pub fn derive(answers: &BlockAnswers, blocks_root: &Path) -> Result<Self, DomainError> {
        validate_namespace(&answers.namespace)?;
        validate_title(&answers.title)?;

        let slug = slugify(&answers.title);
        let namespace_key = slugify(&answers.namespace);
        let destination = blocks_root.join(&slug);

        Ok(Self {
            slug,
            namespace_key,
            destination,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn namespace_key(&self) -> &str {
        &self.namespace_key
    }

    /// `namespace-key/slug`, the `name` of the block manifest.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.namespace_key, self.slug)
    }

    /// `wp-block-namespace-key-slug`, the class WordPress puts on the block.
    pub fn css_prefix(&self) -> String {
        format!("wp-block-{}-{}", self.namespace_key, self.slug)
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_collapses_whitespace() {
        assert_eq!(slugify("Hero Banner"), "hero-banner");
        assert_eq!(slugify("Hero \t\n Banner"), "hero-banner");
        assert_eq!(slugify("ACME"), "acme");
        assert_eq!(slugify(" padded "), "-padded-");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_applies_final_sigma() {
        assert_eq!(slugify("ΟΔΟΣ"), "οδος");
        assert_eq!(slugify("ΟΔΟΣ ΣΤΟ"), "οδος-στο");
    }

    #[test]
    fn slugify_is_idempotent() {
        for input in ["Hero Banner", "  a  b  c ", "Block 42", "x", "Two  Spaces"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn derive_builds_all_names() {
        let answers = BlockAnswers::new("Acme", "Hero Banner");
        let ids = BlockIdentifiers::derive(&answers, Path::new("blocks")).unwrap();

        assert_eq!(ids.slug(), "hero-banner");
        assert_eq!(ids.namespace_key(), "acme");
        assert_eq!(ids.qualified_name(), "acme/hero-banner");
        assert_eq!(ids.css_prefix(), "wp-block-acme-hero-banner");
        assert_eq!(ids.destination(), Path::new("blocks/hero-banner"));
    }

    #[test]
    fn empty_title_is_rejected_instead_of_targeting_the_root() {
        for title in ["", "   "] {
            let answers = BlockAnswers::new("acme", title);
            assert!(matches!(
                BlockIdentifiers::derive(&answers, Path::new("blocks")),
                Err(DomainError::InvalidTitle { .. })
            ));
        }
    }

    #[test]
    fn path_like_titles_are_rejected() {
        for title in ["..", "a/b", "a\\b"] {
            assert!(validate_title(title).is_err(), "accepted {title:?}");
        }
    }

    #[test]
    fn empty_namespace_is_rejected() {
        let answers = BlockAnswers::new("", "Hero");
        assert!(matches!(
            BlockIdentifiers::derive(&answers, Path::new("blocks")),
            Err(DomainError::InvalidNamespace { .. })
        ));
    }
}
