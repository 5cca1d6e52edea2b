//! Domain value objects: [`FieldFlag`] and [`FieldSet`].
//!
//! # Design
//!
//! These are pure value types. They hold NO composition logic; the mapping
//! from a flag to the PHP it produces lives in `fields.rs`. This file's only
//! job is to define the types and their string representations.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` and `label` arms here, and place it in
//!    [`FieldFlag::SELECTION_ORDER`]
//! 3. Add a `FieldDef` entry in `fields.rs` at its canonical position

use std::collections::BTreeSet;
use std::fmt;

// ── FieldFlag ────────────────────────────────────────────────────────────────

/// A content capability the operator can switch on for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldFlag {
    TextAccordion,
    Title,
    Text,
    Content,
    Image,
    ColorsAccordion,
    TextColor,
    BgColor,
    Buttons,
}

impl FieldFlag {
    /// Order in which the flags are offered by the multi-select prompt.
    ///
    /// This is NOT the composition order. See `fields::FIELD_REGISTRY`.
    pub const SELECTION_ORDER: [FieldFlag; 9] = [
        Self::TextAccordion,
        Self::Title,
        Self::Text,
        Self::Content,
        Self::Image,
        Self::ColorsAccordion,
        Self::TextColor,
        Self::BgColor,
        Self::Buttons,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TextAccordion => "textAccordion",
            Self::Title => "title",
            Self::Text => "text",
            Self::Content => "content",
            Self::Image => "image",
            Self::ColorsAccordion => "colorsAccordion",
            Self::TextColor => "textColor",
            Self::BgColor => "bgColor",
            Self::Buttons => "buttons",
        }
    }

    /// Human-readable label shown in the field picker.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TextAccordion => "Text accordion",
            Self::Title => "Title",
            Self::Text => "Text",
            Self::Content => "Content",
            Self::Image => "Image",
            Self::ColorsAccordion => "Colors accordion",
            Self::TextColor => "Text color",
            Self::BgColor => "Background color",
            Self::Buttons => "Buttons",
        }
    }
}

impl fmt::Display for FieldFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FieldSet ─────────────────────────────────────────────────────────────────

/// The unordered set of flags an operator selected.
///
/// Backed by a `BTreeSet` so `Debug` output is stable, but nothing relies on
/// its iteration order for composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(BTreeSet<FieldFlag>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: FieldFlag) -> bool {
        self.0.insert(flag)
    }

    pub fn with(mut self, flag: FieldFlag) -> Self {
        self.insert(flag);
        self
    }

    pub fn contains(&self, flag: FieldFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldFlag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<FieldFlag> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[FieldFlag; N]> for FieldSet {
    fn from(flags: [FieldFlag; N]) -> Self {
        flags.into_iter().collect()
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(FieldFlag::as_str).collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(", "))
        }
    }
}
