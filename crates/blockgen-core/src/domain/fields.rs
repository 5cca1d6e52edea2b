//! Field composition registry.
//!
//! Every [`FieldFlag`] is described exactly once by a [`FieldDef`] in
//! [`FIELD_REGISTRY`]. Composition walks the registry top to bottom and
//! keeps the entries whose flag was selected, so the generated PHP depends
//! only on *which* flags were chosen, never on the order they were picked.
//!
//! # Ordering
//!
//! Registry order is semantic. Declarations must come before any content
//! section that reads them, and the config-builder entries appear in the
//! ACF editor in this order.
//!
//! # Adding a New Field
//!
//! 1. Add a variant to `FieldFlag` in `value_objects.rs`
//! 2. Add one [`FieldDef`] entry to [`FIELD_REGISTRY`] at the right position
//! 3. The view and config templates pick it up through the markers

use crate::domain::value_objects::{FieldFlag, FieldSet};

/// Indentation of one entry inside the `'fields' => [ ... ]` array of the
/// field-configuration template.
pub const CONFIG_ENTRY_INDENT: &str = "        ";

/// Everything one flag contributes to the generated block.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub flag: FieldFlag,

    /// PHP statements reading the field, inserted at the declarations marker.
    pub declaration: Option<&'static str>,

    /// Render-time markup, inserted at the content marker.
    pub content: Option<&'static str>,

    /// `FieldTypes::*` expressions for the field-configuration array.
    pub config_entries: &'static [&'static str],
}

/// Single source of truth for field composition, in canonical order.
pub static FIELD_REGISTRY: &[FieldDef] = &[
    FieldDef {
        flag: FieldFlag::TextAccordion,
        declaration: None,
        content: None,
        config_entries: &["FieldTypes::accordion($block_prefix, 'text', 'Text')"],
    },
    FieldDef {
        flag: FieldFlag::Title,
        declaration: Some("$title = get_field('title');"),
        content: Some(TITLE_SECTION),
        config_entries: &["FieldTypes::text($block_prefix, 'title', 'Title')"],
    },
    FieldDef {
        flag: FieldFlag::Text,
        declaration: Some("$text = get_field('text');"),
        content: Some(TEXT_SECTION),
        config_entries: &["FieldTypes::wysiwyg_basic($block_prefix, 'text', 'Text')"],
    },
    FieldDef {
        flag: FieldFlag::Content,
        declaration: Some("$content = get_field('content');"),
        content: Some(CONTENT_SECTION),
        config_entries: &["FieldTypes::wysiwyg_basic($block_prefix, 'content', 'Content')"],
    },
    FieldDef {
        flag: FieldFlag::Image,
        declaration: Some("$image = get_field('image');\n$image_alt = get_field('image_alt');"),
        content: Some(IMAGE_SECTION),
        config_entries: &[
            "FieldTypes::accordion($block_prefix, 'image_settings', 'Image')",
            "FieldTypes::image($block_prefix, 'image', 'Image')",
            "FieldTypes::text($block_prefix, 'image_alt', 'Alt text')",
        ],
    },
    FieldDef {
        flag: FieldFlag::Buttons,
        declaration: Some("$buttons = get_field('buttons');"),
        content: Some(BUTTONS_SECTION),
        config_entries: &["...FieldTypes::buttons($block_prefix)"],
    },
    FieldDef {
        flag: FieldFlag::BgColor,
        declaration: Some(
            "$bg_color = get_field('bg_color') ? 'bg-' . get_field('bg_color') : '';",
        ),
        content: None,
        config_entries: &["FieldTypes::bg_color($block_prefix, 'bg_color', 'Background color')"],
    },
    FieldDef {
        flag: FieldFlag::TextColor,
        declaration: Some(
            "$text_color = get_field('text_color') ? 'text-' . get_field('text_color') : '';",
        ),
        content: None,
        config_entries: &["FieldTypes::text_color($block_prefix, 'text_color', 'Text color')"],
    },
    FieldDef {
        flag: FieldFlag::ColorsAccordion,
        declaration: None,
        content: None,
        config_entries: &["FieldTypes::accordion($block_prefix, 'colors', 'Colors')"],
    },
];

const TITLE_SECTION: &str = r#"        <?php if (!empty($title)): ?>
            <h2 class="<?php echo esc_attr(sprintf('%s__title', $block_name)); ?>">
                <?php echo esc_html($title); ?>
            </h2>
        <?php endif; ?>"#;

const TEXT_SECTION: &str = r#"        <?php if (!empty($text)): ?>
            <div class="<?php echo esc_attr(sprintf('%s__text', $block_name)); ?>">
                <?php echo wp_kses_post($text); ?>
            </div>
        <?php endif; ?>"#;

const CONTENT_SECTION: &str = r#"        <?php if (!empty($content)): ?>
            <div class="<?php echo esc_attr(sprintf('%s__content', $block_name)); ?>">
                <?php echo wp_kses_post($content); ?>
            </div>
        <?php endif; ?>"#;

const IMAGE_SECTION: &str = r#"        <?php if (!empty($image)): ?>
            <div class="<?php echo esc_attr(sprintf('%s__img-container', $block_name)); ?>">
                <?php
                Image::render(
                    $image,
                    'medium',
                    [
                        'class' => sprintf('%s__img', esc_attr($block_name)),
                        'alt' => $image_alt ? esc_attr($image_alt) : sprintf(esc_attr__('Image for %s', 'moonsio'), esc_attr($title ?? $block_title)),
                        'style' => is_admin() ? 'height: 100%' : '',
                    ],
                ); ?>
            </div>
        <?php endif; ?>"#;

const BUTTONS_SECTION: &str = r#"        <?php if (!empty($buttons)): ?>
            <div class="<?php echo esc_attr(sprintf('%s__buttons', $block_name)); ?>">
                <?php foreach ($buttons as $button): ?>
                    <?php $link = $button['button'] ?? []; ?>
                    <?php if (!empty($link['url']) && !empty($link['title'])): ?>
                        <a class="<?php echo esc_attr(sprintf('%s__button', $block_name)); ?>" href="<?php echo esc_url($link['url']); ?>"<?php echo !empty($link['target']) ? ' target="' . esc_attr($link['target']) . '" rel="noopener noreferrer"' : ''; ?>>
                            <?php echo esc_html($link['title']); ?>
                        </a>
                    <?php endif; ?>
                <?php endforeach; ?>
            </div>
        <?php endif; ?>"#;

/// The three fragment sequences produced for one [`FieldSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedFields {
    pub declarations: Vec<&'static str>,
    pub content_sections: Vec<&'static str>,
    pub config_entries: Vec<&'static str>,
}

impl ComposedFields {
    /// Declarations, one statement block per line.
    pub fn declarations_fragment(&self) -> String {
        self.declarations.join("\n")
    }

    /// Content sections separated by a blank line.
    pub fn content_fragment(&self) -> String {
        self.content_sections.join("\n\n")
    }

    /// Config entries joined so the result splices into an array literal
    /// whose first element sits at [`CONFIG_ENTRY_INDENT`].
    pub fn config_fragment(&self) -> String {
        self.config_entries.join(&format!(",\n{CONFIG_ENTRY_INDENT}"))
    }
}

/// Compose the fragments for `fields`, walking [`FIELD_REGISTRY`] in order.
pub fn compose(fields: &FieldSet) -> ComposedFields {
    let mut composed = ComposedFields::default();

    for def in FIELD_REGISTRY.iter().filter(|def| fields.contains(def.flag)) {
        if let Some(declaration) = def.declaration {
            composed.declarations.push(declaration);
        }
        if let Some(content) = def.content {
            composed.content_sections.push(content);
        }
        composed.config_entries.extend_from_slice(def.config_entries);
    }

    composed
}
