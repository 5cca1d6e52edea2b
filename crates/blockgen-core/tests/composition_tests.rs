//! Integration tests for blockgen-core: composition and identity properties
//! exercised through the public API only.

use std::path::Path;

use blockgen_core::domain::{
    BlockAnswers, BlockIdentifiers, FieldFlag, FieldSet, ManifestPatch, RenderContext, compose,
    slugify,
};

#[test]
fn composition_ignores_selection_order() {
    let forward: FieldSet = FieldFlag::SELECTION_ORDER.into_iter().collect();
    let backward: FieldSet = FieldFlag::SELECTION_ORDER.into_iter().rev().collect();

    assert_eq!(compose(&forward), compose(&backward));

    let picked_late = FieldSet::new()
        .with(FieldFlag::Buttons)
        .with(FieldFlag::Title)
        .with(FieldFlag::Image);
    let picked_early = FieldSet::new()
        .with(FieldFlag::Image)
        .with(FieldFlag::Buttons)
        .with(FieldFlag::Title);
    assert_eq!(
        compose(&picked_late).content_fragment(),
        compose(&picked_early).content_fragment()
    );
}

#[test]
fn hero_banner_scenario() {
    let answers = BlockAnswers::new("Acme", "Hero Banner")
        .with_fields([FieldFlag::Title, FieldFlag::Text, FieldFlag::BgColor]);
    let ids = BlockIdentifiers::derive(&answers, Path::new("blocks")).unwrap();
    let composed = compose(&answers.fields);
    let declarations = composed.declarations_fragment();

    assert_eq!(ids.slug(), "hero-banner");
    assert_eq!(ids.namespace_key(), "acme");
    assert_eq!(ids.qualified_name(), "acme/hero-banner");
    assert!(declarations.contains("get_field('title')"));
    assert!(declarations.contains("get_field('text')"));
    assert!(!declarations.contains("$image"));
    assert!(!declarations.contains("$buttons"));
    assert_eq!(ManifestPatch::for_block(&ids, &answers).name, "acme/hero-banner");
}

#[test]
fn buttons_alone_scenario() {
    let composed = compose(&FieldSet::from([FieldFlag::Buttons]));

    assert_eq!(composed.declarations, vec!["$buttons = get_field('buttons');"]);
    assert_eq!(composed.content_sections.len(), 1);
    assert!(composed.content_sections[0].contains("foreach ($buttons as $button)"));
    assert_eq!(composed.config_fragment(), "...FieldTypes::buttons($block_prefix)");
}

#[test]
fn slugify_is_idempotent_on_word_input() {
    for input in ["Hero Banner", "Call To Action 2", "  spaced   out  ", "ALLCAPS", "a\tb\nc"] {
        let slug = slugify(input);
        assert_eq!(slugify(&slug), slug);
        assert!(!slug.chars().any(char::is_whitespace));
    }
}

#[test]
fn render_context_escapes_title_for_php() {
    let answers = BlockAnswers::new("acme", "It's here");
    let ids = BlockIdentifiers::derive(&answers, Path::new("blocks")).unwrap();
    let ctx = RenderContext::for_render_template(&ids, &answers, &compose(&answers.fields));

    assert_eq!(ctx.token("XYZ"), Some("It\\'s here"));
}
