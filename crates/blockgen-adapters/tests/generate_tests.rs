//! End-to-end generation through the real adapters.

use std::path::{Path, PathBuf};

use blockgen_adapters::{
    BuiltinTemplateStore, FilesystemTemplateStore, JsonManifestPatcher, LocalFilesystem,
    MarkerRenderer, MemoryFilesystem,
};
use blockgen_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::TemplateKind,
    prelude::*,
};

fn generator_on(fs: impl Filesystem + 'static, root: impl Into<PathBuf>) -> BlockGenerator {
    BlockGenerator::new(
        Box::new(BuiltinTemplateStore::new()),
        Box::new(MarkerRenderer::new()),
        Box::new(JsonManifestPatcher::new()),
        Box::new(fs),
        root,
    )
}

fn hero_banner() -> BlockAnswers {
    BlockAnswers::new("Acme", "Hero Banner")
        .with_fields([FieldFlag::Title, FieldFlag::Text, FieldFlag::BgColor])
        .with_icon("star-filled")
}

#[test]
fn generates_complete_block_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let blocks = tmp.path().join("blocks");

    let report = generator_on(LocalFilesystem::new(), &blocks)
        .generate(&hero_banner(), &CancellationToken::new())
        .unwrap();

    assert!(report.is_complete());
    let dir = blocks.join("hero-banner");
    for kind in ArtifactKind::WRITE_ORDER {
        assert!(dir.join(kind.file_name()).is_file(), "missing {kind}");
    }

    let scss = std::fs::read_to_string(dir.join("_block.scss")).unwrap();
    assert_eq!(scss, "// .wp-block-acme-hero-banner {}");

    let view = std::fs::read_to_string(dir.join("view.php")).unwrap();
    assert!(view.contains("$block_title = 'Hero Banner';"));
    assert!(view.contains("$block_name = 'hero-banner';"));
    assert!(view.contains("$namespace = 'acme';"));
    assert!(view.contains("$title = get_field('title');\n$text = get_field('text');"));
    assert!(view.contains("'bg-' . get_field('bg_color')"));
    assert!(!view.contains("$image"));
    assert!(!view.contains("@@"));

    let config = std::fs::read_to_string(dir.join("config.php")).unwrap();
    assert!(config.contains(
        "        FieldTypes::text($block_prefix, 'title', 'Title'),\n        FieldTypes::wysiwyg_basic("
    ));
    assert!(!config.contains("@@FIELD_LIST@@"));
}

#[test]
fn manifest_round_trips_the_answers() {
    let tmp = tempfile::tempdir().unwrap();
    let answers = BlockAnswers::new("Acme", "Call To Action")
        .with_description("Drive clicks")
        .with_keywords(["cta", "button"])
        .with_icon("megaphone")
        .with_field(FieldFlag::Buttons);

    generator_on(LocalFilesystem::new(), tmp.path())
        .generate(&answers, &CancellationToken::new())
        .unwrap();

    let raw = std::fs::read_to_string(tmp.path().join("call-to-action/block.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(manifest["name"], "acme/call-to-action");
    assert_eq!(manifest["title"], answers.title.as_str());
    assert_eq!(manifest["description"], answers.description.as_str());
    assert_eq!(manifest["icon"], answers.icon.as_str());
    assert_eq!(manifest["keywords"], serde_json::json!(answers.keywords));
    assert_eq!(manifest["editorStyle"], "file:./editor.css");
    assert_eq!(manifest["acf"]["renderTemplate"], "view.php");
    assert!(raw.contains("\n\t\"name\""));
}

#[test]
fn second_identical_run_is_rejected_and_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let generator = generator_on(fs.clone(), "blocks");
    generator
        .generate(&hero_banner(), &CancellationToken::new())
        .unwrap();
    let before = fs.list_files();

    let err = generator
        .generate(&hero_banner(), &CancellationToken::new())
        .unwrap_err();

    assert!(matches!(
        err,
        BlockgenError::Application(ApplicationError::DestinationExists { .. })
    ));
    assert_eq!(fs.list_files(), before);
}

#[test]
fn cancelled_before_writing_leaves_no_files() {
    let fs = MemoryFilesystem::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = generator_on(fs.clone(), "blocks")
        .generate(&hero_banner(), &cancel)
        .unwrap_err();

    assert!(err.is_cancellation());
    assert!(fs.list_files().is_empty());
    assert!(fs.list_directories().is_empty());
}

#[test]
fn partial_failure_keeps_other_artifacts() {
    let fs = MemoryFilesystem::new().fail_writes_to("editor.scss");

    let report = generator_on(fs.clone(), "blocks")
        .generate(&hero_banner(), &CancellationToken::new())
        .unwrap();

    assert_eq!(report.state, RunState::Done);
    assert_eq!(report.failures().count(), 1);
    assert_eq!(fs.list_files().len(), 5);
    assert!(
        fs.read_file(Path::new("blocks/hero-banner/block.json"))
            .is_some()
    );
}

#[test]
fn staged_failure_leaves_destination_absent() {
    let fs = MemoryFilesystem::new().fail_writes_to("block.json");

    let report = generator_on(fs.clone(), "blocks")
        .with_mode(WriteMode::Staged)
        .generate(&hero_banner(), &CancellationToken::new())
        .unwrap();

    assert_eq!(report.state, RunState::RolledBack);
    assert!(!fs.exists(Path::new("blocks/hero-banner")));
    assert!(fs.list_files().is_empty());
}

#[test]
fn staged_success_on_disk_leaves_no_staging_directory() {
    let tmp = tempfile::tempdir().unwrap();

    let report = generator_on(LocalFilesystem::new(), tmp.path())
        .with_mode(WriteMode::Staged)
        .generate(&hero_banner(), &CancellationToken::new())
        .unwrap();

    assert!(report.is_complete());
    let entries: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["hero-banner".to_string()]);
}

#[test]
fn directory_create_failure_aborts_the_run() {
    let fs = MemoryFilesystem::new().fail_directory_creation();

    let err = generator_on(fs, "blocks")
        .generate(&hero_banner(), &CancellationToken::new())
        .unwrap_err();

    assert!(matches!(
        err,
        BlockgenError::Application(ApplicationError::DirectoryCreateFailure { .. })
    ));
}

#[test]
fn custom_stub_directory_is_used() {
    let tmp = tempfile::tempdir().unwrap();
    let stubs = tmp.path().join("stubs");
    std::fs::create_dir_all(&stubs).unwrap();
    for kind in TemplateKind::ALL {
        std::fs::write(
            stubs.join(kind.file_name()),
            BuiltinTemplateStore::source(kind),
        )
        .unwrap();
    }
    std::fs::write(
        stubs.join("block.php.txt"),
        "<?php // XYZ by DX9S\n@@FIELD_DECLARATIONS@@\n@@FIELD_CONTENT@@\n",
    )
    .unwrap();

    let fs = MemoryFilesystem::new();
    let generator = BlockGenerator::new(
        Box::new(FilesystemTemplateStore::new(&stubs)),
        Box::new(MarkerRenderer::new()),
        Box::new(JsonManifestPatcher::new()),
        Box::new(fs.clone()),
        "blocks",
    );
    generator
        .generate(
            &BlockAnswers::new("Acme", "Empty"),
            &CancellationToken::new(),
        )
        .unwrap();

    assert_eq!(
        fs.read_file(Path::new("blocks/empty/view.php")).as_deref(),
        Some("<?php // Empty by acme\n")
    );
}

#[test]
fn missing_stub_fails_only_its_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("block.json.txt"), "{}").unwrap();

    let fs = MemoryFilesystem::new();
    let report = BlockGenerator::new(
        Box::new(FilesystemTemplateStore::new(tmp.path())),
        Box::new(MarkerRenderer::new()),
        Box::new(JsonManifestPatcher::new()),
        Box::new(fs.clone()),
        "blocks",
    )
    .generate(&hero_banner(), &CancellationToken::new())
    .unwrap();

    let failed: Vec<_> = report.failures().map(|(kind, _)| kind).collect();
    assert_eq!(
        failed,
        vec![ArtifactKind::FieldConfig, ArtifactKind::RenderTemplate]
    );
    assert!(
        fs.read_file(Path::new("blocks/hero-banner/block.json"))
            .is_some()
    );
}
