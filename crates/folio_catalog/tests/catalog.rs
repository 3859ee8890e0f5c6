use folio_catalog::{Catalog, CatalogError, ImageState, Tag, DEFAULT_PLACEHOLDER_URL};
use pretty_assertions::assert_eq;

const SAMPLE: &str = r#"
[[projects]]
title = "UX/UI Portfolio (Behance)"
description = "Interface and experience design work."
link_text = "View portfolio"
image = "https://placehold.co/600x400/818cf8/ffffff?text=UX"
tags = [
    { name = "Design", tone = "yellow" },
    { name = "Figma" },
]

[[projects]]
title = "Component Library (GitHub)"
link_text = "View repository"
link_url = "https://example.com/repo"
image = "https://placehold.co/600x400/a78bfa/ffffff?text=Vue"
"#;

#[test]
fn parses_projects_with_defaults() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
    assert_eq!(catalog.len(), 2);

    let first = &catalog.projects()[0];
    assert_eq!(
        first.tags,
        vec![
            Tag {
                name: "Design".into(),
                tone: "yellow".into()
            },
            Tag {
                name: "Figma".into(),
                tone: "gray".into()
            },
        ]
    );
    assert_eq!(first.link_url, "#");
    assert_eq!(first.image_alt(), "Preview of UX/UI Portfolio (Behance)");

    let second = &catalog.projects()[1];
    assert_eq!(second.description, "");
    assert_eq!(second.link_url, "https://example.com/repo");
}

#[test]
fn empty_document_is_an_empty_catalog() {
    let catalog = Catalog::from_toml_str("").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn missing_required_fields_fail_to_parse() {
    let err = Catalog::from_toml_str("[[projects]]\ntitle = \"No link\"\n").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)), "{err}");
}

#[test]
fn blank_image_is_rejected() {
    let src = "[[projects]]\ntitle = \"A\"\nlink_text = \"Go\"\nimage = \" \"\n";
    match Catalog::from_toml_str(src) {
        Err(CatalogError::InvalidProject { index, .. }) => assert_eq!(index, 0),
        other => panic!("expected InvalidProject, got {other:?}"),
    }
}

#[test]
fn load_reads_file_and_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, SAMPLE).unwrap();
    assert_eq!(Catalog::load(&path).unwrap().len(), 2);

    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        Catalog::load(&missing),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn card_image_falls_back_to_placeholder() {
    let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
    let mut cards = catalog.cards();

    cards[1].image.on_error(DEFAULT_PLACEHOLDER_URL);

    assert_eq!(cards[1].image.src(), DEFAULT_PLACEHOLDER_URL);
    assert_eq!(cards[1].image.state(), ImageState::Fallback);
    assert_eq!(cards[0].image.src(), catalog.projects()[0].image);
    assert_eq!(cards[0].image.state(), ImageState::Pending);
}
