use folio_app::prelude::*;
use folio_app::{open_session, ModeIcon};
use folio_catalog::ImageState;
use pretty_assertions::assert_eq;

const CATALOG: &str = r#"
[[projects]]
title = "Task Manager (SaaS)"
link_text = "Live demo"
image = "https://placehold.co/600x400/34d399/ffffff?text=SaaS"

[[projects]]
title = "Startup Website"
link_text = "Visit site"
image = "https://placehold.co/600x400/06b6d4/ffffff?text=Web"
"#;

fn memory_session(store: MemoryStore) -> PortfolioSession<MemoryStore, DocumentStyle> {
    let catalog = Catalog::from_toml_str(CATALOG).unwrap();
    let controller = ThemeController::new(store, DocumentStyle::new());
    PortfolioSession::start(controller, &catalog, DEFAULT_PLACEHOLDER_URL)
}

#[test]
fn session_starts_from_stored_preferences() {
    let session = memory_session(MemoryStore::with_values([
        ("portfolioTheme", "green"),
        ("colorMode", "light"),
    ]));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.theme, ThemeName::Green);
    assert_eq!(snapshot.mode, ColorMode::Light);
    assert!(snapshot.body_classes.is_empty());
    assert!(snapshot.root_css.contains("--color-primary-500: 22 163 74;"));
    assert_eq!(snapshot.controls.mode_toggle.icon, ModeIcon::Moon);
}

#[test]
fn events_update_theme_mode_and_controls() {
    let mut session = memory_session(MemoryStore::new());
    assert_eq!(session.snapshot().body_classes, vec!["dark-mode"]);

    session.dispatch(UiEvent::SelectTheme {
        theme: "purple".into(),
    });
    session.dispatch(UiEvent::ToggleColorMode);

    assert_eq!(session.theme(), ThemeName::Purple);
    assert_eq!(session.mode(), ColorMode::Light);
    assert_eq!(
        session.controls().active_swatch().map(|s| s.title.as_str()),
        Some("Theme Purple")
    );
    assert_eq!(
        session.controller().store().get("portfolioTheme").as_deref(),
        Some("purple")
    );
}

#[test]
fn unknown_theme_event_changes_nothing() {
    let mut session = memory_session(MemoryStore::new());
    let before = session.snapshot().root_css;

    session.dispatch(UiEvent::SelectTheme {
        theme: "teal".into(),
    });

    assert_eq!(session.theme(), ThemeName::Indigo);
    assert_eq!(session.snapshot().root_css, before);
}

#[test]
fn failed_image_shows_placeholder() {
    let mut session = memory_session(MemoryStore::new());

    session.dispatch(UiEvent::ImageLoaded { card: 0 });
    session.dispatch(UiEvent::ImageFailed { card: 1 });
    session.dispatch(UiEvent::ImageFailed { card: 7 });

    let cards = session.cards();
    assert_eq!(cards[0].image.state(), ImageState::Loaded);
    assert_eq!(cards[1].image.src(), DEFAULT_PLACEHOLDER_URL);

    let snapshot = session.snapshot();
    assert!(!snapshot.cards[0].image_fallback);
    assert!(snapshot.cards[1].image_fallback);
    assert!(snapshot.to_text().contains("(placeholder)"));
}

#[test]
fn events_parse_from_json() {
    let events = UiEvent::list_from_json(
        r#"[
            {"type": "select_theme", "theme": "green"},
            {"type": "toggle_color_mode"},
            {"type": "image_failed", "card": 0}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        events,
        vec![
            UiEvent::SelectTheme {
                theme: "green".into()
            },
            UiEvent::ToggleColorMode,
            UiEvent::ImageFailed { card: 0 },
        ]
    );
}

#[test]
fn snapshot_serializes_ids() {
    let session = memory_session(MemoryStore::new());
    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["theme"], "indigo");
    assert_eq!(json["mode"], "dark");
    assert_eq!(json["controls"]["mode_toggle"]["icon"], "sun");
    assert_eq!(json["controls"]["swatches"][0]["active"], true);
}

#[test]
fn configured_session_persists_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.toml");
    std::fs::write(&catalog_path, CATALOG).unwrap();

    let mut config = FolioConfig::default();
    config.storage.path = dir.path().join("state").join("prefs.toml");
    config.catalog.path = catalog_path;

    let mut first = open_session(&config).unwrap();
    assert_eq!(first.cards().len(), 2);
    first.dispatch(UiEvent::SelectTheme {
        theme: "green".into(),
    });
    first.dispatch(UiEvent::ToggleColorMode);
    drop(first);

    let second = open_session(&config).unwrap();
    assert_eq!(second.theme(), ThemeName::Green);
    assert_eq!(second.mode(), ColorMode::Light);
}

#[test]
fn missing_catalog_gives_empty_grid() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = FolioConfig::default();
    config.storage.path = dir.path().join("prefs.toml");
    config.catalog.path = dir.path().join("nope.toml");

    let session = open_session(&config).unwrap();
    assert!(session.cards().is_empty());
    assert_eq!(session.theme(), ThemeName::Indigo);
}
