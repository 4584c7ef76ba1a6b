use mission_control::dashboard::ViewMode;
use mission_control::settings::{Settings, ThemeMode};
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.enable_toasts);
    assert_eq!(settings.initial_view(), ViewMode::Primary);
}

#[test]
fn partial_json_fills_defaults() {
    let settings: Settings = serde_json::from_str(
        r#"{ "default_view": "stock_picks", "theme": "light" }"#,
    )
    .unwrap();
    assert_eq!(settings.initial_view(), ViewMode::StockPicks);
    assert_eq!(settings.theme, ThemeMode::Light);
    assert_eq!(settings.toast_duration, 3.0);
    assert!(!settings.debug_logging);
}

#[test]
fn unknown_default_view_falls_back_to_primary() {
    let settings = Settings {
        default_view: Some("weather".into()),
        ..Settings::default()
    };
    assert_eq!(settings.initial_view(), ViewMode::Primary);
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        debug_logging: true,
        data_path: Some("data/dashboard.json".into()),
        theme: ThemeMode::System,
        window_size: Some((1024.0, 768.0)),
        ..Settings::default()
    };
    settings.save(path.to_str().unwrap()).unwrap();
    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn invalid_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ nope").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}
