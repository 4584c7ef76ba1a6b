use mission_control::dashboard::data::DashboardData;
use mission_control::dashboard::DataProvider;
use mission_control::settings::Settings;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_falls_back_to_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    let provider = DataProvider::from_path(&path).unwrap();
    assert_eq!(*provider.snapshot(), DashboardData::sample());
    assert_eq!(provider.source(), Some(path.as_path()));
}

#[test]
fn snapshot_file_replaces_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    let mut data = DashboardData::sample();
    data.primary.hero.title = "Night Shift".into();
    fs::write(&path, serde_json::to_string_pretty(&data).unwrap()).unwrap();

    let provider = DataProvider::from_path(&path).unwrap();
    assert_eq!(provider.snapshot().primary.hero.title, "Night Shift");
    assert!(provider.warnings().is_empty());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    fs::write(&path, "{ not json").unwrap();
    let err = DataProvider::from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("dashboard.json"));
}

#[test]
fn settings_fallback_keeps_the_error_as_a_warning() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    fs::write(&path, "[]").unwrap();
    let settings = Settings {
        data_path: Some(path.to_string_lossy().into_owned()),
        ..Settings::default()
    };
    let provider = DataProvider::from_settings(&settings);
    assert_eq!(*provider.snapshot(), DashboardData::sample());
    assert_eq!(provider.warnings().len(), 1);
    assert!(provider.warnings()[0].contains("sample data"));
}

#[test]
fn reload_replaces_snapshot_and_bumps_generation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    let mut data = DashboardData::sample();
    fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    let mut provider = DataProvider::from_path(&path).unwrap();
    assert_eq!(provider.generation(), 0);

    data.primary.agents[1].load = 150;
    fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    provider.reload().unwrap();

    assert_eq!(provider.generation(), 1);
    assert_eq!(provider.snapshot().primary.agents[1].load, 150);
    assert_eq!(provider.warnings().len(), 1);
}

#[test]
fn failed_reload_keeps_previous_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    let mut data = DashboardData::sample();
    data.primary.footer = vec!["first".into()];
    fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    let mut provider = DataProvider::from_path(&path).unwrap();

    fs::write(&path, "{ broken").unwrap();
    assert!(provider.reload().is_err());
    assert_eq!(provider.generation(), 0);
    assert_eq!(provider.snapshot().primary.footer, ["first"]);
}

#[test]
fn unreadable_bytes_are_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    fs::write(&path, [0xff, 0xfe, b'{', 0x80]).unwrap();
    let err = DataProvider::from_path(&path).unwrap_err();
    assert!(format!("{err:#}").contains("read dashboard data"));
}

#[test]
fn directory_path_is_an_error() {
    let dir = tempdir().unwrap();
    let err = DataProvider::from_path(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("read dashboard data"));
}

#[test]
fn reload_after_delete_keeps_previous_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    let mut data = DashboardData::sample();
    data.primary.footer = vec!["mine".into()];
    fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    let mut provider = DataProvider::from_path(&path).unwrap();

    fs::remove_file(&path).unwrap();
    let err = provider.reload().unwrap_err();

    assert!(format!("{err:#}").contains("dashboard.json"));
    assert_eq!(provider.generation(), 0);
    assert_eq!(provider.snapshot().primary.footer, ["mine"]);
}
