//! Theme persistence across sessions
//!
//! Exercises the sled-backed settings path end to end: startup
//! resolution, toggling, and the involution property.

use app_ui::theme::{ThemeController, ThemeName, THEME_KEY};
use storage::{KvConfig, KvSettings, KvStore, SettingsStore};

fn open_settings(path: &str) -> KvSettings {
    KvSettings::new(KvStore::new(KvConfig::new(path)).unwrap())
}

#[test]
fn test_unset_theme_defaults_to_light() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv").to_string_lossy().to_string();

    let controller = ThemeController::load(open_settings(&path)).unwrap();
    assert_eq!(controller.theme(), ThemeName::Light);
    assert!(!controller.is_dark());
}

#[test]
fn test_toggle_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv").to_string_lossy().to_string();

    {
        let settings = open_settings(&path);
        let mut controller = ThemeController::load(settings).unwrap();
        controller.toggle().unwrap();
        assert_eq!(controller.theme(), ThemeName::Dark);
    }

    // A fresh session resolves the persisted selection
    let controller = ThemeController::load(open_settings(&path)).unwrap();
    assert_eq!(controller.theme(), ThemeName::Dark);
    assert_eq!(controller.icons().logo, "github-icon-light");
}

#[test]
fn test_toggle_involution_over_storage_and_icons() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv").to_string_lossy().to_string();

    // sled allows one handle per path, so the observer shares the store
    let store = KvStore::new(KvConfig::new(&path)).unwrap();
    let settings = KvSettings::new(store.clone());
    let before = settings.get(THEME_KEY).unwrap();

    let mut controller = ThemeController::load(KvSettings::new(store)).unwrap();
    let icons_before = controller.icons();

    controller.toggle().unwrap();
    controller.toggle().unwrap();

    assert_eq!(controller.icons(), icons_before);
    // Stored value equals the resolved startup theme again; an unset
    // key becomes an explicit "light" rather than vanishing
    let after = settings.get(THEME_KEY).unwrap();
    match before {
        Some(value) => assert_eq!(after, Some(value)),
        None => assert_eq!(after, Some("light".to_string())),
    }
}

#[test]
fn test_garbage_stored_value_resolves_to_light() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv").to_string_lossy().to_string();

    let store = KvStore::new(KvConfig::new(&path)).unwrap();
    let settings = KvSettings::new(store.clone());
    settings.set(THEME_KEY, "solarized").unwrap();

    let controller = ThemeController::load(KvSettings::new(store)).unwrap();
    assert_eq!(controller.theme(), ThemeName::Light);
}
