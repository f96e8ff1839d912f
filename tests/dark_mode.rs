//! Dark mode persistence across toggles and reloads

use falcon_chat::storage::PreferenceStore;
use falcon_chat::theme::{DARK_MODE_KEY, ThemeMode, theme_definition, toggle_dark_mode};

#[test]
fn test_double_toggle_restores_state() {
    for initial in ["true", "false"] {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = PreferenceStore::at(dir.path());
        store.set(DARK_MODE_KEY, initial).expect("seed preference");

        let start = ThemeMode::load(&store);
        let class_before = theme_definition(start).root_class;

        let once = toggle_dark_mode(start, &store);
        assert_ne!(once, start);
        let twice = toggle_dark_mode(once, &store);

        assert_eq!(twice, start);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some(initial));
        assert_eq!(theme_definition(twice).root_class, class_before);
    }
}

#[test]
fn test_preference_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");

    let first_session = PreferenceStore::at(dir.path());
    let mode = toggle_dark_mode(ThemeMode::load(&first_session), &first_session);
    assert_eq!(mode, ThemeMode::Dark);

    let second_session = PreferenceStore::at(dir.path());
    assert_eq!(ThemeMode::load(&second_session), ThemeMode::Dark);
}

#[test]
fn test_absent_preference_starts_light() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PreferenceStore::at(dir.path().join("never-written"));
    assert_eq!(ThemeMode::load(&store), ThemeMode::Light);
}
