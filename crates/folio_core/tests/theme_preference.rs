use folio_core::db::{open_db, open_db_in_memory};
use folio_core::{PreferenceRepository, SqlitePreferenceRepository, Theme, ThemeService};

#[test]
fn unset_theme_resolves_to_fallback() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());

    assert_eq!(service.current(Theme::Dark).unwrap(), Theme::Dark);
    assert_eq!(service.current(Theme::Light).unwrap(), Theme::Light);
}

#[test]
fn toggle_flips_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let service = ThemeService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());

    assert_eq!(service.toggle(Theme::Light).unwrap(), Theme::Dark);
    assert_eq!(service.current(Theme::Light).unwrap(), Theme::Dark);
    assert_eq!(service.toggle(Theme::Light).unwrap(), Theme::Light);
    assert_eq!(service.current(Theme::Dark).unwrap(), Theme::Light);
}

#[test]
fn unreadable_stored_value_falls_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePreferenceRepository::try_new(&conn).unwrap();
    repo.set_preference("theme", "sepia").unwrap();

    let service = ThemeService::new(repo);
    assert_eq!(service.current(Theme::Light).unwrap(), Theme::Light);
}

#[test]
fn choice_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.db");

    {
        let conn = open_db(&path).unwrap();
        let service = ThemeService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());
        service.set(Theme::Dark).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqlitePreferenceRepository::try_new(&conn).unwrap();
    assert_eq!(repo.get_preference("theme").unwrap().as_deref(), Some("dark"));
    let service = ThemeService::new(repo);
    assert_eq!(service.current(Theme::Light).unwrap(), Theme::Dark);
}
