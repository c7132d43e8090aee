use super::test_db;

#[test]
fn test_open_and_migrate() {
    let db = test_db();
    let settings = db.get_all_settings().unwrap();
    assert!(settings.is_empty());
}

#[test]
fn test_settings_crud() {
    let db = test_db();
    db.set_setting("THEME", "light").unwrap();
    assert_eq!(db.get_setting("THEME").unwrap(), Some("light".into()));

    db.set_setting("THEME", "dark").unwrap();
    assert_eq!(db.get_setting("THEME").unwrap(), Some("dark".into()));

    db.delete_setting("THEME").unwrap();
    assert_eq!(db.get_setting("THEME").unwrap(), None);
}

#[test]
fn test_get_all_settings() {
    let db = test_db();
    db.set_setting("QR_SIZE", "512").unwrap();
    db.set_setting("THEME", "dark").unwrap();

    let all = db.get_all_settings().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.get("QR_SIZE"), Some(&"512".to_string()));
}
