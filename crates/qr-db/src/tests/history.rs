use super::test_db;

#[test]
fn test_history_insert_and_recent() {
    let db = test_db();
    assert!(db.recent_history(10).unwrap().is_empty());

    db.insert_history("url", "https://example.com").unwrap();
    db.insert_history("sms", "sms:555").unwrap();

    let entries = db.recent_history(10).unwrap();
    assert_eq!(entries.len(), 2);
    // Newest first
    assert_eq!(entries[0].kind, "sms");
    assert_eq!(entries[0].payload, "sms:555");
    assert_eq!(entries[1].kind, "url");
}

#[test]
fn test_history_limit() {
    let db = test_db();
    for i in 0..5 {
        db.insert_history("text", &format!("note {i}")).unwrap();
    }
    assert_eq!(db.recent_history(3).unwrap().len(), 3);
}

#[test]
fn test_history_prune_keeps_newest() {
    let db = test_db();
    for i in 0..10 {
        db.insert_history("text", &format!("note {i}")).unwrap();
    }

    let deleted = db.prune_history(4).unwrap();
    assert_eq!(deleted, 6);

    let entries = db.recent_history(100).unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].payload, "note 9");
    assert_eq!(entries[3].payload, "note 6");
}

#[test]
fn test_history_clear() {
    let db = test_db();
    db.insert_history("url", "https://a.com").unwrap();
    db.clear_history().unwrap();
    assert!(db.recent_history(10).unwrap().is_empty());
}
