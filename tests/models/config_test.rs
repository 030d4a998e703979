use person_record::PersonConfig;

#[test]
fn test_config_json_roundtrip() {
    let config = PersonConfig::strict();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: PersonConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_config_is_default() {
    let parsed: PersonConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, PersonConfig::default());
    assert!(parsed.is_permissive());
}

#[test]
fn test_person_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<person_record::Person>();
    assert_send_sync::<PersonConfig>();
}
