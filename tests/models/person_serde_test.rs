use person_record::{Person, PersonConfig, PersonError, from_json, from_json_validated, to_json, to_json_pretty};

#[test]
fn test_person_json_roundtrip() {
    let people = vec![
        Person::new("Jan", 0),
        Person::new("", -4),
        Person::new("Piet \"the\" Great", 87),
    ];

    for person in people {
        let json = to_json(&person).unwrap();
        assert_eq!(from_json(&json).unwrap(), person);
    }
}

#[test]
fn test_pretty_output_parses() {
    let person = Person::new("Alice", 30);
    let json = to_json_pretty(&person).unwrap();
    assert!(json.contains('\n'));
    assert!(json.contains("\"name\": \"Alice\""));
    assert_eq!(from_json(&json).unwrap(), person);
}

#[test]
fn test_invalid_json() {
    let err = from_json("{not json").unwrap_err();
    assert!(matches!(err, PersonError::Json(_)));

    let err = from_json(r#"{"name": "Alice", "age": "thirty"}"#).unwrap_err();
    assert!(matches!(err, PersonError::Json(_)));
}

#[test]
fn test_validated_parse() {
    let json = r#"{"name": "Alice", "age": -1}"#;

    assert_eq!(from_json(json).unwrap(), Person::new("Alice", -1));
    assert_eq!(
        from_json_validated(json, &PersonConfig::default()).unwrap(),
        Person::new("Alice", -1)
    );

    let err = from_json_validated(json, &PersonConfig::strict()).unwrap_err();
    assert!(matches!(err, PersonError::NegativeAge(-1)));
}
