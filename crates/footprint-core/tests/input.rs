use footprint_core::{compute, FootprintError, FormInput, RawInput};

#[test]
fn form_values_are_parsed_and_defaulted() {
    let form = FormInput::from_pairs([
        ("energyKwh", "300"),
        ("gasTherms", " 50 "),
        ("transportCar", ""),
        ("transportBus", "abc"),
        ("transportFlight", "NaN"),
        ("diet", "dietVegan"),
        ("wastePeople", "2.9"),
        ("somethingElse", "12"),
    ]);

    let raw = form.parse();
    assert_eq!(raw.energy_kwh, Some(300.0));
    assert_eq!(raw.gas_therms, Some(50.0));
    assert_eq!(raw.transport_car, None);
    assert_eq!(raw.transport_bus, None);
    assert_eq!(raw.transport_train, None);
    assert_eq!(raw.transport_flight, None);
    assert_eq!(raw.diet.as_deref(), Some("dietVegan"));
    assert_eq!(raw.waste_people, Some(2));
}

#[test]
fn blank_diet_and_household_fall_back() {
    let form = FormInput::from_pairs([("diet", "   "), ("wastePeople", "")]);
    let raw = form.parse();
    assert_eq!(raw.diet, None);
    assert_eq!(raw.household_size(), 1);
}

#[test]
fn strict_parse_reports_the_offending_field() {
    let form = FormInput::from_pairs([("energyKwh", "120"), ("transportBus", "ten")]);
    match form.parse_strict() {
        Err(FootprintError::Validation(message)) => {
            assert!(message.contains("transportBus"), "{message}");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let ok = FormInput::from_pairs([("energyKwh", "120"), ("transportBus", "")]);
    assert_eq!(ok.parse_strict().unwrap().energy_kwh, Some(120.0));
}

#[test]
fn form_submission_feeds_the_calculator() {
    let form = FormInput::from_pairs([
        ("energyKwh", "300"),
        ("gasTherms", "50"),
        ("transportCar", "50"),
        ("transportBus", "10"),
        ("transportTrain", "0"),
        ("transportFlight", "500"),
        ("diet", "dietOmnivore"),
        ("wastePeople", "2"),
    ]);
    let result = compute(form.parse());
    assert!((result.total_footprint - 825.73).abs() < 1e-9);
}

#[test]
fn json_input_accepts_partial_and_fractional_values() {
    let raw: RawInput =
        serde_json::from_str(r#"{"energyKwh": 300, "diet": "dietVegan", "wastePeople": 3.7}"#)
            .unwrap();
    assert_eq!(raw.energy_kwh, Some(300.0));
    assert_eq!(raw.gas_therms, None);
    assert_eq!(raw.waste_people, Some(3));

    let empty: RawInput = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, RawInput::default());

    let nulls: RawInput =
        serde_json::from_str(r#"{"energyKwh": null, "wastePeople": null}"#).unwrap();
    assert_eq!(nulls, RawInput::default());
}

#[test]
fn absent_fields_are_not_serialized() {
    let raw = RawInput {
        transport_car: Some(12.5),
        ..RawInput::default()
    };
    let json = serde_json::to_string(&raw).unwrap();
    assert_eq!(json, r#"{"transportCar":12.5}"#);
}

#[test]
fn input_files_load_by_extension() {
    let dir = std::env::temp_dir().join(format!("footprint-input-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let toml_path = dir.join("input.toml");
    std::fs::write(&toml_path, "energyKwh = 100.0\ndiet = \"dietVegetarian\"\nwastePeople = 4\n")
        .unwrap();
    let from_toml = RawInput::from_path(&toml_path).unwrap();
    assert_eq!(from_toml.energy_kwh, Some(100.0));
    assert_eq!(from_toml.waste_people, Some(4));

    let json_path = dir.join("input.json");
    std::fs::write(&json_path, r#"{"transportFlight": 250}"#).unwrap();
    let from_json = RawInput::from_path(&json_path).unwrap();
    assert_eq!(from_json.transport_flight, Some(250.0));

    let missing = RawInput::from_path(dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, FootprintError::Io(_)));

    std::fs::remove_dir_all(&dir).ok();
}
