use super::*;

#[test]
fn code_mapping() {
    assert_eq!(ReaderError::NoCurrentRow.code_str(), "no_current_row");
    assert_eq!(ReaderError::CursorClosed.code_str(), "cursor_closed");
    assert_eq!(ReaderError::ReaderClosed.code_str(), "reader_closed");
    assert_eq!(ReaderError::driver("boom").code_str(), "driver_error");
    assert_eq!(ReaderError::schema_mismatch("sys.x", "bad").code_str(), "schema_mismatch");
    assert_eq!(ReaderError::unsupported(3, "uint32").code_str(), "unsupported");
    assert_eq!(
        ReaderError::OrdinalOutOfRange { ordinal: 9, field_count: 2 }.code_str(),
        "ordinal_out_of_range"
    );
}

#[test]
fn display_mentions_ordinal_and_types() {
    let e = ReaderError::TypeMismatch { ordinal: 2, expected: ScalarType::Int32, actual: ScalarType::Text };
    assert_eq!(e.to_string(), "column 2 holds text, not int32");
    let e = ReaderError::NullValue { ordinal: 0, expected: ScalarType::Bool };
    assert_eq!(e.to_string(), "column 0 is null but was read as non-nullable bool");
}

#[test]
fn binding_defects_are_classified() {
    assert!(ReaderError::NullValue { ordinal: 0, expected: ScalarType::Int64 }.is_binding_defect());
    assert!(ReaderError::OrdinalOutOfRange { ordinal: 4, field_count: 4 }.is_binding_defect());
    assert!(!ReaderError::NoCurrentRow.is_binding_defect());
    assert!(!ReaderError::driver("io").is_binding_defect());
}

#[test]
fn anyhow_maps_to_driver() {
    let e: ReaderError = anyhow::anyhow!("socket reset").into();
    assert_eq!(e, ReaderError::Driver { message: "socket reset".into() });
}

#[test]
fn serializes_with_type_tag() {
    let e = ReaderError::InvalidEnumValue { type_name: "DatabaseState".into(), value: 42 };
    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(json["type"], "invalid_enum_value");
    assert_eq!(json["value"], 42);
}
