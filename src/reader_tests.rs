use super::*;
use crate::cursor::MemoryCursor;
use crate::value::ScalarType;

fn cursor() -> MemoryCursor {
    MemoryCursor::new([("id", ScalarType::Int32), ("label", ScalarType::Text), ("flag", ScalarType::Bool)])
        .with_row([Value::Int32(7), Value::Null, Value::Bool(true)])
        .with_row([Value::Int32(9), Value::from("x"), Value::Bool(false)])
}

#[test]
fn state_machine_walks_to_exhausted() {
    let mut r = DataReader::new(cursor(), true);
    assert_eq!(r.state(), ReaderState::BeforeFirst);
    assert!(r.read().unwrap());
    assert_eq!(r.state(), ReaderState::OnRow);
    assert!(r.read().unwrap());
    assert!(!r.read().unwrap());
    assert_eq!(r.state(), ReaderState::Exhausted);
    for _ in 0..3 {
        assert!(!r.read().unwrap());
    }
    assert_eq!(r.state(), ReaderState::Exhausted);
}

#[test]
fn getters_before_first_row_propagate_cursor_error() {
    let r = DataReader::new(cursor(), true);
    assert_eq!(r.get_i32(0), Err(ReaderError::NoCurrentRow));
    assert_eq!(r.get_nullable_string(1), Err(ReaderError::NoCurrentRow));
}

#[test]
fn nullable_getters_check_before_reading() {
    let mut r = DataReader::new(cursor(), true);
    r.read().unwrap();
    assert_eq!(r.get_nullable_string(1).unwrap(), None);
    assert_eq!(r.get_string(1), Err(ReaderError::NullValue { ordinal: 1, expected: ScalarType::Text }));
    r.read().unwrap();
    assert_eq!(r.get_nullable_string(1).unwrap(), Some("x".to_string()));
    assert_eq!(r.get_nullable_i32(0).unwrap(), Some(9));
    assert!(!r.get_bool(2).unwrap());
}

#[test]
fn type_mismatch_is_propagated_verbatim() {
    let mut r = DataReader::with_config(cursor(), true, ReaderConfig::default().quiet());
    r.read().unwrap();
    assert_eq!(
        r.get_i64(0),
        Err(ReaderError::TypeMismatch { ordinal: 0, expected: ScalarType::Int64, actual: ScalarType::Int32 })
    );
    assert_eq!(r.get_bool(3), Err(ReaderError::OrdinalOutOfRange { ordinal: 3, field_count: 3 }));
}

#[test]
fn owning_reader_closes_cursor_on_drop() {
    let mut c = cursor();
    {
        let mut r = DataReader::new(&mut c, true);
        r.read().unwrap();
    }
    assert!(c.is_closed());
    assert_eq!(c.advance(), Err(ReaderError::CursorClosed));
}

#[test]
fn borrowing_reader_leaves_cursor_usable() {
    let mut c = cursor();
    {
        let mut r = DataReader::new(&mut c, false);
        r.read().unwrap();
        r.close();
        assert!(r.is_closed());
        assert_eq!(r.get_i32(0), Err(ReaderError::ReaderClosed));
        assert_eq!(r.read(), Err(ReaderError::ReaderClosed));
    }
    assert!(!c.is_closed());
    assert!(c.advance().unwrap());
    assert_eq!(c.get_i32(0).unwrap(), 9);
}

#[test]
fn close_is_idempotent() {
    let mut c = cursor();
    let mut r = DataReader::new(&mut c, true);
    r.close();
    r.close();
    drop(r);
    assert!(c.is_closed());
}

#[test]
fn into_cursor_returns_open_cursor() {
    let r = DataReader::new(cursor(), true);
    let mut c = r.into_cursor().unwrap();
    assert!(!c.is_closed());
    assert!(c.advance().unwrap());
}

#[test]
fn verify_uses_cursor_metadata() {
    use crate::schema::{ColumnBinding, ViewSchema};
    const COLS: &[ColumnBinding] = &[
        ColumnBinding::new(0, "id", ScalarType::Int32, false),
        ColumnBinding::new(1, "label", ScalarType::Text, true),
        ColumnBinding::new(2, "flag", ScalarType::Bool, false),
    ];
    let view = ViewSchema { schema: "sys", name: "labelled", alias: "p", sql: "", columns: COLS };
    let r = DataReader::new(cursor(), true);
    assert!(r.verify(&view).is_ok());
    const SHORT: &[ColumnBinding] = &[ColumnBinding::new(0, "id", ScalarType::Int32, false)];
    let view = ViewSchema { columns: SHORT, ..view };
    assert!(r.verify(&view).is_err());
}
