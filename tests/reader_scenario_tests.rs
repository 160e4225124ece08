use catalog_reader::{
    read_all, DataReader, MemoryCursor, ReaderConfig, ReaderError, ReaderState, RowCursor, ScalarType, TypedReader,
    Value,
};

mod labelled {
    catalog_reader::catalog_view! {
        row Labelled, reader LabelledReader;
        view "sys"."labelled" as "p";
        sql "SELECT p.[id], p.[label], p.[flag] FROM [sys].[labelled] p";
        columns {
            0 => id: i32,
            1 => label: Option<String>,
            2 => flag: bool,
        }
    }
}

use labelled::{Labelled, LabelledReader};

fn labelled_cursor() -> MemoryCursor {
    MemoryCursor::new([("id", ScalarType::Int32), ("label", ScalarType::Text), ("flag", ScalarType::Bool)])
        .with_row([Value::Int32(7), Value::Null, Value::Bool(true)])
        .with_row([Value::Int32(9), Value::from("x"), Value::Bool(false)])
}

#[test]
fn to_list_returns_rows_in_cursor_order() {
    catalog_reader::logging::init_for_tests();
    let mut reader = LabelledReader::new(labelled_cursor(), true);
    let rows = reader.to_list().expect("to_list");
    assert_eq!(
        rows,
        vec![
            Labelled { id: 7, label: None, flag: true },
            Labelled { id: 9, label: Some("x".into()), flag: false },
        ]
    );
    assert!(!reader.read().unwrap());
    assert!(!reader.read().unwrap());
}

#[test]
fn column_accessors_follow_the_current_row() {
    let mut reader = LabelledReader::new(labelled_cursor(), true);
    assert!(reader.read().unwrap());
    assert_eq!(reader.id().unwrap(), 7);
    assert_eq!(reader.label().unwrap(), None);
    assert!(reader.flag().unwrap());
    assert!(reader.read().unwrap());
    assert_eq!(reader.label().unwrap().as_deref(), Some("x"));
    assert_eq!(reader.get_i32(labelled::ordinal::id).unwrap(), 9);
}

#[test]
fn empty_cursor_gives_empty_list() {
    let cursor = MemoryCursor::new([("id", ScalarType::Int32), ("label", ScalarType::Text), ("flag", ScalarType::Bool)]);
    let rows: Vec<Labelled> = read_all(cursor).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn null_in_non_nullable_column_fails_the_drain() {
    let cursor = labelled_cursor().with_row([Value::Null, Value::Null, Value::Bool(true)]);
    let mut reader = LabelledReader::with_config(cursor, true, ReaderConfig::default().quiet()).unwrap();
    assert_eq!(reader.to_list(), Err(ReaderError::NullValue { ordinal: 0, expected: ScalarType::Int32 }));
}

#[test]
fn rows_iterator_stops_after_first_error() {
    let cursor = labelled_cursor()
        .with_row([Value::from("bad"), Value::Null, Value::Bool(true)])
        .with_row([Value::Int32(11), Value::from("after"), Value::Bool(true)]);
    let mut typed: TypedReader<Labelled, _> = TypedReader::with_config(cursor, true, ReaderConfig::default().quiet()).unwrap();
    let results: Vec<_> = typed.rows().collect();
    // the row after the failure is never yielded
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok() && results[1].is_ok());
    assert!(matches!(results[2], Err(ReaderError::TypeMismatch { ordinal: 0, .. })));
}

#[test]
fn non_owning_reader_leaves_cursor_open() {
    let mut cursor = labelled_cursor();
    {
        let mut reader = LabelledReader::new(&mut cursor, false);
        assert!(reader.read().unwrap());
        reader.close();
        assert_eq!(reader.state(), ReaderState::Closed);
    }
    assert!(!cursor.is_closed());
    assert!(cursor.advance().unwrap());
    assert_eq!(cursor.get_i32(0).unwrap(), 9);
}

#[test]
fn owning_reader_closes_cursor_once() {
    let mut cursor = labelled_cursor();
    {
        let mut reader = DataReader::new(&mut cursor, true);
        reader.close();
        reader.close();
    }
    assert!(cursor.is_closed());
    assert_eq!(cursor.advance(), Err(ReaderError::CursorClosed));
}

#[test]
fn schema_verification_rejects_wrong_shape() {
    let cursor = MemoryCursor::new([("id", ScalarType::Int64), ("label", ScalarType::Text), ("flag", ScalarType::Bool)]);
    let err = LabelledReader::with_config(cursor, true, ReaderConfig::default().verifying()).err();
    assert!(matches!(err, Some(ReaderError::SchemaMismatch { .. })));

    let ok = LabelledReader::with_config(labelled_cursor(), true, ReaderConfig::default().verifying());
    assert!(ok.is_ok());
}

#[test]
fn generated_constants_describe_the_view() {
    assert_eq!(labelled::SCHEMA.qualified_name(), "[sys].[labelled]");
    assert_eq!(labelled::COLUMNS.len(), 3);
    assert!(labelled::COLUMNS[1].nullable);
    assert!(!labelled::COLUMNS[2].nullable);
    assert_eq!(LabelledReader::<MemoryCursor>::SQL, labelled::SQL);
}
