use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::cursor::MemoryCursor;
use crate::value::{ScalarType, Value};

mod pair {
    crate::catalog_view! {
        row Pair, reader PairReader;
        view "sys"."pair" as "p";
        sql "SELECT p.[id], p.[label] FROM [sys].[pair] p";
        columns {
            0 => id: i32,
            1 => label: Option<String>,
        }
    }
}

use pair::Pair;

/// Counts `close` calls on the wrapped cursor.
struct CountingCursor {
    inner: MemoryCursor,
    closes: Rc<Cell<usize>>,
}

impl RowCursor for CountingCursor {
    fn advance(&mut self) -> ReaderResult<bool> { self.inner.advance() }
    fn field_count(&self) -> usize { self.inner.field_count() }
    fn is_null(&self, ordinal: usize) -> ReaderResult<bool> { self.inner.is_null(ordinal) }
    fn value(&self, ordinal: usize) -> ReaderResult<Value> { self.inner.value(ordinal) }
    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
        self.inner.close();
    }
    fn is_closed(&self) -> bool { self.inner.is_closed() }
}

fn rows() -> MemoryCursor {
    MemoryCursor::new([("id", ScalarType::Int32), ("label", ScalarType::Text)])
        .with_row([Value::Int32(1), Value::from("a")])
        .with_row([Value::Int32(2), Value::Null])
}

#[test]
fn read_all_closes_a_cursor_passed_by_value_once() {
    let closes = Rc::new(Cell::new(0));
    let cursor = CountingCursor { inner: rows(), closes: Rc::clone(&closes) };
    let list: Vec<Pair> = read_all(cursor).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(closes.get(), 1);
}

#[test]
fn borrowed_drain_keeps_the_cursor_open() {
    let closes = Rc::new(Cell::new(0));
    let mut cursor = CountingCursor { inner: rows(), closes: Rc::clone(&closes) };
    let list = TypedReader::<Pair, _>::new(&mut cursor, false).to_list().unwrap();
    assert_eq!(list[1], Pair { id: 2, label: None });
    assert_eq!(closes.get(), 0);
    assert!(!cursor.is_closed());
}

#[test]
fn failed_drain_still_closes_owned_cursor() {
    let closes = Rc::new(Cell::new(0));
    let inner = rows().with_row([Value::Null, Value::Null]);
    let cursor = CountingCursor { inner, closes: Rc::clone(&closes) };
    let r: ReaderResult<Vec<Pair>> =
        TypedReader::with_config(cursor, true, ReaderConfig::default().quiet()).and_then(|mut t| t.to_list());
    assert!(r.is_err());
    assert_eq!(closes.get(), 1);
}
