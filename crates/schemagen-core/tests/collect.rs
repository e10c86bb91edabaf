//! Schema collection through a `SchemaSource`.

mod common;

use common::{foo_source, FakeSource};
use schemagen_core::{collect_schema, Column, QueryError, Table};

#[test]
fn collects_single_table_scenario() {
    let model = collect_schema(foo_source()).unwrap();

    assert_eq!(model.tables(), [Table::new("foo", "this is the test table")]);
    assert_eq!(
        model.columns("foo"),
        [Column::new("col_varchar", "varchar(20)", "column type: VARCHAR")]
    );
    assert!(!model.columns("foo")[0].auto_increment);
    assert_eq!(model.column_count(), 1);
}

#[test]
fn lists_tables_then_columns_in_engine_order() {
    let mut source = FakeSource::default()
        .with_table(Table::new("zeta", ""), vec![])
        .with_table(Table::new("alpha", ""), vec![Column::new("id", "int", "")]);

    let model = collect_schema(&mut source).unwrap();

    let names: Vec<_> = model.tables().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["zeta", "alpha"]);
    assert_eq!(source.calls, ["tables", "columns:zeta", "columns:alpha"]);
}

#[test]
fn table_without_columns_is_not_an_error() {
    let source = FakeSource::default().with_table(Table::new("empty", ""), vec![]);
    let model = collect_schema(source).unwrap();
    assert!(model.columns("empty").is_empty());
}

#[test]
fn column_failure_aborts_and_names_table() {
    let mut source = FakeSource::default()
        .with_table(Table::new("a", ""), vec![])
        .with_table(Table::new("b", ""), vec![])
        .with_table(Table::new("c", ""), vec![])
        .failing_on("b");

    let err = collect_schema(&mut source).unwrap_err();

    assert_eq!(err.table(), Some("b"));
    assert!(matches!(err, QueryError::Columns { .. }));
    // The run stops at the failing table.
    assert_eq!(source.calls, ["tables", "columns:a", "columns:b"]);
}
