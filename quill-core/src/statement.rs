//! Statements in the reference dialect, without naming a writer.
use crate::{ColumnOverrides, GenericSqlWriter, RecordDescriptor, SqlWriter};

const WRITER: GenericSqlWriter = GenericSqlWriter::new();

/// `insert into {table} ({columns}) values ({placeholders});SELECT CAST(SCOPE_IDENTITY() as int)`
pub fn insert(
    descriptor: &RecordDescriptor,
    table: &str,
    id_property: &str,
    overrides: &ColumnOverrides,
) -> String {
    WRITER.sql_insert(descriptor, table, id_property, overrides)
}

/// `update {table} set {assignments} where {identity assignment}`
pub fn update(
    descriptor: &RecordDescriptor,
    table: &str,
    id_property: &str,
    overrides: &ColumnOverrides,
) -> String {
    WRITER.sql_update(descriptor, table, id_property, overrides)
}

/// `delete from {table} where {id_property} = @{id_property}`
pub fn delete(table: &str, id_property: &str) -> String {
    WRITER.sql_delete(table, id_property)
}

/// `select {columns} from {table} where {id_property} = {id}`
pub fn select_by_id(
    id: i64,
    descriptor: &RecordDescriptor,
    table: &str,
    id_property: &str,
    overrides: &ColumnOverrides,
) -> String {
    WRITER.sql_select_by_id(id, descriptor, table, id_property, overrides)
}
