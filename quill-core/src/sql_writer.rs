use crate::{
    ColumnEntry, ColumnMapping, ColumnOverrides, RecordDescriptor, Result, resolve_columns,
    joined_by, separated_by, truncate_long,
};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Renders the CRUD statements of a record type.
///
/// Every method has a default implementation producing the reference dialect: `@name`
/// placeholders and a `SCOPE_IDENTITY()` query after `INSERT`. Dialects override the hooks
/// (`write_placeholder`, `write_identity_suffix`) or whole statements.
pub trait SqlWriter {
    /// Named parameter bound by the execution layer to the property `name`.
    fn write_placeholder(&self, out: &mut String, name: &str) {
        out.push('@');
        out.push_str(name);
    }

    /// Appended to `INSERT`, retrieves the generated identity as an integer.
    fn write_identity_suffix(&self, out: &mut String) {
        out.push_str(";SELECT CAST(SCOPE_IDENTITY() as int)");
    }

    /// `column=@property`
    fn write_assignment(&self, out: &mut String, entry: &ColumnEntry) {
        out.push_str(entry.column);
        out.push('=');
        self.write_placeholder(out, entry.property);
    }

    /// Columns and placeholders correspond one to one, entries mapped to the identity property
    /// are left out. When nothing is left the lists are empty: `() values ()`.
    fn write_insert_mapping(
        &self,
        out: &mut String,
        mapping: &ColumnMapping,
        table: &str,
        id_property: &str,
    ) {
        let columns = mapping.iter().filter(|v| v.property != id_property);
        out.push_str("insert into ");
        out.push_str(table);
        out.push_str(" (");
        joined_by(out, columns.clone(), |out, v| out.push_str(v.column), ",");
        out.push_str(") values (");
        joined_by(
            out,
            columns,
            |out, v| self.write_placeholder(out, v.property),
            ",",
        );
        out.push(')');
        self.write_identity_suffix(out);
    }

    fn write_update_mapping(
        &self,
        out: &mut String,
        mapping: &ColumnMapping,
        table: &str,
        id_property: &str,
    ) {
        // The last entry matching the identity is the key, earlier ones are plain assignments
        let identity = mapping.iter().rposition(|v| v.property == id_property);
        out.push_str("update ");
        out.push_str(table);
        out.push_str(" set ");
        separated_by(
            out,
            mapping
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != identity),
            |out, (_, v)| self.write_assignment(out, v),
            ",",
        );
        out.push_str(" where ");
        if let Some(entry) = identity.and_then(|i| mapping.iter().nth(i)) {
            self.write_assignment(out, entry);
        }
    }

    fn write_select_by_id_mapping(
        &self,
        out: &mut String,
        id: i64,
        mapping: &ColumnMapping,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) {
        out.push_str("select ");
        joined_by(out, mapping.columns(), |out, v| out.push_str(v), ",");
        // Renamed columns are listed again, aliased to their property
        for (property, column) in overrides.iter() {
            out.push(',');
            out.push_str(column);
            out.push_str(" as ");
            out.push_str(property);
        }
        out.push_str(" from ");
        out.push_str(table);
        out.push_str(" where ");
        out.push_str(id_property);
        out.push_str(" = ");
        write_integer!(out, id);
    }

    fn write_insert(
        &self,
        out: &mut String,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) {
        let start = out.len();
        let mapping = resolve_columns(descriptor, overrides);
        self.write_insert_mapping(out, &mapping, table, id_property);
        log::trace!("{}", truncate_long!(out[start..]));
    }

    fn write_update(
        &self,
        out: &mut String,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) {
        let start = out.len();
        let mapping = resolve_columns(descriptor, overrides);
        self.write_update_mapping(out, &mapping, table, id_property);
        log::trace!("{}", truncate_long!(out[start..]));
    }

    fn write_delete(&self, out: &mut String, table: &str, id_property: &str) {
        let start = out.len();
        out.push_str("delete from ");
        out.push_str(table);
        out.push_str(" where ");
        out.push_str(id_property);
        out.push_str(" = ");
        self.write_placeholder(out, id_property);
        log::trace!("{}", truncate_long!(out[start..]));
    }

    fn write_select_by_id(
        &self,
        out: &mut String,
        id: i64,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) {
        let start = out.len();
        let mapping = resolve_columns(descriptor, overrides);
        self.write_select_by_id_mapping(out, id, &mapping, table, id_property, overrides);
        log::trace!("{}", truncate_long!(out[start..]));
    }

    fn sql_insert(
        &self,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) -> String {
        let mut out = String::with_capacity(128);
        self.write_insert(&mut out, descriptor, table, id_property, overrides);
        out
    }

    fn sql_update(
        &self,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) -> String {
        let mut out = String::with_capacity(128);
        self.write_update(&mut out, descriptor, table, id_property, overrides);
        out
    }

    fn sql_delete(&self, table: &str, id_property: &str) -> String {
        let mut out = String::with_capacity(64);
        self.write_delete(&mut out, table, id_property);
        out
    }

    fn sql_select_by_id(
        &self,
        id: i64,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) -> String {
        let mut out = String::with_capacity(128);
        self.write_select_by_id(&mut out, id, descriptor, table, id_property, overrides);
        out
    }

    /// Like [`SqlWriter::sql_insert`], but rejects columns mapped by more than one property.
    fn try_sql_insert(
        &self,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) -> Result<String> {
        let mapping = resolve_columns(descriptor, overrides);
        mapping.check_unique_columns()?;
        let mut out = String::with_capacity(128);
        self.write_insert_mapping(&mut out, &mapping, table, id_property);
        log::trace!("{}", truncate_long!(out));
        Ok(out)
    }

    /// Like [`SqlWriter::sql_update`], but rejects duplicate columns and a missing identity
    /// instead of emitting an empty `where`.
    fn try_sql_update(
        &self,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) -> Result<String> {
        let mapping = resolve_columns(descriptor, overrides);
        mapping.check_unique_columns()?;
        mapping.identity(id_property)?;
        let mut out = String::with_capacity(128);
        self.write_update_mapping(&mut out, &mapping, table, id_property);
        log::trace!("{}", truncate_long!(out));
        Ok(out)
    }

    /// Like [`SqlWriter::sql_select_by_id`], but rejects columns mapped by more than one property.
    fn try_sql_select_by_id(
        &self,
        id: i64,
        descriptor: &RecordDescriptor,
        table: &str,
        id_property: &str,
        overrides: &ColumnOverrides,
    ) -> Result<String> {
        let mapping = resolve_columns(descriptor, overrides);
        mapping.check_unique_columns()?;
        let mut out = String::with_capacity(128);
        self.write_select_by_id_mapping(&mut out, id, &mapping, table, id_property, overrides);
        log::trace!("{}", truncate_long!(out));
        Ok(out)
    }
}

/// Reference dialect, uses every default of [`SqlWriter`].
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;
impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}
impl SqlWriter for GenericSqlWriter {}
