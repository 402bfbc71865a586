use crate::SqlWriter;

/// SQLite, identity read back with `last_insert_rowid()`.
#[derive(Default, Debug, Clone, Copy)]
pub struct SqliteSqlWriter;
impl SqliteSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}
impl SqlWriter for SqliteSqlWriter {
    fn write_identity_suffix(&self, out: &mut String) {
        out.push_str(";SELECT last_insert_rowid()");
    }
}

/// PostgreSQL, identity read back with `lastval()` (the last sequence used by the session).
#[derive(Default, Debug, Clone, Copy)]
pub struct PostgresSqlWriter;
impl PostgresSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}
impl SqlWriter for PostgresSqlWriter {
    fn write_identity_suffix(&self, out: &mut String) {
        out.push_str(";SELECT CAST(lastval() AS integer)");
    }
}

/// MySQL and MariaDB, identity read back with `LAST_INSERT_ID()`.
#[derive(Default, Debug, Clone, Copy)]
pub struct MySqlSqlWriter;
impl MySqlSqlWriter {
    pub const fn new() -> Self {
        Self {}
    }
}
impl SqlWriter for MySqlSqlWriter {
    fn write_identity_suffix(&self, out: &mut String) {
        out.push_str(";SELECT CAST(LAST_INSERT_ID() AS SIGNED)");
    }
}
