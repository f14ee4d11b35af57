use rusqlite::{Connection, OptionalExtension};
use rusqlite::types::ValueRef;
use sqlchat_core::{
    CatalogError, CellValue, Dialect, DialectAdapter, QueryOutput, RawColumnRow, ReadQuery,
    SqliteColumnRow, sqlchat_trace_catalog,
};

use crate::queries;

/// Catalog access over a borrowed `rusqlite` connection
#[derive(Debug, Clone, Copy)]
pub struct SqliteAdapter<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteAdapter<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl DialectAdapter for SqliteAdapter<'_> {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn list_tables(&mut self) -> Result<Vec<String>, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Sqlite, queries::TABLES_QUERY.trim());
        let mut stmt = self
            .conn
            .prepare(queries::TABLES_QUERY)
            .map_err(CatalogError::list_tables)?;

        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(CatalogError::list_tables)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::list_tables)?;
        Ok(tables)
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Sqlite, "pragma_table_info", table);
        let mut stmt = self
            .conn
            .prepare(queries::COLUMNS_QUERY)
            .map_err(CatalogError::describe_columns)?;

        let rows = stmt
            .query_map([table], |row| {
                Ok(RawColumnRow::Sqlite(SqliteColumnRow {
                    cid: row.get(0)?,
                    name: row.get(1)?,
                    column_type: row.get(2)?,
                    not_null: row.get::<_, i64>(3)? != 0,
                    default_literal: row.get(4)?,
                    pk: row.get(5)?,
                }))
            })
            .map_err(CatalogError::describe_columns)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::describe_columns)?;

        if rows.is_empty() {
            self.ensure_table_exists(table)?;
        }
        Ok(rows)
    }
}

impl SqliteAdapter<'_> {
    /// `pragma_table_info` yields no rows for a missing table, so tell a
    /// dropped table apart from one without columns
    fn ensure_table_exists(&self, table: &str) -> Result<(), CatalogError> {
        let found = self
            .conn
            .query_row(queries::TABLE_EXISTS_QUERY, [table], |_| Ok(()))
            .optional()
            .map_err(CatalogError::describe_columns)?;
        match found {
            Some(()) => Ok(()),
            None => Err(CatalogError::describe_columns(format!(
                "table {table} no longer exists"
            ))),
        }
    }
}

impl ReadQuery for SqliteAdapter<'_> {
    fn run_query(&mut self, sql: &str) -> Result<QueryOutput, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Sqlite, sql);
        let mut stmt = self.conn.prepare(sql).map_err(CatalogError::read_query)?;
        if !stmt.readonly() {
            return Err(CatalogError::read_query("refusing to run a statement that writes"));
        }

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = stmt.query([]).map_err(CatalogError::read_query)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(CatalogError::read_query)? {
            let mut cells = Vec::with_capacity(width);
            for idx in 0..width {
                let value = row.get_ref(idx).map_err(CatalogError::read_query)?;
                cells.push(cell(value));
            }
            out.push(cells);
        }

        Ok(QueryOutput { columns, rows: out })
    }
}

fn cell(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Integer(i),
        ValueRef::Real(r) => CellValue::Real(r),
        ValueRef::Text(t) => CellValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => CellValue::Blob(b.to_vec()),
    }
}
