use postgres::{Client, SimpleQueryMessage};
use sqlchat_core::{
    CatalogError, CellValue, Dialect, DialectAdapter, PostgresColumnRow, QueryOutput,
    RawColumnRow, ReadQuery, sqlchat_trace_catalog,
};

use crate::queries;

/// Catalog access over a borrowed synchronous `postgres` client
///
/// The client needs `&mut` for every round trip, so the adapter holds the
/// exclusive borrow for as long as it lives.
pub struct PostgresAdapter<'c> {
    client: &'c mut Client,
}

impl<'c> PostgresAdapter<'c> {
    pub fn new(client: &'c mut Client) -> Self {
        Self { client }
    }
}

impl DialectAdapter for PostgresAdapter<'_> {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn is_connected(&mut self) -> bool {
        !self.client.is_closed()
    }

    fn list_tables(&mut self) -> Result<Vec<String>, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Postgres, "information_schema.tables");
        self.client
            .query(queries::TABLES_QUERY, &[])
            .map_err(CatalogError::list_tables)?
            .iter()
            .map(|row| row.try_get::<_, String>(0))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::list_tables)
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Postgres, "information_schema.columns", table);
        let rows = self
            .client
            .query(queries::COLUMNS_QUERY, &[&table])
            .map_err(CatalogError::describe_columns)?;

        if rows.is_empty() {
            self.ensure_table_exists(table)?;
        }

        rows.iter()
            .map(|row| {
                Ok(RawColumnRow::Postgres(PostgresColumnRow {
                    column_name: row.try_get(0)?,
                    data_type: row.try_get(1)?,
                    is_nullable: row.try_get(2)?,
                    column_default: row.try_get(3)?,
                }))
            })
            .collect::<Result<Vec<_>, postgres::Error>>()
            .map_err(CatalogError::describe_columns)
    }
}

impl PostgresAdapter<'_> {
    /// `information_schema.columns` has no rows for a missing table, so tell a
    /// dropped table apart from one without columns
    fn ensure_table_exists(&mut self, table: &str) -> Result<(), CatalogError> {
        let found = self
            .client
            .query_opt(queries::TABLE_EXISTS_QUERY, &[&table])
            .map_err(CatalogError::describe_columns)?;
        match found {
            Some(_) => Ok(()),
            None => Err(CatalogError::describe_columns(format!(
                "table {table} no longer exists"
            ))),
        }
    }
}

impl ReadQuery for PostgresAdapter<'_> {
    /// Runs one statement inside a read-only transaction that is always rolled
    /// back. Every cell arrives as text.
    ///
    /// The statement is prepared first: the extended protocol rejects strings
    /// holding several commands, so a stacked `COMMIT` cannot end the
    /// transaction early.
    fn run_query(&mut self, sql: &str) -> Result<QueryOutput, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Postgres, sql);
        let mut tx = self
            .client
            .build_transaction()
            .read_only(true)
            .start()
            .map_err(CatalogError::read_query)?;

        let statement = tx.prepare(sql).map_err(CatalogError::read_query)?;
        let messages = tx.simple_query(sql).map_err(CatalogError::read_query)?;
        tx.rollback().map_err(CatalogError::read_query)?;

        let mut out = collect_output(messages);
        if out.columns.is_empty() {
            out.columns = statement
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect();
        }
        Ok(out)
    }
}

fn collect_output(messages: Vec<SimpleQueryMessage>) -> QueryOutput {
    let mut out = QueryOutput::default();
    for message in messages {
        match message {
            SimpleQueryMessage::RowDescription(columns) => {
                out.columns = columns.iter().map(|c| c.name().to_string()).collect();
                out.rows.clear();
            }
            SimpleQueryMessage::Row(row) => {
                let cells = (0..row.len())
                    .map(|idx| match row.get(idx) {
                        Some(text) => CellValue::Text(text.to_string()),
                        None => CellValue::Null,
                    })
                    .collect();
                out.rows.push(cells);
            }
            _ => {}
        }
    }
    out
}
