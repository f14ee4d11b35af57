use sqlchat_core::{
    CatalogError, CellValue, Dialect, DialectAdapter, MysqlColumnRow, QueryOutput, RawColumnRow,
    ReadQuery, sqlchat_trace_catalog,
};
use sqlx::mysql::MySqlRow;
use sqlx::{Column, Executor, Row, Statement};

use crate::connection::BlockingMysql;
use crate::queries;

/// Catalog access over a borrowed [`BlockingMysql`] connection
#[derive(Debug)]
pub struct MysqlAdapter<'c> {
    db: &'c mut BlockingMysql,
}

impl<'c> MysqlAdapter<'c> {
    pub fn new(db: &'c mut BlockingMysql) -> Self {
        Self { db }
    }
}

impl DialectAdapter for MysqlAdapter<'_> {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn is_connected(&mut self) -> bool {
        self.db.ping().is_ok()
    }

    fn list_tables(&mut self) -> Result<Vec<String>, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Mysql, "information_schema.tables");
        let BlockingMysql { rt, conn } = &mut *self.db;
        let rows = rt
            .block_on(sqlx::query(queries::TABLES_QUERY).fetch_all(&mut *conn))
            .map_err(CatalogError::list_tables)?;

        rows.iter()
            .map(|row| row.try_get::<String, _>(0))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::list_tables)
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Mysql, "information_schema.columns", table);
        let BlockingMysql { rt, conn } = &mut *self.db;
        let rows = rt
            .block_on(
                sqlx::query(queries::COLUMNS_QUERY)
                    .bind(table)
                    .fetch_all(&mut *conn),
            )
            .map_err(CatalogError::describe_columns)?;

        if rows.is_empty() {
            self.ensure_table_exists(table)?;
        }

        rows.iter()
            .map(column_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::describe_columns)
    }
}

impl MysqlAdapter<'_> {
    /// `information_schema.columns` has no rows for a missing table, so tell a
    /// dropped table apart from one without columns
    fn ensure_table_exists(&mut self, table: &str) -> Result<(), CatalogError> {
        let BlockingMysql { rt, conn } = &mut *self.db;
        let found = rt
            .block_on(
                sqlx::query(queries::TABLE_EXISTS_QUERY)
                    .bind(table)
                    .fetch_optional(&mut *conn),
            )
            .map_err(CatalogError::describe_columns)?;
        match found {
            Some(_) => Ok(()),
            None => Err(CatalogError::describe_columns(format!(
                "table {table} no longer exists"
            ))),
        }
    }
}

fn column_row(row: &MySqlRow) -> Result<RawColumnRow, sqlx::Error> {
    Ok(RawColumnRow::Mysql(MysqlColumnRow {
        column_name: row.try_get(0)?,
        column_type: row.try_get(1)?,
        is_nullable: row.try_get(2)?,
        column_key: row.try_get::<Option<String>, _>(3)?.unwrap_or_default(),
        column_default: row.try_get(4)?,
        extra: row.try_get::<Option<String>, _>(5)?.unwrap_or_default(),
    }))
}

impl ReadQuery for MysqlAdapter<'_> {
    /// Runs one statement over the text protocol inside a read-only
    /// transaction that is always rolled back. Cells are decoded from their
    /// text form.
    ///
    /// The statement is prepared first. The server refuses to prepare a string
    /// holding several statements, so a stacked `COMMIT` never reaches the
    /// multi-statement text protocol.
    fn run_query(&mut self, sql: &str) -> Result<QueryOutput, CatalogError> {
        sqlchat_trace_catalog!(Dialect::Mysql, sql);
        let BlockingMysql { rt, conn } = &mut *self.db;
        let (columns, rows) = rt
            .block_on(async {
                sqlx::raw_sql(queries::BEGIN_READ_ONLY)
                    .execute(&mut *conn)
                    .await?;
                let result = async {
                    let statement = (&mut *conn).prepare(sql).await?;
                    let columns: Vec<String> = statement
                        .columns()
                        .iter()
                        .map(|c| c.name().to_string())
                        .collect();
                    let rows = sqlx::raw_sql(sql).fetch_all(&mut *conn).await?;
                    Ok::<_, sqlx::Error>((columns, rows))
                }
                .await;
                sqlx::raw_sql(queries::ROLLBACK).execute(&mut *conn).await?;
                result
            })
            .map_err(CatalogError::read_query)?;

        let columns = match rows.first() {
            Some(row) => row.columns().iter().map(|c| c.name().to_string()).collect(),
            None => columns,
        };
        let rows = rows
            .iter()
            .map(text_cells)
            .collect::<Result<Vec<_>, _>>()
            .map_err(CatalogError::read_query)?;

        Ok(QueryOutput { columns, rows })
    }
}

fn text_cells(row: &MySqlRow) -> Result<Vec<CellValue>, sqlx::Error> {
    (0..row.len())
        .map(|idx| {
            let cell = match row.try_get_unchecked::<Option<Vec<u8>>, _>(idx)? {
                Some(bytes) => CellValue::Text(String::from_utf8_lossy(&bytes).into_owned()),
                None => CellValue::Null,
            };
            Ok(cell)
        })
        .collect()
}
