use thiserror::Error;

use crate::dialect::UnknownDialect;

/// Boxed driver error carried inside [`CatalogError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The catalog query shape that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogQuery {
    ListTables,
    DescribeColumns,
    ReadQuery,
}

impl core::fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            CatalogQuery::ListTables => "list tables",
            CatalogQuery::DescribeColumns => "describe columns",
            CatalogQuery::ReadQuery => "read query",
        })
    }
}

/// A query issued through a connection handle failed
#[derive(Debug, Error)]
#[error("{query} failed: {source}")]
pub struct CatalogError {
    pub query: CatalogQuery,
    #[source]
    pub source: BoxError,
}

impl CatalogError {
    pub fn new(query: CatalogQuery, source: impl Into<BoxError>) -> Self {
        Self {
            query,
            source: source.into(),
        }
    }

    pub fn list_tables(source: impl Into<BoxError>) -> Self {
        Self::new(CatalogQuery::ListTables, source)
    }

    pub fn describe_columns(source: impl Into<BoxError>) -> Self {
        Self::new(CatalogQuery::DescribeColumns, source)
    }

    pub fn read_query(source: impl Into<BoxError>) -> Self {
        Self::new(CatalogQuery::ReadQuery, source)
    }
}

/// Schema introspection errors
///
/// Every variant aborts the whole introspection call.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Closed handle, handle/dialect mismatch, or unrecognized dialect
    #[error("Invalid connection: {0}")]
    InvalidConnection(String),

    /// A catalog query failed
    #[error("Schema extraction failed{}: {source}", table_suffix(.table))]
    SchemaExtraction {
        table: Option<String>,
        #[source]
        source: CatalogError,
    },

    /// The catalog listed a table but reported no columns for it
    #[error("Table '{0}' reported no columns")]
    EmptyTable(String),
}

fn table_suffix(table: &Option<String>) -> String {
    table
        .as_deref()
        .map(|t| format!(" for table '{t}'"))
        .unwrap_or_default()
}

impl From<UnknownDialect> for SchemaError {
    fn from(err: UnknownDialect) -> Self {
        SchemaError::InvalidConnection(err.to_string())
    }
}

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_message_names_table_and_cause() {
        let err = SchemaError::SchemaExtraction {
            table: Some("orders".into()),
            source: CatalogError::describe_columns("relation \"orders\" does not exist"),
        };
        assert_eq!(
            err.to_string(),
            "Schema extraction failed for table 'orders': describe columns failed: relation \"orders\" does not exist"
        );
    }

    #[test]
    fn extraction_without_table() {
        let err = SchemaError::SchemaExtraction {
            table: None,
            source: CatalogError::list_tables("connection reset"),
        };
        assert_eq!(
            err.to_string(),
            "Schema extraction failed: list tables failed: connection reset"
        );
    }

    #[test]
    fn unknown_dialect_is_invalid_connection() {
        let err: SchemaError = UnknownDialect("db2".into()).into();
        assert!(matches!(err, SchemaError::InvalidConnection(msg) if msg.contains("db2")));
    }
}
