//! Read-query results
//!
//! Executing the SQL produced by the translator is the caller's business; this
//! module only fixes the shape every dialect hands back so front ends can
//! render results uniformly.

use crate::error::CatalogError;

/// One cell of a result row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl core::fmt::Display for CellValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CellValue::Null => f.write_str("NULL"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Real(r) => write!(f, "{r}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// Column names plus rows of a finished read query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryOutput {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Execute a single read query through a caller-owned connection
pub trait ReadQuery {
    fn run_query(&mut self, sql: &str) -> Result<QueryOutput, CatalogError>;
}

impl<Q: ReadQuery + ?Sized> ReadQuery for &mut Q {
    fn run_query(&mut self, sql: &str) -> Result<QueryOutput, CatalogError> {
        (**self).run_query(sql)
    }
}
