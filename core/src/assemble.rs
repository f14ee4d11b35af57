//! Schema document assembly

use crate::adapter::DialectAdapter;
use crate::column::ColumnDescriptor;
use crate::dialect::Dialect;
use crate::error::{Result, SchemaError};
use crate::render::render_create_table;
use crate::{sqlchat_trace_catalog, sqlchat_trace_failure, sqlchat_trace_schema};

const SEPARATOR: &str = "\n\n";

/// Reconstructed `CREATE TABLE` statements for a whole database
///
/// Empty when the database has no tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    text: String,
    tables: usize,
}

impl SchemaDocument {
    fn from_statements(statements: Vec<String>) -> Self {
        Self {
            tables: statements.len(),
            text: statements.join(SEPARATOR),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of statements in the document
    pub fn table_count(&self) -> usize {
        self.tables
    }
}

impl AsRef<str> for SchemaDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl core::fmt::Display for SchemaDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<SchemaDocument> for String {
    fn from(doc: SchemaDocument) -> Self {
        doc.text
    }
}

/// Introspect every table reachable through `adapter`
///
/// The adapter must speak `dialect` and be connected; both are checked before
/// any catalog query is issued. Tables are visited sequentially in catalog
/// order. The first failure aborts the call and no partial document is
/// returned.
pub fn assemble_schema<A>(adapter: &mut A, dialect: Dialect) -> Result<SchemaDocument>
where
    A: DialectAdapter + ?Sized,
{
    if adapter.dialect() != dialect {
        return Err(SchemaError::InvalidConnection(format!(
            "handle is bound to {}, not {}",
            adapter.dialect(),
            dialect
        )));
    }
    if !adapter.is_connected() {
        return Err(SchemaError::InvalidConnection(format!(
            "{dialect} connection is closed"
        )));
    }

    assemble(adapter, dialect).inspect_err(|_err| {
        sqlchat_trace_failure!(dialect, _err);
    })
}

/// [`assemble_schema`] with a textual dialect tag
///
/// An unrecognized tag fails with [`SchemaError::InvalidConnection`] before
/// touching the connection.
pub fn assemble_schema_for<A>(adapter: &mut A, dialect: &str) -> Result<SchemaDocument>
where
    A: DialectAdapter + ?Sized,
{
    let dialect: Dialect = dialect.parse()?;
    assemble_schema(adapter, dialect)
}

fn assemble<A>(adapter: &mut A, dialect: Dialect) -> Result<SchemaDocument>
where
    A: DialectAdapter + ?Sized,
{
    sqlchat_trace_catalog!(dialect, "list tables");
    let tables = adapter
        .list_tables()
        .map_err(|source| SchemaError::SchemaExtraction {
            table: None,
            source,
        })?;

    let mut statements = Vec::with_capacity(tables.len());
    for table in &tables {
        sqlchat_trace_catalog!(dialect, "describe columns", table);
        let columns: Vec<ColumnDescriptor> = adapter
            .describe_columns(table)
            .map_err(|source| SchemaError::SchemaExtraction {
                table: Some(table.clone()),
                source,
            })?
            .into_iter()
            .map(ColumnDescriptor::from)
            .collect();

        statements.push(render_create_table(table, &columns)?);
    }

    sqlchat_trace_schema!(dialect, statements.len());
    Ok(SchemaDocument::from_statements(statements))
}
