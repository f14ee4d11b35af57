//! Multi-dialect schema introspection for sqlchat
//!
//! Given a live connection to SQLite, PostgreSQL or MySQL, this crate
//! reconstructs approximate `CREATE TABLE` statements for every user table and
//! joins them into a single [`SchemaDocument`] suitable as language-model
//! grounding context.
//!
//! The pipeline is:
//!
//! 1. a [`DialectAdapter`] lists tables and returns raw catalog rows,
//! 2. each [`RawColumnRow`] is normalized into a [`ColumnDescriptor`],
//! 3. [`render_create_table`] produces one statement per table,
//! 4. [`assemble_schema`] joins the statements with blank lines.
//!
//! Adapters live in the per-dialect crates (`sqlchat-sqlite`,
//! `sqlchat-postgres`, `sqlchat-mysql`).
//!
//! Composite keys, foreign keys, indexes and check constraints are not
//! reconstructed.

pub mod adapter;
pub mod assemble;
pub mod column;
pub mod dialect;
pub mod error;
pub mod query;
pub mod raw;
pub mod render;
pub mod tracing;

pub use adapter::DialectAdapter;
pub use assemble::{SchemaDocument, assemble_schema, assemble_schema_for};
pub use column::{ColumnDescriptor, DefaultValue, quote_literal};
pub use dialect::{Dialect, UnknownDialect};
pub use error::{BoxError, CatalogError, CatalogQuery, Result, SchemaError};
pub use query::{CellValue, QueryOutput, ReadQuery};
pub use raw::{MysqlColumnRow, PostgresColumnRow, RawColumnRow, SqliteColumnRow};
pub use render::{render_column, render_create_table};
