//! SQLite dialect adapter for sqlchat
//!
//! Tables come from `sqlite_master`, columns from `PRAGMA table_info`.
//!
//! ```
//! use rusqlite::Connection;
//! use sqlchat_core::{Dialect, assemble_schema};
//! use sqlchat_sqlite::SqliteAdapter;
//!
//! let conn = Connection::open_in_memory().unwrap();
//! conn.execute_batch("CREATE TABLE tags (label TEXT NOT NULL);").unwrap();
//!
//! let schema = assemble_schema(&mut SqliteAdapter::new(&conn), Dialect::Sqlite).unwrap();
//! assert_eq!(schema.as_str(), "CREATE TABLE tags (\n    label TEXT NOT NULL\n);");
//! ```

mod adapter;
pub mod queries;

pub use adapter::SqliteAdapter;
