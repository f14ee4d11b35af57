//! # sqlchat
//!
//! Reconstructs `CREATE TABLE` statements for every table reachable through a
//! live database connection, producing a schema document that grounds a
//! text-to-SQL language model.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "sqlite")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sqlchat::prelude::*;
//! use sqlchat::sqlite::SqliteAdapter;
//!
//! let conn = rusqlite::Connection::open_in_memory()?;
//! conn.execute_batch(
//!     "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL DEFAULT 'anon');",
//! )?;
//!
//! let schema = assemble_schema(&mut SqliteAdapter::new(&conn), Dialect::Sqlite)?;
//! assert_eq!(
//!     schema.as_str(),
//!     "CREATE TABLE users (\n    id INTEGER PRIMARY KEY,\n    name TEXT NOT NULL DEFAULT 'anon'\n);"
//! );
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sqlite"))]
//! # fn main() {}
//! ```
//!
//! ## Database Support
//!
//! | Database        | Driver     | Feature Flag |
//! |-----------------|------------|--------------|
//! | SQLite          | rusqlite   | `sqlite`     |
//! | PostgreSQL      | postgres   | `postgres`   |
//! | MySQL / MariaDB | sqlx       | `mysql`      |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use sqlchat_core::*;

#[cfg(feature = "sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "sqlite")))]
pub mod sqlite {
    pub use sqlchat_sqlite::{SqliteAdapter, queries};
}

#[cfg(feature = "postgres")]
#[cfg_attr(docsrs, doc(cfg(feature = "postgres")))]
pub mod postgres {
    pub use sqlchat_postgres::{PostgresAdapter, queries};
}

#[cfg(feature = "mysql")]
#[cfg_attr(docsrs, doc(cfg(feature = "mysql")))]
pub mod mysql {
    pub use sqlchat_mysql::{BlockingMysql, MysqlAdapter, queries};
}

/// Everything needed to introspect a connection
pub mod prelude {
    pub use sqlchat_core::{
        ColumnDescriptor, DefaultValue, Dialect, DialectAdapter, QueryOutput, ReadQuery,
        SchemaDocument, SchemaError, assemble_schema, assemble_schema_for,
    };
}
