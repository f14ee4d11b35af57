//! MySQL and MariaDB dialect adapter for sqlchat
//!
//! The adapter keeps a blocking surface like the other dialects. Under the
//! hood [`BlockingMysql`] pairs an async `sqlx` connection with a
//! current-thread `tokio` runtime and blocks on each catalog query.
//!
//! ```no_run
//! use sqlchat_core::{Dialect, assemble_schema};
//! use sqlchat_mysql::{BlockingMysql, MysqlAdapter};
//!
//! let mut db = BlockingMysql::connect("mysql://root@localhost/shop")?;
//! let schema = assemble_schema(&mut MysqlAdapter::new(&mut db), Dialect::Mysql)?;
//! println!("{schema}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod adapter;
mod connection;
pub mod queries;

pub use adapter::MysqlAdapter;
pub use connection::BlockingMysql;
