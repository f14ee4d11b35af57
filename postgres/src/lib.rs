//! PostgreSQL dialect adapter for sqlchat
//!
//! Introspects the `public` schema through `information_schema` using the
//! synchronous [`postgres`] client. Only base tables are listed; views,
//! foreign tables and other schemas are ignored.

mod adapter;
pub mod queries;

pub use adapter::PostgresAdapter;
