//! Database connections for CLI commands
//!
//! Opens the caller-owned connection for the configured dialect and hands out
//! short-lived adapters over it for introspection and read queries.

use sqlchat_core::{
    Dialect, DialectAdapter, QueryOutput, ReadQuery, SchemaDocument, assemble_schema,
};

use crate::config::Credentials;
use crate::error::CliError;

/// What every dialect adapter can do for the CLI
trait Session: DialectAdapter + ReadQuery {}

impl<T: DialectAdapter + ReadQuery> Session for T {}

/// An open connection plus the dialect it speaks
pub struct Database {
    dialect: Dialect,
    target: String,
    conn: Conn,
}

enum Conn {
    #[cfg(feature = "rusqlite")]
    Sqlite(rusqlite::Connection),
    #[cfg(feature = "postgres-sync")]
    Postgres(postgres::Client),
    #[cfg(feature = "mysql")]
    Mysql(sqlchat_mysql::BlockingMysql),
    #[cfg(not(any(feature = "rusqlite", feature = "postgres-sync", feature = "mysql")))]
    #[allow(dead_code)]
    Unavailable(std::convert::Infallible),
}

impl Database {
    /// Open a connection for `creds`
    pub fn connect(creds: &Credentials) -> Result<Self, CliError> {
        let conn = match creds {
            #[cfg(feature = "rusqlite")]
            Credentials::Sqlite { path } => Conn::Sqlite(open_sqlite(path)?),

            #[cfg(not(feature = "rusqlite"))]
            Credentials::Sqlite { .. } => {
                return Err(CliError::MissingDriver {
                    dialect: "SQLite",
                    feature: "rusqlite",
                });
            }

            #[cfg(feature = "postgres-sync")]
            Credentials::Postgres(pg) => {
                let url = pg.connection_url();
                let client = postgres::Client::connect(&url, postgres::NoTls).map_err(|e| {
                    CliError::ConnectionError(format!("Failed to connect to PostgreSQL: {e}"))
                })?;
                Conn::Postgres(client)
            }

            #[cfg(not(feature = "postgres-sync"))]
            Credentials::Postgres(_) => {
                return Err(CliError::MissingDriver {
                    dialect: "PostgreSQL",
                    feature: "postgres-sync",
                });
            }

            #[cfg(feature = "mysql")]
            Credentials::Mysql(my) => {
                let url = my.connection_url();
                let db = sqlchat_mysql::BlockingMysql::connect(&url).map_err(|e| {
                    CliError::ConnectionError(format!("Failed to connect to MySQL: {e}"))
                })?;
                Conn::Mysql(db)
            }

            #[cfg(not(feature = "mysql"))]
            Credentials::Mysql(_) => {
                return Err(CliError::MissingDriver {
                    dialect: "MySQL",
                    feature: "mysql",
                });
            }
        };

        let target = creds.target();
        tracing::info!(dialect = %creds.dialect(), target = %target, "connected");

        Ok(Self {
            dialect: creds.dialect(),
            target,
            conn,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Connection target with the password masked
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Introspect every user table into one schema document
    pub fn schema(&mut self) -> Result<SchemaDocument, CliError> {
        let dialect = self.dialect;
        let mut session = self.session();
        Ok(assemble_schema(&mut *session, dialect)?)
    }

    /// Run one read-only statement
    pub fn run_query(&mut self, sql: &str) -> Result<QueryOutput, CliError> {
        let mut session = self.session();
        Ok(session.run_query(sql)?)
    }

    /// Close the connection, reporting errors the driver sees on shutdown
    pub fn close(self) -> Result<(), CliError> {
        match self.conn {
            #[cfg(feature = "rusqlite")]
            Conn::Sqlite(conn) => conn
                .close()
                .map_err(|(_, e)| CliError::ConnectionError(e.to_string())),
            #[cfg(feature = "postgres-sync")]
            Conn::Postgres(client) => client
                .close()
                .map_err(|e| CliError::ConnectionError(e.to_string())),
            #[cfg(feature = "mysql")]
            Conn::Mysql(db) => db
                .close()
                .map_err(|e| CliError::ConnectionError(e.to_string())),
            #[cfg(not(any(feature = "rusqlite", feature = "postgres-sync", feature = "mysql")))]
            Conn::Unavailable(never) => match never {},
        }
    }

    fn session(&mut self) -> Box<dyn Session + '_> {
        match &mut self.conn {
            #[cfg(feature = "rusqlite")]
            Conn::Sqlite(conn) => Box::new(sqlchat_sqlite::SqliteAdapter::new(conn)),
            #[cfg(feature = "postgres-sync")]
            Conn::Postgres(client) => Box::new(sqlchat_postgres::PostgresAdapter::new(client)),
            #[cfg(feature = "mysql")]
            Conn::Mysql(db) => Box::new(sqlchat_mysql::MysqlAdapter::new(db)),
            #[cfg(not(any(feature = "rusqlite", feature = "postgres-sync", feature = "mysql")))]
            Conn::Unavailable(never) => match *never {},
        }
    }
}

/// Open an existing SQLite file read-only; a typo in the path should not
/// silently create an empty database
#[cfg(feature = "rusqlite")]
fn open_sqlite(path: &str) -> Result<rusqlite::Connection, CliError> {
    use rusqlite::OpenFlags;

    rusqlite::Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI,
    )
    .map_err(|e| CliError::ConnectionError(format!("Failed to open SQLite database {path}: {e}")))
}
