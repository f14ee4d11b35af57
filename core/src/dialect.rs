//! Database dialect tag
//!
//! Every connection handle is bound to exactly one dialect for its whole
//! lifetime. The tag selects which catalog vocabulary is spoken when listing
//! tables and describing columns.

use core::str::FromStr;

/// Database engine family
///
/// # Examples
///
/// ```
/// use sqlchat_core::Dialect;
///
/// assert_eq!(Dialect::parse("postgres"), Some(Dialect::Postgres));
/// assert_eq!(Dialect::parse("mariadb"), Some(Dialect::Mysql));
/// assert_eq!(Dialect::parse("oracle"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// File-based SQLite databases (`sqlite_master` + `PRAGMA table_info`)
    Sqlite,

    /// PostgreSQL, introspected through `information_schema` in `public`
    Postgres,

    /// MySQL and MariaDB, introspected through `information_schema` in `DATABASE()`
    Mysql,
}

impl Dialect {
    pub const ALL: &'static [Dialect] = &[Dialect::Sqlite, Dialect::Postgres, Dialect::Mysql];

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Accepted spellings:
    /// - SQLite: `"sqlite"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL family: `"mysql"`, `"mariadb"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("sqlite") {
            Some(Dialect::Sqlite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::Postgres)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::Mysql)
        } else {
            None
        }
    }

    /// Lowercase canonical name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Postgres => "postgresql",
            Dialect::Mysql => "mysql",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or_else(|| UnknownDialect(s.to_string()))
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported dialect '{0}' (expected sqlite, postgresql or mysql)")]
pub struct UnknownDialect(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!(Dialect::parse("sqlite"), Some(Dialect::Sqlite));
        assert_eq!(Dialect::parse("SQLite"), Some(Dialect::Sqlite));

        assert_eq!(Dialect::parse("postgresql"), Some(Dialect::Postgres));
        assert_eq!(Dialect::parse("postgres"), Some(Dialect::Postgres));
        assert_eq!(Dialect::parse("PG"), Some(Dialect::Postgres));

        assert_eq!(Dialect::parse("mysql"), Some(Dialect::Mysql));
        assert_eq!(Dialect::parse("MariaDB"), Some(Dialect::Mysql));

        assert_eq!(Dialect::parse("mssql"), None);
        assert_eq!(Dialect::parse(""), None);
    }

    #[test]
    fn from_str_reports_input() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert_eq!(err, UnknownDialect("oracle".into()));
        assert!(err.to_string().contains("'oracle'"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for dialect in Dialect::ALL {
            assert_eq!(Dialect::parse(&dialect.to_string()), Some(*dialect));
        }
    }
}
