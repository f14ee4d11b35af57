//! Raw catalog rows and their normalization
//!
//! Each dialect reports column metadata in its own shape. Adapters build one of
//! the records below straight from the driver row, and [`RawColumnRow::normalize`]
//! turns it into a [`ColumnDescriptor`] so nothing downstream depends on a
//! dialect's column ordering.

use crate::column::{ColumnDescriptor, DefaultValue};
use crate::dialect::Dialect;

/// Row of `PRAGMA table_info(<table>)`
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteColumnRow {
    pub cid: i64,
    pub name: String,
    pub column_type: String,
    pub not_null: bool,
    /// Default as SQL source text, e.g. `'anon'`, `0`, `CURRENT_TIMESTAMP`
    pub default_literal: Option<String>,
    /// 0 when not part of the primary key, otherwise the 1-based key position
    pub pk: i64,
}

/// Row of `information_schema.columns` on PostgreSQL
#[derive(Debug, Clone, PartialEq)]
pub struct PostgresColumnRow {
    pub column_name: String,
    pub data_type: String,
    /// `YES` or `NO`
    pub is_nullable: String,
    pub column_default: Option<String>,
}

/// Row of `information_schema.columns` on MySQL / MariaDB
#[derive(Debug, Clone, PartialEq)]
pub struct MysqlColumnRow {
    pub column_name: String,
    pub column_type: String,
    /// `YES` or `NO`
    pub is_nullable: String,
    /// `PRI`, `UNI`, `MUL` or empty
    pub column_key: String,
    pub column_default: Option<String>,
    /// e.g. `auto_increment`, `on update CURRENT_TIMESTAMP`
    pub extra: String,
}

/// A raw column row tagged with the dialect it came from
#[derive(Debug, Clone, PartialEq)]
pub enum RawColumnRow {
    Sqlite(SqliteColumnRow),
    Postgres(PostgresColumnRow),
    Mysql(MysqlColumnRow),
}

impl RawColumnRow {
    pub fn dialect(&self) -> Dialect {
        match self {
            RawColumnRow::Sqlite(_) => Dialect::Sqlite,
            RawColumnRow::Postgres(_) => Dialect::Postgres,
            RawColumnRow::Mysql(_) => Dialect::Mysql,
        }
    }

    /// Map this row into the uniform descriptor
    pub fn normalize(self) -> ColumnDescriptor {
        match self {
            RawColumnRow::Sqlite(row) => ColumnDescriptor {
                sql_type: row.column_type.to_uppercase(),
                nullable: !row.not_null,
                default: row.default_literal.as_deref().and_then(parse_sqlite_default),
                primary_key: row.pk != 0,
                auto_increment: false,
                name: row.name,
            },
            // Postgres exposes no key or identity flags at this query level.
            RawColumnRow::Postgres(row) => ColumnDescriptor {
                sql_type: row.data_type.to_uppercase(),
                nullable: is_nullable_flag(&row.is_nullable),
                default: row.column_default.map(DefaultValue::Text),
                primary_key: false,
                auto_increment: false,
                name: row.column_name,
            },
            RawColumnRow::Mysql(row) => ColumnDescriptor {
                sql_type: row.column_type.to_uppercase(),
                nullable: is_nullable_flag(&row.is_nullable),
                default: row.column_default.map(DefaultValue::Text),
                primary_key: row.column_key.trim().eq_ignore_ascii_case("PRI"),
                auto_increment: row.extra.to_ascii_lowercase().contains("auto_increment"),
                name: row.column_name,
            },
        }
    }
}

impl From<RawColumnRow> for ColumnDescriptor {
    fn from(row: RawColumnRow) -> Self {
        row.normalize()
    }
}

impl From<SqliteColumnRow> for RawColumnRow {
    fn from(row: SqliteColumnRow) -> Self {
        RawColumnRow::Sqlite(row)
    }
}

impl From<PostgresColumnRow> for RawColumnRow {
    fn from(row: PostgresColumnRow) -> Self {
        RawColumnRow::Postgres(row)
    }
}

impl From<MysqlColumnRow> for RawColumnRow {
    fn from(row: MysqlColumnRow) -> Self {
        RawColumnRow::Mysql(row)
    }
}

fn is_nullable_flag(flag: &str) -> bool {
    !flag.trim().eq_ignore_ascii_case("NO")
}

/// Interpret the SQL source text SQLite keeps for a column default
fn parse_sqlite_default(literal: &str) -> Option<DefaultValue> {
    let lit = literal.trim();
    if lit.is_empty() || lit.eq_ignore_ascii_case("NULL") {
        return None;
    }

    if let Some(text) = unquote(lit, '\'').or_else(|| unquote(lit, '"')) {
        return Some(DefaultValue::Text(text));
    }

    if let Ok(i) = lit.parse::<i64>() {
        return Some(DefaultValue::Integer(i));
    }

    // integers past i64 stay verbatim rather than turning into floats
    let numeric = lit.bytes().any(|b| b.is_ascii_digit())
        && lit
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    let fractional = lit.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'));
    if numeric
        && fractional
        && let Ok(r) = lit.parse::<f64>()
        && r.is_finite()
    {
        return Some(DefaultValue::Real(r));
    }

    Some(DefaultValue::Expression(lit.to_string()))
}

/// Strip one layer of `quote` if `s` is a single quoted literal
///
/// Embedded quotes must be doubled; `'a' || 'b'` is not a single literal.
fn unquote(s: &str, quote: char) -> Option<String> {
    let inner = s.strip_prefix(quote)?.strip_suffix(quote)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == quote && chars.next() != Some(quote) {
            return None;
        }
        out.push(ch);
    }
    Some(out)
}
