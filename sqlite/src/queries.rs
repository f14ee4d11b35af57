//! Catalog queries issued against SQLite

/// User tables, in `sqlite_master` order
///
/// Internal `sqlite_*` tables (`sqlite_sequence`, `sqlite_stat1`, ...) are not
/// part of the user schema.
pub const TABLES_QUERY: &str = r#"
    SELECT name
    FROM sqlite_master
    WHERE type = 'table'
      AND name NOT LIKE 'sqlite\_%' ESCAPE '\'
"#;

/// `PRAGMA table_info` as a table-valued function, so the table name is bound
/// rather than spliced into the SQL
pub const COLUMNS_QUERY: &str = r#"
    SELECT cid, name, type, "notnull", dflt_value, pk
    FROM pragma_table_info(?1)
    ORDER BY cid
"#;

/// Whether `?1` is still a table
pub const TABLE_EXISTS_QUERY: &str = r#"
    SELECT 1
    FROM sqlite_master
    WHERE type = 'table'
      AND name = ?1
"#;
