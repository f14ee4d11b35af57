//! Catalog queries issued against MySQL / MariaDB
//!
//! `information_schema` text columns come back with binary collations on some
//! server versions, so every text column is cast to `CHAR` before decoding.

pub const TABLES_QUERY: &str = r#"
    SELECT CAST(table_name AS CHAR) AS table_name
    FROM information_schema.tables
    WHERE table_schema = DATABASE()
"#;

pub const COLUMNS_QUERY: &str = r#"
    SELECT
        CAST(column_name AS CHAR) AS column_name,
        CAST(column_type AS CHAR) AS column_type,
        CAST(is_nullable AS CHAR) AS is_nullable,
        CAST(column_key AS CHAR) AS column_key,
        CAST(column_default AS CHAR) AS column_default,
        CAST(extra AS CHAR) AS extra
    FROM information_schema.columns
    WHERE table_schema = DATABASE()
      AND table_name = ?
    ORDER BY ordinal_position
"#;

/// Whether `?` is still a table in the current database
pub const TABLE_EXISTS_QUERY: &str = r#"
    SELECT 1
    FROM information_schema.tables
    WHERE table_schema = DATABASE()
      AND table_name = ?
"#;

pub(crate) const BEGIN_READ_ONLY: &str = "START TRANSACTION READ ONLY";
pub(crate) const ROLLBACK: &str = "ROLLBACK";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_target_current_database() {
        assert!(TABLES_QUERY.contains("table_schema = DATABASE()"));
        assert!(COLUMNS_QUERY.contains("table_schema = DATABASE()"));
        assert!(TABLE_EXISTS_QUERY.contains("table_schema = DATABASE()"));
    }

    #[test]
    fn column_query_shape() {
        let selected: Vec<&str> = COLUMNS_QUERY
            .lines()
            .filter_map(|line| line.trim().strip_prefix("CAST("))
            .filter_map(|rest| rest.split_whitespace().next())
            .collect();
        assert_eq!(
            selected,
            ["column_name", "column_type", "is_nullable", "column_key", "column_default", "extra"]
        );
        assert!(COLUMNS_QUERY.contains("table_name = ?"));
        assert!(COLUMNS_QUERY.trim_end().ends_with("ORDER BY ordinal_position"));
    }
}
