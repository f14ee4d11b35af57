//! Catalog queries issued against PostgreSQL
//!
//! `information_schema` columns are domain types (`sql_identifier`,
//! `character_data`), so each one is cast to `text` before decoding.

pub const TABLES_QUERY: &str = r#"
    SELECT table_name::text
    FROM information_schema.tables
    WHERE table_schema = 'public'
      AND table_type = 'BASE TABLE'
"#;

pub const COLUMNS_QUERY: &str = r#"
    SELECT
        column_name::text,
        data_type::text,
        is_nullable::text,
        column_default::text
    FROM information_schema.columns
    WHERE table_schema = 'public'
      AND table_name = $1
    ORDER BY ordinal_position
"#;

/// Whether `$1` is still a table in `public`
pub const TABLE_EXISTS_QUERY: &str = r#"
    SELECT 1
    FROM information_schema.tables
    WHERE table_schema = 'public'
      AND table_name = $1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_stay_in_public_schema() {
        assert!(TABLES_QUERY.contains("table_schema = 'public'"));
        assert!(TABLES_QUERY.contains("'BASE TABLE'"));
        assert!(COLUMNS_QUERY.contains("table_schema = 'public'"));
        assert!(TABLE_EXISTS_QUERY.contains("table_schema = 'public'"));
    }

    #[test]
    fn columns_are_bound_and_ordered() {
        assert!(COLUMNS_QUERY.contains("table_name = $1"));
        assert!(COLUMNS_QUERY.trim_end().ends_with("ORDER BY ordinal_position"));
    }
}
