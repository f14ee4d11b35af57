//! `CREATE TABLE` reconstruction

use std::fmt::Write;

use crate::column::ColumnDescriptor;
use crate::error::{Result, SchemaError};

const INDENT: &str = "    ";

/// Render one column definition without indentation
///
/// Attribute order is fixed: type, `NOT NULL`, `DEFAULT`, `AUTO_INCREMENT`,
/// `PRIMARY KEY`.
pub fn render_column(column: &ColumnDescriptor) -> String {
    let mut out = column.name.clone();
    if !column.sql_type.is_empty() {
        out.push(' ');
        out.push_str(&column.sql_type);
    }
    if !column.nullable {
        out.push_str(" NOT NULL");
    }
    if let Some(default) = &column.default {
        // Writing to a String cannot fail.
        let _ = write!(out, " DEFAULT {}", default.to_sql());
    }
    if column.auto_increment {
        out.push_str(" AUTO_INCREMENT");
    }
    if column.primary_key {
        out.push_str(" PRIMARY KEY");
    }
    out
}

/// Render a full statement for `table`
///
/// ```
/// use sqlchat_core::{ColumnDescriptor, render_create_table};
///
/// let sql = render_create_table("users", &[
///     ColumnDescriptor::new("id", "integer").primary_key(),
///     ColumnDescriptor::new("name", "text").not_null().default_value("anon"),
/// ]).unwrap();
///
/// assert_eq!(sql, "CREATE TABLE users (\n    id INTEGER PRIMARY KEY,\n    name TEXT NOT NULL DEFAULT 'anon'\n);");
/// ```
pub fn render_create_table(table: &str, columns: &[ColumnDescriptor]) -> Result<String> {
    if columns.is_empty() {
        return Err(SchemaError::EmptyTable(table.to_string()));
    }

    let body = columns
        .iter()
        .map(|c| format!("{INDENT}{}", render_column(c)))
        .collect::<Vec<_>>()
        .join(",\n");

    Ok(format!("CREATE TABLE {table} (\n{body}\n);"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::DefaultValue;

    #[test]
    fn attribute_order_is_fixed() {
        let col = ColumnDescriptor::new("id", "int")
            .not_null()
            .default_value(1_i64)
            .auto_increment()
            .primary_key();
        assert_eq!(
            render_column(&col),
            "id INT NOT NULL DEFAULT 1 AUTO_INCREMENT PRIMARY KEY"
        );
    }

    #[test]
    fn not_null_follows_type_token() {
        let col = ColumnDescriptor::new("email", "varchar(255)").not_null();
        assert!(render_column(&col).starts_with("email VARCHAR(255) NOT NULL"));

        let col = ColumnDescriptor::new("email", "varchar(255)");
        assert!(!render_column(&col).contains(" NOT NULL"));
    }

    #[test]
    fn quoted_default_doubles_quotes() {
        let col = ColumnDescriptor::new("surname", "text").default_value("O'Brien");
        assert_eq!(render_column(&col), "surname TEXT DEFAULT 'O''Brien'");
    }

    #[test]
    fn expression_default_is_bare() {
        let mut col = ColumnDescriptor::new("created_at", "timestamp");
        col.default = Some(DefaultValue::Expression("CURRENT_TIMESTAMP".into()));
        assert_eq!(render_column(&col), "created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP");
    }

    #[test]
    fn untyped_column_has_no_trailing_space() {
        let col = ColumnDescriptor::new("anything", "");
        assert_eq!(render_column(&col), "anything");
    }

    #[test]
    fn one_line_per_column_without_trailing_comma() {
        let cols: Vec<_> = (0..5)
            .map(|i| ColumnDescriptor::new(format!("c{i}"), "text"))
            .collect();
        let sql = render_create_table("wide", &cols).unwrap();
        let lines: Vec<&str> = sql.lines().collect();

        assert_eq!(lines.len(), 5 + 2);
        assert_eq!(lines[0], "CREATE TABLE wide (");
        for (i, line) in lines[1..6].iter().enumerate() {
            assert!(line.starts_with(&format!("    c{i} TEXT")));
        }
        assert_eq!(lines[5], "    c4 TEXT");
        assert_eq!(lines[6], ");");
    }

    #[test]
    fn rendering_is_deterministic() {
        let cols = vec![
            ColumnDescriptor::new("a", "int").not_null(),
            ColumnDescriptor::new("b", "text").default_value("x'y"),
        ];
        assert_eq!(
            render_create_table("t", &cols).unwrap(),
            render_create_table("t", &cols.clone()).unwrap()
        );
    }

    #[test]
    fn empty_column_list_is_rejected() {
        let err = render_create_table("ghost", &[]).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyTable(t) if t == "ghost"));
    }
}
