//! Dialect-independent column descriptor

/// A column default as reported by the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// String literal, rendered single-quoted with inner quotes doubled
    Text(String),
    /// Integer literal
    Integer(i64),
    /// Floating point literal
    Real(f64),
    /// Expression rendered verbatim (`CURRENT_TIMESTAMP`, `(datetime('now'))`)
    Expression(String),
}

impl DefaultValue {
    /// SQL literal form used in reconstructed statements
    ///
    /// ```
    /// use sqlchat_core::DefaultValue;
    ///
    /// assert_eq!(DefaultValue::Text("O'Brien".into()).to_sql(), "'O''Brien'");
    /// assert_eq!(DefaultValue::Integer(0).to_sql(), "0");
    /// assert_eq!(DefaultValue::Real(2.0).to_sql(), "2.0");
    /// ```
    pub fn to_sql(&self) -> String {
        match self {
            DefaultValue::Text(s) => quote_literal(s),
            DefaultValue::Integer(i) => i.to_string(),
            DefaultValue::Real(r) => format!("{r:?}"),
            DefaultValue::Expression(e) => e.clone(),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        DefaultValue::Text(s.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(s: String) -> Self {
        DefaultValue::Text(s)
    }
}

impl From<i64> for DefaultValue {
    fn from(i: i64) -> Self {
        DefaultValue::Integer(i)
    }
}

impl From<f64> for DefaultValue {
    fn from(r: f64) -> Self {
        DefaultValue::Real(r)
    }
}

/// Wrap a string in single quotes, doubling any embedded single quote
pub fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// Normalized column attributes
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Declared type, upper-cased, otherwise as spelled by the dialect
    pub sql_type: String,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub primary_key: bool,
    pub auto_increment: bool,
}

impl ColumnDescriptor {
    /// A nullable column with no default and no key flags
    pub fn new(name: impl Into<String>, sql_type: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.as_ref().to_uppercase(),
            nullable: true,
            default: None,
            primary_key: false,
            auto_increment: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_literal_doubles_every_quote() {
        assert_eq!(quote_literal("anon"), "'anon'");
        assert_eq!(quote_literal("O'Brien"), "'O''Brien'");
        assert_eq!(quote_literal("''"), "''''''");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn real_keeps_fraction_marker() {
        assert_eq!(DefaultValue::Real(1.5).to_sql(), "1.5");
        assert_eq!(DefaultValue::Real(-3.0).to_sql(), "-3.0");
    }

    #[test]
    fn expression_is_verbatim() {
        assert_eq!(
            DefaultValue::Expression("CURRENT_TIMESTAMP".into()).to_sql(),
            "CURRENT_TIMESTAMP"
        );
    }

    #[test]
    fn builder_upper_cases_type() {
        let col = ColumnDescriptor::new("id", "integer").not_null().primary_key();
        assert_eq!(col.sql_type, "INTEGER");
        assert!(!col.nullable);
        assert!(col.primary_key);
        assert!(!col.auto_increment);
    }
}
