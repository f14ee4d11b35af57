//! Tracing hooks for catalog access.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The disabled form still borrows its arguments so values
//! only passed to a trace macro do not read as unused.

/// Emit a debug-level event for one catalog query.
///
/// ```ignore
/// sqlchat_trace_catalog!("sqlite", "describe columns", table);
/// ```
#[macro_export]
macro_rules! sqlchat_trace_catalog {
    ($dialect:expr, $query:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(dialect = %$dialect, query = %$query, "sqlchat.catalog");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$dialect, &$query);
    };
    ($dialect:expr, $query:expr, $table:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(dialect = %$dialect, query = %$query, table = %$table, "sqlchat.catalog");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$dialect, &$query, &$table);
    };
}

/// Emit an info-level event once a schema document has been assembled.
#[macro_export]
macro_rules! sqlchat_trace_schema {
    ($dialect:expr, $tables:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!(dialect = %$dialect, tables = $tables, "sqlchat.schema");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$dialect, &$tables);
    };
}

/// Emit a warn-level event when introspection is aborted.
#[macro_export]
macro_rules! sqlchat_trace_failure {
    ($dialect:expr, $err:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(dialect = %$dialect, error = %$err, "sqlchat.schema.failed");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$dialect, &$err);
    };
}

#[cfg(test)]
mod tests {
    use crate::Dialect;

    #[test]
    #[deny(unused_variables)]
    fn arguments_are_used_with_or_without_tracing() {
        let dialect = Dialect::Sqlite;
        let table = String::from("users");
        crate::sqlchat_trace_catalog!(dialect, "describe columns", table);

        let tables = 3usize;
        crate::sqlchat_trace_schema!(dialect, tables);

        let err = "connection reset";
        crate::sqlchat_trace_failure!(dialect, err);
    }
}
