//! The per-dialect catalog access seam

use crate::dialect::Dialect;
use crate::error::CatalogError;
use crate::raw::RawColumnRow;

/// Catalog access for one database engine family
///
/// Implementations borrow a caller-owned connection; they never open, close or
/// reconnect it, and issue only read-only catalog queries.
pub trait DialectAdapter {
    /// The dialect the underlying connection speaks
    fn dialect(&self) -> Dialect;

    /// Whether the underlying connection is still usable
    fn is_connected(&mut self) -> bool {
        true
    }

    /// User tables in catalog order
    fn list_tables(&mut self) -> Result<Vec<String>, CatalogError>;

    /// Raw column rows of `table` in ordinal order
    fn describe_columns(&mut self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError>;
}

impl<A: DialectAdapter + ?Sized> DialectAdapter for &mut A {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn is_connected(&mut self) -> bool {
        (**self).is_connected()
    }

    fn list_tables(&mut self) -> Result<Vec<String>, CatalogError> {
        (**self).list_tables()
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
        (**self).describe_columns(table)
    }
}

impl<A: DialectAdapter + ?Sized> DialectAdapter for Box<A> {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn is_connected(&mut self) -> bool {
        (**self).is_connected()
    }

    fn list_tables(&mut self) -> Result<Vec<String>, CatalogError> {
        (**self).list_tables()
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
        (**self).describe_columns(table)
    }
}
