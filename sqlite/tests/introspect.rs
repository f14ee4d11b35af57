use rusqlite::Connection;
use sqlchat_core::{
    CatalogError, CatalogQuery, CellValue, DefaultValue, Dialect, DialectAdapter, RawColumnRow,
    ReadQuery, SchemaError, assemble_schema,
};
use sqlchat_sqlite::SqliteAdapter;

fn db(sql: &str) -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(sql).expect("seed db");
    conn
}

fn schema(conn: &Connection) -> Result<String, SchemaError> {
    assemble_schema(&mut SqliteAdapter::new(conn), Dialect::Sqlite).map(String::from)
}

#[test]
fn users_table_matches_reference_output() {
    let conn = db("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL DEFAULT 'anon');");

    assert_eq!(
        schema(&conn).unwrap(),
        "CREATE TABLE users (\n    id INTEGER PRIMARY KEY,\n    name TEXT NOT NULL DEFAULT 'anon'\n);"
    );
}

#[test]
fn empty_database_is_empty_schema() {
    let conn = db("");
    assert_eq!(schema(&conn).unwrap(), "");
}

#[test]
fn tables_keep_creation_order_and_skip_internal_tables() {
    let conn = db(r#"
        CREATE TABLE zoo (id INTEGER PRIMARY KEY AUTOINCREMENT);
        CREATE TABLE aardvark (id INTEGER);
        INSERT INTO zoo DEFAULT VALUES;
    "#);

    let mut adapter = SqliteAdapter::new(&conn);
    assert_eq!(adapter.list_tables().unwrap(), ["zoo", "aardvark"]);

    let doc = schema(&conn).unwrap();
    assert!(!doc.contains("sqlite_sequence"));
    assert_eq!(
        doc,
        "CREATE TABLE zoo (\n    id INTEGER PRIMARY KEY\n);\n\nCREATE TABLE aardvark (\n    id INTEGER\n);"
    );
}

#[test]
fn defaults_of_every_kind() {
    let conn = db(r#"
        CREATE TABLE people (
            surname text DEFAULT 'O''Brien',
            visits integer NOT NULL DEFAULT 0,
            ratio real DEFAULT 0.5,
            seen_at timestamp DEFAULT CURRENT_TIMESTAMP,
            note text DEFAULT NULL
        );
    "#);

    assert_eq!(
        schema(&conn).unwrap(),
        "CREATE TABLE people (\n\
         \x20   surname TEXT DEFAULT 'O''Brien',\n\
         \x20   visits INTEGER NOT NULL DEFAULT 0,\n\
         \x20   ratio REAL DEFAULT 0.5,\n\
         \x20   seen_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,\n\
         \x20   note TEXT\n\
         );"
    );
}

#[test]
fn raw_rows_preserve_ordinal_order() {
    let conn = db("CREATE TABLE wide (e TEXT, d TEXT, c TEXT, b TEXT, a TEXT);");

    let rows = SqliteAdapter::new(&conn).describe_columns("wide").unwrap();
    let names: Vec<String> = rows
        .into_iter()
        .map(|row| match row {
            RawColumnRow::Sqlite(r) => r.name,
            other => panic!("unexpected row {other:?}"),
        })
        .collect();
    assert_eq!(names, ["e", "d", "c", "b", "a"]);
}

#[test]
fn composite_key_members_are_all_flagged() {
    let conn = db("CREATE TABLE pairs (a INTEGER, b INTEGER, PRIMARY KEY (a, b));");

    let cols: Vec<_> = SqliteAdapter::new(&conn)
        .describe_columns("pairs")
        .unwrap()
        .into_iter()
        .map(RawColumnRow::normalize)
        .collect();
    assert!(cols.iter().all(|c| c.primary_key));
}

#[test]
fn table_names_needing_quotes_are_described() {
    let conn = db(r#"CREATE TABLE "order items" ("qty" INTEGER DEFAULT 1);"#);

    let cols = SqliteAdapter::new(&conn).describe_columns("order items").unwrap();
    assert_eq!(cols.len(), 1);
    assert_eq!(
        cols[0].clone().normalize().default,
        Some(DefaultValue::Integer(1))
    );
}

#[test]
fn unknown_table_is_a_describe_error() {
    let conn = db("");
    let err = SqliteAdapter::new(&conn).describe_columns("nope").unwrap_err();
    assert_eq!(err.query, CatalogQuery::DescribeColumns);
    assert!(err.to_string().contains("nope no longer exists"));
}

/// Lists tables, then drops one before it is described
struct DropsAfterListing<'c> {
    conn: &'c Connection,
}

impl DialectAdapter for DropsAfterListing<'_> {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn list_tables(&mut self) -> Result<Vec<String>, CatalogError> {
        let tables = SqliteAdapter::new(self.conn).list_tables()?;
        self.conn.execute_batch("DROP TABLE gone;").unwrap();
        Ok(tables)
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<RawColumnRow>, CatalogError> {
        SqliteAdapter::new(self.conn).describe_columns(table)
    }
}

#[test]
fn table_dropped_after_listing_aborts_introspection() {
    let conn = db("CREATE TABLE kept (id INTEGER); CREATE TABLE gone (id INTEGER);");

    let err = assemble_schema(&mut DropsAfterListing { conn: &conn }, Dialect::Sqlite).unwrap_err();
    match err {
        SchemaError::SchemaExtraction { table, source } => {
            assert_eq!(table.as_deref(), Some("gone"));
            assert_eq!(source.query, CatalogQuery::DescribeColumns);
        }
        other => panic!("expected extraction error, got {other:?}"),
    }
}

#[test]
fn read_query_returns_columns_and_cells() {
    let conn = db(r#"
        CREATE TABLE shirts (name TEXT, size INTEGER, price REAL, tag BLOB);
        INSERT INTO shirts VALUES ('plain', 2, 9.5, x'0102'), ('logo', NULL, 12.0, NULL);
    "#);

    let out = SqliteAdapter::new(&conn)
        .run_query("SELECT name, size, price, tag FROM shirts ORDER BY rowid")
        .unwrap();

    assert_eq!(out.columns, ["name", "size", "price", "tag"]);
    assert_eq!(out.row_count(), 2);
    assert_eq!(
        out.rows[0],
        vec![
            CellValue::Text("plain".into()),
            CellValue::Integer(2),
            CellValue::Real(9.5),
            CellValue::Blob(vec![1, 2]),
        ]
    );
    assert_eq!(out.rows[1][1], CellValue::Null);
}

#[test]
fn read_query_with_no_rows_is_not_an_error() {
    let conn = db("CREATE TABLE t (a INTEGER);");
    let out = SqliteAdapter::new(&conn).run_query("SELECT a FROM t").unwrap();
    assert!(out.is_empty());
    assert_eq!(out.columns, ["a"]);
}

#[test]
fn writes_are_refused() {
    let conn = db("CREATE TABLE t (a INTEGER);");
    let err = SqliteAdapter::new(&conn)
        .run_query("INSERT INTO t VALUES (1)")
        .unwrap_err();
    assert!(err.to_string().contains("read query failed"));

    let count: i64 = conn
        .query_row("SELECT count(*) FROM t", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn stacked_statements_are_refused() {
    let conn = db("CREATE TABLE t (a INTEGER); INSERT INTO t VALUES (1), (2);");

    let result = SqliteAdapter::new(&conn).run_query("SELECT 1; COMMIT; DELETE FROM t");
    assert!(result.is_err());

    let count: i64 = conn
        .query_row("SELECT count(*) FROM t", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
}
