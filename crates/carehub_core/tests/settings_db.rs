use carehub_core::db::migrations::latest_version;
use carehub_core::{open_db, open_db_in_memory, DbError, KeyValueStore, SqliteKeyValueStore};
use rusqlite::Connection;

#[test]
fn fresh_database_has_kv_table_at_latest_version() {
    let conn = open_db_in_memory().unwrap();
    assert_eq!(schema_version(&conn), latest_version());

    let columns: Vec<String> = conn
        .prepare("SELECT name FROM pragma_table_info('kv_entries') ORDER BY cid;")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(columns, vec!["key", "value", "updated_at"]);
}

#[test]
fn writes_stamp_updated_at() {
    let conn = open_db_in_memory().unwrap();
    SqliteKeyValueStore::new(&conn)
        .set("carehub.preferences", "{}")
        .unwrap();

    let updated_at: i64 = conn
        .query_row(
            "SELECT updated_at FROM kv_entries WHERE key = ?1;",
            ["carehub.preferences"],
            |row| row.get(0),
        )
        .unwrap();
    assert!(updated_at > 0);
}

#[test]
fn reopening_file_database_keeps_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carehub_settings.sqlite3");

    let conn = open_db(&path).unwrap();
    SqliteKeyValueStore::new(&conn)
        .set("carehub.hospital_settings", "{\"sessionTimeout\":15}")
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert_eq!(
        SqliteKeyValueStore::new(&conn)
            .get("carehub.hospital_settings")
            .unwrap()
            .as_deref(),
        Some("{\"sessionTimeout\":15}")
    );
}

#[test]
fn database_from_newer_build_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 42;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
