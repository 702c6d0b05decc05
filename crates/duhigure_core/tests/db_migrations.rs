use duhigure_core::db::migrations::latest_version;
use duhigure_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "families");
    assert_table_exists(&conn, "members");
    assert_table_exists(&conn, "performance_duties");
}

#[test]
fn connections_enforce_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let err = conn
        .execute(
            "INSERT INTO members (family_id, name, email, phone, relationship)
             VALUES (404, 'a', 'b', 'c', 'd');",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));
}

#[test]
fn family_sector_and_duty_status_have_column_defaults() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO families (family_name) VALUES ('Mugisha');", [])
        .unwrap();
    let family_id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO performance_duties (family_id, duty) VALUES (?1, 'Sweep');",
        [family_id],
    )
    .unwrap();

    let sector: String = conn
        .query_row("SELECT sector FROM families WHERE id = ?1;", [family_id], |row| {
            row.get(0)
        })
        .unwrap();
    let status: String = conn
        .query_row("SELECT status FROM performance_duties;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sector, "Kibungo");
    assert_eq!(status, "Pending");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family_members.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO families (family_name) VALUES ('Kayitesi');", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM families;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
