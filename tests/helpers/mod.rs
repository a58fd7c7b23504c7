#![allow(dead_code)]

use engram::db;
use engram::recall::store::store_fact;
use engram::recall::types::FactCategory;
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    db::open_memory_database().unwrap()
}

/// Insert a fact with auto-derived keywords. Returns the fact id.
pub fn insert_fact(conn: &mut Connection, category: FactCategory, content: &str, importance: i32) -> i64 {
    store_fact(conn, category, content, None, importance)
        .unwrap()
        .id
}

/// Rewrite a fact's accessed_at to `days` days ago, without touching the
/// access count. Lets tests exercise recency decay deterministically.
pub fn backdate_access(conn: &Connection, fact_id: i64, days: i64) {
    let then = (chrono::Utc::now() - chrono::Duration::days(days)).to_rfc3339();
    conn.execute(
        "UPDATE facts SET accessed_at = ?1 WHERE id = ?2",
        rusqlite::params![then, fact_id],
    )
    .unwrap();
}

/// Rewrite a fact's created_at to `days` days ago.
pub fn backdate_creation(conn: &Connection, fact_id: i64, days: i64) {
    let then = (chrono::Utc::now() - chrono::Duration::days(days)).to_rfc3339();
    conn.execute(
        "UPDATE facts SET created_at = ?1 WHERE id = ?2",
        rusqlite::params![then, fact_id],
    )
    .unwrap();
}
