//! Cross-store statistics.
//!
//! The recall and graph stores share a connection but not code paths; this is
//! the one place that reads both, for inspection and maintenance tooling.

use rusqlite::Connection;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Snapshot of both stores.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_facts: u64,
    pub facts_by_category: HashMap<String, u64>,
    pub total_entities: u64,
    pub entities_by_type: HashMap<String, u64>,
    pub total_relations: u64,
    pub db_size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_fact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_fact: Option<String>,
}

/// Compute statistics over both stores.
///
/// `db_path` is used for file size calculation; pass `None` for in-memory
/// databases.
pub fn memory_stats(conn: &Connection, db_path: Option<&Path>) -> Result<StatsResponse> {
    let total_facts: i64 = conn.query_row("SELECT COUNT(*) FROM facts", [], |row| row.get(0))?;
    let total_entities: i64 =
        conn.query_row("SELECT COUNT(*) FROM entities", [], |row| row.get(0))?;
    let total_relations: i64 =
        conn.query_row("SELECT COUNT(*) FROM relations", [], |row| row.get(0))?;

    let facts_by_category = group_counts(conn, "SELECT category, COUNT(*) FROM facts GROUP BY category")?;
    let entities_by_type = group_counts(conn, "SELECT type, COUNT(*) FROM entities GROUP BY type")?;

    let (oldest_fact, newest_fact): (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(created_at), MAX(created_at) FROM facts",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let db_size_bytes = db_path
        .and_then(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(StatsResponse {
        total_facts: total_facts as u64,
        facts_by_category,
        total_entities: total_entities as u64,
        entities_by_type,
        total_relations: total_relations as u64,
        db_size_bytes,
        oldest_fact,
        newest_fact,
    })
}

fn group_counts(conn: &Connection, sql: &str) -> Result<HashMap<String, u64>> {
    let mut stmt = conn.prepare(sql)?;
    let rows: Vec<(String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows.into_iter().map(|(k, v)| (k, v as u64)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::graph::{relate, upsert_entity, EntityType, RelationType};
    use crate::recall::store::store_fact;
    use crate::recall::FactCategory;

    fn test_db() -> Connection {
        db::open_memory_database().unwrap()
    }

    #[test]
    fn empty_db_stats() {
        let conn = test_db();
        let stats = memory_stats(&conn, None).unwrap();
        assert_eq!(stats.total_facts, 0);
        assert_eq!(stats.total_entities, 0);
        assert_eq!(stats.total_relations, 0);
        assert!(stats.facts_by_category.is_empty());
        assert!(stats.oldest_fact.is_none());
    }

    #[test]
    fn stats_count_both_stores() {
        let mut conn = test_db();
        store_fact(&mut conn, FactCategory::User, "The user's name is Alice", None, 9).unwrap();
        store_fact(&mut conn, FactCategory::Fact, "Water boils at 100C", None, 3).unwrap();
        store_fact(&mut conn, FactCategory::Fact, "Rust has no GC", None, 5).unwrap();

        let a = upsert_entity(&conn, EntityType::Person, "Alice", "").unwrap();
        let b = upsert_entity(&conn, EntityType::Project, "Engram", "").unwrap();
        relate(&conn, a, b, RelationType::WorksOn, "").unwrap();

        let stats = memory_stats(&conn, None).unwrap();
        assert_eq!(stats.total_facts, 3);
        assert_eq!(stats.facts_by_category["fact"], 2);
        assert_eq!(stats.facts_by_category["user"], 1);
        assert_eq!(stats.total_entities, 2);
        assert_eq!(stats.entities_by_type["person"], 1);
        assert_eq!(stats.total_relations, 1);
        assert!(stats.oldest_fact.is_some());
        assert!(stats.newest_fact.is_some());
    }
}
