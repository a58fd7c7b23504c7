//! Relation storage: typed directed edges between entities.
//!
//! Edges carry no uniqueness constraint — relating the same pair twice
//! records two parallel edges. This is relation history, not a set.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{MemoryError, Result};
use crate::graph::types::{Relation, RelationType};

/// Cap on edges returned per traversal, bounding context-assembly cost.
pub const MAX_TRAVERSAL_RELATIONS: usize = 32;

fn relation_from_row(row: &Row<'_>) -> rusqlite::Result<Relation> {
    let relation_type: String = row.get(3)?;
    Ok(Relation {
        id: row.get(0)?,
        from_id: row.get(1)?,
        to_id: row.get(2)?,
        relation_type: RelationType::parse(&relation_type),
        label: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Relate two entities with a directed, typed, labeled edge. Both endpoints
/// must exist. Returns the new edge's id.
pub fn relate(
    conn: &Connection,
    from_id: i64,
    to_id: i64,
    relation_type: RelationType,
    label: &str,
) -> Result<i64> {
    ensure_entity_exists(conn, from_id)?;
    ensure_entity_exists(conn, to_id)?;

    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO relations (from_id, to_id, type, label, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![from_id, to_id, relation_type.as_str(), label, now],
    )?;
    let id = conn.last_insert_rowid();

    tracing::debug!(from_id, to_id, %relation_type, id, "related entities");
    Ok(id)
}

fn ensure_entity_exists(conn: &Connection, entity_id: i64) -> Result<()> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM entities WHERE id = ?1",
            params![entity_id],
            |row| row.get(0),
        )
        .optional()?;
    match found {
        Some(_) => Ok(()),
        None => Err(MemoryError::EntityNotFound(entity_id)),
    }
}

/// Outgoing edges of an entity, newest first.
pub fn relations_from(conn: &Connection, entity_id: i64) -> Result<Vec<Relation>> {
    let mut stmt = conn.prepare(
        "SELECT id, from_id, to_id, type, label, created_at FROM relations \
         WHERE from_id = ?1 ORDER BY created_at DESC LIMIT ?2",
    )?;
    let relations = stmt
        .query_map(
            params![entity_id, MAX_TRAVERSAL_RELATIONS as i64],
            relation_from_row,
        )?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(relations)
}

/// Incoming edges of an entity (backlinks), newest first.
pub fn relations_to(conn: &Connection, entity_id: i64) -> Result<Vec<Relation>> {
    let mut stmt = conn.prepare(
        "SELECT id, from_id, to_id, type, label, created_at FROM relations \
         WHERE to_id = ?1 ORDER BY created_at DESC LIMIT ?2",
    )?;
    let relations = stmt
        .query_map(
            params![entity_id, MAX_TRAVERSAL_RELATIONS as i64],
            relation_from_row,
        )?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(relations)
}

/// Remove one edge by id. Returns the number of rows removed (0 or 1).
pub fn unrelate(conn: &Connection, relation_id: i64) -> Result<usize> {
    let removed = conn.execute("DELETE FROM relations WHERE id = ?1", params![relation_id])?;
    Ok(removed)
}
