//! Entity storage: upsert, lookup, listing, search, and cascade delete.
//!
//! Names are the natural key, unique under case-insensitive comparison. The
//! upsert is a single `INSERT … ON CONFLICT` statement, so a concurrent
//! writer can never split one logical entity into two rows.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::graph::types::{Entity, EntityType};

fn entity_from_row(row: &Row<'_>) -> rusqlite::Result<Entity> {
    let entity_type: String = row.get(1)?;
    Ok(Entity {
        id: row.get(0)?,
        entity_type: EntityType::parse(&entity_type),
        name: row.get(2)?,
        summary: row.get(3)?,
        mention_count: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

const ENTITY_COLUMNS: &str = "id, type, name, summary, mention_count, created_at, updated_at";

/// Add or update an entity, returning its id.
///
/// A new name inserts with `mention_count = 1`. An existing name (matched
/// case-insensitively) gets its summary replaced, its mention count bumped,
/// and its `updated_at` refreshed — the stored casing and the first-seen
/// type stick.
pub fn upsert_entity(
    conn: &Connection,
    entity_type: EntityType,
    name: &str,
    summary: &str,
) -> Result<i64> {
    if name.is_empty() {
        return Err(crate::error::MemoryError::InvalidInput(
            "entity name must not be empty",
        ));
    }

    let now = chrono::Utc::now().to_rfc3339();
    let id: i64 = conn.query_row(
        "INSERT INTO entities (type, name, summary, mention_count, created_at, updated_at) \
         VALUES (?1, ?2, ?3, 1, ?4, ?4) \
         ON CONFLICT(name) DO UPDATE SET \
             summary = excluded.summary, \
             mention_count = mention_count + 1, \
             updated_at = excluded.updated_at \
         RETURNING id",
        params![entity_type.as_str(), name, summary, now],
        |row| row.get(0),
    )?;

    tracing::debug!(id, name, %entity_type, "upserted entity");
    Ok(id)
}

/// Find an entity by name, case-insensitively. `None` when absent.
pub fn find_entity(conn: &Connection, name: &str) -> Result<Option<Entity>> {
    let entity = conn
        .query_row(
            &format!(
                "SELECT {ENTITY_COLUMNS} FROM entities WHERE name = ?1 COLLATE NOCASE LIMIT 1"
            ),
            params![name],
            entity_from_row,
        )
        .optional()?;
    Ok(entity)
}

/// Find an entity by id. `None` when absent.
pub fn get_entity(conn: &Connection, id: i64) -> Result<Option<Entity>> {
    let entity = conn
        .query_row(
            &format!("SELECT {ENTITY_COLUMNS} FROM entities WHERE id = ?1"),
            params![id],
            entity_from_row,
        )
        .optional()?;
    Ok(entity)
}

/// List entities of one type, most-mentioned first, then most recently
/// updated.
pub fn list_entities(conn: &Connection, entity_type: EntityType, max: usize) -> Result<Vec<Entity>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTITY_COLUMNS} FROM entities WHERE type = ?1 \
         ORDER BY mention_count DESC, updated_at DESC LIMIT ?2"
    ))?;
    let entities = stmt
        .query_map(params![entity_type.as_str(), max as i64], entity_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(entities)
}

/// Search entities by case-insensitive name substring, most-mentioned first.
pub fn search_entities(conn: &Connection, query: &str, max: usize) -> Result<Vec<Entity>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTITY_COLUMNS} FROM entities WHERE name LIKE '%' || ?1 || '%' \
         ORDER BY mention_count DESC LIMIT ?2"
    ))?;
    let entities = stmt
        .query_map(params![query, max as i64], entity_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(entities)
}

/// Delete an entity and every relation where it is source or target, in one
/// transaction.
pub fn delete_entity(conn: &mut Connection, entity_id: i64) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute(
        "DELETE FROM relations WHERE from_id = ?1 OR to_id = ?1",
        params![entity_id],
    )?;
    tx.execute("DELETE FROM entities WHERE id = ?1", params![entity_id])?;
    tx.commit()?;

    tracing::info!(entity_id, "deleted entity and its relations");
    Ok(())
}

/// Total entity count.
pub fn entity_count(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM entities", [], |row| row.get(0))?;
    Ok(count as u64)
}
