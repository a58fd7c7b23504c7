//! Write path — keyword derivation, deduplication, and insertion.
//!
//! [`store_fact`] is the single entry point. The duplicate check and the
//! resulting write run inside one transaction, so re-storing a fact that
//! arrives concurrently cannot produce two rows.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{MemoryError, Result};
use crate::recall::tokenizer::extract_keywords;
use crate::recall::types::{FactCategory, StoreFactResult};

/// Store a fact, deduplicating on exact content.
///
/// Keywords are derived from `content` when not supplied. If a row with
/// identical content already exists, its `accessed_at` is refreshed and its
/// `access_count` incremented instead of inserting — re-storing the same fact
/// never duplicates it, only marks it current. `importance` is clamped to
/// [1, 10].
pub fn store_fact(
    conn: &mut Connection,
    category: FactCategory,
    content: &str,
    keywords: Option<&str>,
    importance: i32,
) -> Result<StoreFactResult> {
    if content.is_empty() {
        return Err(MemoryError::InvalidInput("fact content must not be empty"));
    }
    let importance = importance.clamp(1, 10);

    let derived;
    let keywords = match keywords {
        Some(kw) if !kw.is_empty() => kw,
        _ => {
            derived = extract_keywords(content);
            derived.as_str()
        }
    };

    let now = chrono::Utc::now().to_rfc3339();
    let tx = conn.transaction()?;

    let existing_id: Option<i64> = tx
        .query_row(
            "SELECT id FROM facts WHERE content = ?1 LIMIT 1",
            params![content],
            |row| row.get(0),
        )
        .optional()?;

    if let Some(id) = existing_id {
        tx.execute(
            "UPDATE facts SET accessed_at = ?1, access_count = access_count + 1 WHERE id = ?2",
            params![now, id],
        )?;
        tx.commit()?;
        tracing::debug!(id, "fact already stored, refreshed");
        return Ok(StoreFactResult {
            id,
            deduplicated: true,
        });
    }

    tx.execute(
        "INSERT INTO facts (category, content, keywords, importance, created_at, accessed_at, access_count) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?5, 0)",
        params![category.as_str(), content, keywords, importance, now],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    tracing::info!(id, category = %category, importance, "stored fact");
    Ok(StoreFactResult {
        id,
        deduplicated: false,
    })
}
