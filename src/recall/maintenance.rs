//! Automated memory hygiene and store counts.
//!
//! The cleanup pass removes facts that are simultaneously unimportant,
//! rarely accessed, and old — a conjunctive condition, so a single strong
//! signal (one high-importance rating, or frequent access, or youth) keeps a
//! fact alive.

use chrono::{Duration, Utc};
use rusqlite::{params, Connection};

use crate::error::Result;
use crate::recall::types::FactCategory;

/// Bulk-delete low-value facts. A fact is removed only when its importance is
/// below `min_importance` AND its access count is below `min_access_count`
/// AND it was created more than `age_days` ago. Returns the number removed.
pub fn cleanup(
    conn: &Connection,
    min_importance: i32,
    min_access_count: i64,
    age_days: i64,
) -> Result<usize> {
    let cutoff = (Utc::now() - Duration::days(age_days)).to_rfc3339();

    let removed = conn.execute(
        "DELETE FROM facts \
         WHERE importance < ?1 AND access_count < ?2 AND created_at < ?3",
        params![min_importance, min_access_count, cutoff],
    )?;

    if removed > 0 {
        tracing::info!(
            removed,
            min_importance,
            min_access_count,
            age_days,
            "memory hygiene removed low-value facts"
        );
    }
    Ok(removed)
}

/// Total fact count.
pub fn count_facts(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM facts", [], |row| row.get(0))?;
    Ok(count as u64)
}

/// Fact count for one category.
pub fn count_category(conn: &Connection, category: &FactCategory) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM facts WHERE category = ?1",
        params![category.as_str()],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}
