//! Fact deletion.
//!
//! Deletes are unconditional and do not cascade; facts have no outgoing
//! edges. A delete that matches nothing is a normal outcome, reported as a
//! zero count.

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::recall::types::FactCategory;

/// Forget a fact by id. Returns the number of rows removed (0 or 1).
pub fn forget_fact(conn: &Connection, fact_id: i64) -> Result<usize> {
    let removed = conn.execute("DELETE FROM facts WHERE id = ?1", params![fact_id])?;
    Ok(removed)
}

/// Forget every fact in a category. Returns the number of rows removed.
pub fn forget_category(conn: &Connection, category: &FactCategory) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM facts WHERE category = ?1",
        params![category.as_str()],
    )?;
    if removed > 0 {
        tracing::info!(category = %category, removed, "forgot category");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::recall::store::store_fact;

    fn test_db() -> Connection {
        db::open_memory_database().unwrap()
    }

    #[test]
    fn forget_removes_one_fact() {
        let mut conn = test_db();
        let id = store_fact(&mut conn, FactCategory::Fact, "Forget me", None, 5)
            .unwrap()
            .id;

        assert_eq!(forget_fact(&conn, id).unwrap(), 1);
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM facts", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn forget_missing_id_is_not_an_error() {
        let conn = test_db();
        assert_eq!(forget_fact(&conn, 12345).unwrap(), 0);
    }

    #[test]
    fn forget_category_removes_only_that_category() {
        let mut conn = test_db();
        store_fact(&mut conn, FactCategory::Context, "Sprint ends Friday", None, 4).unwrap();
        store_fact(&mut conn, FactCategory::Context, "Review is on Monday", None, 4).unwrap();
        store_fact(&mut conn, FactCategory::User, "The user's name is Alice", None, 9).unwrap();

        assert_eq!(forget_category(&conn, &FactCategory::Context).unwrap(), 2);

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM facts", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
