use anyhow::Result;

use crate::config::EngramConfig;

/// Print a JSON snapshot of both stores to stdout.
pub fn stats(config: &EngramConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let stats = crate::stats::memory_stats(&conn, Some(db_path.as_path()))?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
