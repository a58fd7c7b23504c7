use anyhow::Result;

use crate::config::EngramConfig;

/// Run the hygiene pass with the configured thresholds.
pub fn cleanup(config: &EngramConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let m = &config.maintenance;
    let removed = crate::recall::maintenance::cleanup(
        &conn,
        m.min_importance,
        m.min_access_count,
        m.age_days,
    )?;

    println!(
        "Removed {removed} facts (importance < {}, access_count < {}, older than {} days).",
        m.min_importance, m.min_access_count, m.age_days
    );
    Ok(())
}
