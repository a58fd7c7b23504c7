use anyhow::{bail, Result};

use crate::config::EngramConfig;

/// Export one entity as Obsidian-compatible markdown to stdout.
pub fn export(config: &EngramConfig, name: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let entity = match crate::graph::find_entity(&conn, name)? {
        Some(e) => e,
        None => bail!("no entity named '{name}'"),
    };

    if let Some(markdown) = crate::graph::export_markdown(&conn, entity.id)? {
        print!("{markdown}");
    }
    Ok(())
}
