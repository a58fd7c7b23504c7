use anyhow::Result;

use crate::config::EngramConfig;
use crate::recall::{query_facts, ScoreParams};

/// Run a scored recall query and print the results as JSON.
pub fn search(config: &EngramConfig, query: &str, max_results: Option<usize>) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let max = max_results.unwrap_or(config.recall.default_max_results);
    let facts = query_facts(&conn, query, max, &ScoreParams::default())?;

    println!("{}", serde_json::to_string_pretty(&facts)?);
    eprintln!("{} facts matched.", facts.len());
    Ok(())
}
