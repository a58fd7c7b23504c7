use anyhow::Result;

use crate::config::EngramConfig;
use crate::recall::{build_context, ScoreParams};

/// Print the assembled memory block for a query — the same string the agent
/// loop would inject into its prompt. Fact context first, then the knowledge
/// graph neighborhood when the query names known entities.
pub fn context(config: &EngramConfig, query: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let recall_ctx = build_context(
        &conn,
        query,
        config.recall.max_context_tokens,
        &ScoreParams::default(),
    )?;
    let graph_ctx =
        crate::graph::build_query_context(&conn, query, config.graph.query_context_max_chars)?;

    if recall_ctx.is_none() && graph_ctx.is_none() {
        eprintln!("No relevant memory for this query.");
        return Ok(());
    }
    if let Some(block) = recall_ctx {
        println!("{block}");
    }
    if let Some(block) = graph_ctx {
        println!("{block}");
    }
    Ok(())
}
