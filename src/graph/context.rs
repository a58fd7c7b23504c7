//! Markdown context assembly with `[[wiki-link]]` backlinks.
//!
//! The context format doubles as the export format: a block built for prompt
//! injection is already Obsidian-compatible markdown. Traversal is exactly
//! one hop in each direction, which bounds cost and sidesteps cycles.

use rusqlite::Connection;

use crate::error::Result;
use crate::graph::entities::{get_entity, search_entities};
use crate::graph::relations::{relations_from, relations_to};

/// How many search matches a query context draws from.
const QUERY_CONTEXT_ENTITIES: usize = 8;

/// Build a markdown block for one entity: heading, summary, outgoing links,
/// and incoming backlinks. `None` when the entity does not exist.
pub fn build_entity_context(conn: &Connection, entity_id: i64) -> Result<Option<String>> {
    let entity = match get_entity(conn, entity_id)? {
        Some(e) => e,
        None => return Ok(None),
    };

    let mut ctx = format!(
        "## [[{}]] ({})\n{}\n\n",
        entity.name, entity.entity_type, entity.summary
    );

    let outgoing = relations_from(conn, entity_id)?;
    if !outgoing.is_empty() {
        ctx.push_str("### Links\n");
        for rel in &outgoing {
            if let Some(target) = get_entity(conn, rel.to_id)? {
                ctx.push_str(&format!("- {} → [[{}]]\n", rel.relation_type, target.name));
            }
        }
        ctx.push('\n');
    }

    let incoming = relations_to(conn, entity_id)?;
    if !incoming.is_empty() {
        ctx.push_str("### Backlinks\n");
        for rel in &incoming {
            if let Some(source) = get_entity(conn, rel.from_id)? {
                ctx.push_str(&format!("- [[{}]] {} this\n", source.name, rel.relation_type));
            }
        }
    }

    Ok(Some(ctx))
}

/// Build a context block for a search query: the neighborhoods of up to
/// eight matching entities under one header, bounded by `max_chars`. Entity
/// sections that would cross the budget are skipped whole. `None` when
/// nothing matches.
pub fn build_query_context(
    conn: &Connection,
    query: &str,
    max_chars: usize,
) -> Result<Option<String>> {
    let matches = search_entities(conn, query, QUERY_CONTEXT_ENTITIES)?;
    if matches.is_empty() {
        return Ok(None);
    }

    let mut ctx = String::from("# Knowledge Graph Context\n\n");
    for entity in &matches {
        if let Some(block) = build_entity_context(conn, entity.id)? {
            if ctx.len() + block.len() + 1 > max_chars {
                break;
            }
            ctx.push_str(&block);
            ctx.push('\n');
        }
    }

    Ok(Some(ctx))
}

/// Export an entity as Obsidian-compatible markdown.
///
/// Identical to [`build_entity_context`] — the in-prompt representation is
/// the on-disk representation.
pub fn export_markdown(conn: &Connection, entity_id: i64) -> Result<Option<String>> {
    build_entity_context(conn, entity_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::graph::entities::upsert_entity;
    use crate::graph::relations::relate;
    use crate::graph::types::{EntityType, RelationType};

    fn test_db() -> Connection {
        db::open_memory_database().unwrap()
    }

    #[test]
    fn entity_context_includes_links_and_backlinks() {
        let conn = test_db();
        let alice = upsert_entity(&conn, EntityType::Person, "Alice", "Lead engineer").unwrap();
        let engram = upsert_entity(&conn, EntityType::Project, "Engram", "Memory engine").unwrap();
        let decision =
            upsert_entity(&conn, EntityType::Decision, "Use SQLite", "Zero-ops local storage")
                .unwrap();

        relate(&conn, alice, engram, RelationType::WorksOn, "").unwrap();
        relate(&conn, decision, alice, RelationType::AssignedTo, "").unwrap();

        let ctx = build_entity_context(&conn, alice).unwrap().unwrap();
        assert!(ctx.starts_with("## [[Alice]] (person)\nLead engineer\n"));
        assert!(ctx.contains("### Links\n- works_on → [[Engram]]\n"));
        assert!(ctx.contains("### Backlinks\n- [[Use SQLite]] assigned_to this\n"));
    }

    #[test]
    fn entity_context_omits_empty_sections() {
        let conn = test_db();
        let lone = upsert_entity(&conn, EntityType::Topic, "Rust", "Systems language").unwrap();

        let ctx = build_entity_context(&conn, lone).unwrap().unwrap();
        assert!(!ctx.contains("### Links"));
        assert!(!ctx.contains("### Backlinks"));
    }

    #[test]
    fn entity_context_is_none_for_missing_entity() {
        let conn = test_db();
        assert!(build_entity_context(&conn, 7).unwrap().is_none());
    }

    #[test]
    fn query_context_gathers_matching_neighborhoods() {
        let conn = test_db();
        let core = upsert_entity(&conn, EntityType::Project, "Engram Core", "The engine").unwrap();
        let cli = upsert_entity(&conn, EntityType::Project, "Engram CLI", "The tool").unwrap();
        upsert_entity(&conn, EntityType::Topic, "Unrelated", "Noise").unwrap();
        relate(&conn, cli, core, RelationType::DependsOn, "").unwrap();

        let ctx = build_query_context(&conn, "engram", 8192).unwrap().unwrap();
        assert!(ctx.starts_with("# Knowledge Graph Context\n\n"));
        assert!(ctx.contains("[[Engram Core]]"));
        assert!(ctx.contains("[[Engram CLI]]"));
        assert!(!ctx.contains("[[Unrelated]]"));
    }

    #[test]
    fn query_context_is_none_without_matches() {
        let conn = test_db();
        upsert_entity(&conn, EntityType::Topic, "Rust", "").unwrap();
        assert!(build_query_context(&conn, "cobol", 8192).unwrap().is_none());
    }

    #[test]
    fn query_context_respects_char_budget() {
        let conn = test_db();
        for i in 0..8 {
            upsert_entity(
                &conn,
                EntityType::Topic,
                &format!("budget-topic-{i}"),
                &"x".repeat(200),
            )
            .unwrap();
        }

        let ctx = build_query_context(&conn, "budget", 600).unwrap().unwrap();
        assert!(ctx.len() <= 600);
        // The header plus at least one full block fits
        assert!(ctx.contains("budget-topic-"));
    }

    #[test]
    fn export_matches_entity_context() {
        let conn = test_db();
        let id = upsert_entity(&conn, EntityType::Tool, "ripgrep", "Fast search").unwrap();

        let ctx = build_entity_context(&conn, id).unwrap();
        let exported = export_markdown(&conn, id).unwrap();
        assert_eq!(ctx, exported);
    }
}
