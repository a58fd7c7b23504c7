//! Read path — scored relevance queries and budgeted context assembly.
//!
//! Every query is also an access: facts that come back with a positive score
//! get their `accessed_at`/`access_count` refreshed, which feeds the recency
//! term of the next query.

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::recall::score::{keyword_overlap, recency_score, relevance, ScoreParams};
use crate::recall::tokenizer::extract_keywords;
use crate::recall::types::{Fact, FactCategory};

/// Ceiling on the per-query candidate scan, bounding worst-case cost.
const CANDIDATE_LIMIT: usize = 500;

/// How many facts a context block draws from.
const CONTEXT_RESULTS: usize = 20;

/// Fixed characters-per-token estimate for the context budget.
const CHARS_PER_TOKEN: usize = 4;

/// Find the top facts relevant to a query.
///
/// Loads up to [`CANDIDATE_LIMIT`] most-recently-accessed facts, scores each
/// against the query keywords, and returns the top `max_results` by score.
/// Ties keep the most-recently-accessed-first load order (the sort is
/// stable), so results are deterministic. An empty query still surfaces
/// high-importance and `user`/`identity` facts through their overlap-free
/// score paths.
pub fn query_facts(
    conn: &Connection,
    query: &str,
    max_results: usize,
    score_params: &ScoreParams,
) -> Result<Vec<Fact>> {
    if max_results == 0 {
        return Ok(Vec::new());
    }

    let query_keywords = extract_keywords(query);

    let mut stmt = conn.prepare(
        "SELECT id, category, content, keywords, importance, created_at, accessed_at, access_count \
         FROM facts ORDER BY accessed_at DESC LIMIT ?1",
    )?;
    let mut candidates: Vec<Fact> = stmt
        .query_map(params![CANDIDATE_LIMIT as i64], |row| {
            let category: String = row.get(1)?;
            Ok(Fact {
                id: row.get(0)?,
                category: FactCategory::parse(&category),
                content: row.get(2)?,
                keywords: row.get(3)?,
                importance: row.get(4)?,
                created_at: row.get(5)?,
                accessed_at: row.get(6)?,
                access_count: row.get(7)?,
                score: 0.0,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    for fact in &mut candidates {
        let overlap = keyword_overlap(&query_keywords, &fact.keywords);
        let recency = recency_score(&fact.accessed_at, score_params.half_life_days);
        fact.score = relevance(overlap, fact.importance, &fact.category, recency, score_params);
    }

    // Stable sort: equal scores keep the recency order the scan produced.
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(max_results);

    mark_accessed(conn, &candidates)?;

    Ok(candidates)
}

/// Refresh `accessed_at`/`access_count` for returned facts. Zero-score facts
/// surfaced by position alone are left untouched, so a non-match never
/// refreshes its own recency.
fn mark_accessed(conn: &Connection, facts: &[Fact]) -> Result<()> {
    let now = chrono::Utc::now().to_rfc3339();
    let mut stmt = conn.prepare(
        "UPDATE facts SET accessed_at = ?1, access_count = access_count + 1 WHERE id = ?2",
    )?;
    for fact in facts {
        if fact.score > 0.0 {
            stmt.execute(params![now, fact.id])?;
        }
    }
    Ok(())
}

/// Build a compressed context block from the top facts for a query.
///
/// The budget is `max_context_tokens × 4` characters. Output starts with a
/// header naming the fact count, then one `- [category] content` bullet per
/// fact; assembly stops before any line that would cross the budget, and at
/// the first non-positive-score fact past the fourth slot. Returns `None`
/// when no facts qualify — callers treat that as "no injection this turn".
pub fn build_context(
    conn: &Connection,
    query: &str,
    max_context_tokens: usize,
    score_params: &ScoreParams,
) -> Result<Option<String>> {
    let facts = query_facts(conn, query, CONTEXT_RESULTS, score_params)?;
    if facts.is_empty() {
        return Ok(None);
    }

    let budget = max_context_tokens * CHARS_PER_TOKEN;
    let header = format!("[Memory — {} relevant facts]\n", facts.len());
    if header.len() > budget {
        return Ok(None);
    }

    let mut ctx = header;
    for (i, fact) in facts.iter().enumerate() {
        if fact.score <= 0.0 && i > 3 {
            break;
        }
        let line = format!("- [{}] {}\n", fact.category, fact.content);
        if ctx.len() + line.len() > budget {
            break;
        }
        ctx.push_str(&line);
    }

    Ok(Some(ctx))
}
