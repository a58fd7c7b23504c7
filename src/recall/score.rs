//! Relevance scoring.
//!
//! A fact's score for a query is a pure function of keyword overlap,
//! importance, recency of last access, and category. The constants are
//! empirical tuning values carried in [`ScoreParams`] so tests can pin them
//! while callers remain free to adjust.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::recall::types::FactCategory;

/// Tunable scoring constants. The defaults are load-bearing: changing them
/// changes which facts surface.
#[derive(Debug, Clone)]
pub struct ScoreParams {
    /// Base score contributed per overlapping query keyword.
    pub overlap_weight: f64,
    /// Importance multiplies the base score by `base + importance/10`,
    /// i.e. 0.5×–1.5× with the default base.
    pub importance_base: f64,
    /// Recency decay half-life, in days.
    pub half_life_days: f64,
    /// Facts at or above this importance surface even with zero overlap.
    pub high_importance_threshold: i32,
    /// Score assigned to such zero-overlap facts, before the recency factor.
    pub high_importance_score: f64,
    /// Flat bonus for `user` and `identity` facts, applied last.
    pub category_bonus: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            overlap_weight: 10.0,
            importance_base: 0.5,
            half_life_days: 7.0,
            high_importance_threshold: 8,
            high_importance_score: 2.0,
            category_bonus: 1.0,
        }
    }
}

/// Count how many query keywords appear in the fact's keyword string.
///
/// Containment is substring, not exact-token: the query keyword `data`
/// matches a fact keyword `database`. Repeated query keywords count each
/// time they occur.
pub fn keyword_overlap(query_keywords: &str, fact_keywords: &str) -> u32 {
    if query_keywords.is_empty() || fact_keywords.is_empty() {
        return 0;
    }
    query_keywords
        .split_whitespace()
        .filter(|token| fact_keywords.contains(*token))
        .count() as u32
}

/// Recency decay: facts accessed recently score higher.
///
/// Maps days-since-access to `0.1 + 0.9·e^(−days/half_life)`, clamped to
/// [0.1, 1.0]. An unparseable timestamp yields a neutral 0.5.
pub fn recency_score(accessed_at: &str, half_life_days: f64) -> f64 {
    let accessed = match parse_timestamp(accessed_at) {
        Some(t) => t,
        None => return 0.5,
    };

    let days = (Utc::now() - accessed).num_seconds() as f64 / 86_400.0;
    (0.1 + 0.9 * (-days / half_life_days).exp()).clamp(0.1, 1.0)
}

/// Parse an RFC 3339 timestamp, falling back to SQLite's
/// `YYYY-MM-DD HH:MM:SS` form for rows written by raw SQL.
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(text) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Compute the full relevance score for one fact.
///
/// `overlap × weight`, scaled by importance and recency; zero-overlap facts
/// at high importance get a fixed recency-scaled floor instead; `user` and
/// `identity` facts get a flat bonus after everything else.
pub fn relevance(
    overlap: u32,
    importance: i32,
    category: &FactCategory,
    recency: f64,
    params: &ScoreParams,
) -> f64 {
    let importance_weight = f64::from(importance) / 10.0;

    let mut score = f64::from(overlap) * params.overlap_weight;
    score *= params.importance_base + importance_weight;
    score *= recency;

    if overlap == 0 && importance >= params.high_importance_threshold {
        score = params.high_importance_score * recency;
    }

    if matches!(category, FactCategory::User | FactCategory::Identity) {
        score += params.category_bonus;
    }

    score
}
