//! Core recall type definitions.
//!
//! Defines [`FactCategory`] (an open tag set) and [`Fact`] (a full record
//! with its transient relevance score).

use serde::{Deserialize, Serialize};

/// Tag describing what kind of fact a row holds.
///
/// The set is open: the six well-known tags get variants, anything else is
/// carried through as [`FactCategory::Other`]. The `user` and `identity` tags
/// receive a flat relevance bonus during scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactCategory {
    /// Who the user is — name, role, circumstances.
    User,
    /// Stated likes, dislikes, and settings.
    Preference,
    /// General remembered knowledge. The default.
    Fact,
    /// Standing instructions the agent must follow.
    Rule,
    /// Situational background for ongoing work.
    Context,
    /// Facts about the agent itself.
    Identity,
    /// Any custom tag.
    Other(String),
}

impl FactCategory {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Preference => "preference",
            Self::Fact => "fact",
            Self::Rule => "rule",
            Self::Context => "context",
            Self::Identity => "identity",
            Self::Other(s) => s,
        }
    }

    /// Parse a stored tag. Unrecognized tags become [`FactCategory::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "user" => Self::User,
            "preference" => Self::Preference,
            "fact" => Self::Fact,
            "rule" => Self::Rule,
            "context" => Self::Context,
            "identity" => Self::Identity,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Default for FactCategory {
    fn default() -> Self {
        Self::Fact
    }
}

impl std::fmt::Display for FactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FactCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FactCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// A fact record, matching the `facts` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    /// Store-assigned id, stable for the row's lifetime.
    pub id: i64,
    pub category: FactCategory,
    /// The fact text. Also the identity key for deduplication (exact match).
    pub content: String,
    /// Space-separated normalized tokens derived from `content` unless the
    /// caller supplied them.
    pub keywords: String,
    /// 1–10; higher values are retained longer and surface even without
    /// keyword overlap.
    pub importance: i32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the last access; refreshed whenever the fact is
    /// returned by a query or re-stored.
    pub accessed_at: String,
    pub access_count: i64,
    /// Relevance computed for the current query. Transient, never persisted.
    #[serde(default)]
    pub score: f64,
}

/// Result returned from a store operation.
#[derive(Debug, Serialize)]
pub struct StoreFactResult {
    /// Id of the stored (or refreshed) fact.
    pub id: i64,
    /// `true` if an existing row with identical content was refreshed instead
    /// of creating a new record.
    pub deduplicated: bool,
}
