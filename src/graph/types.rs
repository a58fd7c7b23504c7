//! Core graph type definitions.
//!
//! Defines [`EntityType`] and [`RelationType`] (closed enumerations with a
//! custom catch-all), [`Entity`], and [`Relation`].

use serde::{Deserialize, Serialize};

/// What kind of real-world referent an entity names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Person,
    Project,
    Decision,
    Commitment,
    Topic,
    Tool,
    Location,
    Custom,
}

impl EntityType {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Project => "project",
            Self::Decision => "decision",
            Self::Commitment => "commitment",
            Self::Topic => "topic",
            Self::Tool => "tool",
            Self::Location => "location",
            Self::Custom => "custom",
        }
    }

    /// Parse a stored type string. Unrecognized strings become `Custom`.
    pub fn parse(s: &str) -> Self {
        match s {
            "person" => Self::Person,
            "project" => Self::Project,
            "decision" => Self::Decision,
            "commitment" => Self::Commitment,
            "topic" => Self::Topic,
            "tool" => Self::Tool,
            "location" => Self::Location,
            _ => Self::Custom,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a directed edge between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// person → project
    WorksOn,
    /// person → decision
    Decided,
    /// person → project/topic
    Owns,
    /// project → project
    DependsOn,
    /// entity → context
    MentionedIn,
    /// entity → entity
    RelatedTo,
    /// project → project
    BlockedBy,
    /// commitment → person
    AssignedTo,
    Custom,
}

impl RelationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorksOn => "works_on",
            Self::Decided => "decided",
            Self::Owns => "owns",
            Self::DependsOn => "depends_on",
            Self::MentionedIn => "mentioned_in",
            Self::RelatedTo => "related_to",
            Self::BlockedBy => "blocked_by",
            Self::AssignedTo => "assigned_to",
            Self::Custom => "custom",
        }
    }

    /// Parse a stored type string. Unrecognized strings become `Custom`.
    pub fn parse(s: &str) -> Self {
        match s {
            "works_on" => Self::WorksOn,
            "decided" => Self::Decided,
            "owns" => Self::Owns,
            "depends_on" => Self::DependsOn,
            "mentioned_in" => Self::MentionedIn,
            "related_to" => Self::RelatedTo,
            "blocked_by" => Self::BlockedBy,
            "assigned_to" => Self::AssignedTo,
            _ => Self::Custom,
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity record, matching the `entities` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Unique under case-insensitive comparison; stored casing is preserved.
    pub name: String,
    /// Free text, replaced wholesale on every upsert.
    pub summary: String,
    /// 1 on creation, +1 per subsequent upsert of the same name.
    pub mention_count: i64,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-upsert timestamp.
    pub updated_at: String,
}

/// A directed, typed, labeled edge between two entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    pub id: i64,
    pub from_id: i64,
    pub to_id: i64,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    /// Free-form human-readable annotation.
    pub label: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_round_trips() {
        for t in [
            EntityType::Person,
            EntityType::Project,
            EntityType::Decision,
            EntityType::Commitment,
            EntityType::Topic,
            EntityType::Tool,
            EntityType::Location,
            EntityType::Custom,
        ] {
            assert_eq!(EntityType::parse(t.as_str()), t);
        }
    }

    #[test]
    fn relation_type_round_trips() {
        for t in [
            RelationType::WorksOn,
            RelationType::Decided,
            RelationType::Owns,
            RelationType::DependsOn,
            RelationType::MentionedIn,
            RelationType::RelatedTo,
            RelationType::BlockedBy,
            RelationType::AssignedTo,
            RelationType::Custom,
        ] {
            assert_eq!(RelationType::parse(t.as_str()), t);
        }
    }

    #[test]
    fn unknown_types_parse_to_custom() {
        assert_eq!(EntityType::parse("starship"), EntityType::Custom);
        assert_eq!(RelationType::parse("admires"), RelationType::Custom);
    }
}
