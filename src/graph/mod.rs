//! Knowledge graph: typed entities and directed typed relations.
//!
//! Entities are upserted by case-insensitively unique name; relations are
//! append-only typed edges removed individually. Context assembly renders an
//! entity's one-hop neighborhood as `[[wiki-link]]` markdown, which is also
//! the export format.

pub mod context;
pub mod entities;
pub mod relations;
pub mod types;

pub use context::{build_entity_context, build_query_context, export_markdown};
pub use entities::{
    delete_entity, entity_count, find_entity, get_entity, list_entities, search_entities,
    upsert_entity,
};
pub use relations::{relate, relations_from, relations_to, unrelate};
pub use types::{Entity, EntityType, Relation, RelationType};
