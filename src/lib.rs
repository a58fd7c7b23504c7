//! Long-term memory for conversational agents.
//!
//! Engram stores what an agent learns across conversations and hands back a
//! bounded, relevance-ranked slice of it on every turn, so prompts carry
//! accumulated knowledge without unbounded context growth. Two stores share
//! one SQLite database:
//!
//! - **Recall** — atomic facts with keyword tokens and importance weights.
//!   Queries score keyword overlap against importance and recency decay and
//!   assemble a token-budgeted context block from the top matches.
//! - **Graph** — typed entities and directed typed relations. Context for an
//!   entity or a search query is rendered as Obsidian-style markdown with
//!   `[[wiki-link]]` backlinks, one hop in each direction.
//!
//! Both stores are synchronous and expect single-threaded access to the
//! shared [`rusqlite::Connection`]; callers running concurrently must
//! serialize externally.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite initialization, schema, and migrations
//! - [`recall`] — Fact storage, scored queries, budgeted context, hygiene
//! - [`graph`] — Entity/relation storage and markdown context assembly
//! - [`stats`] — Cross-store statistics

pub mod config;
pub mod db;
pub mod error;
pub mod graph;
pub mod recall;
pub mod stats;

pub use error::{MemoryError, Result};
