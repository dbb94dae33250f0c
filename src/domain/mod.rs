//! Domain types for toolmatch
//!
//! - Tool: a catalog entry with its declared use cases, pain points and skill level
//! - SkillLevel: beginner < intermediate < advanced, plus the `all` wildcard
//! - Query: a validated user profile to rank the catalog against
//! - QueryRecord: a query as persisted in the query log

pub mod query;
pub mod tool;

pub use query::{Query, QueryRecord, REQUIRED_FIELDS};
pub use tool::{SkillLevel, Tool};
