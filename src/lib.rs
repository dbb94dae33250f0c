//! toolmatch - transparent software tool recommendations
//!
//! Ranks a catalog of tools against a short user profile (role, workflow,
//! skill level, pain points) with a deterministic 40/40/20 scoring function
//! and explains every ranking in one sentence.

pub mod domain;
pub mod engine;
pub mod error;
pub mod store;

pub use domain::{Query, QueryRecord, SkillLevel, Tool};
pub use engine::{Recommendation, Recommender, ScoreBreakdown};
pub use error::{Result, ToolmatchError};
pub use store::{CatalogProvider, CatalogStore};
