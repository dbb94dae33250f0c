//! Scoring engine for toolmatch
//!
//! Pure functions of (tool, query):
//! - score: three-component breakdown (workflow 40, challenge 40, skill 20)
//! - explain: template sentence derived from a breakdown
//! - rank: floor filter, ordering and truncation over a catalog snapshot
//!
//! `Recommender` binds these to an injected [`crate::store::CatalogProvider`].

pub mod explain;
pub mod rank;
pub mod score;

pub use explain::explain;
pub use rank::{DEFAULT_LIMIT, RELEVANCE_FLOOR, Recommendation, Recommender, rank};
pub use score::{ChallengeMatch, ScoreBreakdown, SkillCompatibility, WorkflowMatch, score};
