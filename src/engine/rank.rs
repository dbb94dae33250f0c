//! Filtering, ordering and truncation of scored tools.

use serde::Serialize;

use crate::domain::{Query, Tool};
use crate::engine::explain::explain;
use crate::engine::score::{ScoreBreakdown, score};
use crate::error::Result;
use crate::store::CatalogProvider;

/// Tools must score strictly above this to be recommended.
pub const RELEVANCE_FLOOR: u32 = 20;

/// Number of recommendations returned when the caller does not say.
pub const DEFAULT_LIMIT: usize = 10;

/// One ranked, explained tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub tool: Tool,
    pub score: u32,
    pub scoring_breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// Rank a catalog snapshot against a query.
///
/// Keeps tools scoring above [`RELEVANCE_FLOOR`], orders them by score
/// descending then tool id ascending, and returns at most `limit`.
pub fn rank(query: &Query, catalog: &[Tool], limit: usize) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = catalog
        .iter()
        .filter_map(|tool| {
            let breakdown = score(tool, query);
            (breakdown.total_score > RELEVANCE_FLOOR).then(|| Recommendation {
                tool: tool.clone(),
                score: breakdown.total_score,
                explanation: explain(query, &breakdown),
                scoring_breakdown: breakdown,
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.cmp(&a.score).then(a.tool.id.cmp(&b.tool.id)));
    recommendations.truncate(limit);

    log::info!(
        "Ranked {} tools for workflow '{}': {} recommended (limit {})",
        catalog.len(),
        query.workflow(),
        recommendations.len(),
        limit
    );

    recommendations
}

/// Recommendation engine bound to a catalog provider.
pub struct Recommender<P> {
    catalog: P,
    limit: usize,
}

impl<P: CatalogProvider> Recommender<P> {
    /// Create an engine returning up to [`DEFAULT_LIMIT`] results.
    pub fn new(catalog: P) -> Self {
        Self {
            catalog,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn catalog(&self) -> &P {
        &self.catalog
    }

    /// Fetch the catalog once and rank it against `query`.
    pub fn recommend(&self, query: &Query) -> Result<Vec<Recommendation>> {
        let tools = self.catalog.list_tools()?;
        Ok(rank(query, &tools, self.limit))
    }
}
