//! Terminal rendering for recommendations and catalog listings.

use colored::*;

use toolmatch::{QueryRecord, Recommendation, Tool};

/// Coarse match quality used to colour scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

fn paint_score(score: u32) -> ColoredString {
    let label = format!("{}% Match", score);
    match ScoreBand::of(score) {
        ScoreBand::High => label.green().bold(),
        ScoreBand::Medium => label.yellow().bold(),
        ScoreBand::Low => label.red().bold(),
    }
}

fn yes_no(flag: bool) -> ColoredString {
    if flag { "Yes".green() } else { "No".red() }
}

/// Render one recommendation as a multi-line block.
pub fn render_recommendation(position: usize, rec: &Recommendation) -> String {
    let breakdown = &rec.scoring_breakdown;
    format!(
        "{}. {}  [{}]  ({}, {})\n   {}\n   Workflow match: {}  Challenges solved: {}/{}  Skill match: {}\n   {}",
        position,
        rec.tool.name.bold(),
        paint_score(rec.score),
        rec.tool.category,
        rec.tool.pricing_model,
        rec.explanation,
        yes_no(breakdown.workflow_match.points > 0),
        breakdown.challenge_match.matched_challenges,
        breakdown.challenge_match.total_challenges,
        yes_no(breakdown.skill_compatibility.points > 0),
        rec.tool.official_url.cyan()
    )
}

/// Render one catalog entry on a single line.
pub fn render_tool(tool: &Tool) -> String {
    format!(
        "{:>3}  {}  [{}]  {}  {:.1}",
        tool.id,
        tool.name.bold(),
        tool.category,
        tool.skill_level,
        tool.rating
    )
}

/// Render one query log entry on a single line.
pub fn render_query(record: &QueryRecord) -> String {
    format!(
        "{:>3}  {}  {} / {} / {}  [{}]",
        record.id,
        record.created_at.format("%Y-%m-%d %H:%M:%S"),
        record.role,
        record.workflow,
        record.skill_level,
        record.pain_points.join(", ")
    )
}
