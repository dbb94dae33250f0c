//! Per-tool score calculation.
//!
//! A tool is scored against a query on three independent components:
//! - Workflow match: up to 40 points (exact use case 40, substring 25)
//! - Challenge match: up to 40 points, proportional to the query's pain points addressed
//! - Skill compatibility: up to 20 points (same tier 20, easier 15, harder 10)
//!
//! The total is the plain sum, so it always lies in `0..=100`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Query, SkillLevel, Tool};

/// Maximum workflow points.
pub const WORKFLOW_WEIGHT: u32 = 40;
/// Points when the workflow and a use case contain one another.
pub const WORKFLOW_PARTIAL_POINTS: u32 = 25;

/// Maximum challenge points.
pub const CHALLENGE_WEIGHT: u32 = 40;

/// Maximum skill points.
pub const SKILL_WEIGHT: u32 = 20;
/// Tool one tier easier than the user.
pub const SKILL_EASIER_POINTS: u32 = 15;
/// Tool one tier harder than the user.
pub const SKILL_HARDER_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowMatch {
    pub points: u32,
    pub max: u32,
    pub achieved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeMatch {
    pub points: u32,
    pub max: u32,
    pub matched_challenges: usize,
    pub total_challenges: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCompatibility {
    pub points: u32,
    pub max: u32,
    pub compatible: bool,
}

/// Full scoring breakdown for one (tool, query) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub workflow_match: WorkflowMatch,
    pub challenge_match: ChallengeMatch,
    pub skill_compatibility: SkillCompatibility,
    pub total_score: u32,
}

/// Score a tool against a query.
pub fn score(tool: &Tool, query: &Query) -> ScoreBreakdown {
    let workflow_match = workflow_match(query.workflow(), &tool.use_cases);
    let challenge_match = challenge_match(query.pain_points(), &tool.pain_points);
    let skill_compatibility = skill_compatibility(tool.skill_level, query.skill_level());

    let total_score = workflow_match.points + challenge_match.points + skill_compatibility.points;

    log::debug!(
        "Scored tool {} ({}): workflow={} challenge={} skill={} total={}",
        tool.id,
        tool.name,
        workflow_match.points,
        challenge_match.points,
        skill_compatibility.points,
        total_score
    );

    ScoreBreakdown {
        workflow_match,
        challenge_match,
        skill_compatibility,
        total_score,
    }
}

/// Match the query workflow against a tool's use cases, case-insensitively.
///
/// Exact equality with any use case wins over a substring relation with
/// another, regardless of order or length.
pub fn workflow_match(workflow: &str, use_cases: &[String]) -> WorkflowMatch {
    let workflow = workflow.to_lowercase();
    let use_cases: Vec<String> = use_cases.iter().map(|u| u.to_lowercase()).collect();

    let points = if use_cases.iter().any(|u| *u == workflow) {
        WORKFLOW_WEIGHT
    } else if use_cases
        .iter()
        .any(|u| u.contains(workflow.as_str()) || workflow.contains(u.as_str()))
    {
        WORKFLOW_PARTIAL_POINTS
    } else {
        0
    };

    WorkflowMatch {
        points,
        max: WORKFLOW_WEIGHT,
        achieved: points > 0,
    }
}

/// Match the user's pain points against the ones a tool addresses.
///
/// Both sides are compared as case-insensitive sets; the denominator is the
/// number of distinct pain points the user selected.
pub fn challenge_match(query_pain_points: &[String], tool_pain_points: &[String]) -> ChallengeMatch {
    let wanted = normalize(query_pain_points);
    let offered = normalize(tool_pain_points);

    let matched = wanted.intersection(&offered).count();
    let total = wanted.len();

    ChallengeMatch {
        points: proportional_points(matched, total, CHALLENGE_WEIGHT),
        max: CHALLENGE_WEIGHT,
        matched_challenges: matched,
        total_challenges: total,
    }
}

/// Compare the tool's tier with the user's.
pub fn skill_compatibility(tool: SkillLevel, user: SkillLevel) -> SkillCompatibility {
    let (points, compatible) = if tool == user || tool == SkillLevel::All {
        (SKILL_WEIGHT, true)
    } else {
        match (tool.tier(), user.tier()) {
            (Some(t), Some(u)) if u - t == 1 => (SKILL_EASIER_POINTS, true),
            (Some(t), Some(u)) if t - u == 1 => (SKILL_HARDER_POINTS, false),
            _ => (0, false),
        }
    };

    SkillCompatibility {
        points,
        max: SKILL_WEIGHT,
        compatible,
    }
}

/// `round(weight * matched / total)` with ties to even, in integer arithmetic.
///
/// Returns 0 when `total` is 0.
pub fn proportional_points(matched: usize, total: usize, weight: u32) -> u32 {
    if total == 0 {
        return 0;
    }

    let numerator = weight as usize * matched;
    let quotient = numerator / total;
    let remainder = numerator % total;

    let rounded = match (2 * remainder).cmp(&total) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + quotient % 2,
        std::cmp::Ordering::Less => quotient,
    };

    rounded as u32
}

fn normalize(items: &[String]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}
