//! Template explanations for a score breakdown.
//!
//! Format: "This tool {workflow}, {challenges}, and {skill}."

use crate::domain::Query;
use crate::engine::score::ScoreBreakdown;

/// Render the explanation sentence for a breakdown computed from `query`.
pub fn explain(query: &Query, breakdown: &ScoreBreakdown) -> String {
    format!(
        "This tool {}, {}, and {}.",
        workflow_fragment(query.workflow(), breakdown),
        challenge_fragment(breakdown),
        skill_fragment(query.skill_level().as_str(), breakdown)
    )
}

fn workflow_fragment(workflow: &str, breakdown: &ScoreBreakdown) -> String {
    let workflow = workflow.to_lowercase();
    if breakdown.workflow_match.points > 0 {
        format!("matches your {} workflow", workflow)
    } else {
        format!("doesn't match your {} workflow", workflow)
    }
}

fn challenge_fragment(breakdown: &ScoreBreakdown) -> String {
    format!(
        "solves {} of your {} selected challenges",
        breakdown.challenge_match.matched_challenges, breakdown.challenge_match.total_challenges
    )
}

fn skill_fragment(skill: &str, breakdown: &ScoreBreakdown) -> String {
    let skill_match = &breakdown.skill_compatibility;
    if skill_match.points == 0 {
        format!("is not suitable for {} skill level", skill)
    } else if skill_match.compatible {
        format!("is suitable for {} skill level", skill)
    } else {
        format!("is challenging but possible for {} skill level", skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SkillLevel, Tool};
    use crate::engine::score::score;

    #[test]
    fn test_explain_full_match() {
        let tool = Tool::new("ChatGPT", "Text Generation", SkillLevel::Beginner)
            .with_use_cases(["content creation"])
            .with_pain_points(["writer's block"]);
        let query = Query::new("Writer", "content creation", SkillLevel::Beginner, ["writer's block"]).unwrap();

        let breakdown = score(&tool, &query);
        assert_eq!(
            explain(&query, &breakdown),
            "This tool matches your content creation workflow, solves 1 of your 1 selected challenges, \
             and is suitable for beginner skill level."
        );
    }

    #[test]
    fn test_explain_lowercases_workflow() {
        let tool = Tool::new("Notion AI", "Productivity", SkillLevel::Beginner).with_use_cases(["Project planning"]);
        let query = Query::new("PM", "Project Planning", SkillLevel::Beginner, Vec::<String>::new()).unwrap();

        let text = explain(&query, &score(&tool, &query));
        assert!(text.starts_with("This tool matches your project planning workflow"));
    }

    #[test]
    fn test_explain_no_workflow_match_and_zero_challenges() {
        let tool = Tool::new("Runway ML", "Video Generation", SkillLevel::Advanced)
            .with_use_cases(["Video editing"])
            .with_pain_points(["Technical skills"]);
        let query = Query::new("Writer", "Writing", SkillLevel::Beginner, ["Grammar errors", "Writer's block"]).unwrap();

        assert_eq!(
            explain(&query, &score(&tool, &query)),
            "This tool doesn't match your writing workflow, solves 0 of your 2 selected challenges, \
             and is not suitable for beginner skill level."
        );
    }

    #[test]
    fn test_explain_challenging_but_possible() {
        let tool = Tool::new("Copilot", "Code Assistance", SkillLevel::Intermediate).with_use_cases(["Code completion"]);
        let query = Query::new("Developer", "Code completion", SkillLevel::Beginner, Vec::<String>::new()).unwrap();

        let text = explain(&query, &score(&tool, &query));
        assert!(text.ends_with("and is challenging but possible for beginner skill level."));
    }

    #[test]
    fn test_explain_easier_tool_is_suitable() {
        let tool = Tool::new("Replit AI", "Code Assistance", SkillLevel::Beginner).with_use_cases(["Debugging"]);
        let query = Query::new("Developer", "Debugging", SkillLevel::Intermediate, Vec::<String>::new()).unwrap();

        let text = explain(&query, &score(&tool, &query));
        assert!(text.ends_with("and is suitable for intermediate skill level."));
    }
}
