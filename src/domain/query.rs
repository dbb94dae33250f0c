//! User queries and the persisted query log record
//!
//! A Query is only obtainable through validation, so the engine never has to
//! second-guess its fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::SkillLevel;
use crate::error::{Result, ToolmatchError};

/// Fields a caller must supply, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 4] = ["role", "workflow", "skill_level", "pain_points"];

/// One user's self-reported profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    role: String,
    workflow: String,
    skill_level: SkillLevel,
    pain_points: Vec<String>,
}

impl Query {
    /// Build a validated query.
    ///
    /// Role and workflow must be non-blank and the skill level must be a
    /// concrete tier; `all` is only meaningful on tools.
    pub fn new<S: Into<String>>(
        role: impl Into<String>,
        workflow: impl Into<String>,
        skill_level: SkillLevel,
        pain_points: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let role = role.into();
        let workflow = workflow.into();

        if role.trim().is_empty() {
            return Err(ToolmatchError::MalformedQuery("role must not be blank".to_string()));
        }
        if workflow.trim().is_empty() {
            return Err(ToolmatchError::MalformedQuery("workflow must not be blank".to_string()));
        }
        if skill_level == SkillLevel::All {
            return Err(ToolmatchError::MalformedQuery(
                "skill_level must be beginner, intermediate or advanced".to_string(),
            ));
        }

        Ok(Self {
            role,
            workflow,
            skill_level,
            pain_points: pain_points.into_iter().map(Into::into).collect(),
        })
    }

    /// Build a query from a raw string skill level (CLI and JSON callers)
    pub fn parse<S: Into<String>>(
        role: impl Into<String>,
        workflow: impl Into<String>,
        skill_level: &str,
        pain_points: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let level = SkillLevel::parse(skill_level)
            .ok_or_else(|| ToolmatchError::MalformedQuery(format!("unknown skill_level '{}'", skill_level)))?;
        Self::new(role, workflow, level, pain_points)
    }

    /// Build a query from a JSON object such as a request body.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ToolmatchError::MalformedQuery("query must be a JSON object".to_string()))?;

        for field in REQUIRED_FIELDS {
            if !object.contains_key(field) {
                return Err(ToolmatchError::MalformedQuery(format!("Missing required field: {}", field)));
            }
        }

        let role = string_field(value, "role")?;
        let workflow = string_field(value, "workflow")?;
        let skill_level = string_field(value, "skill_level")?;

        let pain_points = value["pain_points"]
            .as_array()
            .ok_or_else(|| ToolmatchError::MalformedQuery("pain_points must be a list of strings".to_string()))?
            .iter()
            .map(|p| {
                p.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ToolmatchError::MalformedQuery("pain_points must be a list of strings".to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::parse(role, workflow, skill_level, pain_points)
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn workflow(&self) -> &str {
        &self.workflow
    }

    pub fn skill_level(&self) -> SkillLevel {
        self.skill_level
    }

    pub fn pain_points(&self) -> &[String] {
        &self.pain_points
    }
}

fn string_field<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value[field]
        .as_str()
        .ok_or_else(|| ToolmatchError::MalformedQuery(format!("{} must be a string", field)))
}

/// A query as persisted in the query log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: i64,
    pub role: String,
    pub workflow: String,
    pub skill_level: SkillLevel,
    pub pain_points: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_query() {
        let query = Query::new("Writer", "Content creation", SkillLevel::Beginner, ["Writer's block"]).unwrap();
        assert_eq!(query.role(), "Writer");
        assert_eq!(query.workflow(), "Content creation");
        assert_eq!(query.skill_level(), SkillLevel::Beginner);
        assert_eq!(query.pain_points(), ["Writer's block".to_string()]);
    }

    #[test]
    fn test_new_query_rejects_all_skill_level() {
        let err = Query::new("Writer", "Writing", SkillLevel::All, Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ToolmatchError::MalformedQuery(_)));
    }

    #[test]
    fn test_new_query_rejects_blank_workflow() {
        let err = Query::new("Writer", "   ", SkillLevel::Beginner, Vec::<String>::new()).unwrap_err();
        assert!(err.to_string().contains("workflow"));
    }

    #[test]
    fn test_new_query_rejects_blank_role() {
        let err = Query::new("", "Writing", SkillLevel::Beginner, Vec::<String>::new()).unwrap_err();
        assert!(err.to_string().contains("role"));
    }

    #[test]
    fn test_parse_unknown_skill_level() {
        let err = Query::parse("Writer", "Writing", "expert", Vec::<String>::new()).unwrap_err();
        assert_eq!(err.to_string(), "Malformed query: unknown skill_level 'expert'");
    }

    #[test]
    fn test_from_json() {
        let value = json!({
            "role": "Developer",
            "workflow": "Code completion",
            "skill_level": "intermediate",
            "pain_points": ["Slow coding", "Syntax errors"],
        });
        let query = Query::from_json(&value).unwrap();
        assert_eq!(query.workflow(), "Code completion");
        assert_eq!(query.skill_level(), SkillLevel::Intermediate);
        assert_eq!(query.pain_points().len(), 2);
    }

    #[test]
    fn test_from_json_missing_field() {
        let value = json!({
            "role": "Developer",
            "workflow": "Code completion",
            "pain_points": [],
        });
        let err = Query::from_json(&value).unwrap_err();
        assert_eq!(err.to_string(), "Malformed query: Missing required field: skill_level");
    }

    #[test]
    fn test_from_json_wrong_types() {
        let value = json!({
            "role": "Developer",
            "workflow": 42,
            "skill_level": "beginner",
            "pain_points": [],
        });
        assert!(Query::from_json(&value).is_err());

        let value = json!({
            "role": "Developer",
            "workflow": "Debugging",
            "skill_level": "beginner",
            "pain_points": "Slow coding",
        });
        assert!(Query::from_json(&value).is_err());

        let value = json!({
            "role": "Developer",
            "workflow": "Debugging",
            "skill_level": "beginner",
            "pain_points": ["Slow coding", 3],
        });
        assert!(Query::from_json(&value).is_err());
    }

    #[test]
    fn test_from_json_not_an_object() {
        let err = Query::from_json(&json!(["role"])).unwrap_err();
        assert!(matches!(err, ToolmatchError::MalformedQuery(_)));
    }
}
