//! Tool records and skill levels
//!
//! A Tool is a catalog entry the engine scores against a user query. Tools are
//! value records: the store decodes them fully before they reach the engine.

use serde::{Deserialize, Serialize};

/// Proficiency tier, shared by tools and queries.
///
/// Tools may declare `All` to be suitable at every tier. Queries never carry
/// `All` (see [`crate::domain::Query`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    All,
}

impl SkillLevel {
    /// Parse from string representation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::All => "all",
        }
    }

    /// Position in the beginner < intermediate < advanced order.
    ///
    /// `All` is a wildcard and has no position.
    pub fn tier(&self) -> Option<i8> {
        match self {
            Self::Beginner => Some(0),
            Self::Intermediate => Some(1),
            Self::Advanced => Some(2),
            Self::All => None,
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A software tool in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Store-assigned identifier (0 until inserted)
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub target_roles: Vec<String>,
    pub skill_level: SkillLevel,
    /// Workflow tags matched against the query workflow
    pub use_cases: Vec<String>,
    /// Difficulties this tool claims to address
    pub pain_points: Vec<String>,
    pub pricing_model: String,
    pub official_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Display only, never scored
    #[serde(default)]
    pub rating: f64,
}

impl Tool {
    /// Create a new tool with empty collections
    pub fn new(name: impl Into<String>, category: impl Into<String>, skill_level: SkillLevel) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            category: category.into(),
            target_roles: Vec::new(),
            skill_level,
            use_cases: Vec::new(),
            pain_points: Vec::new(),
            pricing_model: String::new(),
            official_url: String::new(),
            features: Vec::new(),
            rating: 0.0,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_roles<S: Into<String>>(mut self, roles: impl IntoIterator<Item = S>) -> Self {
        self.target_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_use_cases<S: Into<String>>(mut self, use_cases: impl IntoIterator<Item = S>) -> Self {
        self.use_cases = use_cases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pain_points<S: Into<String>>(mut self, pain_points: impl IntoIterator<Item = S>) -> Self {
        self.pain_points = pain_points.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_features<S: Into<String>>(mut self, features: impl IntoIterator<Item = S>) -> Self {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pricing(mut self, pricing_model: impl Into<String>, official_url: impl Into<String>) -> Self {
        self.pricing_model = pricing_model.into();
        self.official_url = official_url.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_parse() {
        assert_eq!(SkillLevel::parse("beginner"), Some(SkillLevel::Beginner));
        assert_eq!(SkillLevel::parse("Intermediate"), Some(SkillLevel::Intermediate));
        assert_eq!(SkillLevel::parse(" ADVANCED "), Some(SkillLevel::Advanced));
        assert_eq!(SkillLevel::parse("all"), Some(SkillLevel::All));
        assert_eq!(SkillLevel::parse("expert"), None);
        assert_eq!(SkillLevel::parse(""), None);
    }

    #[test]
    fn test_skill_level_tier_order() {
        let beginner = SkillLevel::Beginner.tier().unwrap();
        let intermediate = SkillLevel::Intermediate.tier().unwrap();
        let advanced = SkillLevel::Advanced.tier().unwrap();
        assert!(beginner < intermediate);
        assert!(intermediate < advanced);
        assert_eq!(SkillLevel::All.tier(), None);
    }

    #[test]
    fn test_skill_level_serde_lowercase() {
        let json = serde_json::to_string(&SkillLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        let level: SkillLevel = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(level, SkillLevel::All);
    }

    #[test]
    fn test_tool_builder() {
        let tool = Tool::new("ChatGPT", "Text Generation", SkillLevel::Beginner)
            .with_id(7)
            .with_use_cases(["Content creation", "Learning"])
            .with_pain_points(["Writer's block"])
            .with_rating(4.8);

        assert_eq!(tool.id, 7);
        assert_eq!(tool.use_cases, vec!["Content creation", "Learning"]);
        assert_eq!(tool.pain_points, vec!["Writer's block"]);
        assert!(tool.features.is_empty());
        assert_eq!(tool.rating, 4.8);
    }

    #[test]
    fn test_tool_deserialize_without_id() {
        let yaml = r#"
name: Grammarly
description: Writing assistant
category: Writing Assistant
target_roles: [Writer]
skill_level: beginner
use_cases: [Grammar checking]
pain_points: [Grammar errors]
pricing_model: Freemium
official_url: https://www.grammarly.com
"#;
        let tool: Tool = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tool.id, 0);
        assert_eq!(tool.skill_level, SkillLevel::Beginner);
        assert!(tool.features.is_empty());
        assert_eq!(tool.rating, 0.0);
    }
}
