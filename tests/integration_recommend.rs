//! End-to-end recommendation tests
//!
//! Seeds an on-disk catalog, logs queries and ranks through the store.

use serde_json::json;
use tempfile::TempDir;
use toolmatch::error::Result;
use toolmatch::store::bundled_tools;
use toolmatch::{CatalogProvider, CatalogStore, Query, Recommender, SkillLevel, ToolmatchError};

fn seeded_store(temp_dir: &TempDir) -> Result<CatalogStore> {
    let mut store = CatalogStore::open_at(&temp_dir.path().join("toolmatch.db"))?;
    store.seed_if_empty(&bundled_tools()?)?;
    Ok(store)
}

/// Integration test: a writer with writer's block gets ChatGPT first, at full marks
#[test]
fn test_content_creation_writer() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = seeded_store(&temp_dir)?;

    let query = Query::new("Writer", "Content creation", SkillLevel::Beginner, ["Writer's block"])?;
    let recs = Recommender::new(&store).recommend(&query)?;

    assert!(!recs.is_empty());
    assert_eq!(recs[0].tool.name, "ChatGPT");
    assert_eq!(recs[0].score, 100);
    assert_eq!(
        recs[0].explanation,
        "This tool matches your content creation workflow, solves 1 of your 1 selected challenges, \
         and is suitable for beginner skill level."
    );

    // Every result clears the floor and the list is sorted
    assert!(recs.iter().all(|r| r.score > 20));
    assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));

    Ok(())
}

/// Integration test: substring workflow match and adjacent skill tiers
#[test]
fn test_code_completion_beginner() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = seeded_store(&temp_dir)?;

    let query = Query::new("Developer", "Code completion", SkillLevel::Beginner, ["Slow coding", "Debugging time"])?;
    let recs = Recommender::new(&store).recommend(&query)?;

    let names: Vec<&str> = recs.iter().map(|r| r.tool.name.as_str()).collect();
    // Replit AI: 40 + 20 + 20 = 80; GitHub Copilot: 40 + 20 + 10 = 70
    assert_eq!(&names[..2], &["Replit AI", "GitHub Copilot"]);
    assert_eq!(recs[0].score, 80);
    assert_eq!(recs[1].score, 70);
    assert!(recs[1].explanation.ends_with("is challenging but possible for beginner skill level."));

    Ok(())
}

/// Integration test: limit is honoured and ranking is repeatable
#[test]
fn test_limit_and_determinism() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = seeded_store(&temp_dir)?;

    let query = Query::new("Marketer", "Marketing", SkillLevel::Intermediate, Vec::<String>::new())?;
    let engine = Recommender::new(&store).with_limit(2);

    let first = engine.recommend(&query)?;
    let second = engine.recommend(&query)?;
    assert!(first.len() <= 2);
    assert_eq!(first, second);

    Ok(())
}

/// Integration test: an empty catalog yields no recommendations, not an error
#[test]
fn test_empty_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = CatalogStore::open_at(&temp_dir.path().join("empty.db"))?;

    let query = Query::new("Writer", "Writing", SkillLevel::Beginner, ["Grammar errors"])?;
    assert!(Recommender::new(&store).recommend(&query)?.is_empty());

    Ok(())
}

/// Integration test: JSON request bodies are validated before scoring
#[test]
fn test_json_query_validation() {
    let missing = json!({"role": "Writer", "skill_level": "beginner", "pain_points": []});
    let err = Query::from_json(&missing).unwrap_err();
    assert!(matches!(err, ToolmatchError::MalformedQuery(_)));
    assert!(err.to_string().contains("Missing required field: workflow"));

    let bad_level = json!({"role": "Writer", "workflow": "Writing", "skill_level": "all", "pain_points": []});
    assert!(Query::from_json(&bad_level).is_err());
}

/// Integration test: queries are logged and the catalog exposes categories and roles
#[test]
fn test_query_log_and_catalog_listings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut store = seeded_store(&temp_dir)?;

    let query = Query::new("Researcher", "Research queries", SkillLevel::Intermediate, ["Research time"])?;
    store.log_query(&query)?;

    let history = store.recent_queries(5)?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].workflow, "Research queries");

    let categories = store.list_categories()?;
    assert_eq!(categories.len(), 9);
    assert!(categories.contains(&"Code Assistance".to_string()));

    let roles = store.list_roles()?;
    assert!(roles.windows(2).all(|w| w[0] < w[1]));
    assert!(roles.contains(&"Journalist".to_string()));

    Ok(())
}
