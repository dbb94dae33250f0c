//! Query log: every recommendation request, as submitted.

use chrono::Utc;
use rusqlite::params;

use crate::domain::{Query, QueryRecord, SkillLevel};
use crate::error::{Result, ToolmatchError};
use crate::store::catalog_store::{CatalogStore, parse_timestamp};

impl CatalogStore {
    /// Persist a query and return the stored record.
    pub fn log_query(&mut self, query: &Query) -> Result<QueryRecord> {
        let created_at = Utc::now();

        self.db.execute(
            r#"
            INSERT INTO user_responses (role, workflow, skill_level, pain_points, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                query.role(),
                query.workflow(),
                query.skill_level().as_str(),
                serde_json::to_string(query.pain_points())?,
                created_at.to_rfc3339(),
            ],
        )?;

        let record = QueryRecord {
            id: self.db.last_insert_rowid(),
            role: query.role().to_string(),
            workflow: query.workflow().to_string(),
            skill_level: query.skill_level(),
            pain_points: query.pain_points().to_vec(),
            created_at,
        };

        log::info!("Logged query {} (role: {}, workflow: {})", record.id, record.role, record.workflow);
        Ok(record)
    }

    /// Most recent queries first.
    pub fn recent_queries(&self, limit: usize) -> Result<Vec<QueryRecord>> {
        let mut stmt = self.db.prepare(
            "SELECT id, role, workflow, skill_level, pain_points, created_at
             FROM user_responses ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, role, workflow, skill_level, pain_points, created_at) = row?;
            let skill_level = SkillLevel::parse(&skill_level).ok_or_else(|| {
                ToolmatchError::Storage(format!("Invalid skill level '{}' for query {}", skill_level, id))
            })?;

            records.push(QueryRecord {
                id,
                role,
                workflow,
                skill_level,
                pain_points: serde_json::from_str(&pain_points)?,
                created_at: parse_timestamp(&created_at)?,
            });
        }

        Ok(records)
    }

    /// Count logged queries.
    pub fn count_queries(&self) -> Result<usize> {
        let count: i64 = self
            .db
            .query_row("SELECT COUNT(*) FROM user_responses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
