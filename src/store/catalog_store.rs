//! SQLite-backed tool catalog.
//!
//! List-valued tool fields are stored as JSON text columns and decoded once
//! here, so callers only ever see fully typed [`Tool`] values.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};

use crate::domain::{SkillLevel, Tool};
use crate::error::{Result, ToolmatchError};
use crate::store::traits::CatalogProvider;

const TOOL_COLUMNS: &str = "id, name, description, category, target_roles, skill_level, use_cases, \
                            pain_points, pricing_model, official_url, features, rating";

/// CatalogStore owns the SQLite database holding tools and the query log.
pub struct CatalogStore {
    /// Database file, `None` for in-memory stores
    path: Option<PathBuf>,

    pub(crate) db: Connection,
}

impl CatalogStore {
    /// Open or create a store at the given database file.
    pub fn open_at(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let db = Connection::open(db_path)?;
        Self::init_schema(&db)?;

        log::info!("Opened catalog store at {}", db_path.display());
        Ok(Self {
            path: Some(db_path.to_path_buf()),
            db,
        })
    }

    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory()?;
        Self::init_schema(&db)?;
        Ok(Self { path: None, db })
    }

    /// Initialize the SQLite schema.
    fn init_schema(db: &Connection) -> Result<()> {
        db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tools (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                target_roles TEXT NOT NULL,
                skill_level TEXT NOT NULL,
                use_cases TEXT NOT NULL,
                pain_points TEXT NOT NULL,
                pricing_model TEXT NOT NULL,
                official_url TEXT NOT NULL,
                features TEXT NOT NULL,
                rating REAL NOT NULL DEFAULT 0.0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tools_category ON tools(category);

            CREATE TABLE IF NOT EXISTS user_responses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                role TEXT NOT NULL,
                workflow TEXT NOT NULL,
                skill_level TEXT NOT NULL,
                pain_points TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_user_responses_created ON user_responses(created_at);
            "#,
        )?;

        Ok(())
    }

    /// Database file backing this store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Insert a tool and return it with its assigned id.
    ///
    /// Any id already set on `tool` is ignored.
    pub fn insert_tool(&mut self, tool: &Tool) -> Result<Tool> {
        Self::insert_tool_into_db(&self.db, tool)?;
        let id = self.db.last_insert_rowid();

        log::debug!("Inserted tool {} ({})", id, tool.name);
        Ok(tool.clone().with_id(id))
    }

    /// Insert many tools in one transaction.
    pub fn insert_tools(&mut self, tools: &[Tool]) -> Result<Vec<Tool>> {
        let tx = self.db.transaction()?;
        let mut inserted = Vec::with_capacity(tools.len());
        for tool in tools {
            Self::insert_tool_into_db(&tx, tool)?;
            inserted.push(tool.clone().with_id(tx.last_insert_rowid()));
        }
        tx.commit()?;

        log::info!("Inserted {} tools", inserted.len());
        Ok(inserted)
    }

    fn insert_tool_into_db(db: &Connection, tool: &Tool) -> Result<()> {
        db.execute(
            r#"
            INSERT INTO tools
            (name, description, category, target_roles, skill_level, use_cases,
             pain_points, pricing_model, official_url, features, rating, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                tool.name,
                tool.description,
                tool.category,
                serde_json::to_string(&tool.target_roles)?,
                tool.skill_level.as_str(),
                serde_json::to_string(&tool.use_cases)?,
                serde_json::to_string(&tool.pain_points)?,
                tool.pricing_model,
                tool.official_url,
                serde_json::to_string(&tool.features)?,
                tool.rating,
                Utc::now().to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    /// Get a tool by id.
    pub fn get_tool(&self, id: i64) -> Result<Option<Tool>> {
        let sql = format!("SELECT {} FROM tools WHERE id = ?1", TOOL_COLUMNS);
        match self.db.query_row(&sql, [id], ToolRow::from_row) {
            Ok(row) => Ok(Some(row.decode()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a tool by id, failing when it does not exist.
    pub fn require_tool(&self, id: i64) -> Result<Tool> {
        self.get_tool(id)?.ok_or(ToolmatchError::ToolNotFound(id))
    }

    /// Count tools in the catalog.
    pub fn count_tools(&self) -> Result<usize> {
        let count: i64 = self.db.query_row("SELECT COUNT(*) FROM tools", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl CatalogProvider for CatalogStore {
    /// All tools, ordered by id.
    fn list_tools(&self) -> Result<Vec<Tool>> {
        let sql = format!("SELECT {} FROM tools ORDER BY id", TOOL_COLUMNS);
        let mut stmt = self.db.prepare(&sql)?;
        let rows = stmt.query_map([], ToolRow::from_row)?;

        let mut tools = Vec::new();
        for row in rows {
            tools.push(row?.decode()?);
        }

        Ok(tools)
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self.db.prepare("SELECT DISTINCT category FROM tools ORDER BY category")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }

        Ok(categories)
    }

    fn list_roles(&self) -> Result<Vec<String>> {
        let mut stmt = self.db.prepare("SELECT target_roles FROM tools")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut roles = std::collections::BTreeSet::new();
        for row in rows {
            let decoded: Vec<String> = serde_json::from_str(&row?)?;
            roles.extend(decoded);
        }

        Ok(roles.into_iter().collect())
    }
}

/// A raw `tools` row before JSON columns are decoded.
struct ToolRow {
    id: i64,
    name: String,
    description: String,
    category: String,
    target_roles: String,
    skill_level: String,
    use_cases: String,
    pain_points: String,
    pricing_model: String,
    official_url: String,
    features: String,
    rating: f64,
}

impl ToolRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            target_roles: row.get(4)?,
            skill_level: row.get(5)?,
            use_cases: row.get(6)?,
            pain_points: row.get(7)?,
            pricing_model: row.get(8)?,
            official_url: row.get(9)?,
            features: row.get(10)?,
            rating: row.get(11)?,
        })
    }

    fn decode(self) -> Result<Tool> {
        let skill_level = SkillLevel::parse(&self.skill_level).ok_or_else(|| {
            ToolmatchError::Storage(format!(
                "Invalid skill level '{}' for tool {}",
                self.skill_level, self.id
            ))
        })?;

        Ok(Tool {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            target_roles: serde_json::from_str(&self.target_roles)?,
            skill_level,
            use_cases: serde_json::from_str(&self.use_cases)?,
            pain_points: serde_json::from_str(&self.pain_points)?,
            pricing_model: self.pricing_model,
            official_url: self.official_url,
            features: serde_json::from_str(&self.features)?,
            rating: self.rating,
        })
    }
}

/// Parse an RFC 3339 timestamp column.
pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ToolmatchError::Storage(format!("Invalid timestamp '{}': {}", value, e)))
}
