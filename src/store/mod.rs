//! Storage layer for toolmatch.
//!
//! A single SQLite database holds the tool catalog and the query log. Tools
//! leave this module as plain [`crate::domain::Tool`] values; the engine only
//! sees them through [`CatalogProvider`].
//!
//! # Example
//!
//! ```ignore
//! use toolmatch::store::{CatalogStore, CatalogProvider, bundled_tools};
//!
//! let mut store = CatalogStore::open_at(Path::new("toolmatch.db"))?;
//! store.seed_if_empty(&bundled_tools()?)?;
//!
//! let categories = store.list_categories()?;
//! ```

mod catalog_store;
mod query_log;
mod seed;
mod traits;

pub use catalog_store::CatalogStore;
pub use seed::{bundled_tools, load_seed_file, parse_seed};
pub use traits::CatalogProvider;
