//! Catalog provider trait.
//!
//! The engine depends only on this seam; the SQLite store and plain
//! in-memory tool lists both implement it.

use std::collections::BTreeSet;

use crate::domain::Tool;
use crate::error::Result;

/// Source of the tool catalog.
pub trait CatalogProvider {
    /// Return the full current catalog.
    fn list_tools(&self) -> Result<Vec<Tool>>;

    /// Distinct categories, sorted.
    fn list_categories(&self) -> Result<Vec<String>> {
        let categories: BTreeSet<String> = self.list_tools()?.into_iter().map(|t| t.category).collect();
        Ok(categories.into_iter().collect())
    }

    /// Distinct target roles across all tools, sorted.
    fn list_roles(&self) -> Result<Vec<String>> {
        let roles: BTreeSet<String> = self.list_tools()?.into_iter().flat_map(|t| t.target_roles).collect();
        Ok(roles.into_iter().collect())
    }
}

impl CatalogProvider for Vec<Tool> {
    fn list_tools(&self) -> Result<Vec<Tool>> {
        Ok(self.clone())
    }
}

impl CatalogProvider for [Tool] {
    fn list_tools(&self) -> Result<Vec<Tool>> {
        Ok(self.to_vec())
    }
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for &P {
    fn list_tools(&self) -> Result<Vec<Tool>> {
        (**self).list_tools()
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        (**self).list_categories()
    }

    fn list_roles(&self) -> Result<Vec<String>> {
        (**self).list_roles()
    }
}
