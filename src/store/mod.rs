use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::Category;

/// Reserved default category: always present, never deleted.
pub(crate) const UNCATEGORIZED: &str = "Uncategorized";

/// The category → keyword-list mapping, mirrored to a JSON file after every
/// mutation. Iteration order is insertion order, which the persisted file
/// preserves across runs.
pub(crate) struct CategoryStore {
    path: PathBuf,
    categories: Vec<Category>,
}

impl CategoryStore {
    /// Read the persisted store. A missing, unreadable, or malformed file
    /// falls back to the single-category default; loading never fails.
    pub(crate) fn load(path: &Path) -> Self {
        let categories = std::fs::read_to_string(path)
            .ok()
            .and_then(|content| parse_categories(&content))
            .unwrap_or_default();

        let mut store = Self {
            path: path.to_path_buf(),
            categories,
        };
        if !store.contains(UNCATEGORIZED) {
            store
                .categories
                .insert(0, Category::new(UNCATEGORIZED.into()));
        }
        store
    }

    pub(crate) fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Insert an empty category. Returns `Ok(false)` without persisting when
    /// the trimmed name is empty or already taken.
    pub(crate) fn add_category(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return Ok(false);
        }
        self.categories.push(Category::new(name.to_string()));
        self.save()?;
        Ok(true)
    }

    /// Append a keyword to an existing category. The keyword is trimmed;
    /// empty or already-present (case-sensitively) keywords are no-ops.
    /// Errors when the category does not exist — callers create it first.
    pub(crate) fn add_keyword(&mut self, category: &str, keyword: &str) -> Result<bool> {
        let keyword = keyword.trim();
        let cat = self
            .categories
            .iter_mut()
            .find(|c| c.name == category)
            .ok_or_else(|| anyhow::anyhow!("No such category: {category}"))?;
        if keyword.is_empty() || cat.has_keyword(keyword) {
            return Ok(false);
        }
        cat.keywords.push(keyword.to_string());
        self.save()?;
        Ok(true)
    }

    /// Serialize the full mapping. Writes a sibling temp file and renames it
    /// over the target so a crash mid-write leaves the previous file intact.
    pub(crate) fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        let mut map = serde_json::Map::new();
        for cat in &self.categories {
            let keywords = cat
                .keywords
                .iter()
                .cloned()
                .map(serde_json::Value::String)
                .collect();
            map.insert(cat.name.clone(), serde_json::Value::Array(keywords));
        }
        let json = serde_json::to_string_pretty(&serde_json::Value::Object(map))
            .context("Failed to serialize categories")?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, format!("{json}\n"))
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

/// Strictly shaped as `{name: [keyword, ...], ...}`; anything else is treated
/// as unreadable. The `preserve_order` feature keeps object iteration in
/// document order.
fn parse_categories(content: &str) -> Option<Vec<Category>> {
    let raw: serde_json::Value = serde_json::from_str(content).ok()?;
    let obj = raw.as_object()?;
    let mut categories = Vec::with_capacity(obj.len());
    for (name, value) in obj {
        let keywords = value
            .as_array()?
            .iter()
            .map(|k| k.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()?;
        categories.push(Category {
            name: name.clone(),
            keywords,
        });
    }
    Some(categories)
}
