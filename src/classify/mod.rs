use crate::models::Transaction;
use crate::store::{CategoryStore, UNCATEGORIZED};

/// Keyword matcher compiled from a store snapshot. Matching is exact string
/// equality on the normalized (trimmed, lower-cased) details field — no
/// substring or fuzzy matching.
pub(crate) struct Classifier {
    rules: Vec<CompiledCategory>,
}

struct CompiledCategory {
    name: String,
    keywords: Vec<String>,
}

impl Classifier {
    pub(crate) fn new(store: &CategoryStore) -> Self {
        let rules = store
            .categories()
            .iter()
            .filter(|c| c.name != UNCATEGORIZED && !c.keywords.is_empty())
            .map(|c| CompiledCategory {
                name: c.name.clone(),
                keywords: c.keywords.iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();

        Self { rules }
    }

    /// Category for a details field, or the reserved default when nothing
    /// matches. Categories are scanned in store order and a later match
    /// overwrites an earlier one: the last matching category wins.
    pub(crate) fn classify(&self, details: &str) -> String {
        let normalized = details.trim().to_lowercase();

        let mut assigned = UNCATEGORIZED;
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| *k == normalized) {
                assigned = rule.name.as_str();
            }
        }
        assigned.to_string()
    }

    pub(crate) fn classify_batch(&self, transactions: &mut [Transaction]) {
        for txn in transactions.iter_mut() {
            txn.category = self.classify(&txn.details);
        }
    }
}

#[cfg(test)]
mod tests;
