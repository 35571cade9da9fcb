//! Pinned model set.

/// Ordered set of pinned model unique ids.
///
/// Order follows the order in which models were pinned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinnedModels {
    ids: Vec<String>,
}

impl PinnedModels {
    /// Build from persisted ids, dropping repeated entries.
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { ids: unique }
    }

    pub fn contains(&self, uniq_id: &str) -> bool {
        self.ids.iter().any(|id| id == uniq_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The set after toggling `uniq_id`: removed if present, appended otherwise.
    pub fn toggled(&self, uniq_id: &str) -> Self {
        let ids = if self.contains(uniq_id) {
            self.ids.iter().filter(|id| *id != uniq_id).cloned().collect()
        } else {
            let mut ids = self.ids.clone();
            ids.push(uniq_id.to_string());
            ids
        };
        Self { ids }
    }
}
