use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Item id -> quantity. Absent ids count as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderQuantities(BTreeMap<String, u32>);

impl OrderQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> u32 {
        self.0.get(id).copied().unwrap_or(0)
    }

    /// Apply `delta`, clamping to `0..=u32::MAX`. Returns the new quantity.
    pub fn adjust(&mut self, id: &str, delta: i64) -> u32 {
        let current = self.get(id) as i64;
        let next = current.saturating_add(delta).clamp(0, u32::MAX as i64) as u32;
        self.0.insert(id.to_string(), next);
        next
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|q| *q == 0)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

impl FromIterator<(String, u32)> for OrderQuantities {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
