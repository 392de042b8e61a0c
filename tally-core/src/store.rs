use tracing::{debug, warn};

use crate::error::Result;
use crate::order::OrderQuantities;
use crate::storage::OrderStorage;

/// The single mutable source of truth for the current order.
///
/// In-memory quantities stay authoritative for the session; storage is
/// written through after every change but a failed write never surfaces
/// from [`OrderStore::adjust`] or [`OrderStore::reset`].
pub struct OrderStore {
    storage: Box<dyn OrderStorage>,
    key: String,
    quantities: OrderQuantities,
}

impl OrderStore {
    /// Restore from `storage[key]`. Missing or unreadable state yields an empty order.
    pub fn load(storage: Box<dyn OrderStorage>, key: &str) -> Self {
        let quantities = match storage.read(key) {
            Ok(Some(raw)) if raw.trim().is_empty() => OrderQuantities::new(),
            Ok(Some(raw)) => match OrderQuantities::from_json(&raw) {
                Ok(q) => q,
                Err(e) => {
                    warn!(key, error = %e, "stored order is malformed, starting empty");
                    OrderQuantities::new()
                }
            },
            Ok(None) => OrderQuantities::new(),
            Err(e) => {
                warn!(key, error = %e, "order storage unreadable, starting empty");
                OrderQuantities::new()
            }
        };
        debug!(key, ?quantities, "order loaded");
        Self {
            storage,
            key: key.to_string(),
            quantities,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self, id: &str) -> u32 {
        self.quantities.get(id)
    }

    pub fn quantities(&self) -> &OrderQuantities {
        &self.quantities
    }

    /// `max(0, current + delta)`; never fails, even if persisting does.
    pub fn adjust(&mut self, id: &str, delta: i64) -> u32 {
        let next = self.quantities.adjust(id, delta);
        debug!(id, delta, next, "order adjusted");
        self.save_best_effort();
        next
    }

    /// Clear the whole order. Callers confirm with the user before calling.
    pub fn reset(&mut self) {
        self.quantities.clear();
        debug!(key = %self.key, "order reset");
        self.save_best_effort();
    }

    /// Write the full mapping, reporting storage failures.
    pub fn save(&self) -> Result<()> {
        let payload = self.quantities.to_json()?;
        self.storage.write(&self.key, &payload)
    }

    fn save_best_effort(&self) {
        if let Err(e) = self.save() {
            warn!(key = %self.key, error = %e, "failed to persist order, keeping in-memory state");
        }
    }
}
