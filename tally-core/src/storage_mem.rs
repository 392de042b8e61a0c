use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, TallyError};
use crate::storage::{OrderStorage, validate_key};

/// Process-local storage; nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a slot, e.g. with a corrupt payload in tests.
    pub fn with_entry(key: &str, payload: &str) -> Self {
        let s = Self::new();
        if let Ok(mut slots) = s.slots.lock() {
            slots.insert(key.to_string(), payload.to_string());
        }
        s
    }
}

impl OrderStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let slots = self
            .slots
            .lock()
            .map_err(|_| TallyError::Storage("memory storage poisoned".into()))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        validate_key(key)?;
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| TallyError::Storage("memory storage poisoned".into()))?;
        slots.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
