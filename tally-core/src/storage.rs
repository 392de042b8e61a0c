// tally_core/src/storage.rs
use crate::error::{Result, TallyError};

#[derive(Clone, Debug)]
pub struct StorageParams {
    pub data_dir: std::path::PathBuf,
}

/// Key/value durable storage holding one serialized payload per key.
pub trait OrderStorage: Send + Sync {
    /// `Ok(None)` when nothing has been written under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, payload: &str) -> Result<()>;
}

/// Keys double as file stems, so keep them to a safe charset.
pub fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if ok {
        Ok(())
    } else {
        Err(TallyError::Storage(format!("invalid storage key: {key:?}")))
    }
}
