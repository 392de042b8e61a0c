use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::storage::{OrderStorage, StorageParams, validate_key};

/// One `<key>.json` file per key under `dir`.
pub struct FsStorage {
    dir: PathBuf,
}

impl FsStorage {
    pub fn new(params: StorageParams) -> Result<Self> {
        std::fs::create_dir_all(&params.data_dir)?;
        Ok(Self {
            dir: params.data_dir,
        })
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl OrderStorage for FsStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // temp file in the same dir so the rename stays on one filesystem
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(payload.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }
}
