use crate::error::Result;
use crate::storage::{OrderStorage, StorageParams};
use crate::storage_fs::FsStorage;
use crate::storage_mem::MemoryStorage;

pub enum Backend {
    Fs,
    Memory,
}

pub fn open_storage(backend: Backend, p: StorageParams) -> Result<Box<dyn OrderStorage>> {
    match backend {
        Backend::Fs => Ok(Box::new(FsStorage::new(p)?)),
        Backend::Memory => Ok(Box::new(MemoryStorage::new())),
    }
}
