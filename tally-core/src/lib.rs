#![forbid(unsafe_code)]

pub mod error;
pub mod policy;

pub mod domain;
pub mod catalog;
pub mod order;

pub mod storage;
pub mod storage_fs;
pub mod storage_mem;
pub mod storage_factory;
pub mod store;

pub mod aggregate;
pub mod receipt;
pub mod sink;

pub mod config;

// Re-exports: stable API surface
pub use aggregate::{compute, compute_with_policy};
pub use catalog::Catalog;
pub use config::{Preset, TallyConfig};
pub use domain::{CatalogItem, ItemKind, LineItem, TotalsSummary};
pub use order::OrderQuantities;
pub use receipt::{ReceiptLabels, format_receipt};
pub use store::OrderStore;
