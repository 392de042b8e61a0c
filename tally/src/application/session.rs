use std::path::{Path, PathBuf};

use tracing::warn;

use tally_core::error::{Result, TallyError};
use tally_core::storage::StorageParams;
use tally_core::storage_factory::{Backend, open_storage};
use tally_core::{
    Catalog, CatalogItem, OrderStore, Preset, TallyConfig, TotalsSummary, compute_with_policy,
};

/// Everything one command needs: resolved config, catalog, and the loaded order.
pub struct Session {
    pub config: TallyConfig,
    pub catalog: Catalog,
    pub store: OrderStore,
}

impl Session {
    pub fn open(data_dir: PathBuf, config: TallyConfig, ephemeral: bool) -> Result<Self> {
        let catalog = config.build_catalog()?;
        let backend = if ephemeral { Backend::Memory } else { Backend::Fs };
        let params = StorageParams {
            data_dir: data_dir.clone(),
        };
        // an unusable data dir must not stop the session
        let storage = match open_storage(backend, params) {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    dir = %data_dir.display(),
                    error = %e,
                    "order storage unavailable, keeping order in memory"
                );
                open_storage(Backend::Memory, StorageParams { data_dir })?
            }
        };
        let store = OrderStore::load(storage, &config.storage_key);
        Ok(Self {
            config,
            catalog,
            store,
        })
    }

    pub fn item(&self, id: &str) -> Result<&CatalogItem> {
        self.catalog
            .get(id)
            .ok_or_else(|| TallyError::UnknownItem(id.to_string()))
    }

    pub fn summary(&self, service_charge_enabled: bool) -> TotalsSummary {
        compute_with_policy(
            &self.catalog,
            self.store.quantities(),
            service_charge_enabled,
            &self.config.service_charge,
        )
    }
}

/// Config file wins over the preset when both are given.
pub fn resolve_config(config_path: Option<&Path>, preset: Preset) -> Result<TallyConfig> {
    match config_path {
        Some(p) => TallyConfig::load(p),
        None => Ok(TallyConfig::from_preset(preset)),
    }
}
