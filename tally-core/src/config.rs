use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::CatalogItem;
use crate::error::{Result, TallyError};
use crate::policy::ServiceChargePolicy;
use crate::receipt::ReceiptLabels;
use crate::storage::validate_key;

/// The two shipped variants of the tally screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Hk,
    En,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub storage_key: String,
    pub service_charge: ServiceChargePolicy,
    pub labels: ReceiptLabels,
    /// Replaces the built-in table when set.
    pub catalog: Option<Vec<CatalogItem>>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Hk)
    }
}

impl TallyConfig {
    pub fn from_preset(preset: Preset) -> Self {
        let (storage_key, labels) = match preset {
            Preset::Hk => ("sushiro_order", ReceiptLabels::hk()),
            Preset::En => ("sushiro_order_en", ReceiptLabels::en()),
        };
        Self {
            storage_key: storage_key.to_string(),
            service_charge: ServiceChargePolicy::default(),
            labels,
            catalog: None,
        }
    }

    /// Read a JSON config file. Fields left out fall back to the `Hk` preset.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TallyError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: TallyConfig = serde_json::from_str(raw)
            .map_err(|e| TallyError::Config(format!("config decode: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage_key).map_err(|e| TallyError::Config(e.to_string()))?;
        if self.service_charge.rate_percent > 100 {
            return Err(TallyError::Config(format!(
                "service charge rate {}% is over 100%",
                self.service_charge.rate_percent
            )));
        }
        self.build_catalog().map(|_| ())
    }

    pub fn build_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(items) => Catalog::new(items.clone()),
            None => Ok(Catalog::sushiro()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RoundingMode;

    #[test]
    fn presets_differ_in_key_and_labels() {
        let hk = TallyConfig::from_preset(Preset::Hk);
        let en = TallyConfig::from_preset(Preset::En);
        assert_eq!(hk.storage_key, "sushiro_order");
        assert_ne!(hk.storage_key, en.storage_key);
        assert_ne!(hk.labels, en.labels);
        assert_eq!(hk.service_charge, en.service_charge);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = TallyConfig::from_json(r#"{"service_charge":{"rounding":"half_even"}}"#).unwrap();
        assert_eq!(cfg.storage_key, "sushiro_order");
        assert_eq!(cfg.service_charge.rate_percent, 10);
        assert_eq!(cfg.service_charge.rounding, RoundingMode::HalfEven);
        assert_eq!(cfg.build_catalog().unwrap(), Catalog::sushiro());
    }

    #[test]
    fn custom_catalog() {
        let cfg = TallyConfig::from_json(
            r#"{"catalog":[
                {"id":"blue","display_name":"Blue","unit_price":10},
                {"id":"pudding","display_name":"Pudding","unit_price":15,"kind":"side"}
            ]}"#,
        )
        .unwrap();
        let cat = cfg.build_catalog().unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.sides().count(), 1);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(TallyConfig::from_json("{").is_err());
        assert!(TallyConfig::from_json(r#"{"storage_key":"../x"}"#).is_err());
        assert!(TallyConfig::from_json(r#"{"service_charge":{"rate_percent":250}}"#).is_err());
        assert!(
            TallyConfig::from_json(
                r#"{"catalog":[{"id":"a","display_name":"A","unit_price":1},{"id":"a","display_name":"B","unit_price":2}]}"#
            )
            .is_err()
        );
    }

    #[test]
    fn missing_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = TallyConfig::load(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
    }
}
