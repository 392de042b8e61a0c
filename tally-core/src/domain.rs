// tally_core/src/domain.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Plate,
    Side,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub display_name: String,
    pub unit_price: u64,
    #[serde(default)]
    pub kind: ItemKind,
}

impl CatalogItem {
    pub fn new(id: &str, display_name: &str, unit_price: u64, kind: ItemKind) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            unit_price,
            kind,
        }
    }
}

/// One catalog entry with a nonzero quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub line_total: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TotalsSummary {
    pub line_items: Vec<LineItem>,
    pub subtotal: u64,
    pub service_charge: u64,
    pub grand_total: u64,
    pub total_item_count: u64,
}
