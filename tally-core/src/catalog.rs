use std::collections::HashSet;

use crate::domain::{CatalogItem, ItemKind};
use crate::error::{Result, TallyError};

/// Fixed price table. Declaration order is display and receipt order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(TallyError::Config("catalog item with empty id".into()));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(TallyError::Config(format!(
                    "duplicate catalog id: {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// Built-in Sushiro table: four colour tiers, then side items.
    pub fn sushiro() -> Self {
        use ItemKind::{Plate, Side};
        let items = vec![
            CatalogItem::new("red", "紅碟 (Red)", 12, Plate),
            CatalogItem::new("silver", "銀碟 (Silver)", 17, Plate),
            CatalogItem::new("gold", "金碟 (Gold)", 22, Plate),
            CatalogItem::new("black", "黑碟 (Black)", 27, Plate),
            CatalogItem::new("side_12", "小食/甜品 ($12)", 12, Side),
            CatalogItem::new("side_17", "小食/甜品 ($17)", 17, Side),
            CatalogItem::new("side_22", "小食/甜品 ($22)", 22, Side),
            CatalogItem::new("side_27", "小食/甜品 ($27)", 27, Side),
            CatalogItem::new("side_32", "特選 ($32)", 32, Side),
            CatalogItem::new("side_37", "特選 ($37)", 37, Side),
        ];
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn plates(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(|i| i.kind == ItemKind::Plate)
    }

    pub fn sides(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(|i| i.kind == ItemKind::Side)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sushiro()
    }
}
