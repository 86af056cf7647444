//! Item creation.
//!
//! Structural validation must already have passed; this applies the
//! business rules and allocates an id. The counter is only touched once
//! every check has succeeded.

use std::sync::Arc;

use thiserror::Error;

use crate::items::counter::IdCounter;
use crate::items::types::{ItemOut, ValidItem};

/// Domain-rule violations for well-formed items.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemError {
    #[error("price too high")]
    PriceTooHigh,
}

pub struct ItemCatalog {
    ids: Arc<IdCounter>,
    max_price: f64,
}

impl ItemCatalog {
    pub fn new(ids: Arc<IdCounter>, max_price: f64) -> Self {
        Self { ids, max_price }
    }

    pub fn create(&self, item: ValidItem) -> Result<ItemOut, ItemError> {
        if item.price > self.max_price {
            return Err(ItemError::PriceTooHigh);
        }

        let price_with_tax = item.price_with_tax();
        Ok(ItemOut {
            id: self.ids.next_id(),
            name: item.name,
            price: item.price,
            price_with_tax,
        })
    }

    pub fn last_id(&self) -> u64 {
        self.ids.current()
    }
}
