//! Request and response payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /sum`, as received. Field types are checked by
/// `validate_sum`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SumIn {
    pub a: Option<Value>,
    pub b: Option<Value>,
}

/// Operands of a validated sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumRequest {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SumResponse {
    pub result: f64,
}

/// Body of `POST /items`, as received.
///
/// Every field is kept loose so that type and range problems can be
/// reported together; `null` reads as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemIn {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub tax_rate: Option<Value>,
}

/// An item that passed structural validation.
///
/// `name` is already trimmed and `tax_rate` is within [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem {
    pub name: String,
    pub price: f64,
    pub tax_rate: Option<f64>,
}

impl ValidItem {
    /// Price including tax; an absent rate counts as zero.
    pub fn price_with_tax(&self) -> f64 {
        self.price * (1.0 + self.tax_rate.unwrap_or(0.0))
    }
}

/// A created item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOut {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub price_with_tax: f64,
}
