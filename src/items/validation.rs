//! Structural validation of inbound payloads and parameters.
//!
//! # Design Decisions
//! - Inputs arrive loosely typed (`serde_json::Value`, raw query/path strings)
//! - Type checks and range checks run side by side; callers receive the full
//!   list of violations
//! - Errors carry a location path (`["body", "price"]`) and a machine-readable kind
//! - Business rules are not checked here (see catalog.rs)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::items::types::{ItemIn, SumIn, SumRequest, ValidItem};

/// Bounds for the `limit` query parameter of `/safe-items`.
pub const LIMIT_MIN: i64 = 1;
pub const LIMIT_MAX: i64 = 100;
pub const LIMIT_DEFAULT: i64 = 10;

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

fn required<'a>(errors: &mut Vec<FieldError>, loc: &[&str], value: Option<&'a Value>) -> Option<&'a Value> {
    if value.is_none() {
        errors.push(FieldError::new(loc, "Field required", "missing"));
    }
    value
}

fn number(errors: &mut Vec<FieldError>, loc: &[&str], value: &Value) -> Option<f64> {
    let n = value.as_f64();
    if n.is_none() {
        errors.push(FieldError::new(loc, "Input should be a valid number", "float_type"));
    }
    n
}

fn string<'a>(errors: &mut Vec<FieldError>, loc: &[&str], value: &'a Value) -> Option<&'a str> {
    let s = value.as_str();
    if s.is_none() {
        errors.push(FieldError::new(loc, "Input should be a valid string", "string_type"));
    }
    s
}

fn integer(errors: &mut Vec<FieldError>, loc: &[&str], raw: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(FieldError::new(
                loc,
                "Input should be a valid integer, unable to parse string as an integer",
                "int_parsing",
            ));
            None
        }
    }
}

/// Check an item body and normalize it.
pub fn validate_item(item: &ItemIn) -> Result<ValidItem, Vec<FieldError>> {
    const NAME: &[&str] = &["body", "name"];
    const PRICE: &[&str] = &["body", "price"];
    const TAX_RATE: &[&str] = &["body", "tax_rate"];

    let mut errors = Vec::new();

    let name = required(&mut errors, NAME, item.name.as_ref())
        .and_then(|v| string(&mut errors, NAME, v))
        .map(str::trim);
    if name == Some("") {
        errors.push(FieldError::new(NAME, "name cannot be blank", "value_error"));
    }

    let price = required(&mut errors, PRICE, item.price.as_ref())
        .and_then(|v| number(&mut errors, PRICE, v));
    if let Some(price) = price {
        if price <= 0.0 {
            errors.push(FieldError::new(PRICE, "Input should be greater than 0", "greater_than"));
        }
    }

    let tax_rate = item
        .tax_rate
        .as_ref()
        .and_then(|v| number(&mut errors, TAX_RATE, v));
    if let Some(rate) = tax_rate {
        if !(0.0..=1.0).contains(&rate) {
            errors.push(FieldError::new(TAX_RATE, "Input should be between 0 and 1", "range"));
        }
    }

    match (name, price) {
        (Some(name), Some(price)) if errors.is_empty() => Ok(ValidItem {
            name: name.to_string(),
            price,
            tax_rate,
        }),
        _ => Err(errors),
    }
}

/// Check both operands of a sum.
pub fn validate_sum(body: &SumIn) -> Result<SumRequest, Vec<FieldError>> {
    const A: &[&str] = &["body", "a"];
    const B: &[&str] = &["body", "b"];

    let mut errors = Vec::new();
    let a = required(&mut errors, A, body.a.as_ref()).and_then(|v| number(&mut errors, A, v));
    let b = required(&mut errors, B, body.b.as_ref()).and_then(|v| number(&mut errors, B, v));

    match (a, b) {
        (Some(a), Some(b)) => Ok(SumRequest { a, b }),
        _ => Err(errors),
    }
}

/// Parse `x` for `/double` and compute `2x`, rejecting overflow.
pub fn validate_double(x: Option<&str>) -> Result<(i64, i64), Vec<FieldError>> {
    const X: &[&str] = &["query", "x"];

    let mut errors = Vec::new();
    let Some(x) = x else {
        errors.push(FieldError::new(X, "Field required", "missing"));
        return Err(errors);
    };
    let Some(x) = integer(&mut errors, X, x) else {
        return Err(errors);
    };

    match x.checked_mul(2) {
        Some(doubled) => Ok((x, doubled)),
        None => Err(vec![FieldError::new(
            X,
            "Doubled value does not fit in a 64-bit integer",
            "int_overflow",
        )]),
    }
}

/// Parse the `item_id` path segment.
pub fn validate_item_id(raw: &str) -> Result<i64, Vec<FieldError>> {
    let mut errors = Vec::new();
    integer(&mut errors, &["path", "item_id"], raw).ok_or(errors)
}

/// Check the `/safe-items` parameters, applying the `limit` default.
pub fn validate_safe_item(item_id: &str, limit: Option<&str>) -> Result<(i64, i64), Vec<FieldError>> {
    const ITEM_ID: &[&str] = &["path", "item_id"];
    const LIMIT: &[&str] = &["query", "limit"];

    let mut errors = Vec::new();

    let item_id = integer(&mut errors, ITEM_ID, item_id);
    if let Some(id) = item_id {
        if id <= 0 {
            errors.push(FieldError::new(ITEM_ID, "Input should be greater than 0", "greater_than"));
        }
    }

    let limit = match limit {
        Some(raw) => integer(&mut errors, LIMIT, raw),
        None => Some(LIMIT_DEFAULT),
    };
    if let Some(limit) = limit {
        if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
            errors.push(FieldError::new(
                LIMIT,
                format!("Input should be between {LIMIT_MIN} and {LIMIT_MAX}"),
                "range",
            ));
        }
    }

    match (item_id, limit) {
        (Some(item_id), Some(limit)) if errors.is_empty() => Ok((item_id, limit)),
        _ => Err(errors),
    }
}
