//! Endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extract::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::items::validation::{
    validate_double, validate_item, validate_item_id, validate_safe_item, validate_sum,
};
use crate::items::{ItemIn, ItemOut, SumIn, SumResponse};
use crate::observability::metrics;

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}

pub async fn health() -> Json<Health> {
    Json(Health { ok: true })
}

#[derive(Debug, Deserialize)]
pub struct GreetParams {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

pub async fn greet(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<GreetParams>,
) -> Json<Greeting> {
    let name = params
        .name
        .unwrap_or_else(|| state.default_greeting_name.to_string());
    Json(Greeting {
        greeting: format!("Hello, {name}!"),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemId {
    pub id: i64,
}

pub async fn read_item(ValidPath(item_id): ValidPath<String>) -> Result<Json<ItemId>, ApiError> {
    let id = validate_item_id(&item_id)?;
    Ok(Json(ItemId { id }))
}

pub async fn sum(ValidJson(body): ValidJson<SumIn>) -> Result<Json<SumResponse>, ApiError> {
    let operands = validate_sum(&body)?;
    Ok(Json(SumResponse {
        result: operands.a + operands.b,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DoubleParams {
    pub x: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Doubled {
    pub x: i64,
    pub double: i64,
}

pub async fn double(ValidQuery(params): ValidQuery<DoubleParams>) -> Result<Json<Doubled>, ApiError> {
    let (x, double) = validate_double(params.x.as_deref())?;
    Ok(Json(Doubled { x, double }))
}

pub async fn create_item(
    State(state): State<AppState>,
    ValidJson(item): ValidJson<ItemIn>,
) -> Result<(StatusCode, Json<ItemOut>), ApiError> {
    let item = validate_item(&item)?;

    let created = state.catalog.create(item).inspect_err(|e| {
        tracing::warn!(error = %e, "Item rejected by business rule");
    })?;

    metrics::record_item_created();
    tracing::info!(
        id = created.id,
        name = %created.name,
        price = created.price,
        price_with_tax = created.price_with_tax,
        "Item created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Deserialize)]
pub struct SafeItemParams {
    pub limit: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SafeItem {
    pub item_id: i64,
    pub limit: i64,
}

pub async fn get_safe_item(
    ValidPath(item_id): ValidPath<String>,
    ValidQuery(params): ValidQuery<SafeItemParams>,
) -> Result<Json<SafeItem>, ApiError> {
    let (item_id, limit) = validate_safe_item(&item_id, params.limit.as_deref())?;
    Ok(Json(SafeItem { item_id, limit }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
