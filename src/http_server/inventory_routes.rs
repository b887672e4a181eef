//! Inventory HTTP Routes
//!
//! The four inventory operations: add, remove-one, delete, report.
//!
//! Wire contract:
//!
//! | Method | Path      | Body                | Success                  |
//! |--------|-----------|---------------------|--------------------------|
//! | POST   | /add      | `{item, quantity}`  | `{"status": "success"}`  |
//! | POST   | /remove   | `{id}`              | `{"status": "success"}`  |
//! | POST   | /delete   | `{id}`              | `{"status": "success"}`  |
//! | GET    | /report   | —                   | `[{id, item_name, quantity}, …]` |
//!
//! Validation failures return 400 with `{"status": "error", "message"}`.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{InventoryItem, InventoryStore};

use super::errors::{ApiError, ApiResult};

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    pub item: Option<String>,
    /// Accepted as any JSON value and coerced; see [`coerce_quantity`].
    #[serde(default)]
    pub quantity: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ItemIdRequest {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Success acknowledgment: `{"status": "success"}`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    fn success() -> Self {
        Self { status: "success" }
    }
}

// ==================
// Routes
// ==================

/// Create inventory routes; mounted under `/api` by the server.
pub fn inventory_routes<S: InventoryStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/add", post(add_handler::<S>))
        .route("/remove", post(remove_handler::<S>))
        .route("/delete", post(delete_handler::<S>))
        .route("/report", get(report_handler::<S>))
        .with_state(store)
}

// ==================
// Validation Helpers
// ==================

/// Coerce a JSON value to an integer quantity: integers pass through,
/// floats truncate toward zero, decimal strings parse. Everything else is
/// rejected.
fn coerce_quantity(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        if f.is_finite() && f.trunc() >= i64::MIN as f64 && f.trunc() <= i64::MAX as f64 {
            return Some(f.trunc() as i64);
        }
        return None;
    }
    value.as_str().and_then(|s| s.trim().parse().ok())
}

/// Reject a missing id, and an id of literal zero along with it. Zero is
/// treated as missing; BIGSERIAL ids start at 1, so no real row is
/// unreachable.
fn require_item_id(id: Option<i64>) -> ApiResult<i64> {
    match id {
        None | Some(0) => Err(ApiError::InvalidRequest("Missing item ID".to_string())),
        Some(id) => Ok(id),
    }
}

// ==================
// Handlers
// ==================

async fn add_handler<S: InventoryStore + 'static>(
    State(store): State<Arc<S>>,
    Json(body): Json<AddRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let item_name = match body.item.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(ApiError::InvalidRequest(
                "Missing item or quantity".to_string(),
            ))
        }
    };
    let quantity = match &body.quantity {
        None | Some(Value::Null) => {
            return Err(ApiError::InvalidRequest(
                "Missing item or quantity".to_string(),
            ))
        }
        Some(value) => coerce_quantity(value).ok_or_else(|| {
            ApiError::InvalidRequest("Quantity must be an integer".to_string())
        })?,
    };

    store.add_item(item_name, quantity).await?;
    Ok(Json(StatusResponse::success()))
}

async fn remove_handler<S: InventoryStore + 'static>(
    State(store): State<Arc<S>>,
    Json(body): Json<ItemIdRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let id = require_item_id(body.id)?;
    store.remove_one(id).await?;
    Ok(Json(StatusResponse::success()))
}

async fn delete_handler<S: InventoryStore + 'static>(
    State(store): State<Arc<S>>,
    Json(body): Json<ItemIdRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let id = require_item_id(body.id)?;
    store.delete_item(id).await?;
    Ok(Json(StatusResponse::success()))
}

async fn report_handler<S: InventoryStore + 'static>(
    State(store): State<Arc<S>>,
) -> ApiResult<Json<Vec<InventoryItem>>> {
    let items = store.report().await?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn coerce_quantity_accepts_integers() {
        assert_eq!(coerce_quantity(&json!(5)), Some(5));
        assert_eq!(coerce_quantity(&json!(0)), Some(0));
        assert_eq!(coerce_quantity(&json!(-3)), Some(-3));
    }

    #[test]
    fn coerce_quantity_truncates_floats() {
        assert_eq!(coerce_quantity(&json!(5.9)), Some(5));
        assert_eq!(coerce_quantity(&json!(-2.7)), Some(-2));
    }

    #[test]
    fn coerce_quantity_parses_decimal_strings() {
        assert_eq!(coerce_quantity(&json!("42")), Some(42));
        assert_eq!(coerce_quantity(&json!(" 7 ")), Some(7));
        assert_eq!(coerce_quantity(&json!("7.5")), None);
        assert_eq!(coerce_quantity(&json!("seven")), None);
    }

    #[test]
    fn coerce_quantity_rejects_other_types() {
        assert_eq!(coerce_quantity(&json!(true)), None);
        assert_eq!(coerce_quantity(&json!([1])), None);
        assert_eq!(coerce_quantity(&json!({"n": 1})), None);
    }

    #[test]
    fn item_id_zero_counts_as_missing() {
        assert!(require_item_id(None).is_err());
        assert!(require_item_id(Some(0)).is_err());
        assert_eq!(require_item_id(Some(1)).unwrap(), 1);
        // Negative ids pass validation and fall through to a store no-op.
        assert_eq!(require_item_id(Some(-1)).unwrap(), -1);
    }
}
