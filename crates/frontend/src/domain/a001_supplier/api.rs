//! REST calls for the supplier collection.

use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierDropItem};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    let response = Request::get(&api_url("/api/v1/suppliers"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Supplier>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// Create. The backend answers with a plain-text confirmation that the
/// form surfaces as its success message.
pub async fn add_supplier(supplier: &Supplier) -> Result<String, String> {
    let response = Request::post(&api_url("/api/v1/suppliers/add"))
        .json(supplier)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))
}

/// Update; `supplier_id` must be set so the backend can target the row.
pub async fn update_supplier(supplier: &Supplier) -> Result<String, String> {
    let response = Request::put(&api_url("/api/v1/suppliers/update"))
        .json(supplier)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))
}

/// Minimal id+name projection for selectors.
pub async fn fetch_supplier_drop() -> Result<Vec<SupplierDropItem>, String> {
    let response = Request::get(&api_url("/api/v1/suppliers/dropList"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<SupplierDropItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}
