//! REST calls for the category collection. The full list also serves as
//! the pick-list of the asset form.

use contracts::domain::a005_category::aggregate::Category;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/v1/categories"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn add_category(category: &Category) -> Result<String, String> {
    let response = Request::post(&api_url("/api/v1/categories/add"))
        .json(category)
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

pub async fn update_category(category: &Category) -> Result<String, String> {
    let response = Request::put(&api_url("/api/v1/categories/update"))
        .json(category)
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
