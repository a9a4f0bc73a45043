//! REST calls for the location collection. The full list also serves as the
//! pick-list of the employee form.

use contracts::domain::a002_location::aggregate::Location;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_locations() -> Result<Vec<Location>, String> {
    let response = Request::get(&api_url("/api/v1/locations"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Location>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn add_location(location: &Location) -> Result<String, String> {
    let response = Request::post(&api_url("/api/v1/locations/add"))
        .json(location)
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

pub async fn update_location(location: &Location) -> Result<String, String> {
    let response = Request::put(&api_url("/api/v1/locations/update"))
        .json(location)
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
