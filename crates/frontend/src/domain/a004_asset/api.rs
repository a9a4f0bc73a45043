//! REST calls for the asset collection.

use contracts::domain::a004_asset::aggregate::{Asset, AssetDropItem};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_assets() -> Result<Vec<Asset>, String> {
    let response = Request::get(&api_url("/api/v1/assets"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Asset>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn add_asset(asset: &Asset) -> Result<String, String> {
    let response = Request::post(&api_url("/api/v1/assets/add"))
        .json(asset)
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

pub async fn update_asset(asset: &Asset) -> Result<String, String> {
    let response = Request::put(&api_url("/api/v1/assets/update"))
        .json(asset)
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

/// Minimal id+name projection for selectors. Note the endpoint name: the
/// backend exposes this one as `/assetDrop`, not under `/assets/`.
pub async fn fetch_asset_drop() -> Result<Vec<AssetDropItem>, String> {
    let response = Request::get(&api_url("/api/v1/assetDrop"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<AssetDropItem>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}
