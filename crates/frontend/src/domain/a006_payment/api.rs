//! REST calls for payments. The asset and supplier drop-lists the form
//! needs live with their own domains.

use contracts::domain::a006_payment::aggregate::{Payment, PaymentListRow};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_payments() -> Result<Vec<PaymentListRow>, String> {
    let response = Request::get(&api_url("/api/v1/payment/list"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<PaymentListRow>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn add_payment(payment: &Payment) -> Result<String, String> {
    let response = Request::post(&api_url("/api/v1/payment/add"))
        .json(payment)
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
