//! REST calls for the employee collection.

use contracts::domain::a003_employee::aggregate::Employee;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_employees() -> Result<Vec<Employee>, String> {
    let response = Request::get(&api_url("/api/v1/employees"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {e}"))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Employee>>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn add_employee(employee: &Employee) -> Result<String, String> {
    let response = Request::post(&api_url("/api/v1/employees/add"))
        .json(employee)
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

pub async fn update_employee(employee: &Employee) -> Result<String, String> {
    let response = Request::put(&api_url("/api/v1/employees/update"))
        .json(employee)
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
