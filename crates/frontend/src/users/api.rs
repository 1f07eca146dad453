use contracts::users::{ResponseRecord, User, UserInput};
use gloo_net::http::Request;

use crate::shared::api_utils::{user_url, USERS_URL};

/// Fetch the users collection
pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = Request::get(USERS_URL)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    log::debug!("GET {} -> {}", USERS_URL, text);

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a user from the given form input
pub async fn create_user(input: &UserInput) -> Result<ResponseRecord, String> {
    let response = Request::post(USERS_URL)
        .json(input)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    log::debug!("POST {} -> {}", USERS_URL, text);

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update user 1 with the given form input
pub async fn update_user(input: &UserInput) -> Result<ResponseRecord, String> {
    let url = user_url(1);
    let response = Request::put(&url)
        .json(input)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    log::debug!("PUT {} -> {}", url, text);

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete user 1. Takes no payload; form input plays no part here.
pub async fn delete_user() -> Result<ResponseRecord, String> {
    let url = user_url(1);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    log::debug!("DELETE {} -> {}", url, text);

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
