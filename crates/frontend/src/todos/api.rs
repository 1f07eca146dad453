use contracts::todos::Todo;
use gloo_net::http::Request;

use crate::shared::api_utils::{todo_url, TODOS_BASE};

/// Fetch all to-dos
pub async fn fetch_todos() -> Result<Vec<Todo>, String> {
    let url = format!("{}/", TODOS_BASE);
    let response = Request::get(&url)
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
    log::debug!("GET {} -> {}", url, text);

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one to-do by id
pub async fn fetch_todo(id: &str) -> Result<Todo, String> {
    let url = todo_url(id);
    let response = Request::get(&url)
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
    log::debug!("GET {} -> {}", url, text);

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}
