//! HTTP helpers for the remote JSON API.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

pub const API_URL_ENV_VAR: &str = "RICHELIEU_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

pub fn api_base_url() -> String {
    let url = std::env::var(API_URL_ENV_VAR).unwrap_or(DEFAULT_API_URL.to_string());
    normalize_base_url(&url)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Join `path` onto the base url. `path` may or may not start with `/`.
pub fn join_api_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", normalize_base_url(base_url), path.trim_start_matches('/'))
}

pub async fn api_get_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let url = join_api_url(&api_base_url(), path);
    let request = reqwest::Client::new().get(&url);
    send_json(url, request).await
}

pub async fn api_post_json<T: DeserializeOwned, B: Serialize + ?Sized>(path: &str, body: &B) -> anyhow::Result<T> {
    let url = join_api_url(&api_base_url(), path);
    let request = reqwest::Client::new().post(&url).json(body);
    send_json(url, request).await
}

async fn send_json<T: DeserializeOwned>(url: String, request: reqwest::RequestBuilder) -> anyhow::Result<T> {
    let t0 = std::time::Instant::now();
    let response = request.send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    let dt_ms = t0.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        warn!("API ERROR: {} {} (in {}ms)", url, status, dt_ms);
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    info!("API RESPONSE: {} len = {} (in {}ms)", url, response_txt.len(), dt_ms);
    let response: T = serde_json::from_str(&response_txt)?;
    Ok(response)
}
