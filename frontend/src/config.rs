use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

const ENV_GLOBAL: &str = "__ADMIN_SETTINGS_ENV";
const CONFIG_GLOBAL: &str = "__ADMIN_SETTINGS_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("failed to fetch runtime config: {0}")]
    Fetch(String),
    #[error("runtime config responded with status {0}")]
    Status(u16),
    #[error("invalid runtime config: {0}")]
    Parse(String),
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn read_global_key(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__ADMIN_SETTINGS_ENV (env.js) wins over window.__ADMIN_SETTINGS_CONFIG.
    read_global_key(ENV_GLOBAL, ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key(CONFIG_GLOBAL, ["api_base_url", "API_BASE_URL"]))
        .filter(|url| !url.trim().is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    API_BASE_URL.get_or_init(|| value).clone()
}

fn write_window_config(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> Result<RuntimeConfig, ConfigError> {
    let origin = web_sys::window()
        .ok_or(ConfigError::NoWindow)?
        .location()
        .origin()
        .map_err(|_| ConfigError::NoWindow)?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) if !url.trim().is_empty() => {
            write_window_config(&url);
            return cache_base_url(&url);
        }
        Ok(_) => log::info!("config.json has no api_base_url, using default"),
        Err(err) => log::warn!("{}; using default API base URL", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base_url);
}
