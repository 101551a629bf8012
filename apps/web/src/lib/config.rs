//! Build-time API configuration with an optional runtime override.
//!
//! The base URL comes from `PORTFOLIO_API_BASE_URL` (or `PORTFOLIO_API_URL`) at
//! build time. Static deployments can point the site elsewhere without a rebuild
//! by defining `window.PORTFOLIO_CONFIG = { api_base_url: "..." }` before the
//! wasm bundle loads. Values are public; do not put secrets here.

use tracing::warn;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("PORTFOLIO_API_BASE_URL")
            .or(option_env!("PORTFOLIO_API_URL"))
            .and_then(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mut config = Self { api_base_url };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTFOLIO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_base_url(&value)
}

/// Accepts a same-origin path (`/api`) or an absolute http(s) URL.
fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        return Some(trimmed.to_string());
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(trimmed.to_string()),
        Ok(url) => {
            warn!(scheme = url.scheme(), "ignoring API base URL with unsupported scheme");
            None
        }
        Err(err) => {
            warn!(error = %err, "ignoring malformed API base URL");
            None
        }
    }
}
