//! Build-time API configuration with an optional runtime override.
//!
//! The base URL comes from `POS_API_BASE_URL` at build time. In the browser,
//! `window.POS_CONFIG.api_base_url` (if present and non-blank) replaces it so
//! static deployments can point at another backend without rebuilding.
//! Values here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Request timeout applied to every auth call.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin (and optional prefix) of the auth API. Empty means same-origin.
    pub api_base_url: String,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("POS_API_BASE_URL").unwrap_or("").to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build-time defaults with the browser override applied.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(base) = runtime_api_base_url() {
            config.api_base_url = base;
        }
        config
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        build_url(&self.api_base_url, path)
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(feature = "hydrate")]
fn runtime_api_base_url() -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("POS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(not(feature = "hydrate"))]
fn runtime_api_base_url() -> Option<String> {
    None
}
