//! Client configuration, resolved once at startup.
//!
//! The embedding page sets globals before the wasm module loads:
//!
//! ```html
//! <script>
//!   window.LOGVIEW_API_BASE = "http://localhost:8000";
//!   window.LOGVIEW_API_KEY = "dev-key";        // optional
//!   window.LOGVIEW_DEMO_SEED = false;          // optional
//! </script>
//! ```

use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the log service, without a trailing slash
    pub base_url: String,
    /// Static API key sent as `X-API-Key` on every request when set
    pub api_key: Option<String>,
    /// Opt-in for the demo-seed fallback after imports without bodies
    pub demo_seed: bool,
}

/// The embedding page did not provide a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration error: {}", self.0)
    }
}

static CONFIG: OnceCell<Result<ApiConfig, ConfigError>> = OnceCell::new();

fn window_global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()
}

fn global_string(name: &str) -> Option<String> {
    window_global(name)
        .and_then(|value| value.as_string())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn global_bool(name: &str) -> bool {
    window_global(name)
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

fn resolve() -> Result<ApiConfig, ConfigError> {
    let base_url = global_string("LOGVIEW_API_BASE")
        .ok_or_else(|| ConfigError("LOGVIEW_API_BASE is not set".to_string()))?;
    Ok(ApiConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        api_key: global_string("LOGVIEW_API_KEY"),
        demo_seed: global_bool("LOGVIEW_DEMO_SEED"),
    })
}

/// Config from `window`, resolved on first call and cached for the session.
pub fn get() -> Result<&'static ApiConfig, ConfigError> {
    match CONFIG.get_or_init(resolve) {
        Ok(config) => Ok(config),
        Err(e) => Err(e.clone()),
    }
}
