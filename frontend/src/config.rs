use crate::auth::LoginDelay;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const ENV_GLOBAL: &str = "__TOUR_MANAGER_ENV";

/// Optional overrides injected by the hosting page, e.g.
/// `window.__TOUR_MANAGER_ENV = { login_delay_ms: 0, log_level: "debug" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "LOGIN_DELAY_MS")]
    pub login_delay_ms: Option<u64>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    pub fn login_delay(&self) -> LoginDelay {
        self.login_delay_ms
            .map(LoginDelay::from_millis)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(log::Level::Info)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> RuntimeConfig {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::warn!("ignoring malformed runtime config: {}", err);
        RuntimeConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &ENV_GLOBAL.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    Some(parse_runtime_config(&raw))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    log::debug!("{} is only read in the browser", ENV_GLOBAL);
    None
}

pub fn runtime_config() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| snapshot_from_globals().unwrap_or_default())
}
