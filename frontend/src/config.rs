use crate::env_variable_utils::{current_pathname, get_app_name, get_env_or, get_env_var, is_debug_mode};
use lazy_static::lazy_static;
use std::time::Duration;

pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_PROXY_SEGMENT: &str = "/proxy/5000";

lazy_static! {
    pub static ref CONFIG: DashboardConfig = DashboardConfig::from_env();
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub app_name: String,
    pub api_base: String,
    pub debug: bool,
    pub timing: Timing,
}

/// Fixed delays used by the action controller and the status banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub refresh_delay: Duration,
    pub reload_delay: Duration,
    pub status_timeout: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            refresh_delay: Duration::from_millis(1000),
            reload_delay: Duration::from_millis(1000),
            status_timeout: Duration::from_millis(5000),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let api_prefix = get_env_var("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());
        let proxy_segment =
            get_env_var("PROXY_SEGMENT").unwrap_or_else(|| DEFAULT_PROXY_SEGMENT.to_string());
        let origin = get_env_var("BACKEND_URL").unwrap_or_default();

        let api_base = format!(
            "{}{}",
            origin.trim_end_matches('/'),
            resolve_api_base(&current_pathname(), &proxy_segment, &api_prefix)
        );

        let defaults = Timing::default();
        let timing = Timing {
            refresh_delay: Duration::from_millis(get_env_or(
                "REFRESH_DELAY_MS",
                defaults.refresh_delay.as_millis() as u64,
            )),
            reload_delay: Duration::from_millis(get_env_or(
                "RELOAD_DELAY_MS",
                defaults.reload_delay.as_millis() as u64,
            )),
            status_timeout: Duration::from_millis(get_env_or(
                "STATUS_TIMEOUT_MS",
                defaults.status_timeout.as_millis() as u64,
            )),
        };

        Self {
            app_name: get_app_name(),
            api_base,
            debug: is_debug_mode(),
            timing,
        }
    }
}

/// Builds the API base path for a page served at `pathname`.
///
/// When the page sits beneath a reverse-proxy path (e.g. a notebook server
/// exposing the app at `/user/x/proxy/5000/`), everything up to and including
/// the first occurrence of `proxy_segment` is kept as a prefix.
pub fn resolve_api_base(pathname: &str, proxy_segment: &str, api_prefix: &str) -> String {
    if proxy_segment.is_empty() {
        return api_prefix.to_string();
    }
    match pathname.find(proxy_segment) {
        Some(idx) => format!("{}{}", &pathname[..idx + proxy_segment.len()], api_prefix),
        None => api_prefix.to_string(),
    }
}
