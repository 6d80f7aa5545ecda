use std::str::FromStr;
use web_sys::window;

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if value.is_undefined() {
        log::debug!("Environment variable '{}' is undefined", key);
        return None;
    }

    // Numbers and booleans are accepted as well as strings
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .or_else(|| value.as_bool().map(|b| b.to_string()))
}

pub fn get_env_or<T: FromStr>(key: &str, default: T) -> T {
    match get_env_var(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Environment variable '{}' has invalid value '{}'", key, raw);
            default
        }),
        None => default,
    }
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "YouTube Trending Analytics".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_or("DEBUG_MODE", false)
}

pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
