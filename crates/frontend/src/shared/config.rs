//! Runtime configuration. The app root reads it once at startup for the
//! notice lifetime; the API helpers resolve the base URL per request.

/// Port the REST service listens on when no explicit URL is configured.
pub const DEFAULT_BACKEND_PORT: u16 = 5000;

/// How long a notification stays on screen.
pub const NOTICE_LIFETIME_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub notice_lifetime_ms: u32,
}

impl AppConfig {
    /// `BACKEND_URL` at compile time wins; otherwise the page's own host on
    /// [`DEFAULT_BACKEND_PORT`].
    pub fn from_env() -> Self {
        let api_base = match option_env!("BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => normalize_base(url),
            _ => location_base(),
        };
        Self {
            api_base,
            notice_lifetime_ms: NOTICE_LIFETIME_MS,
        }
    }
}

fn location_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_BACKEND_PORT)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        assert_eq!(normalize_base(" http://api.local:5000/ "), "http://api.local:5000");
        assert_eq!(normalize_base("https://shop.example"), "https://shop.example");
    }
}
