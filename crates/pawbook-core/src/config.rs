//! Centralized configuration for Pawbook.
//!
//! Constants for network behavior and presentation defaults, plus the
//! environment override for the backend base URL.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Pawbook";
    /// Banner image shown behind every person card.
    pub const DEFAULT_HEADER_URL: &'static str =
        "https://venngage-wordpress.s3.amazonaws.com/uploads/2018/09/Colorful-Geometric-Simple-Background-Image.jpg";
    /// Avatar shown for every person; the backend serves no images.
    pub const DEFAULT_AVATAR_URL: &'static str =
        "https://image.flaticon.com/icons/png/128/10/10522.png";
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const USER_AGENT: &'static str = "pawbook";
    /// Default address of a locally running backend.
    pub const DEFAULT_API_BASE: &'static str = "http://127.0.0.1:5000";
    /// Environment variable that overrides the backend base URL.
    pub const API_BASE_ENV: &'static str = "PAWBOOK_API_BASE";
}

/// Resolve the backend base URL.
///
/// Priority: explicit argument, then `PAWBOOK_API_BASE`, then the local
/// default. Trailing slashes are trimmed so path segments can be appended
/// uniformly.
pub fn resolve_api_base(explicit: Option<&str>) -> String {
    let base = match explicit {
        Some(url) => url.to_string(),
        None => std::env::var(NetworkConfig::API_BASE_ENV)
            .unwrap_or_else(|_| NetworkConfig::DEFAULT_API_BASE.to_string()),
    };
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_wins() {
        assert_eq!(
            resolve_api_base(Some("http://api.example.com/")),
            "http://api.example.com"
        );
    }

    #[test]
    fn test_default_base() {
        // Explicit None falls through to env or default; both are absolute URLs.
        let base = resolve_api_base(None);
        assert!(base.starts_with("http"));
        assert!(!base.ends_with('/'));
    }
}
