//! Site configuration. Every field has a default so an override file only
//! needs to name what it changes.

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "healthhub.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("route `{0}` must start with '/'")]
    InvalidRoute(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Simulated authentication latency.
    pub submit_delay_ms: u64,
    pub home_route: String,
    pub login_route: String,
    /// Where a successful sign-in lands.
    pub booking_route: String,
    /// Images still loading after this long are marked failed.
    pub image_timeout_ms: u64,
    pub toast_duration_ms: u64,
    /// `None` keeps sessions until they are cleared explicitly.
    pub session_max_age_hours: Option<u32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            home_route: "/".to_string(),
            login_route: "/login".to_string(),
            booking_route: "/book-appointment".to_string(),
            image_timeout_ms: 15_000,
            toast_duration_ms: 4_000,
            session_max_age_hours: Some(24),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override document and check the routes it declares.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for route in [&self.home_route, &self.login_route, &self.booking_route] {
            if !route.starts_with('/') {
                return Err(ConfigError::InvalidRoute(route.clone()));
            }
        }
        Ok(())
    }

    pub fn session_max_age(&self) -> Option<time::Duration> {
        self.session_max_age_hours
            .map(|hours| time::Duration::hours(i64::from(hours)))
    }

    /// Load the configuration for the running platform, falling back to
    /// defaults when no override exists or it cannot be used.
    pub fn load() -> Self {
        match Self::load_override() {
            Ok(Some(config)) => {
                tracing::info!("loaded site configuration override");
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!(%err, "ignoring site configuration override");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_override() -> Result<Option<Self>, ConfigError> {
        let Some(dirs) = directories::ProjectDirs::from("com", "HealthHub", "healthhub") else {
            return Ok(None);
        };
        let path = dirs.config_dir().join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        Self::from_json(&raw).map(Some)
    }

    #[cfg(target_arch = "wasm32")]
    fn load_override() -> Result<Option<Self>, ConfigError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behaviour() {
        let config = SiteConfig::default();
        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.booking_route, "/book-appointment");
        assert_eq!(config.session_max_age(), Some(time::Duration::hours(24)));
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(r#"{ "submit_delay_ms": 10 }"#).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.login_route, "/login");
    }

    #[test]
    fn relative_routes_are_rejected() {
        let err = SiteConfig::from_json(r#"{ "booking_route": "book" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoute(route) if route == "book"));
    }

    #[test]
    fn null_max_age_disables_expiry() {
        let config = SiteConfig::from_json(r#"{ "session_max_age_hours": null }"#).unwrap();
        assert!(config.session_max_age().is_none());
    }
}
