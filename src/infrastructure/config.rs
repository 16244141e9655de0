use std::env;

use crate::services::relationships::HardDeleteMode;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub hard_delete_mode: HardDeleteMode,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let hard_delete_mode = match lookup("HARD_DELETE_MODE") {
            Some(raw) => HardDeleteMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown HARD_DELETE_MODE '{}', falling back to sequential",
                    raw
                );
                HardDeleteMode::Sequential
            }),
            None => HardDeleteMode::default(),
        };

        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://fleet_registry.db?mode=rwc".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            hard_delete_mode,
            seed_demo: lookup("SEED_DEMO").is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, "sqlite://fleet_registry.db?mode=rwc");
        assert_eq!(config.port, 8080);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.hard_delete_mode, HardDeleteMode::Sequential);
        assert!(!config.seed_demo);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://fleet@localhost/fleet"),
            ("PORT", "9000"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("HARD_DELETE_MODE", "Transactional"),
            ("SEED_DEMO", "1"),
        ]);
        assert_eq!(config.database_url, "postgres://fleet@localhost/fleet");
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.hard_delete_mode, HardDeleteMode::Transactional);
        assert!(config.seed_demo);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("HARD_DELETE_MODE", "eventually")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.hard_delete_mode, HardDeleteMode::Sequential);
    }
}
