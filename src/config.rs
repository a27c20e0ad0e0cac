use std::path::PathBuf;

use anyhow::Context;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub allowed_origin: String,
    /// Venue fixture to serve instead of the embedded one.
    pub data: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind = lookup("FOOD_GUIDE_BIND").unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let allowed_origin = lookup("FOOD_GUIDE_ALLOWED_ORIGIN")
            .unwrap_or_else(|| "http://localhost:3000".to_string());
        let data = lookup("FOOD_GUIDE_DATA")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        let log_level = match lookup("FOOD_GUIDE_LOG") {
            Some(level) => level
                .parse::<Level>()
                .with_context(|| format!("invalid FOOD_GUIDE_LOG value {level:?}"))?,
            None => Level::INFO,
        };

        Ok(Self {
            bind,
            allowed_origin,
            data,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert!(config.data.is_none());
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("FOOD_GUIDE_BIND", "0.0.0.0:9000"),
            ("FOOD_GUIDE_DATA", "/srv/venues.json"),
            ("FOOD_GUIDE_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.data, Some(PathBuf::from("/srv/venues.json")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn bad_log_level() {
        let err = config(&[("FOOD_GUIDE_LOG", "chatty")]).unwrap_err();
        assert!(err.to_string().contains("FOOD_GUIDE_LOG"));
    }
}
