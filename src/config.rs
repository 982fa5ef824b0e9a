use std::path::PathBuf;

pub const DEFAULT_PREFERENCES_PATH: &str = "impostor-preferences.json";
pub const DEFAULT_CATEGORY: &str = "animals";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Where the language preference is persisted
    pub preferences_path: PathBuf,
    /// Seed for reproducible sessions; random when unset
    pub rng_seed: Option<u64>,
    /// Category the autoplay driver uses
    pub default_category: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            rng_seed: None,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

impl EngineConfig {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let preferences_path = non_empty_var("IMPOSTOR_PREFERENCES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_PATH));

        let rng_seed = non_empty_var("IMPOSTOR_RNG_SEED")
            .map(|value| {
                value.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                    var: "IMPOSTOR_RNG_SEED",
                    value,
                })
            })
            .transpose()?;

        let default_category = non_empty_var("IMPOSTOR_DEFAULT_CATEGORY")
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(Self {
            preferences_path,
            rng_seed,
            default_category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [
        "IMPOSTOR_PREFERENCES_PATH",
        "IMPOSTOR_RNG_SEED",
        "IMPOSTOR_DEFAULT_CATEGORY",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn set_env(var: &str, value: &str) {
        std::env::set_var(var, value);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(EngineConfig::from_env().unwrap(), EngineConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_values() {
        clear_env();
        set_env("IMPOSTOR_PREFERENCES_PATH", "/tmp/prefs.json");
        set_env("IMPOSTOR_RNG_SEED", " 42 ");
        set_env("IMPOSTOR_DEFAULT_CATEGORY", "music");

        let config = EngineConfig::from_env().unwrap();
        assert_eq!(config.preferences_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.default_category, "music");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_seed() {
        clear_env();
        set_env("IMPOSTOR_RNG_SEED", "banana");
        assert_eq!(
            EngineConfig::from_env(),
            Err(ConfigError::InvalidNumber {
                var: "IMPOSTOR_RNG_SEED",
                value: "banana".to_string()
            })
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_values_use_defaults() {
        clear_env();
        set_env("IMPOSTOR_PREFERENCES_PATH", "   ");
        set_env("IMPOSTOR_RNG_SEED", "");
        assert_eq!(EngineConfig::from_env().unwrap(), EngineConfig::default());
        clear_env();
    }
}
