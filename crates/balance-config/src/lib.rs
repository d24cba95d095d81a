use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid timing settings: {0}")]
    InvalidTiming(String),
}

/// Settings for the timing harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Number of values in the generated sequence.
    pub size: usize,
    pub seed: u64,
    pub min_value: i32,
    pub max_value: i32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            size: 2000,
            seed: 0,
            min_value: -100,
            max_value: 100,
        }
    }
}

impl TimingConfig {
    pub fn value_range(&self) -> RangeInclusive<i32> {
        self.min_value..=self.max_value
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidTiming(
                "size must be greater than zero".to_string(),
            ));
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidTiming(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

/// Default inputs and layout for the rubric scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_path: Option<PathBuf>,
    /// Width of the horizontal rules in the score report.
    pub rule_width: usize,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            rubric_path: None,
            results_path: None,
            rule_width: 79,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub rubric: RubricConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured input paths
        config.rubric.rubric_path = config.rubric.rubric_path.map(Self::expand_or_keep);
        config.rubric.results_path = config.rubric.results_path.map(Self::expand_or_keep);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, falling back to defaults when it is absent.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/balance");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_or_keep(path: PathBuf) -> PathBuf {
        Self::expand_path(&path).unwrap_or(path)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/balance/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.timing.size, 2000);
        assert_eq!(config.timing.seed, 0);
        assert_eq!(config.timing.value_range(), -100..=100);
        assert_eq!(config.rubric.rubric_path, None);
        assert_eq!(config.rubric.rule_width, 79);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_fills_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
[timing]
size = 500
"#,
        )
        .unwrap();

        assert_eq!(config.timing.size, 500);
        assert_eq!(config.timing.min_value, -100);
        assert_eq!(config.rubric, RubricConfig::default());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            timing: TimingConfig {
                size: 10,
                seed: 3,
                min_value: -5,
                max_value: 5,
            },
            rubric: RubricConfig {
                rubric_path: Some(PathBuf::from("/tmp/rubric.json")),
                results_path: None,
                rule_width: 40,
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_validate_rejects_empty_size() {
        let timing = TimingConfig {
            size: 0,
            ..TimingConfig::default()
        };
        assert!(matches!(
            timing.validate(),
            Err(ConfigError::InvalidTiming(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let timing = TimingConfig {
            min_value: 5,
            max_value: -5,
            ..TimingConfig::default()
        };
        let err = timing.validate().unwrap_err();
        assert!(err.to_string().contains("min_value 5 exceeds max_value -5"));
    }

    #[test]
    fn test_validate_accepts_single_value_range() {
        let timing = TimingConfig {
            min_value: 7,
            max_value: 7,
            ..TimingConfig::default()
        };
        assert!(timing.validate().is_ok());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[timing\nsize = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            timing: TimingConfig {
                size: 64,
                ..TimingConfig::default()
            },
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_rubric_paths_expand_env_vars() {
        unsafe {
            env::set_var("BALANCE_GRADING_ROOT", "/custom/grading");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"
[rubric]
rubric_path = "$BALANCE_GRADING_ROOT/rubric.json"
results_path = "$BALANCE_GRADING_ROOT/results.xml"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.rubric.rubric_path,
            Some(PathBuf::from("/custom/grading/rubric.json"))
        );
        assert_eq!(
            config.rubric.results_path,
            Some(PathBuf::from("/custom/grading/results.xml"))
        );

        unsafe {
            env::remove_var("BALANCE_GRADING_ROOT");
        }
    }
}
