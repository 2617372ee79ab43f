//! Configuration module for the lexc driver.
//!
//! Settings come from a TOML file with every field optional. Command-line
//! flags are applied on top by the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "lexc.toml";

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `(<category> , <lexeme>, line <line>)` per token.
    #[default]
    Text,
    /// One JSON object per token.
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Source files scanned when none are given on the command line.
    #[serde(default = "default_input")]
    pub input: Vec<PathBuf>,

    /// Destination for the token listing; `-` means stdout.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Output rendering.
    #[serde(default)]
    pub format: OutputFormat,

    /// Fail when lexical diagnostics were reported.
    #[serde(default)]
    pub strict: bool,

    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Disable colored log output.
    #[serde(default)]
    pub no_color: bool,
}

fn default_input() -> Vec<PathBuf> {
    vec![PathBuf::from("program.txt")]
}

fn default_output() -> PathBuf {
    PathBuf::from("output.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            format: OutputFormat::default(),
            strict: false,
            verbose: false,
            no_color: false,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `lexc.toml` in the current
    /// directory is used if present, and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => match Self::check_current_dir_config() {
                Some(path) => Self::load_from_path(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, vec![PathBuf::from("program.txt")]);
        assert_eq!(config.output, PathBuf::from("output.txt"));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str("format = \"json\"\nstrict = true\n").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);
        assert_eq!(config.output, PathBuf::from("output.txt"));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("lexc.toml");
        std::fs::write(
            &config_path,
            "input = [\"a.txt\", \"b.txt\"]\noutput = \"-\"\nverbose = true\nno_color = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.input, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(config.output, PathBuf::from("-"));
        assert!(config.verbose);
        assert!(config.no_color);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/lexc.toml"));
        assert!(matches!(result, Err(DriverError::Config(_))));
    }

    #[test]
    fn test_load_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("lexc.toml");
        std::fs::write(&config_path, "format = \"yaml\"\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Failed to parse"));
    }
}
