use crate::config::{
    validate_provider, DEFAULT_EARTHQUAKE_FEED, DEFAULT_OUTPUT_PATH, DEFAULT_PLATES_FEED,
    DEFAULT_TIMEOUT_SECONDS, OUTPUT_FORMATS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{QuakeError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    #[serde(default = "default_earthquake_feed")]
    pub earthquakes: String,
    #[serde(default = "default_plates_feed")]
    pub plates: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    #[serde(default = "default_bundle")]
    pub bundle: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

fn default_earthquake_feed() -> String {
    DEFAULT_EARTHQUAKE_FEED.to_string()
}

fn default_plates_feed() -> String {
    DEFAULT_PLATES_FEED.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_center() -> [f64; 2] {
    [20.0, 0.0]
}

fn default_zoom() -> u8 {
    2
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_formats() -> Vec<String> {
    OUTPUT_FORMATS.iter().map(|f| f.to_string()).collect()
}

fn default_bundle() -> bool {
    true
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            earthquakes: default_earthquake_feed(),
            plates: default_plates_feed(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            formats: default_formats(),
            bundle: default_bundle(),
        }
    }
}

impl TomlConfig {
    /// Loads settings from a TOML file, expanding `${VAR}` references first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuakeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuakeError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn earthquake_feed(&self) -> &str {
        &self.feeds.earthquakes
    }

    fn plates_feed(&self) -> &str {
        &self.feeds.plates
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn timeout_seconds(&self) -> u64 {
        self.feeds.timeout_seconds
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }

    fn bundle(&self) -> bool {
        self.output.bundle
    }

    fn map_center(&self) -> [f64; 2] {
        self.map.center
    }

    fn map_zoom(&self) -> u8 {
        self.map.zoom
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
