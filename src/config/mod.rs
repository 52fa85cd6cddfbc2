pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::styling::render_legend;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_formats, validate_path, validate_positive_number, validate_range, validate_url,
};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{ArgAction, Parser};
#[cfg(feature = "cli")]
use serde::Deserialize;
use serde::Serialize;

pub const DEFAULT_EARTHQUAKE_FEED: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";
pub const DEFAULT_PLATES_FEED: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const OUTPUT_FORMATS: [&str; 3] = ["geojson", "csv", "html"];
pub const MAX_ZOOM: u8 = 18;

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("feeds.earthquakes", config.earthquake_feed())?;
    validate_url("feeds.plates", config.plates_feed())?;
    validate_positive_number("feeds.timeout_seconds", config.timeout_seconds(), 1)?;
    validate_path("output.path", config.output_path())?;
    validate_formats("output.formats", config.output_formats(), &OUTPUT_FORMATS)?;

    let [lat, lon] = config.map_center();
    validate_range("map.center.latitude", lat, -90.0, 90.0)?;
    validate_range("map.center.longitude", lon, -180.0, 180.0)?;
    validate_range("map.zoom", config.map_zoom(), 0, MAX_ZOOM)?;
    Ok(())
}

/// What `--dry-run` prints: the resolved settings as JSON, then one legend line per band.
pub fn dry_run_report<C: Serialize + ?Sized>(config: &C) -> Result<String> {
    let mut report = serde_json::to_string_pretty(config)?;
    report.push('\n');
    for entry in render_legend() {
        report.push_str(&format!("{}  {}\n", entry.color, entry.label));
    }
    Ok(report)
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "quake-map")]
#[command(about = "Builds styled earthquake and tectonic plate map layers")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_EARTHQUAKE_FEED)]
    pub earthquake_feed: String,

    #[arg(long, default_value = DEFAULT_PLATES_FEED)]
    pub plates_feed: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, value_delimiter = ',', default_value = "geojson,csv,html")]
    pub formats: Vec<String>,

    /// Write individual files instead of one zip bundle
    #[arg(long = "no-bundle", action = ArgAction::SetFalse)]
    pub bundle: bool,

    #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub center_lat: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub center_lon: f64,

    #[arg(long, default_value_t = 2)]
    pub zoom: u8,

    /// Read settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Show the resolved settings and legend without fetching")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn earthquake_feed(&self) -> &str {
        &self.earthquake_feed
    }

    fn plates_feed(&self) -> &str {
        &self.plates_feed
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn bundle(&self) -> bool {
        self.bundle
    }

    fn map_center(&self) -> [f64; 2] {
        [self.center_lat, self.center_lon]
    }

    fn map_zoom(&self) -> u8 {
        self.zoom
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
