pub mod config;
pub mod core;
pub mod domain;
pub mod map;
pub mod styling;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{etl::EtlEngine, pipeline::QuakePipeline};
pub use domain::model::{EarthquakeFeature, LegendEntry, StyleDescriptor};
pub use map::MapComposition;
pub use styling::{classify_depth, render_legend, scale_magnitude, style_feature};
pub use utils::error::{QuakeError, Result};
