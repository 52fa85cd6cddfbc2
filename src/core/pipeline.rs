use crate::core::feed::{empty_collection, FeedClient};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{EarthquakeFeature, EarthquakeSummary, FeedData, MapLayers};
use crate::map::{popup_html, MapComposition};
use crate::styling::{
    depth::band_index, legend_html, render_legend, style_feature, style_plate_collection,
};
use crate::utils::error::{QuakeError, Result};
use geojson::{Feature, FeatureCollection};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const BUNDLE_NAME: &str = "quake_map.zip";

pub struct QuakePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    feeds: FeedClient,
}

impl<S: Storage, C: ConfigProvider> QuakePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let feeds = FeedClient::new(config.timeout_seconds())?;
        Ok(Self {
            storage,
            config,
            feeds,
        })
    }

    fn style_earthquake(
        &self,
        mut feature: Feature,
        legend_labels: &[String],
    ) -> Result<(Feature, EarthquakeSummary)> {
        let quake = EarthquakeFeature::from_feature(&feature)?;
        let style = style_feature(&quake)?;
        let band = legend_labels[band_index(quake.depth)?].clone();

        feature.set_property("style", serde_json::to_value(&style)?);
        feature.set_property("popup", popup_html(&quake));

        let summary = EarthquakeSummary {
            id: quake.id.unwrap_or_default(),
            time: quake.time.map(|t| t.to_rfc3339()).unwrap_or_default(),
            place: quake.place.unwrap_or_default(),
            magnitude: quake.magnitude,
            depth: quake.depth,
            band,
            fill_color: style.fill_color,
            radius: style.radius,
        };
        Ok((feature, summary))
    }

    fn render_files(&self, layers: &MapLayers) -> Result<Vec<(&'static str, Vec<u8>)>> {
        let mut files = Vec::new();

        if self.config.wants_format("geojson") {
            files.push((
                "earthquakes.geojson",
                serde_json::to_vec_pretty(&layers.earthquakes)?,
            ));
            files.push(("plates.geojson", serde_json::to_vec_pretty(&layers.plates)?));
            files.push(("map.json", serde_json::to_vec_pretty(&layers.composition)?));
        }

        if self.config.wants_format("csv") {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for summary in &layers.summaries {
                writer.serialize(summary)?;
            }
            let data = writer
                .into_inner()
                .map_err(|e| QuakeError::IoError(e.into_error()))?;
            files.push(("earthquakes.csv", data));
        }

        if self.config.wants_format("html") {
            files.push(("legend.html", legend_html(&layers.legend).into_bytes()));
            files.push(("legend.json", serde_json::to_vec_pretty(&layers.legend)?));
        }

        Ok(files)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for QuakePipeline<S, C> {
    async fn extract(&self) -> Result<FeedData> {
        tracing::info!("🌍 Fetching earthquake and plate boundary feeds");

        let (earthquakes, plates) = tokio::join!(
            self.feeds.fetch_collection(self.config.earthquake_feed()),
            self.feeds.fetch_collection(self.config.plates_feed()),
        );

        let earthquakes = earthquakes?;
        let plates = match plates {
            Ok(plates) => plates,
            Err(e) => {
                tracing::warn!(
                    "Plate boundary feed unavailable, continuing without it: {}",
                    e
                );
                empty_collection()
            }
        };

        Ok(FeedData {
            earthquakes,
            plates,
        })
    }

    async fn transform(&self, data: FeedData) -> Result<MapLayers> {
        let legend = render_legend();
        let legend_labels: Vec<String> = legend.iter().map(|e| e.label.clone()).collect();

        let mut features = Vec::with_capacity(data.earthquakes.features.len());
        let mut summaries = Vec::with_capacity(data.earthquakes.features.len());
        let mut skipped = 0;

        for feature in data.earthquakes.features {
            match self.style_earthquake(feature, &legend_labels) {
                Ok((feature, summary)) => {
                    features.push(feature);
                    summaries.push(summary);
                }
                Err(e @ (QuakeError::InvalidFeature { .. } | QuakeError::NonFiniteInput { .. })) => {
                    tracing::warn!("Skipping earthquake: {}", e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let earthquakes = FeatureCollection {
            bbox: data.earthquakes.bbox,
            features,
            foreign_members: data.earthquakes.foreign_members,
        };

        Ok(MapLayers {
            earthquakes,
            plates: style_plate_collection(data.plates),
            summaries,
            legend,
            composition: MapComposition::new(self.config.map_center(), self.config.map_zoom()),
            skipped,
        })
    }

    async fn load(&self, layers: MapLayers) -> Result<String> {
        let files = self.render_files(&layers)?;

        if !self.config.bundle() {
            for (name, data) in &files {
                tracing::debug!("Writing {} ({} bytes)", name, data.len());
                self.storage.write_file(name, data).await?;
            }
            return Ok(self.config.output_path().to_string());
        }

        tracing::debug!("Bundling {} files", files.len());
        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
            for (name, data) in &files {
                zip.start_file(*name, SimpleFileOptions::default())?;
                zip.write_all(data)?;
            }
            zip.finish()?.into_inner()
        };

        tracing::debug!("Writing bundle ({} bytes) to storage", zip_data.len());
        self.storage.write_file(BUNDLE_NAME, &zip_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), BUNDLE_NAME))
    }
}
