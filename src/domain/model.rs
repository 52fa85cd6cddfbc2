use crate::map::MapComposition;
use crate::utils::error::{QuakeError, Result};
use chrono::{DateTime, Utc};
use geojson::{feature::Id, Feature, FeatureCollection};
use serde::{Deserialize, Serialize};

/// One event from the earthquake feed, reduced to what styling needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    pub id: Option<String>,
    pub magnitude: Option<f64>,
    /// Kilometers, negative above sea level.
    pub depth: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub place: Option<String>,
    pub time: Option<DateTime<Utc>>,
}

impl EarthquakeFeature {
    pub fn new(magnitude: Option<f64>, depth: f64) -> Self {
        Self {
            id: None,
            magnitude,
            depth,
            longitude: 0.0,
            latitude: 0.0,
            place: None,
            time: None,
        }
    }

    pub fn from_feature(feature: &Feature) -> Result<Self> {
        let id = feature.id.as_ref().map(|id| match id {
            Id::String(s) => s.clone(),
            Id::Number(n) => n.to_string(),
        });
        let label = id.clone().unwrap_or_else(|| "<unnamed>".to_string());
        let reject = |reason: &str| QuakeError::InvalidFeature {
            id: label.clone(),
            reason: reason.to_string(),
        };

        let coordinates = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::Point(position)) => position,
            Some(_) => return Err(reject("geometry is not a Point")),
            None => return Err(reject("feature has no geometry")),
        };
        if coordinates.len() < 3 {
            return Err(reject("point has no depth coordinate"));
        }

        let magnitude = match feature.property("mag") {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(value.as_f64().ok_or_else(|| reject("mag is not a number"))?),
        };

        let place = feature
            .property("place")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let time = feature
            .property("time")
            .and_then(|v| v.as_i64())
            .and_then(DateTime::<Utc>::from_timestamp_millis);

        Ok(Self {
            id,
            magnitude,
            depth: coordinates[2],
            longitude: coordinates[0],
            latitude: coordinates[1],
            place,
            time,
        })
    }
}

/// Leaflet-style path options for one circle marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    pub radius: f64,
    pub fill_color: String,
    #[serde(rename = "color")]
    pub stroke_color: String,
    #[serde(rename = "weight")]
    pub stroke_weight: f64,
    pub fill_opacity: f64,
    #[serde(rename = "opacity")]
    pub stroke_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

/// Raw collections as fetched from the two feeds.
#[derive(Debug, Clone)]
pub struct FeedData {
    pub earthquakes: FeatureCollection,
    pub plates: FeatureCollection,
}

/// Everything the load phase writes out.
#[derive(Debug, Clone)]
pub struct MapLayers {
    pub earthquakes: FeatureCollection,
    pub plates: FeatureCollection,
    pub summaries: Vec<EarthquakeSummary>,
    pub legend: Vec<LegendEntry>,
    pub composition: MapComposition,
    pub skipped: usize,
}

/// One CSV row per styled earthquake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeSummary {
    pub id: String,
    pub time: String,
    pub place: String,
    pub magnitude: Option<f64>,
    pub depth: f64,
    pub band: String,
    pub fill_color: String,
    pub radius: f64,
}
