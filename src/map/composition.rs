use crate::utils::error::{QuakeError, Result};
use serde::{Deserialize, Serialize};

pub const EARTHQUAKES_OVERLAY: &str = "Earthquakes";
pub const PLATES_OVERLAY: &str = "Tectonic Plates";

const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub name: String,
    /// File in the output bundle holding the overlay's features.
    pub source: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The map a renderer should build: view, base layers, overlays and legend
/// placement. Passed around explicitly instead of living in a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapComposition {
    pub center: [f64; 2],
    pub zoom: u8,
    pub base_layers: Vec<TileLayer>,
    pub active_base_layer: String,
    pub overlays: Vec<Overlay>,
    pub legend_position: LegendPosition,
}

impl MapComposition {
    pub fn new(center: [f64; 2], zoom: u8) -> Self {
        let base_layers = Self::default_base_layers();
        let active_base_layer = base_layers[0].name.clone();
        Self {
            center,
            zoom,
            base_layers,
            active_base_layer,
            overlays: vec![
                Overlay {
                    name: EARTHQUAKES_OVERLAY.to_string(),
                    source: "earthquakes.geojson".to_string(),
                    visible: true,
                },
                Overlay {
                    name: PLATES_OVERLAY.to_string(),
                    source: "plates.geojson".to_string(),
                    visible: true,
                },
            ],
            legend_position: LegendPosition::BottomRight,
        }
    }

    pub fn default_base_layers() -> Vec<TileLayer> {
        vec![
            TileLayer {
                name: "Basemap".to_string(),
                url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
                attribution: OSM_ATTRIBUTION.to_string(),
            },
            TileLayer {
                name: "Street Map".to_string(),
                url_template: "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png".to_string(),
                attribution: format!("{}, Humanitarian OpenStreetMap Team", OSM_ATTRIBUTION),
            },
        ]
    }

    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        self.base_layers
            .iter()
            .find(|layer| layer.name == self.active_base_layer)
    }

    pub fn select_base_layer(&mut self, name: &str) -> Result<()> {
        if !self.base_layers.iter().any(|layer| layer.name == name) {
            return Err(QuakeError::InvalidConfigValueError {
                field: "map.base_layer".to_string(),
                value: name.to_string(),
                reason: "No base layer with that name".to_string(),
            });
        }
        self.active_base_layer = name.to_string();
        Ok(())
    }

    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> Result<()> {
        let overlay = self
            .overlays
            .iter_mut()
            .find(|overlay| overlay.name == name)
            .ok_or_else(|| QuakeError::InvalidConfigValueError {
                field: "map.overlays".to_string(),
                value: name.to_string(),
                reason: "No overlay with that name".to_string(),
            })?;
        overlay.visible = visible;
        Ok(())
    }
}

impl Default for MapComposition {
    fn default() -> Self {
        Self::new([20.0, 0.0], 2)
    }
}
