use crate::domain::model::{EarthquakeFeature, StyleDescriptor};
use crate::styling::depth::classify_depth;
use crate::styling::magnitude::scale_magnitude;
use crate::utils::error::Result;

pub const STROKE_COLOR: &str = "#000";
pub const STROKE_WEIGHT: f64 = 0.5;
pub const STROKE_OPACITY: f64 = 1.0;
pub const FILL_OPACITY: f64 = 0.8;

pub fn style_feature(feature: &EarthquakeFeature) -> Result<StyleDescriptor> {
    Ok(StyleDescriptor {
        radius: scale_magnitude(feature.magnitude)?,
        fill_color: classify_depth(feature.depth)?.to_string(),
        stroke_color: STROKE_COLOR.to_string(),
        stroke_weight: STROKE_WEIGHT,
        fill_opacity: FILL_OPACITY,
        stroke_opacity: STROKE_OPACITY,
    })
}
