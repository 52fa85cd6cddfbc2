use crate::utils::error::{QuakeError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthBand {
    /// Exclusive lower bound in km. The first band is unbounded below and
    /// only uses this value as its legend label.
    pub lower: f64,
    pub color: &'static str,
}

/// Depth bands in ascending order. Shared by the classifier and the legend.
pub static DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand { lower: -10.0, color: "#00ff00" },
    DepthBand { lower: 10.0, color: "#ffff00" },
    DepthBand { lower: 30.0, color: "#ffcc00" },
    DepthBand { lower: 50.0, color: "#ff9900" },
    DepthBand { lower: 70.0, color: "#ff6600" },
    DepthBand { lower: 90.0, color: "#ff0000" },
];

pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuakeError::NonFiniteInput {
            field: field.to_string(),
            value,
        })
    }
}

/// Index into [`DEPTH_BANDS`] of the band containing `depth`.
pub fn band_index(depth: f64) -> Result<usize> {
    let depth = ensure_finite("depth", depth)?;
    Ok(DEPTH_BANDS
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .find(|(_, band)| depth > band.lower)
        .map(|(index, _)| index)
        .unwrap_or(0))
}

pub fn classify_band(depth: f64) -> Result<&'static DepthBand> {
    Ok(&DEPTH_BANDS[band_index(depth)?])
}

/// Fill color for an event at `depth` km. Non-finite depths are rejected.
pub fn classify_depth(depth: f64) -> Result<&'static str> {
    Ok(classify_band(depth)?.color)
}
