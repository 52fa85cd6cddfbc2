use crate::styling::depth::ensure_finite;
use crate::utils::error::Result;

pub const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Radius used when the magnitude is missing or zero, so the event still shows.
pub const MIN_RADIUS: f64 = 1.0;

/// Marker radius for a magnitude. Negative magnitudes scale through unchanged.
pub fn scale_magnitude(magnitude: Option<f64>) -> Result<f64> {
    match magnitude {
        Some(mag) if ensure_finite("magnitude", mag)? != 0.0 => Ok(mag * RADIUS_PER_MAGNITUDE),
        _ => Ok(MIN_RADIUS),
    }
}
