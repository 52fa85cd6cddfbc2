// Visual encoding of earthquake and plate-boundary features.

pub mod depth;
pub mod feature;
pub mod legend;
pub mod magnitude;
pub mod plates;

pub use depth::{classify_band, classify_depth, DepthBand, DEPTH_BANDS};
pub use feature::style_feature;
pub use legend::{legend_html, render_legend};
pub use magnitude::scale_magnitude;
pub use plates::{style_plate_collection, PLATE_STYLE};
