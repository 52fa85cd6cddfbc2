pub mod composition;
pub mod popup;

pub use composition::{LegendPosition, MapComposition, Overlay, TileLayer};
pub use popup::popup_html;
