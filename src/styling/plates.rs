use geojson::FeatureCollection;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub weight: f64,
}

pub const PLATE_STYLE: LineStyle = LineStyle {
    color: "orange",
    weight: 2.0,
};

/// Attaches the boundary line style to every plate feature.
pub fn style_plate_collection(mut plates: FeatureCollection) -> FeatureCollection {
    let style = serde_json::json!({
        "color": PLATE_STYLE.color,
        "weight": PLATE_STYLE.weight,
    });
    for feature in &mut plates.features {
        feature.set_property("style", style.clone());
    }
    plates
}
