use crate::domain::model::EarthquakeFeature;

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn popup_html(feature: &EarthquakeFeature) -> String {
    let magnitude = feature
        .magnitude
        .map(|m| m.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let place = feature
        .place
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "Unknown location".to_string());

    format!("<b>Magnitude:</b> {} <br><b>Location:</b> {}", magnitude, place)
}
