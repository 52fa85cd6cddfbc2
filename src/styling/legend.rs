use crate::domain::model::LegendEntry;
use crate::styling::depth::{DepthBand, DEPTH_BANDS};

const RANGE_SEPARATOR: char = '\u{2013}';

fn band_label(band: &DepthBand, next: Option<&DepthBand>) -> String {
    match next {
        Some(next) => format!("{}{}{} km", band.lower, RANGE_SEPARATOR, next.lower),
        None => format!("{}+ km", band.lower),
    }
}

/// Legend entries for every depth band, shallowest first.
pub fn render_legend() -> Vec<LegendEntry> {
    DEPTH_BANDS
        .iter()
        .enumerate()
        .map(|(i, band)| LegendEntry {
            color: band.color.to_string(),
            label: band_label(band, DEPTH_BANDS.get(i + 1)),
        })
        .collect()
}

/// The legend as the HTML fragment a map control displays.
pub fn legend_html(entries: &[LegendEntry]) -> String {
    let rows: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "<i style=\"background:{}\"></i> {}",
                entry.color,
                entry.label.replace(RANGE_SEPARATOR, "&ndash;")
            )
        })
        .collect();
    format!("<div class=\"info legend\">{}</div>", rows.join("<br>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styling::depth::classify_depth;

    #[test]
    fn test_legend_has_six_ascending_entries() {
        let legend = render_legend();
        assert_eq!(legend.len(), 6);
        assert_eq!(legend[0].color, "#00ff00");
        assert_eq!(legend[0].label, "-10\u{2013}10 km");
        assert_eq!(legend[1].label, "10\u{2013}30 km");
        assert_eq!(legend[4].label, "70\u{2013}90 km");
        assert_eq!(legend[5].color, "#ff0000");
        assert_eq!(legend[5].label, "90+ km");
    }

    #[test]
    fn test_legend_colors_match_classifier() {
        // Representative depth inside each band.
        let depths = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
        for (entry, depth) in render_legend().iter().zip(depths) {
            assert_eq!(entry.color, classify_depth(depth).unwrap());
        }
    }

    #[test]
    fn test_only_last_label_is_open_ended() {
        let legend = render_legend();
        let (last, closed) = legend.split_last().unwrap();
        assert!(last.label.ends_with("+ km"));
        assert!(closed.iter().all(|e| e.label.contains('\u{2013}')));
    }

    #[test]
    fn test_legend_html() {
        let html = legend_html(&render_legend());
        assert!(html.starts_with("<div class=\"info legend\">"));
        assert!(html.contains("<i style=\"background:#00ff00\"></i> -10&ndash;10 km<br>"));
        assert!(html.ends_with("<i style=\"background:#ff0000\"></i> 90+ km</div>"));
        assert_eq!(html.matches("<br>").count(), 5);
    }
}
