use shared_types::Span;

const MIN_ZOOM: f64 = 3.0;
const MAX_ZOOM: f64 = 18.0;

/// Translate a degree span into the Leaflet zoom level that shows roughly
/// that extent: zoom z shows 360 / 2^z degrees of longitude across the tile
/// grid, so the widest axis of the span picks the level.
pub fn leaflet_zoom(span: &Span) -> f64 {
    let extent = span.lat_delta.max(span.long_delta).max(f64::EPSILON);
    (360.0 / extent).log2().round().clamp(MIN_ZOOM, MAX_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{DEFAULT_SPAN, FOCUS_SPAN};

    #[test]
    fn tighter_span_zooms_deeper() {
        assert!(leaflet_zoom(&FOCUS_SPAN) > leaflet_zoom(&DEFAULT_SPAN));
    }

    #[test]
    fn known_spans_land_on_city_scale_levels() {
        assert_eq!(leaflet_zoom(&DEFAULT_SPAN), 12.0);
        assert_eq!(leaflet_zoom(&FOCUS_SPAN), 13.0);
    }

    #[test]
    fn degenerate_and_extreme_spans_are_clamped() {
        assert_eq!(leaflet_zoom(&Span::new(0.0, 0.0)), MAX_ZOOM);
        assert_eq!(leaflet_zoom(&Span::new(720.0, 720.0)), MIN_ZOOM);
    }
}
