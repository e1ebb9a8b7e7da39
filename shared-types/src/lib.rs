use serde::{Deserialize, Serialize};

/// A coordinate pair in decimal degrees.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Visible extent of a viewport, in degrees of latitude and longitude.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Span {
    pub lat_delta: f64,
    pub long_delta: f64,
}

impl Span {
    pub const fn new(lat_delta: f64, long_delta: f64) -> Self {
        Self {
            lat_delta,
            long_delta,
        }
    }
}

/// A map viewport: a center point plus the visible extent around it.
/// Always replaced wholesale, never patched field-by-field.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: LatLong,
    pub span: Span,
}

impl Region {
    pub const fn new(center: LatLong, span: Span) -> Self {
        Self { center, span }
    }
}

/// One entry of the fixed place catalog. Literal data, assumed well-formed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceOfInterest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub coordinates: LatLong,
}
