use shared_types::{LatLong, PlaceOfInterest, Region, Span};
use thiserror::Error;

/// Extent shown before any card has been tapped.
pub const DEFAULT_SPAN: Span = Span::new(0.1, 0.1);

/// Tighter extent used when the camera centers on a place.
pub const FOCUS_SPAN: Span = Span::new(0.05, 0.05);

/// Fixed length of the camera flight, in seconds.
pub const FLY_DURATION_SECS: f64 = 1.0;

/// One imperative command for the map boundary: animate the camera to
/// `target` over `duration_secs`. Fire-and-forget; Leaflet interrupts its own
/// in-flight animation when a new flight arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFlight {
    pub target: Region,
    pub duration_secs: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum FocusError {
    #[error("no place with id `{0}` in the catalog")]
    UnknownPlace(String),
}

/// The screen's transient state: which card is selected and what region the
/// map should show. The catalog itself is injected by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScreenState {
    selection: Option<String>,
    viewport: Region,
}

impl MapScreenState {
    pub fn new(initial_center: LatLong) -> Self {
        Self {
            selection: None,
            viewport: Region::new(initial_center, DEFAULT_SPAN),
        }
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.as_deref() == Some(id)
    }

    pub fn viewport(&self) -> Region {
        self.viewport
    }

    /// Select the place with `id` and retarget the viewport onto it.
    ///
    /// Unknown ids leave the state untouched and report `UnknownPlace`; the
    /// id normally originates from a rendered card, so this is a
    /// cannot-happen guard rather than an expected path.
    pub fn focus_on(
        &mut self,
        catalog: &[PlaceOfInterest],
        id: &str,
    ) -> Result<CameraFlight, FocusError> {
        let place = catalog
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| FocusError::UnknownPlace(id.to_string()))?;

        self.selection = Some(place.id.clone());
        self.viewport = Region::new(place.coordinates, FOCUS_SPAN);

        Ok(CameraFlight {
            target: self.viewport,
            duration_secs: FLY_DURATION_SECS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn fresh() -> MapScreenState {
        MapScreenState::new(catalog::UT_CANCUN)
    }

    #[test]
    fn starts_idle_on_the_default_region() {
        let screen = fresh();
        assert_eq!(screen.selection(), None);
        assert_eq!(screen.viewport(), Region::new(catalog::UT_CANCUN, DEFAULT_SPAN));
    }

    #[test]
    fn focus_selects_and_retargets_the_viewport() {
        let mut screen = fresh();
        let flight = screen
            .focus_on(catalog::pueblos_magicos(), "1")
            .expect("id 1 is in the catalog");

        assert_eq!(screen.selection(), Some("1"));
        let expected = Region::new(LatLong::new(20.6896, -88.2011), FOCUS_SPAN);
        assert_eq!(screen.viewport(), expected);
        assert_eq!(flight.target, expected);
        assert_eq!(flight.duration_secs, FLY_DURATION_SECS);
    }

    #[test]
    fn focus_replaces_any_prior_selection() {
        let mut screen = fresh();
        screen
            .focus_on(catalog::pueblos_magicos(), "3")
            .expect("id 3 is in the catalog");
        screen
            .focus_on(catalog::pueblos_magicos(), "5")
            .expect("id 5 is in the catalog");

        assert_eq!(screen.selection(), Some("5"));
        let tekax = LatLong::new(20.21227, -89.27622);
        assert_eq!(screen.viewport(), Region::new(tekax, FOCUS_SPAN));
    }

    #[test]
    fn repeated_focus_is_idempotent_in_final_state() {
        let mut a = fresh();
        a.focus_on(catalog::pueblos_magicos(), "2")
            .expect("id 2 is in the catalog");

        let mut b = a.clone();
        b.focus_on(catalog::pueblos_magicos(), "2")
            .expect("id 2 is in the catalog");

        assert_eq!(a, b);
    }

    #[test]
    fn unknown_id_reports_and_leaves_state_untouched() {
        let mut screen = fresh();
        screen
            .focus_on(catalog::pueblos_magicos(), "4")
            .expect("id 4 is in the catalog");
        let before = screen.clone();

        let err = screen
            .focus_on(catalog::pueblos_magicos(), "nonexistent")
            .expect_err("id is not in the catalog");

        assert_eq!(err, FocusError::UnknownPlace("nonexistent".to_string()));
        assert_eq!(screen, before);
    }
}
