use crate::{
    catalog,
    screen::{CameraFlight, MapScreenState},
    views::map::{map_renderer::MapRenderer, place_card::PlaceCard},
};
use leptos::prelude::*;
use shared_types::PlaceOfInterest;

/// The whole screen: the map filling the page with a horizontally scrolling
/// strip of place cards over its bottom edge. Owns the screen state; the
/// catalog is handed in by the composition root.
#[component]
pub fn PlacesMapScreen(catalog: &'static [PlaceOfInterest]) -> impl IntoView {
    let screen = RwSignal::new(MapScreenState::new(catalog::UT_CANCUN));

    // Latest camera command for the renderer; replaced wholesale on every
    // focus, no queueing of earlier flights.
    let flight = RwSignal::new(None::<CameraFlight>);

    let focus_place = move |id: &'static str| {
        let mut flown = None;
        screen.update(|s| match s.focus_on(catalog, id) {
            Ok(f) => flown = Some(f),
            Err(err) => leptos::logging::warn!("focus request ignored: {err}"),
        });
        if let Some(f) = flown {
            flight.set(Some(f));
        }
    };

    view! {
        <div class="map-screen">
            <MapRenderer
                catalog=catalog
                default_region=screen.with_untracked(|s| s.viewport())
                flight=flight
            />

            <div class="place-strip">
                {catalog.iter().map(|place| {
                    view! {
                        <PlaceCard place=place screen=screen on_focus=focus_place />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
