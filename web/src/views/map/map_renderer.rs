use crate::{
    components::loading::LoadingView,
    screen::CameraFlight,
    views::map::{place_marker::PlaceMarker, util::leaflet_zoom},
};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{PlaceOfInterest, Region};

#[cfg(not(feature = "ssr"))]
use leptos_leaflet::leaflet::Map;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

#[component]
pub fn MapRenderer(
    catalog: &'static [PlaceOfInterest],
    default_region: Region,
    flight: RwSignal<Option<CameraFlight>>,
) -> impl IntoView {
    let initial_zoom = leaflet_zoom(&default_region.span);

    // Map signal - only on client
    #[cfg(not(feature = "ssr"))]
    let map = JsRwSignal::new_local(None::<Map>);

    // Track if map is ready to render (avoid hydration issues)
    let map_ready = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        // Delay map rendering until after hydration
        Effect::new(move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let _ = window.request_animation_frame(
                wasm_bindgen::closure::Closure::once_into_js(move || {
                    map_ready.set(true);
                })
                .as_ref()
                .unchecked_ref(),
            );
        });

        // Execute camera flights once the Leaflet instance exists. Each new
        // flight simply replaces whatever animation is still running.
        Effect::new(move |_| {
            let Some(pending) = flight.get() else {
                return;
            };
            if let Some(map_instance) = map.read_only().get() {
                let target = pending.target;
                let zoom = leaflet_zoom(&target.span);
                leptos::logging::log!(
                    "camera flight to ({}, {}) at zoom {} over {}s",
                    target.center.lat,
                    target.center.long,
                    zoom,
                    pending.duration_secs
                );
                let latlng = Position::new(target.center.lat, target.center.long).as_lat_lng();
                map_instance.fly_to(&latlng, zoom);
            }
        });
    }

    view! {
        <div class="map-renderer-container">
            {move || {
                #[cfg(not(feature = "ssr"))]
                {
                    if map_ready.get() {
                        view! {
                            <MapContainer
                                class="map-renderer-map-container"
                                center=Position::new(default_region.center.lat, default_region.center.long)
                                zoom=initial_zoom
                                set_view=true
                                map=map.write_only()
                            >
                                <TileLayer
                                    url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                                    attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                                />

                                {catalog.iter().map(|place| {
                                    view! {
                                        <PlaceMarker place=place />
                                    }
                                }).collect_view()}
                            </MapContainer>
                        }.into_any()
                    } else {
                        view! {
                            <div class="map-renderer-loading-container">
                                <LoadingView message=Some("Cargando mapa...".to_string()) />
                            </div>
                        }.into_any()
                    }
                }

                #[cfg(feature = "ssr")]
                {
                    view! {
                        <div class="map-renderer-loading-container">
                            <LoadingView message=Some("Cargando mapa...".to_string()) />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
