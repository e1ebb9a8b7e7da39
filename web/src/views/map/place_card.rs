use crate::screen::MapScreenState;
use leptos::prelude::*;
use shared_types::PlaceOfInterest;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn PlaceCard<F>(
    place: &'static PlaceOfInterest,
    screen: RwSignal<MapScreenState>,
    on_focus: F,
) -> impl IntoView
where
    F: Fn(&'static str) + 'static + Copy + Send + Sync,
{
    let active = Memo::new(move |_| screen.with(|s| s.is_selected(&place.id)));

    view! {
        <div class="place-card" class:active=move || active.get()>
            <img class="place-card-image" src=place.image_url.clone() alt=place.name.clone() />
            <span class="place-card-title">{place.name.clone()}</span>
            <p class="place-card-description">{place.description.clone()}</p>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_focus(place.id.as_str())
            >
                "Ver en mapa"
            </Button>
        </div>
    }
}
