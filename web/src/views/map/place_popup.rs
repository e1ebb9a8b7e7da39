use leptos::prelude::*;
use shared_types::PlaceOfInterest;
use thaw::{Label, LabelSize};

#[component]
pub fn PlacePopup(place: &'static PlaceOfInterest) -> impl IntoView {
    view! {
        <div style="margin: 0.5rem 0; display: flex; flex-direction: column; gap: 0.5rem; max-width: 220px;">
            <Label size=LabelSize::Large>{place.name.clone()}</Label>
            <p style="margin: 0; color: #6b7280; font-size: 0.875rem;">
                {place.description.clone()}
            </p>
            <img
                src=place.image_url.clone()
                alt=place.name.clone()
                style="width: 100%; border-radius: 6px;"
            />
        </div>
    }
}
