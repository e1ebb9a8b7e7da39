pub mod map_renderer;
pub mod map_screen;
pub mod place_card;
pub mod place_marker;
pub mod place_popup;
pub mod util;
