// src/gui/components/mod.rs
//
// One module per screen region. Each `draw` reads the session and turns
// clicks, keys and scrolls into session calls.

pub mod card_grid;
pub mod filter_bar;
pub mod modal_view;
pub mod status;
