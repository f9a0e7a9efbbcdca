//! Borrows page.

use crate::{state::State, widgets};
use egui::{Response, Ui};

/// Renders the borrows page.
pub fn borrows_page(state: &mut State, ui: &mut Ui) -> Response {
    let api_base_url = state.config.api_url();

    ui.vertical(|ui| {
        widgets::borrows::borrows_panel(&mut state.borrows, &api_base_url, ui);
    })
    .response
}
