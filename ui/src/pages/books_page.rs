//! Books page.

use crate::{state::State, widgets};
use egui::{Response, Ui};

/// Renders the books page.
pub fn books_page(state: &mut State, ui: &mut Ui) -> Response {
    let api_base_url = state.config.api_url();

    ui.vertical(|ui| {
        widgets::books::books_panel(&mut state.books, &api_base_url, ui);
    })
    .response
}
