//! Authors page.

use crate::{state::State, widgets};
use egui::{Response, Ui};

/// Renders the authors page.
pub fn authors_page(state: &mut State, ui: &mut Ui) -> Response {
    let api_base_url = state.config.api_url();

    ui.vertical(|ui| {
        widgets::authors::authors_panel(&mut state.authors, &api_base_url, ui);
    })
    .response
}
