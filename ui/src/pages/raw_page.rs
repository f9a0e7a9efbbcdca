//! Raw query page.

use crate::{state::State, widgets};
use egui::{Response, Ui};

/// Renders the raw query page.
pub fn raw_page(state: &mut State, ui: &mut Ui) -> Response {
    let api_base_url = state.config.api_url();

    ui.vertical(|ui| {
        widgets::raw_query::raw_query_panel(&mut state.raw_query, &api_base_url, ui);
    })
    .response
}
