//! Main panel for the authors page.

use biblio_business::Author;
use egui::{Color32, CollapsingHeader, Ui};

use super::api::fetch_authors;
use super::modals::{show_author_form_modal, show_delete_author_modal};
use super::state::{AuthorAction, AuthorsState};
use crate::widgets::notification::NotificationState;
use crate::widgets::query_controls::{field_selector, filter_manager, sort_manager};
use crate::widgets::data_table::data_table;

/// Displays the authors panel.
pub fn authors_panel(state: &mut AuthorsState, api_base_url: &str, ui: &mut Ui) {
    if state.needs_fetch && !state.is_fetching {
        state.set_fetching();
        fetch_authors(api_base_url, &state.query, ui.ctx().clone());
    }

    ui.heading("Authors");
    ui.add_space(4.0);

    CollapsingHeader::new("Field Visibility")
        .default_open(true)
        .show(ui, |ui| {
            field_selector(ui, &mut state.query.fields);
        });

    CollapsingHeader::new("Filters").show(ui, |ui| {
        filter_manager(ui, "authors", &mut state.query.filters);
    });

    CollapsingHeader::new("Sorting").show(ui, |ui| {
        sort_manager(ui, "authors", &mut state.query.sorts);
    });

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui.button("Apply").clicked() {
            state.needs_fetch = true;
        }
        if ui.button("Reset").clicked() {
            state.query.reset();
            state.needs_fetch = true;
        }
        if ui.button("🔄 Refresh").clicked() {
            state.needs_fetch = true;
        }
        if ui.button("➕ Add Author").clicked() {
            state.open_create_modal();
        }
        if state.is_fetching {
            ui.spinner();
            ui.label("Loading...");
        }
    });

    if let Some(error) = &state.error {
        ui.colored_label(Color32::RED, format!("Error: {error}"));
    }

    ui.add_space(8.0);

    if state.authors.is_empty() && !state.is_fetching {
        ui.label("No authors found.");
    } else {
        let mut edit_requested: Option<usize> = None;
        data_table(
            ui,
            "authors_table",
            &state.query.fields,
            state.authors.len(),
            |row, field| state.authors[row].field_text(field),
            Some(&mut |row| edit_requested = Some(row)),
        );

        if let Some(row) = edit_requested {
            let author = state.authors.get(row).cloned();
            if let Some(author) = author {
                state.start_edit(&author);
            }
        }
    }

    match state.current_action {
        AuthorAction::Create | AuthorAction::Edit(_) => {
            show_author_form_modal(state, api_base_url, ui);
        }
        AuthorAction::ConfirmDelete(id) => {
            show_delete_author_modal(state, api_base_url, id, ui);
        }
        AuthorAction::None => {}
    }
}

/// Poll for async responses and update state.
pub fn poll_authors_responses(
    state: &mut AuthorsState,
    notifications: &mut NotificationState,
    ctx: &egui::Context,
) {
    if let Some(authors) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Vec<Author>>(egui::Id::new("authors_response"))
    }) {
        state.update_authors(authors);
        notifications.success("Authors fetched successfully!", ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Vec<Author>>(egui::Id::new("authors_response"));
        });
    }

    if let Some(error) =
        ctx.memory(|mem| mem.data.get_temp::<String>(egui::Id::new("authors_error")))
    {
        state.set_error(error.clone());
        notifications.error(error, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("authors_error"));
        });
    }

    if let Some(message) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("authors_action_success"))
    }) {
        state.close_action();
        state.needs_fetch = true;
        notifications.success(message, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<String>(egui::Id::new("authors_action_success"));
        });
    }

    if let Some(error) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("authors_action_error"))
    }) {
        state.set_action_error(error);
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<String>(egui::Id::new("authors_action_error"));
        });
    }
}
