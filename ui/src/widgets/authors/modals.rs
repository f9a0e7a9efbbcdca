//! Modal dialogs for author management actions.

use biblio_business::SaveAuthorRequest;
use egui::{Color32, RichText, Ui, Window};

use super::api::{create_author, delete_author, update_author};
use super::state::{AuthorAction, AuthorsState};

/// Shows the shared create/edit form modal.
pub fn show_author_form_modal(state: &mut AuthorsState, api_base_url: &str, ui: &mut Ui) {
    let mut open = true;
    let editing_id = match state.current_action {
        AuthorAction::Edit(id) => Some(id),
        _ => None,
    };
    let title = match editing_id {
        Some(id) => format!("Edit Author - {id}"),
        None => "Add Author".to_string(),
    };

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &state.action_error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            if state.action_in_progress {
                ui.label("Saving author...");
                ui.spinner();
                return;
            }

            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut state.form_name);
            });

            ui.add_space(16.0);

            let can_save = !state.form_name.trim().is_empty();

            let mut save_clicked = false;
            let mut cancel_clicked = false;
            let mut delete_clicked = false;
            ui.horizontal(|ui| {
                save_clicked = ui.add_enabled(can_save, egui::Button::new("Save")).clicked();
                cancel_clicked = ui.button("Cancel").clicked();
                if editing_id.is_some() {
                    delete_clicked = ui
                        .button(RichText::new("Delete").color(Color32::RED))
                        .clicked();
                }
            });

            if save_clicked {
                let body = SaveAuthorRequest {
                    name: state.form_name.trim().to_string(),
                };
                state.set_action_in_progress();
                match editing_id {
                    Some(id) => update_author(api_base_url, id, &body, ui.ctx().clone()),
                    None => create_author(api_base_url, &body, ui.ctx().clone()),
                }
            }
            if cancel_clicked {
                state.close_action();
            }
            if delete_clicked && let Some(id) = editing_id {
                state.current_action = AuthorAction::ConfirmDelete(id);
                state.action_error = None;
            }
        });

    if !open {
        state.close_action();
    }
}

/// Shows the delete confirmation modal. Cancel returns to the edit form.
pub fn show_delete_author_modal(state: &mut AuthorsState, api_base_url: &str, id: i64, ui: &mut Ui) {
    let mut open = true;

    Window::new(format!("Delete Author - {id}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &state.action_error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            if state.action_in_progress {
                ui.label("Deleting author...");
                ui.spinner();
                return;
            }

            ui.colored_label(Color32::from_rgb(255, 165, 0), "⚠️ Warning");
            ui.add_space(4.0);
            ui.label("Are you sure you want to delete this author?");
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Delete").color(Color32::RED))
                    .clicked()
                {
                    state.set_action_in_progress();
                    delete_author(api_base_url, id, ui.ctx().clone());
                }

                if ui.button("Cancel").clicked() {
                    state.current_action = AuthorAction::Edit(id);
                    state.action_error = None;
                }
            });
        });

    if !open {
        state.close_action();
    }
}
