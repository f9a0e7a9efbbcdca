//! Modal dialogs for book management actions.

use biblio_business::{SaveBookRequest, is_valid_published_date};
use egui::{Color32, RichText, Ui, Window};

use super::api::{create_book, delete_book, update_book};
use super::state::{BookAction, BooksState};

/// Shows the shared create/edit form modal.
pub fn show_book_form_modal(state: &mut BooksState, api_base_url: &str, ui: &mut Ui) {
    let mut open = true;
    let editing_id = match state.current_action {
        BookAction::Edit(id) => Some(id),
        _ => None,
    };
    let title = match editing_id {
        Some(id) => format!("Edit Book - {id}"),
        None => "Add Book".to_string(),
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

            if state.loading_details {
                ui.label("Loading book...");
                ui.spinner();
                return;
            }

            if state.action_in_progress {
                ui.label("Saving book...");
                ui.spinner();
                return;
            }

            ui.horizontal(|ui| {
                ui.label("Title:");
                ui.text_edit_singleline(&mut state.form.title);
            });

            ui.horizontal(|ui| {
                ui.label("Author:");
                let selected = state
                    .form
                    .author_id
                    .map(|id| state.author_name(Some(id)))
                    .unwrap_or_else(|| "Select an author".to_string());
                egui::ComboBox::from_id_salt("book_form_author")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for author in &state.authors {
                            let Some(id) = author.id else { continue };
                            let name = author.name.clone().unwrap_or_else(|| id.to_string());
                            ui.selectable_value(&mut state.form.author_id, Some(id), name);
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label("Published:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.form.published_at)
                        .hint_text("YYYY-MM-DD"),
                );
            });

            ui.add_space(16.0);

            let can_save = !state.form.title.trim().is_empty()
                && state.form.author_id.is_some()
                && is_valid_published_date(&state.form.published_at);

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

            if save_clicked && let Some(author_id) = state.form.author_id {
                let body = SaveBookRequest {
                    title: state.form.title.trim().to_string(),
                    author_id,
                    published_at: state.form.published_at.clone(),
                };
                state.set_action_in_progress();
                match editing_id {
                    Some(id) => update_book(api_base_url, id, &body, ui.ctx().clone()),
                    None => create_book(api_base_url, &body, ui.ctx().clone()),
                }
            }
            if cancel_clicked {
                state.close_action();
            }
            if delete_clicked && let Some(id) = editing_id {
                state.current_action = BookAction::ConfirmDelete(id);
                state.action_error = None;
            }
        });

    if !open {
        state.close_action();
    }
}

/// Shows the delete confirmation modal. Cancel returns to the edit form.
pub fn show_delete_book_modal(state: &mut BooksState, api_base_url: &str, id: i64, ui: &mut Ui) {
    let mut open = true;

    Window::new(format!("Delete Book - {id}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &state.action_error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            if state.action_in_progress {
                ui.label("Deleting book...");
                ui.spinner();
                return;
            }

            ui.colored_label(Color32::from_rgb(255, 165, 0), "⚠️ Warning");
            ui.add_space(4.0);
            ui.label("Are you sure you want to delete this book?");
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Delete").color(Color32::RED))
                    .clicked()
                {
                    state.set_action_in_progress();
                    delete_book(api_base_url, id, ui.ctx().clone());
                }

                if ui.button("Cancel").clicked() {
                    state.current_action = BookAction::Edit(id);
                    state.action_error = None;
                }
            });
        });

    if !open {
        state.close_action();
    }
}
