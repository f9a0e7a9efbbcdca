//! Main panel for the borrows page: issue form plus read-only history table.

use biblio_business::{Book, Borrow, CreateBorrowRequest};
use egui::{Color32, CollapsingHeader, Ui};

use super::api::{create_borrow, fetch_books_for_borrows, fetch_borrows};
use super::state::BorrowsState;
use crate::widgets::notification::NotificationState;
use crate::widgets::query_controls::{field_selector, filter_manager, sort_manager};
use crate::widgets::data_table::data_table;

/// Displays the borrows panel.
pub fn borrows_panel(state: &mut BorrowsState, api_base_url: &str, ui: &mut Ui) {
    if state.needs_fetch && !state.is_fetching {
        state.set_fetching();
        fetch_borrows(api_base_url, &state.query, ui.ctx().clone());
        fetch_books_for_borrows(api_base_url, ui.ctx().clone());
    }

    ui.heading("Borrows");
    ui.add_space(4.0);

    CollapsingHeader::new("Issue a Borrow")
        .default_open(true)
        .show(ui, |ui| {
            if state.books.is_empty() {
                ui.label("No books available to borrow.");
                return;
            }

            ui.horizontal(|ui| {
                ui.label("Book:");
                let selected = match state.selected_book_id {
                    Some(id) => state.book_title(Some(id)),
                    None => "Select a book".to_string(),
                };
                egui::ComboBox::from_id_salt("borrow_book")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for book in &state.books {
                            let Some(id) = book.id else { continue };
                            let title = book.title.clone().unwrap_or_else(|| id.to_string());
                            ui.selectable_value(&mut state.selected_book_id, Some(id), title);
                        }
                    });

                ui.label("User ID:");
                ui.add(egui::DragValue::new(&mut state.user_id).range(1..=i64::MAX));
            });

            ui.add_space(4.0);
            let can_borrow = state.selected_book_id.is_some() && !state.action_in_progress;
            let mut borrow_clicked = false;
            ui.horizontal(|ui| {
                borrow_clicked = ui
                    .add_enabled(can_borrow, egui::Button::new("Borrow"))
                    .clicked();
                if state.action_in_progress {
                    ui.spinner();
                }
            });

            if borrow_clicked && let Some(book_id) = state.selected_book_id {
                state.action_in_progress = true;
                let body = CreateBorrowRequest {
                    book_id,
                    user_id: state.user_id,
                };
                create_borrow(api_base_url, &body, ui.ctx().clone());
            }
        });

    CollapsingHeader::new("Field Visibility").show(ui, |ui| {
        field_selector(ui, &mut state.query.fields);
    });

    CollapsingHeader::new("Filters").show(ui, |ui| {
        filter_manager(ui, "borrows", &mut state.query.filters);
    });

    CollapsingHeader::new("Sorting").show(ui, |ui| {
        sort_manager(ui, "borrows", &mut state.query.sorts);
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
        if state.is_fetching {
            ui.spinner();
            ui.label("Loading...");
        }
    });

    if let Some(error) = &state.error {
        ui.colored_label(Color32::RED, format!("Error: {error}"));
    }

    ui.add_space(8.0);

    if state.borrows.is_empty() && !state.is_fetching {
        ui.label("No borrows found.");
    } else {
        data_table(
            ui,
            "borrows_table",
            &state.query.fields,
            state.borrows.len(),
            |row, field| state.borrows[row].field_text(field),
            None,
        );
    }
}

/// Poll for async responses and update state.
pub fn poll_borrows_responses(
    state: &mut BorrowsState,
    notifications: &mut NotificationState,
    ctx: &egui::Context,
) {
    if let Some(borrows) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Vec<Borrow>>(egui::Id::new("borrows_response"))
    }) {
        state.update_borrows(borrows);
        notifications.success("Borrows fetched successfully!", ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Vec<Borrow>>(egui::Id::new("borrows_response"));
        });
    }

    if let Some(error) =
        ctx.memory(|mem| mem.data.get_temp::<String>(egui::Id::new("borrows_error")))
    {
        state.set_error(error.clone());
        notifications.error(error, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("borrows_error"));
        });
    }

    if let Some(books) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Vec<Book>>(egui::Id::new("borrows_books_response"))
    }) {
        state.books = books;
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Vec<Book>>(egui::Id::new("borrows_books_response"));
        });
    }

    if let Some(error) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("borrows_books_error"))
    }) {
        log::warn!("book lookup failed: {error}");
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("borrows_books_error"));
        });
    }

    if let Some(message) =
        ctx.memory(|mem| mem.data.get_temp::<String>(egui::Id::new("borrow_success")))
    {
        state.action_in_progress = false;
        state.selected_book_id = None;
        state.needs_fetch = true;
        notifications.success(message, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("borrow_success"));
        });
    }

    if let Some(error) =
        ctx.memory(|mem| mem.data.get_temp::<String>(egui::Id::new("borrow_error")))
    {
        state.action_in_progress = false;
        notifications.error(error, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("borrow_error"));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::notification::Severity;

    #[test]
    fn borrow_success_clears_selection_and_refetches() {
        let mut state = BorrowsState::default();
        state.needs_fetch = false;
        state.selected_book_id = Some(5);
        state.action_in_progress = true;
        let mut notifications = NotificationState::default();

        let ctx = egui::Context::default();
        ctx.memory_mut(|mem| {
            mem.data.insert_temp(
                egui::Id::new("borrow_success"),
                "Book 5 borrowed by user 1!".to_string(),
            );
        });
        let _ = ctx.run(Default::default(), |ctx| {
            poll_borrows_responses(&mut state, &mut notifications, ctx);
        });

        assert!(!state.action_in_progress);
        assert!(state.selected_book_id.is_none());
        assert!(state.needs_fetch);
        assert_eq!(
            notifications.current.as_ref().map(|n| n.message.as_str()),
            Some("Book 5 borrowed by user 1!")
        );
    }

    #[test]
    fn borrow_error_surfaces_as_notification() {
        let mut state = BorrowsState::default();
        state.action_in_progress = true;
        let mut notifications = NotificationState::default();

        let ctx = egui::Context::default();
        ctx.memory_mut(|mem| {
            mem.data.insert_temp(
                egui::Id::new("borrow_error"),
                "book already borrowed".to_string(),
            );
        });
        let _ = ctx.run(Default::default(), |ctx| {
            poll_borrows_responses(&mut state, &mut notifications, ctx);
        });

        assert!(!state.action_in_progress);
        assert_eq!(
            notifications.current.as_ref().map(|n| n.severity),
            Some(Severity::Error)
        );
    }
}
