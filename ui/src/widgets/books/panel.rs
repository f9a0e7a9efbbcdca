//! Main panel for the books page: query controls, results table, modals.

use biblio_business::{Book, BookField};
use egui::{Color32, CollapsingHeader, Ui};

use super::api::{fetch_authors_for_books, fetch_books};
use super::modals::{show_book_form_modal, show_delete_book_modal};
use super::state::{BookAction, BooksState};
use crate::widgets::notification::NotificationState;
use crate::widgets::query_controls::{field_selector, filter_manager, sort_manager};
use crate::widgets::data_table::data_table;

/// Displays the books panel. The panel is the only place list fetches are
/// issued from; everything else just flips `needs_fetch`.
pub fn books_panel(state: &mut BooksState, api_base_url: &str, ui: &mut Ui) {
    if state.needs_fetch && !state.is_fetching {
        state.set_fetching();
        fetch_books(api_base_url, &state.query, ui.ctx().clone());
        fetch_authors_for_books(api_base_url, ui.ctx().clone());
    }

    ui.heading("Books");
    ui.add_space(4.0);

    CollapsingHeader::new("Field Visibility")
        .default_open(true)
        .show(ui, |ui| {
            field_selector(ui, &mut state.query.fields);
        });

    CollapsingHeader::new("Filters").show(ui, |ui| {
        filter_manager(ui, "books", &mut state.query.filters);
    });

    CollapsingHeader::new("Sorting").show(ui, |ui| {
        sort_manager(ui, "books", &mut state.query.sorts);
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
        if ui.button("➕ Add Book").clicked() {
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

    if state.books.is_empty() && !state.is_fetching {
        ui.label("No books found.");
    } else {
        let mut edit_requested: Option<usize> = None;
        let books = std::mem::take(&mut state.books);
        data_table(
            ui,
            "books_table",
            &state.query.fields,
            books.len(),
            |row, field| cell_text(state, &books[row], field),
            Some(&mut |row| edit_requested = Some(row)),
        );
        state.books = books;

        if let Some(row) = edit_requested
            && let Some(id) = state.books.get(row).and_then(|book| book.id)
        {
            state.start_edit(id);
            super::api::fetch_book_details(api_base_url, id, ui.ctx().clone());
        }
    }

    match state.current_action {
        BookAction::Create | BookAction::Edit(_) => {
            show_book_form_modal(state, api_base_url, ui);
        }
        BookAction::ConfirmDelete(id) => {
            show_delete_book_modal(state, api_base_url, id, ui);
        }
        BookAction::None => {}
    }
}

/// Renders a single table cell. `author_id` is shown as the author name.
fn cell_text(state: &BooksState, book: &Book, field: BookField) -> String {
    match field {
        BookField::AuthorId => state.author_name(book.author_id),
        other => book.field_text(other),
    }
}

/// Poll for async responses and update state.
/// Call this once per frame from the app update loop.
pub fn poll_books_responses(
    state: &mut BooksState,
    notifications: &mut NotificationState,
    ctx: &egui::Context,
) {
    if let Some(books) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Vec<Book>>(egui::Id::new("books_response"))
    }) {
        state.update_books(books);
        notifications.success("Books fetched successfully!", ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<Vec<Book>>(egui::Id::new("books_response"));
        });
    }

    if let Some(error) =
        ctx.memory(|mem| mem.data.get_temp::<String>(egui::Id::new("books_error")))
    {
        state.set_error(error.clone());
        notifications.error(error, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("books_error"));
        });
    }

    if let Some(authors) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Vec<biblio_business::Author>>(egui::Id::new("books_authors_response"))
    }) {
        state.authors = authors;
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Vec<biblio_business::Author>>(egui::Id::new("books_authors_response"));
        });
    }

    if let Some(error) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("books_authors_error"))
    }) {
        log::warn!("author lookup failed: {error}");
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("books_authors_error"));
        });
    }

    if let Some(book) = ctx.memory(|mem| {
        mem.data
            .get_temp::<Option<Book>>(egui::Id::new("book_details_response"))
    }) {
        state.loading_details = false;
        match book {
            Some(book) => state.fill_form(&book),
            None => state.set_action_error("Book not found.".to_string()),
        }
        ctx.memory_mut(|mem| {
            mem.data
                .remove::<Option<Book>>(egui::Id::new("book_details_response"));
        });
    }

    if let Some(message) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("books_action_success"))
    }) {
        state.close_action();
        state.needs_fetch = true;
        notifications.success(message, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("books_action_success"));
        });
    }

    if let Some(error) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("books_action_error"))
    }) {
        state.set_action_error(error);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("books_action_error"));
        });
    }
}
