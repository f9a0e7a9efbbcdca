//! API calls for the borrows page.

use biblio_business::{ApiError, Book, Borrow, BorrowField, CreateBorrowRequest, ListQuery};

/// Fetch the borrow history with the current query selections.
pub fn fetch_borrows(api_base_url: &str, query: &ListQuery<BorrowField>, ctx: egui::Context) {
    let url = query.url(&format!("{api_base_url}/borrows"));
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    match serde_json::from_slice::<Vec<Borrow>>(&response.bytes) {
                        Ok(borrows) => {
                            ctx.memory_mut(|mem| {
                                mem.data
                                    .insert_temp(egui::Id::new("borrows_response"), borrows);
                            });
                        }
                        Err(err) => {
                            log::error!("failed to parse borrows list: {err}");
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    egui::Id::new("borrows_error"),
                                    "Failed to parse response".to_string(),
                                );
                            });
                        }
                    }
                } else {
                    let err = ApiError::from_response(
                        response.status,
                        &response.bytes,
                        "Failed to fetch borrows",
                    );
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("borrows_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("borrows_error"),
                        ApiError::transport(err).to_string(),
                    );
                });
            }
        }
    });
}

/// Fetch the book list for the issue form's dropdown. Full records, no query.
pub fn fetch_books_for_borrows(api_base_url: &str, ctx: egui::Context) {
    let url = format!("{api_base_url}/books");
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    if let Ok(books) = serde_json::from_slice::<Vec<Book>>(&response.bytes) {
                        ctx.memory_mut(|mem| {
                            mem.data
                                .insert_temp(egui::Id::new("borrows_books_response"), books);
                        });
                        return;
                    }
                }
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("borrows_books_error"),
                        "Failed to fetch books.".to_string(),
                    );
                });
            }
            Err(err) => {
                log::error!("failed to fetch books: {err}");
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("borrows_books_error"),
                        "Failed to fetch books.".to_string(),
                    );
                });
            }
        }
    });
}

/// POST `/borrows`, issuing a book to a user.
pub fn create_borrow(api_base_url: &str, body: &CreateBorrowRequest, ctx: egui::Context) {
    let url = format!("{api_base_url}/borrows");
    let request = ehttp::Request::post(&url, serde_json::to_vec(body).unwrap_or_default());
    let request = ehttp::Request {
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
        ..request
    };
    let success_message = format!("Book {} borrowed by user {}!", body.book_id, body.user_id);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("borrow_success"), success_message.clone());
                    });
                } else {
                    let err = ApiError::from_response(
                        response.status,
                        &response.bytes,
                        "Failed to borrow book",
                    );
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("borrow_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("borrow_error"),
                        ApiError::transport(err).to_string(),
                    );
                });
            }
        }
    });
}
