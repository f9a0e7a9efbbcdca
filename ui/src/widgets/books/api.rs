//! API calls for the books page.
//!
//! Each call runs through `ehttp::fetch`; the callback requests a repaint
//! and posts its result into egui temp memory, drained each frame by
//! [`super::panel::poll_books_responses`].

use biblio_business::{ApiError, Book, BookField, ListQuery, SaveBookRequest};

/// Fetch the book list with the current query selections.
pub fn fetch_books(api_base_url: &str, query: &ListQuery<BookField>, ctx: egui::Context) {
    let url = query.url(&format!("{api_base_url}/books"));
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    match serde_json::from_slice::<Vec<Book>>(&response.bytes) {
                        Ok(books) => {
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(egui::Id::new("books_response"), books);
                            });
                        }
                        Err(err) => {
                            log::error!("failed to parse books list: {err}");
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    egui::Id::new("books_error"),
                                    "Failed to parse response".to_string(),
                                );
                            });
                        }
                    }
                } else {
                    let err = ApiError::from_response(
                        response.status,
                        &response.bytes,
                        "Failed to fetch books",
                    );
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("books_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data
                        .insert_temp(egui::Id::new("books_error"), ApiError::transport(err).to_string());
                });
            }
        }
    });
}

/// Fetch the author list used for name lookup and the form dropdown.
/// No query parameters: the lookup needs full records.
pub fn fetch_authors_for_books(api_base_url: &str, ctx: egui::Context) {
    let url = format!("{api_base_url}/authors");
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    if let Ok(authors) =
                        serde_json::from_slice::<Vec<biblio_business::Author>>(&response.bytes)
                    {
                        ctx.memory_mut(|mem| {
                            mem.data
                                .insert_temp(egui::Id::new("books_authors_response"), authors);
                        });
                        return;
                    }
                }
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("books_authors_error"),
                        "Failed to fetch authors.".to_string(),
                    );
                });
            }
            Err(err) => {
                log::error!("failed to fetch authors: {err}");
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("books_authors_error"),
                        "Failed to fetch authors.".to_string(),
                    );
                });
            }
        }
    });
}

/// Fetch one book for the edit form. A JSON `null` body means the book does
/// not exist; that is surfaced as a modal error, not a failure.
pub fn fetch_book_details(api_base_url: &str, id: i64, ctx: egui::Context) {
    let url = format!("{api_base_url}/books/{id}");
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    match serde_json::from_slice::<Option<Book>>(&response.bytes) {
                        Ok(book) => {
                            ctx.memory_mut(|mem| {
                                mem.data
                                    .insert_temp(egui::Id::new("book_details_response"), book);
                            });
                        }
                        Err(_) => {
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    egui::Id::new("books_action_error"),
                                    "Failed to parse response".to_string(),
                                );
                            });
                        }
                    }
                } else {
                    let err = ApiError::from_response(
                        response.status,
                        &response.bytes,
                        "Failed to fetch book details",
                    );
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("books_action_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("books_action_error"),
                        ApiError::transport(err).to_string(),
                    );
                });
            }
        }
    });
}

/// POST `/books`.
pub fn create_book(api_base_url: &str, body: &SaveBookRequest, ctx: egui::Context) {
    let url = format!("{api_base_url}/books");
    let request = ehttp::Request::post(&url, serde_json::to_vec(body).unwrap_or_default());
    let request = ehttp::Request {
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
        ..request
    };
    submit_book(request, "Failed to create book", "Book created successfully", ctx);
}

/// PUT `/books/{id}`.
pub fn update_book(api_base_url: &str, id: i64, body: &SaveBookRequest, ctx: egui::Context) {
    let request = ehttp::Request {
        method: "PUT".to_string(),
        url: format!("{api_base_url}/books/{id}"),
        body: serde_json::to_vec(body).unwrap_or_default(),
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    };
    submit_book(request, "Failed to update book", "Book updated successfully", ctx);
}

/// DELETE `/books/{id}`.
pub fn delete_book(api_base_url: &str, id: i64, ctx: egui::Context) {
    let request = ehttp::Request {
        method: "DELETE".to_string(),
        url: format!("{api_base_url}/books/{id}"),
        body: Vec::new(),
        headers: ehttp::Headers::default(),
    };
    submit_book(request, "Failed to delete book", "Book deleted successfully", ctx);
}

/// Shared completion handling for create/update/delete.
fn submit_book(
    request: ehttp::Request,
    fallback: &'static str,
    success_message: &'static str,
    ctx: egui::Context,
) {
    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    ctx.memory_mut(|mem| {
                        mem.data.insert_temp(
                            egui::Id::new("books_action_success"),
                            success_message.to_string(),
                        );
                    });
                } else {
                    let err = ApiError::from_response(response.status, &response.bytes, fallback);
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("books_action_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("books_action_error"),
                        ApiError::transport(err).to_string(),
                    );
                });
            }
        }
    });
}
