//! API calls for the authors page.

use biblio_business::{ApiError, Author, AuthorField, ListQuery, SaveAuthorRequest};

/// Fetch the author list with the current query selections.
pub fn fetch_authors(api_base_url: &str, query: &ListQuery<AuthorField>, ctx: egui::Context) {
    let url = query.url(&format!("{api_base_url}/authors"));
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    match serde_json::from_slice::<Vec<Author>>(&response.bytes) {
                        Ok(authors) => {
                            ctx.memory_mut(|mem| {
                                mem.data
                                    .insert_temp(egui::Id::new("authors_response"), authors);
                            });
                        }
                        Err(err) => {
                            log::error!("failed to parse authors list: {err}");
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    egui::Id::new("authors_error"),
                                    "Failed to parse response".to_string(),
                                );
                            });
                        }
                    }
                } else {
                    let err = ApiError::from_response(
                        response.status,
                        &response.bytes,
                        "Failed to fetch authors",
                    );
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("authors_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("authors_error"),
                        ApiError::transport(err).to_string(),
                    );
                });
            }
        }
    });
}

/// POST `/authors`.
pub fn create_author(api_base_url: &str, body: &SaveAuthorRequest, ctx: egui::Context) {
    let url = format!("{api_base_url}/authors");
    let request = ehttp::Request::post(&url, serde_json::to_vec(body).unwrap_or_default());
    let request = ehttp::Request {
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
        ..request
    };
    submit_author(request, "Failed to create author", "Author created successfully", ctx);
}

/// PUT `/authors/{id}`.
pub fn update_author(api_base_url: &str, id: i64, body: &SaveAuthorRequest, ctx: egui::Context) {
    let request = ehttp::Request {
        method: "PUT".to_string(),
        url: format!("{api_base_url}/authors/{id}"),
        body: serde_json::to_vec(body).unwrap_or_default(),
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    };
    submit_author(request, "Failed to update author", "Author updated successfully", ctx);
}

/// DELETE `/authors/{id}`.
pub fn delete_author(api_base_url: &str, id: i64, ctx: egui::Context) {
    let request = ehttp::Request {
        method: "DELETE".to_string(),
        url: format!("{api_base_url}/authors/{id}"),
        body: Vec::new(),
        headers: ehttp::Headers::default(),
    };
    submit_author(request, "Failed to delete author", "Author deleted successfully", ctx);
}

fn submit_author(
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
                            egui::Id::new("authors_action_success"),
                            success_message.to_string(),
                        );
                    });
                } else {
                    let err = ApiError::from_response(response.status, &response.bytes, fallback);
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("authors_action_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("authors_action_error"),
                        ApiError::transport(err).to_string(),
                    );
                });
            }
        }
    });
}
