//! API call for the raw query page.

use biblio_business::{ApiError, RawQueryRequest};

/// POST `/extra-query/raw`, executing an arbitrary read-only query.
/// The result is pretty-printed before being posted for display.
pub fn execute_raw_query(api_base_url: &str, query: &str, ctx: egui::Context) {
    let url = format!("{api_base_url}/extra-query/raw");
    let body = RawQueryRequest {
        query: query.to_string(),
    };
    let request = ehttp::Request::post(&url, serde_json::to_vec(&body).unwrap_or_default());
    let request = ehttp::Request {
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
        ..request
    };

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.ok {
                    let pretty = serde_json::from_slice::<serde_json::Value>(&response.bytes)
                        .and_then(|value| serde_json::to_string_pretty(&value));
                    match pretty {
                        Ok(text) => {
                            ctx.memory_mut(|mem| {
                                mem.data
                                    .insert_temp(egui::Id::new("raw_query_response"), text);
                            });
                        }
                        Err(err) => {
                            log::error!("failed to parse raw query result: {err}");
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    egui::Id::new("raw_query_error"),
                                    "Failed to parse response".to_string(),
                                );
                            });
                        }
                    }
                } else {
                    let err = ApiError::from_response(
                        response.status,
                        &response.bytes,
                        "Failed to execute query",
                    );
                    ctx.memory_mut(|mem| {
                        mem.data
                            .insert_temp(egui::Id::new("raw_query_error"), err.to_string());
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(
                        egui::Id::new("raw_query_error"),
                        ApiError::transport(err).to_string(),
                    );
                });
            }
        }
    });
}
