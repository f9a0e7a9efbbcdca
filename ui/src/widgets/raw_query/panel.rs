//! Main panel for the raw query page.

use egui::{Color32, RichText, ScrollArea, Ui};

use super::api::execute_raw_query;
use super::state::RawQueryState;
use crate::widgets::notification::NotificationState;

/// Displays the raw query panel: a multiline editor plus the result view.
pub fn raw_query_panel(state: &mut RawQueryState, api_base_url: &str, ui: &mut Ui) {
    ui.heading("Raw Query");
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::multiline(&mut state.query)
            .hint_text("SELECT ...")
            .font(egui::TextStyle::Monospace)
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let can_execute = !state.query.trim().is_empty() && !state.is_executing;
        if ui
            .add_enabled(can_execute, egui::Button::new("Execute"))
            .clicked()
        {
            state.set_executing();
            execute_raw_query(api_base_url, &state.query, ui.ctx().clone());
        }
        if state.is_executing {
            ui.spinner();
            ui.label("Executing...");
        }
    });

    if let Some(error) = &state.error {
        ui.colored_label(Color32::RED, format!("Error: {error}"));
    }

    if let Some(result) = &state.result {
        ui.add_space(8.0);
        ScrollArea::vertical().show(ui, |ui| {
            ui.label(RichText::new(result).monospace());
        });
    }
}

/// Poll for async responses and update state.
pub fn poll_raw_query_responses(
    state: &mut RawQueryState,
    notifications: &mut NotificationState,
    ctx: &egui::Context,
) {
    if let Some(result) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("raw_query_response"))
    }) {
        state.set_result(result);
        notifications.success("Query executed successfully!", ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("raw_query_response"));
        });
    }

    if let Some(error) = ctx.memory(|mem| {
        mem.data
            .get_temp::<String>(egui::Id::new("raw_query_error"))
    }) {
        state.set_error(error.clone());
        notifications.error(error, ctx.input(|i| i.time));
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(egui::Id::new("raw_query_error"));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_picks_up_query_result() {
        let mut state = RawQueryState::default();
        state.set_executing();
        let mut notifications = NotificationState::default();

        let ctx = egui::Context::default();
        ctx.memory_mut(|mem| {
            mem.data.insert_temp(
                egui::Id::new("raw_query_response"),
                "[\n  {\n    \"id\": 1\n  }\n]".to_string(),
            );
        });
        let _ = ctx.run(Default::default(), |ctx| {
            poll_raw_query_responses(&mut state, &mut notifications, ctx);
        });

        assert!(!state.is_executing);
        assert!(state.result.as_deref().unwrap_or_default().contains("\"id\": 1"));
    }

    #[test]
    fn poll_surfaces_query_error() {
        let mut state = RawQueryState::default();
        state.set_executing();
        let mut notifications = NotificationState::default();

        let ctx = egui::Context::default();
        ctx.memory_mut(|mem| {
            mem.data.insert_temp(
                egui::Id::new("raw_query_error"),
                "syntax error at or near \"SELEC\"".to_string(),
            );
        });
        let _ = ctx.run(Default::default(), |ctx| {
            poll_raw_query_responses(&mut state, &mut notifications, ctx);
        });

        assert!(!state.is_executing);
        assert_eq!(
            state.error.as_deref(),
            Some("syntax error at or near \"SELEC\"")
        );
    }
}
