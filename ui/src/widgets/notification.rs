//! Transient success/error notifications.
//!
//! One message at a time, shown in a bar at the bottom of the window.
//! Success messages fade after three seconds, errors after six; both can be
//! dismissed early. A new message replaces the current one.

use egui::{Color32, RichText, Ui};

const SUCCESS_SECONDS: f64 = 3.0;
const ERROR_SECONDS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    /// `egui` time (seconds since app start) the message appeared.
    pub shown_at: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn success(&mut self, message: impl Into<String>, now: f64) {
        self.current = Some(Notification {
            message: message.into(),
            severity: Severity::Success,
            shown_at: now,
        });
    }

    pub fn error(&mut self, message: impl Into<String>, now: f64) {
        self.current = Some(Notification {
            message: message.into(),
            severity: Severity::Error,
            shown_at: now,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the current message once its display time has elapsed.
    pub fn tick(&mut self, now: f64) {
        if let Some(notification) = &self.current {
            let limit = match notification.severity {
                Severity::Success => SUCCESS_SECONDS,
                Severity::Error => ERROR_SECONDS,
            };
            if now - notification.shown_at >= limit {
                self.current = None;
            }
        }
    }
}

/// Renders the notification bar. Call inside a bottom panel shown only while
/// a message is present.
pub fn notification_bar(state: &mut NotificationState, ui: &mut Ui) {
    let Some(notification) = state.current.clone() else {
        return;
    };

    let (icon, color) = match notification.severity {
        Severity::Success => ("✔", Color32::from_rgb(34, 139, 34)),
        Severity::Error => ("⚠", Color32::RED),
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).color(color));
        ui.label(RichText::new(&notification.message).color(color));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✖").clicked() {
                state.dismiss();
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_replaces_current_message() {
        let mut state = NotificationState::default();
        state.error("boom", 0.0);
        state.success("saved", 1.0);
        let current = state.current.unwrap();
        assert_eq!(current.message, "saved");
        assert_eq!(current.severity, Severity::Success);
    }

    #[test]
    fn test_success_auto_hides_after_three_seconds() {
        let mut state = NotificationState::default();
        state.success("saved", 10.0);
        state.tick(12.9);
        assert!(state.current.is_some());
        state.tick(13.0);
        assert!(state.current.is_none());
    }

    #[test]
    fn test_error_stays_longer_than_success() {
        let mut state = NotificationState::default();
        state.error("boom", 0.0);
        state.tick(5.9);
        assert!(state.current.is_some());
        state.tick(6.0);
        assert!(state.current.is_none());
    }

    #[test]
    fn test_dismiss_clears_immediately() {
        let mut state = NotificationState::default();
        state.error("boom", 0.0);
        state.dismiss();
        assert!(state.current.is_none());
    }
}
