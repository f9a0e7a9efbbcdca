use biblio_business::Route;

use crate::widgets::notification::notification_bar;
use crate::{pages, state::State, widgets};

/// The administrative client application.
pub struct BiblioApp {
    state: State,
}

impl BiblioApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for BiblioApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain async responses posted by the API callbacks.
        widgets::books::poll_books_responses(
            &mut self.state.books,
            &mut self.state.notifications,
            ctx,
        );
        widgets::authors::poll_authors_responses(
            &mut self.state.authors,
            &mut self.state.notifications,
            ctx,
        );
        widgets::borrows::poll_borrows_responses(
            &mut self.state.borrows,
            &mut self.state.notifications,
            ctx,
        );
        widgets::raw_query::poll_raw_query_responses(
            &mut self.state.raw_query,
            &mut self.state.notifications,
            ctx,
        );
        self.state.notifications.tick(ctx.input(|i| i.time));

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Biblio");
                ui.separator();
                let mut switch_to: Option<Route> = None;
                for route in Route::ALL {
                    let selected = self.state.route == route;
                    if ui.selectable_label(selected, route.title()).clicked() && !selected {
                        switch_to = Some(route);
                    }
                }
                if let Some(route) = switch_to {
                    self.state.route = route;
                    self.state.reset_page(route);
                }
            });
        });

        egui::TopBottomPanel::bottom("notification_panel").show_animated(
            ctx,
            self.state.notifications.current.is_some(),
            |ui| {
                notification_bar(&mut self.state.notifications, ui);
            },
        );

        egui::CentralPanel::default().show(ctx, |ui| match self.state.route {
            Route::Books => {
                pages::books_page(&mut self.state, ui);
            }
            Route::Authors => {
                pages::authors_page(&mut self.state, ui);
            }
            Route::Borrows => {
                pages::borrows_page(&mut self.state, ui);
            }
            Route::RawQuery => {
                pages::raw_page(&mut self.state, ui);
            }
        });
    }
}
