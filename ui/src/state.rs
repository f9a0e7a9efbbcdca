//! The main application state.
//!
//! Each page owns its state exclusively; there is no cross-page sharing.
//! Switching to a page recreates that page's state, so query selections are
//! discarded on navigation away rather than persisted.

use biblio_business::{BusinessConfig, Route};

use crate::widgets::notification::NotificationState;
use crate::widgets::{AuthorsState, BooksState, BorrowsState, RawQueryState};

pub struct State {
    /// Backend location.
    pub config: BusinessConfig,
    /// Which page is currently shown.
    pub route: Route,
    /// Books page state.
    pub books: BooksState,
    /// Authors page state.
    pub authors: AuthorsState,
    /// Borrows page state.
    pub borrows: BorrowsState,
    /// Raw query page state.
    pub raw_query: RawQueryState,
    /// Transient success/error messages.
    pub notifications: NotificationState,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::from_env())
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        Self {
            config,
            route: Route::default(),
            books: BooksState::default(),
            authors: AuthorsState::default(),
            borrows: BorrowsState::default(),
            raw_query: RawQueryState::default(),
            notifications: NotificationState::default(),
        }
    }

    /// State pointed at a test server.
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    /// Drop the state of the page being navigated to, so it starts from the
    /// page-load defaults (empty query, fresh fetch).
    pub fn reset_page(&mut self, route: Route) {
        match route {
            Route::Books => self.books = BooksState::default(),
            Route::Authors => self.authors = AuthorsState::default(),
            Route::Borrows => self.borrows = BorrowsState::default(),
            Route::RawQuery => self.raw_query = RawQueryState::default(),
        }
    }
}
