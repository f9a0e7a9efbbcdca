//! Books page widgets: query controls, table, and CRUD modals.

pub mod api;
pub mod modals;
pub mod panel;
pub mod state;

pub use panel::{books_panel, poll_books_responses};
pub use state::{BookAction, BooksState};
