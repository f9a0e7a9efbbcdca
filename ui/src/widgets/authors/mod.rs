//! Authors page: list with query controls plus create/edit/delete modals.

pub mod api;
pub mod modals;
pub mod panel;
pub mod state;

pub use panel::{authors_panel, poll_authors_responses};
pub use state::{AuthorAction, AuthorsState};
