//! Borrows page: issue form plus borrow history with query controls.

pub mod api;
pub mod panel;
pub mod state;

pub use panel::{borrows_panel, poll_borrows_responses};
pub use state::BorrowsState;
