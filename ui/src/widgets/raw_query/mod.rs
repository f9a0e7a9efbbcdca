//! Raw query page: run arbitrary read-only queries against the backend.

pub mod api;
pub mod panel;
pub mod state;

pub use panel::{poll_raw_query_responses, raw_query_panel};
pub use state::RawQueryState;
