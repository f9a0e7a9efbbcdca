//! Business layer for the Biblio admin client.
//!
//! This crate holds everything the UI needs that is not rendering:
//! - query encoding for list endpoints (filters, sorts, field visibility)
//! - entity field sets and typed accessors
//! - API payload and record types
//! - error message extraction for failed requests
//! - configuration and routing
//!
//! The crate is intentionally free of egui/eframe types so its logic can be
//! unit tested without a UI harness.

pub mod config;
pub mod error;
pub mod fields;
pub mod models;
pub mod query;
pub mod route;

pub use config::BusinessConfig;
pub use error::ApiError;
pub use fields::{AuthorField, BookField, BorrowField, EntityField};
pub use models::{
    Author, Book, Borrow, CreateBorrowRequest, ErrorBody, RawQueryRequest, SaveAuthorRequest,
    SaveBookRequest, is_valid_published_date,
};
pub use query::{Filter, FilterOperator, ListQuery, Sort, SortOrder};
pub use route::Route;
