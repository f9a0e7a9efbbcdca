//! Pages module for the application.
//!
//! One page per route, each a thin wrapper delegating to its widget panel:
//! - `books_page`: book list and CRUD
//! - `authors_page`: author list and CRUD
//! - `borrows_page`: borrow history and issuing
//! - `raw_page`: ad-hoc read-only queries

mod authors_page;
mod books_page;
mod borrows_page;
mod raw_page;

pub use authors_page::authors_page;
pub use books_page::books_page;
pub use borrows_page::borrows_page;
pub use raw_page::raw_page;
