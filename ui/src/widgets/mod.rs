//! Widgets for the Biblio admin client.

pub mod authors;
pub mod books;
pub mod borrows;
pub mod data_table;
pub mod notification;
pub mod query_controls;
pub mod raw_query;

pub use authors::AuthorsState;
pub use books::BooksState;
pub use borrows::BorrowsState;
pub use notification::{NotificationState, notification_bar};
pub use raw_query::RawQueryState;
