//! Query control widgets shared by every list page.
//!
//! The three controls edit one [`biblio_business::ListQuery`] together:
//! - `field_selector`: which columns are shown, in click order
//! - `filter_manager`: the ordered filter rows
//! - `sort_manager`: the ordered sort rows
//!
//! They only ever offer fields from the entity's known field set, so no
//! after-the-fact validation is needed.

mod field_selector;
mod filter_manager;
mod sort_manager;

pub use field_selector::field_selector;
pub use filter_manager::filter_manager;
pub use sort_manager::sort_manager;
