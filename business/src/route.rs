//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display.

use serde::{Deserialize, Serialize};

/// Represents the current page of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Books list with query controls and CRUD modals.
    #[default]
    Books,
    /// Authors list with query controls and CRUD modals.
    Authors,
    /// Borrow records list plus the borrow form.
    Borrows,
    /// Raw admin query passthrough.
    RawQuery,
}

impl Route {
    /// Every page, in menu order.
    pub const ALL: [Self; 4] = [Self::Books, Self::Authors, Self::Borrows, Self::RawQuery];

    /// Tab label for the menu bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Authors => "Authors",
            Self::Borrows => "Borrows",
            Self::RawQuery => "Raw Query",
        }
    }
}
