//! State for the borrows page.

use biblio_business::{Book, Borrow, BorrowField, ListQuery};

/// State for the borrows page: the borrow history list plus the issue form.
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowsState {
    pub borrows: Vec<Borrow>,
    /// Books fetched for the issue form's dropdown.
    pub books: Vec<Book>,
    pub query: ListQuery<BorrowField>,
    pub needs_fetch: bool,
    pub is_fetching: bool,
    pub error: Option<String>,
    /// Book chosen in the issue form.
    pub selected_book_id: Option<i64>,
    /// User the borrow is issued for.
    pub user_id: i64,
    /// Whether an issue request is in flight.
    pub action_in_progress: bool,
}

impl Default for BorrowsState {
    fn default() -> Self {
        Self {
            borrows: Vec::new(),
            books: Vec::new(),
            query: ListQuery::default(),
            needs_fetch: true,
            is_fetching: false,
            error: None,
            selected_book_id: None,
            user_id: 1,
            action_in_progress: false,
        }
    }
}

impl BorrowsState {
    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    pub fn update_borrows(&mut self, borrows: Vec<Borrow>) {
        self.borrows = borrows;
        self.is_fetching = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    /// Title text for the issue form's dropdown.
    pub fn book_title(&self, book_id: Option<i64>) -> String {
        book_id
            .and_then(|id| self.books.iter().find(|book| book.id == Some(id)))
            .and_then(|book| book.title.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
