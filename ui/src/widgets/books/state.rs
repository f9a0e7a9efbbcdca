//! State for the books page.

use biblio_business::{Author, Book, BookField, ListQuery};

/// Which modal/action is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookAction {
    /// No action.
    #[default]
    None,
    /// Create a new book.
    Create,
    /// Edit an existing book.
    Edit(i64),
    /// Confirm deletion of a book (reached from the edit form).
    ConfirmDelete(i64),
}

/// Form fields of the create/edit modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author_id: Option<i64>,
    pub published_at: String,
}

/// State for the books page.
#[derive(Debug, Clone, PartialEq)]
pub struct BooksState {
    /// List fetched from the API, possibly partial per field selection.
    pub books: Vec<Book>,
    /// Authors fetched alongside, for name lookup and the form dropdown.
    pub authors: Vec<Author>,
    /// Query selections driving the list fetch.
    pub query: ListQuery<BookField>,
    /// Set when the panel should issue a fresh list fetch.
    pub needs_fetch: bool,
    /// Whether a list fetch is in flight.
    pub is_fetching: bool,
    /// Error message if the list fetch failed.
    pub error: Option<String>,
    /// Current modal/action.
    pub current_action: BookAction,
    /// Form state backing the create/edit modal.
    pub form: BookForm,
    /// Whether the edit modal is still loading the book's details.
    pub loading_details: bool,
    /// Whether a create/update/delete is in flight.
    pub action_in_progress: bool,
    /// Error message shown inside the active modal.
    pub action_error: Option<String>,
}

impl Default for BooksState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            authors: Vec::new(),
            query: ListQuery::default(),
            needs_fetch: true,
            is_fetching: false,
            error: None,
            current_action: BookAction::None,
            form: BookForm::default(),
            loading_details: false,
            action_in_progress: false,
            action_error: None,
        }
    }
}

impl BooksState {
    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    pub fn update_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.is_fetching = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    /// Author name for a book row, falling back like the list page always
    /// has when the author is unknown.
    pub fn author_name(&self, author_id: Option<i64>) -> String {
        author_id
            .and_then(|id| self.authors.iter().find(|author| author.id == Some(id)))
            .and_then(|author| author.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn open_create_modal(&mut self) {
        self.current_action = BookAction::Create;
        self.form = BookForm::default();
        self.loading_details = false;
        self.action_in_progress = false;
        self.action_error = None;
    }

    /// Open the edit modal; the panel fetches the full record before the
    /// form becomes editable (the row may be partial).
    pub fn start_edit(&mut self, id: i64) {
        self.current_action = BookAction::Edit(id);
        self.form = BookForm::default();
        self.loading_details = true;
        self.action_in_progress = false;
        self.action_error = None;
    }

    /// Fill the form from a freshly fetched record.
    pub fn fill_form(&mut self, book: &Book) {
        self.form = BookForm {
            title: book.title.clone().unwrap_or_default(),
            author_id: book.author_id,
            published_at: book.published_date(),
        };
        self.loading_details = false;
    }

    pub fn close_action(&mut self) {
        self.current_action = BookAction::None;
        self.form = BookForm::default();
        self.loading_details = false;
        self.action_in_progress = false;
        self.action_error = None;
    }

    pub fn set_action_in_progress(&mut self) {
        self.action_in_progress = true;
        self.action_error = None;
    }

    pub fn set_action_error(&mut self, error: String) {
        self.action_error = Some(error);
        self.action_in_progress = false;
        self.loading_details = false;
    }
}
