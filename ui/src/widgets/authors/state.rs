//! State for the authors page.

use biblio_business::{Author, AuthorField, ListQuery};

/// Which modal/action is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorAction {
    #[default]
    None,
    Create,
    Edit(i64),
    ConfirmDelete(i64),
}

/// State for the authors page.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorsState {
    pub authors: Vec<Author>,
    pub query: ListQuery<AuthorField>,
    pub needs_fetch: bool,
    pub is_fetching: bool,
    pub error: Option<String>,
    pub current_action: AuthorAction,
    /// Name field of the create/edit form.
    pub form_name: String,
    pub action_in_progress: bool,
    pub action_error: Option<String>,
}

impl Default for AuthorsState {
    fn default() -> Self {
        Self {
            authors: Vec::new(),
            query: ListQuery::default(),
            needs_fetch: true,
            is_fetching: false,
            error: None,
            current_action: AuthorAction::None,
            form_name: String::new(),
            action_in_progress: false,
            action_error: None,
        }
    }
}

impl AuthorsState {
    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    pub fn update_authors(&mut self, authors: Vec<Author>) {
        self.authors = authors;
        self.is_fetching = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    pub fn open_create_modal(&mut self) {
        self.current_action = AuthorAction::Create;
        self.form_name = String::new();
        self.action_in_progress = false;
        self.action_error = None;
    }

    /// Open the edit modal, pre-filled from the row. There is no single-record
    /// endpoint for authors, so the row value is all there is.
    pub fn start_edit(&mut self, author: &Author) {
        let Some(id) = author.id else { return };
        self.current_action = AuthorAction::Edit(id);
        self.form_name = author.name.clone().unwrap_or_default();
        self.action_in_progress = false;
        self.action_error = None;
    }

    pub fn close_action(&mut self) {
        self.current_action = AuthorAction::None;
        self.form_name = String::new();
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
    }
}
