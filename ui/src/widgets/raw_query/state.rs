//! State for the raw query page.

/// State for the raw query page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQueryState {
    /// Query text being edited.
    pub query: String,
    /// Pretty-printed result of the last execution.
    pub result: Option<String>,
    pub is_executing: bool,
    pub error: Option<String>,
}

impl RawQueryState {
    pub fn set_executing(&mut self) {
        self.is_executing = true;
        self.error = None;
    }

    pub fn set_result(&mut self, result: String) {
        self.result = Some(result);
        self.is_executing = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_executing = false;
    }
}
