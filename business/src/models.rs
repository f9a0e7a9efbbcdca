//! Record and payload types for the REST API.
//!
//! List endpoints honour the `fields` parameter by returning partial
//! objects, so every record field is optional and absent fields render as
//! empty table cells. The typed accessors (`field_text`) replace dynamic
//! property access with an exhaustive match per entity.

use serde::{Deserialize, Serialize};

use crate::fields::{AuthorField, BookField, BorrowField};

fn text_of<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// A book record, possibly partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Book {
    /// Display text for one field, empty when the field was not selected.
    pub fn field_text(&self, field: BookField) -> String {
        match field {
            BookField::Id => text_of(self.id.as_ref()),
            BookField::Title => text_of(self.title.as_ref()),
            BookField::AuthorId => text_of(self.author_id.as_ref()),
            BookField::PublishedAt => text_of(self.published_at.as_ref()),
        }
    }

    /// The date part of `published_at`, for pre-filling the edit form.
    ///
    /// The backend may return a full timestamp; the form edits dates only.
    pub fn published_date(&self) -> String {
        self.published_at
            .as_deref()
            .map(|at| at.split('T').next().unwrap_or(at).to_string())
            .unwrap_or_default()
    }
}

/// An author record, possibly partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Author {
    pub fn field_text(&self, field: AuthorField) -> String {
        match field {
            AuthorField::Id => text_of(self.id.as_ref()),
            AuthorField::Name => text_of(self.name.as_ref()),
        }
    }
}

/// A borrow record, possibly partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Borrow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub book_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub borrowed_at: Option<String>,
}

impl Borrow {
    pub fn field_text(&self, field: BorrowField) -> String {
        match field {
            BorrowField::Id => text_of(self.id.as_ref()),
            BorrowField::BookId => text_of(self.book_id.as_ref()),
            BorrowField::UserId => text_of(self.user_id.as_ref()),
            BorrowField::BorrowedAt => text_of(self.borrowed_at.as_ref()),
        }
    }
}

/// Body of `POST /books` and `PUT /books/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveBookRequest {
    pub title: String,
    pub author_id: i64,
    pub published_at: String,
}

/// True when `value` is a `YYYY-MM-DD` calendar date the book form accepts.
pub fn is_valid_published_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Body of `POST /authors` and `PUT /authors/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveAuthorRequest {
    pub name: String,
}

/// Body of `POST /borrows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBorrowRequest {
    pub book_id: i64,
    pub user_id: i64,
}

/// Body of `POST /extra-query/raw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQueryRequest {
    pub query: String,
}

/// Shape of a non-2xx response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
