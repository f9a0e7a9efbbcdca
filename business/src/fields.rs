//! Entity field sets.
//!
//! Each listable entity declares the closed set of fields the backend knows
//! about. Query controls (filters, sorts, field visibility) only ever offer
//! choices from these sets, so field legality is enforced by construction
//! rather than validated after the fact.

/// A field belonging to one entity's known field set.
///
/// `ALL` is the declaration order, which is also the default column order.
pub trait EntityField: Copy + PartialEq + Eq + std::fmt::Debug + 'static {
    /// Every field of the entity, in display order.
    const ALL: &'static [Self];

    /// The wire name of the field, as the backend expects it.
    fn as_str(self) -> &'static str;

    /// Human label for combo boxes: the wire name with the first letter
    /// capitalised.
    fn label(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// The field a freshly added filter or sort row starts out on.
    ///
    /// The first non-id field reads better as a default than `id`.
    fn filter_default() -> Self {
        *Self::ALL.get(1).unwrap_or(&Self::ALL[0])
    }
}

/// Fields of a [`crate::Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    Id,
    Title,
    AuthorId,
    PublishedAt,
}

impl EntityField for BookField {
    const ALL: &'static [Self] = &[Self::Id, Self::Title, Self::AuthorId, Self::PublishedAt];

    fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::AuthorId => "author_id",
            Self::PublishedAt => "published_at",
        }
    }
}

/// Fields of an [`crate::Author`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Id,
    Name,
}

impl EntityField for AuthorField {
    const ALL: &'static [Self] = &[Self::Id, Self::Name];

    fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}

/// Fields of a [`crate::Borrow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowField {
    Id,
    BookId,
    UserId,
    BorrowedAt,
}

impl EntityField for BorrowField {
    const ALL: &'static [Self] = &[Self::Id, Self::BookId, Self::UserId, Self::BorrowedAt];

    fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::BookId => "book_id",
            Self::UserId => "user_id",
            Self::BorrowedAt => "borrowed_at",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_field_wire_names() {
        let names: Vec<&str> = BookField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["id", "title", "author_id", "published_at"]);
    }

    #[test]
    fn test_author_field_wire_names() {
        let names: Vec<&str> = AuthorField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["id", "name"]);
    }

    #[test]
    fn test_borrow_field_wire_names() {
        let names: Vec<&str> = BorrowField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["id", "book_id", "user_id", "borrowed_at"]);
    }

    #[test]
    fn test_labels_are_capitalised() {
        assert_eq!(BookField::Title.label(), "Title");
        assert_eq!(BookField::AuthorId.label(), "Author_id");
        assert_eq!(AuthorField::Name.label(), "Name");
    }

    #[test]
    fn test_filter_default_skips_id() {
        assert_eq!(BookField::filter_default(), BookField::Title);
        assert_eq!(AuthorField::filter_default(), AuthorField::Name);
        assert_eq!(BorrowField::filter_default(), BorrowField::BookId);
    }
}
