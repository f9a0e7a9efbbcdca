//! Query encoding for list endpoints.
//!
//! The backend accepts repeated `filter` and `sort` parameters plus a single
//! comma-joined `fields` parameter:
//!
//! ```text
//! GET /api/books?filter=title__ilike__dune&sort=title__desc&fields=id,title
//! ```
//!
//! A filter encodes as `<field>__<operator>__<value>`, a sort as
//! `<field>__<order>`. The `__` separator is not escaped; field names are
//! drawn from a closed set and never contain it, and values containing `__`
//! are a known limitation of the wire format rather than something this
//! encoder papers over.
//!
//! Empty lists produce no parameter at all: an absent `filter`/`sort` key
//! means "no constraint", which is not the same thing as an empty one.

use crate::fields::EntityField;

/// Comparison operator of a single filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Case-insensitive partial match.
    Ilike,
}

impl FilterOperator {
    /// Every operator, in the order the UI offers them.
    pub const ALL: [Self; 7] = [
        Self::Eq,
        Self::Neq,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::Ilike,
    ];

    /// The wire token of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Ilike => "ilike",
        }
    }

    /// Human label shown in the operator combo box.
    pub fn label(self) -> &'static str {
        match self {
            Self::Eq => "Equals",
            Self::Neq => "Not Equals",
            Self::Gt => "Greater Than",
            Self::Gte => "Greater Than or Equal",
            Self::Lt => "Less Than",
            Self::Lte => "Less Than or Equal",
            Self::Ilike => "Contains",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [Self; 2] = [Self::Asc, Self::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }
}

/// A single field/operator/value constraint on a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<F> {
    pub field: F,
    pub operator: FilterOperator,
    pub value: String,
}

impl<F: EntityField> Filter<F> {
    /// A freshly added filter row: entity default field, `eq`, empty value.
    pub fn new_row() -> Self {
        Self {
            field: F::filter_default(),
            operator: FilterOperator::Eq,
            value: String::new(),
        }
    }

    /// Encode as `<field>__<operator>__<value>`.
    pub fn encode(&self) -> String {
        format!(
            "{}__{}__{}",
            self.field.as_str(),
            self.operator.as_str(),
            self.value
        )
    }
}

/// A single field/direction ordering instruction on a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub order: SortOrder,
}

impl<F: EntityField> Sort<F> {
    /// A freshly added sort row: entity default field, ascending.
    pub fn new_row() -> Self {
        Self {
            field: F::filter_default(),
            order: SortOrder::Asc,
        }
    }

    /// Encode as `<field>__<order>`.
    pub fn encode(&self) -> String {
        format!("{}__{}", self.field.as_str(), self.order.as_str())
    }
}

/// The complete query state of one list page: filters, sorts, and the
/// ordered field selection shown as table columns.
///
/// Filters and sorts are independent ordered sequences; list index equals
/// display order equals encoding order. The struct is created with every
/// field selected and no constraints, mutated one entry at a time by the
/// query-control widgets, and discarded when the user navigates away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub filters: Vec<Filter<F>>,
    pub sorts: Vec<Sort<F>>,
    pub fields: Vec<F>,
}

impl<F: EntityField> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sorts: Vec::new(),
            fields: F::ALL.to_vec(),
        }
    }
}

impl<F: EntityField> ListQuery<F> {
    /// Restore the page-load state: no filters, no sorts, all fields shown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when encoding would produce no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// The query parameters this state encodes to, in encoding order.
    ///
    /// Keys for empty source lists are omitted entirely, and an empty joined
    /// field selection omits the `fields` key rather than sending an empty
    /// string.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for filter in &self.filters {
            pairs.push(("filter", filter.encode()));
        }
        for sort in &self.sorts {
            pairs.push(("sort", sort.encode()));
        }
        let joined = self
            .fields
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            pairs.push(("fields", joined));
        }
        pairs
    }

    /// The encoded query string, without a leading `?`.
    ///
    /// Values are percent-encoded the way any query-string constructor would;
    /// nothing beyond that.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append the encoded query string to a list URL.
    pub fn url(&self, list_url: &str) -> String {
        let query_string = self.query_string();
        if query_string.is_empty() {
            list_url.to_string()
        } else {
            format!("{list_url}?{query_string}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{AuthorField, BookField};

    #[test]
    fn test_filter_encodes_field_operator_value() {
        let filter = Filter {
            field: BookField::Title,
            operator: FilterOperator::Ilike,
            value: "dune".to_string(),
        };
        assert_eq!(filter.encode(), "title__ilike__dune");
    }

    #[test]
    fn test_sort_encodes_field_order() {
        let sort = Sort {
            field: BookField::Title,
            order: SortOrder::Desc,
        };
        assert_eq!(sort.encode(), "title__desc");
    }

    #[test]
    fn test_empty_query_has_no_filter_or_sort_keys() {
        let query = ListQuery::<BookField> {
            filters: Vec::new(),
            sorts: Vec::new(),
            fields: Vec::new(),
        };
        assert!(query.query_pairs().is_empty());
        assert!(query.is_empty());
        assert_eq!(query.url("/api/books"), "/api/books");
    }

    #[test]
    fn test_one_filter_entry_per_list_element_in_order() {
        let query = ListQuery::<BookField> {
            filters: vec![
                Filter {
                    field: BookField::AuthorId,
                    operator: FilterOperator::Eq,
                    value: "3".to_string(),
                },
                Filter {
                    field: BookField::Title,
                    operator: FilterOperator::Ilike,
                    value: "dune".to_string(),
                },
            ],
            sorts: Vec::new(),
            fields: Vec::new(),
        };
        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("filter", "author_id__eq__3".to_string()),
                ("filter", "title__ilike__dune".to_string()),
            ]
        );
    }

    #[test]
    fn test_fields_comma_joined_in_insertion_order() {
        let query = ListQuery::<BookField> {
            filters: Vec::new(),
            sorts: Vec::new(),
            fields: vec![BookField::Id, BookField::Title],
        };
        assert_eq!(
            query.query_pairs(),
            vec![("fields", "id,title".to_string())]
        );
    }

    #[test]
    fn test_filter_and_sort_together() {
        let query = ListQuery::<BookField> {
            filters: vec![Filter {
                field: BookField::AuthorId,
                operator: FilterOperator::Eq,
                value: "3".to_string(),
            }],
            sorts: vec![Sort {
                field: BookField::Title,
                order: SortOrder::Desc,
            }],
            fields: Vec::new(),
        };
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("filter", "author_id__eq__3".to_string())));
        assert!(pairs.contains(&("sort", "title__desc".to_string())));
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let query = ListQuery::<BookField> {
            filters: vec![Filter {
                field: BookField::Title,
                operator: FilterOperator::Ilike,
                value: "war and peace".to_string(),
            }],
            sorts: Vec::new(),
            fields: Vec::new(),
        };
        assert_eq!(
            query.query_string(),
            "filter=title__ilike__war%20and%20peace"
        );
    }

    #[test]
    fn test_url_appends_query_string() {
        let query = ListQuery::<BookField> {
            filters: Vec::new(),
            sorts: vec![Sort {
                field: BookField::Id,
                order: SortOrder::Asc,
            }],
            fields: Vec::new(),
        };
        assert_eq!(query.url("/api/books"), "/api/books?sort=id__asc");
    }

    #[test]
    fn test_default_selects_every_field() {
        let query = ListQuery::<BookField>::default();
        assert_eq!(query.fields, BookField::ALL.to_vec());
        assert_eq!(
            query.query_pairs(),
            vec![("fields", "id,title,author_id,published_at".to_string())]
        );
    }

    #[test]
    fn test_reset_restores_page_load_state() {
        let mut query = ListQuery::<AuthorField>::default();
        query.filters.push(Filter::new_row());
        query.sorts.push(Sort::new_row());
        query.fields.clear();
        query.reset();
        assert_eq!(query, ListQuery::default());
    }

    #[test]
    fn test_new_rows_use_entity_defaults() {
        let filter = Filter::<AuthorField>::new_row();
        assert_eq!(filter.field, AuthorField::Name);
        assert_eq!(filter.operator, FilterOperator::Eq);
        assert!(filter.value.is_empty());

        let sort = Sort::<AuthorField>::new_row();
        assert_eq!(sort.field, AuthorField::Name);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn test_operator_tokens() {
        let tokens: Vec<&str> = FilterOperator::ALL.iter().map(|op| op.as_str()).collect();
        assert_eq!(tokens, ["eq", "neq", "gt", "gte", "lt", "lte", "ilike"]);
    }
}
