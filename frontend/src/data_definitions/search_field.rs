//! The filterable fields of the iconography advanced search.

use common::iconography_query::{BooleanOp, IconographyQueryParams};
use common::strings::capitalize_first_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchField {
    Title,
    Author,
    Publisher,
    Theme,
    NamedEntity,
    Institution,
    Date,
}

impl SearchField {
    pub const ALL: [SearchField; 7] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Publisher,
        SearchField::Theme,
        SearchField::NamedEntity,
        SearchField::Institution,
        SearchField::Date,
    ];

    /// Every field but the date, which has its own sub-form.
    pub const TEXT_FIELDS: [SearchField; 6] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Publisher,
        SearchField::Theme,
        SearchField::NamedEntity,
        SearchField::Institution,
    ];

    /// Key of the field in the form payload and in the route query.
    pub fn key(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Publisher => "publisher",
            SearchField::Theme => "theme",
            SearchField::NamedEntity => "namedEntity",
            SearchField::Institution => "institution",
            SearchField::Date => "date",
        }
    }

    pub fn op_key(&self) -> String {
        format!("{}BooleanOp", self.key())
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Title => "Titre",
            SearchField::Author => "Auteur.ice",
            SearchField::Publisher => "Éditeur.ice",
            SearchField::Theme => "Thème",
            SearchField::NamedEntity => "Entité nommée",
            SearchField::Institution => "Institution",
            SearchField::Date => "Date",
        }
    }

    /// Free text is length-checked in the form and simplified in the query;
    /// the other fields hold category keys.
    pub fn is_free_text(&self) -> bool {
        matches!(self, SearchField::Title | SearchField::Author | SearchField::Publisher)
    }

    /// Values of a text field. The date field has none.
    pub fn values<'a>(&self, query: &'a IconographyQueryParams) -> &'a [String] {
        match self {
            SearchField::Title => query.title(),
            SearchField::Author => query.author(),
            SearchField::Publisher => query.publisher(),
            SearchField::Theme => query.theme(),
            SearchField::NamedEntity => query.named_entity(),
            SearchField::Institution => query.institution(),
            SearchField::Date => &[],
        }
    }

    pub fn op(&self, query: &IconographyQueryParams) -> BooleanOp {
        match self {
            SearchField::Title => query.title_boolean_op(),
            SearchField::Author => query.author_boolean_op(),
            SearchField::Publisher => query.publisher_boolean_op(),
            SearchField::Theme => query.theme_boolean_op(),
            SearchField::NamedEntity => query.named_entity_boolean_op(),
            SearchField::Institution => query.institution_boolean_op(),
            SearchField::Date => query.date_boolean_op(),
        }
    }
}

/// One line of the filter summary.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummaryRow {
    pub label: &'static str,
    pub op: BooleanOp,
    pub values: Vec<String>,
}

/// The non-empty fields of `query`, ready for display.
pub fn filter_summary_rows(query: &IconographyQueryParams) -> Vec<FilterSummaryRow> {
    SearchField::ALL
        .into_iter()
        .filter_map(|field| {
            let values = match field {
                SearchField::Date => query.date().iter().map(|d| d.to_string()).collect::<Vec<_>>(),
                _ => field.values(query).iter().map(|v| capitalize_first_char(v)).collect(),
            };
            if values.is_empty() {
                return None;
            }
            Some(FilterSummaryRow { label: field.label(), op: field.op(query), values })
        })
        .collect()
}
