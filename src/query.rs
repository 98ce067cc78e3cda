use serde::Serialize;

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Server-side sort keys accepted by the customer listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
}

impl SortField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Ascending,
    #[default]
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four text filters of the customer listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Free-text filter, matched server-side against name, email, city,
    /// state and pincode.
    Search,
    City,
    State,
    Pincode,
}

/// Complete input state of one customer listing request.
///
/// Serializes straight into the directory's query string, so the field
/// renames match the wire parameter names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerListQuery {
    #[serde(rename = "q")]
    pub search: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub page: usize,
    #[serde(rename = "limit")]
    pub per_page: usize,
    #[serde(rename = "sortBy")]
    pub sort_by: SortField,
    #[serde(rename = "sortDir")]
    pub sort_dir: SortDirection,
}

impl Default for CustomerListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            city: String::new(),
            state: String::new(),
            pincode: String::new(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            sort_by: SortField::CreatedAt,
            sort_dir: SortDirection::Descending,
        }
    }
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one filter value. Any filter edit returns to the first page
    /// so the result window never points past the narrowed result set.
    #[must_use]
    pub fn set_filter(mut self, field: FilterField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FilterField::Search => self.search = value,
            FilterField::City => self.city = value,
            FilterField::State => self.state = value,
            FilterField::Pincode => self.pincode = value,
        }
        self.page = 1;
        self
    }

    /// Replaces the sort key and direction, returning to the first page.
    #[must_use]
    pub fn set_sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_by = field;
        self.sort_dir = direction;
        self.page = 1;
        self
    }

    /// Moves to the given page, keeping every filter as-is. Page numbers
    /// below one are floored to one.
    #[must_use]
    pub fn set_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Drops all filters, sorting and paging back to the defaults.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::default()
    }
}
