//! Search parameters, paged results and the per-entity search strategy.
//!
//! A search runs in four stages: filter, sort, paginate, assemble. The
//! arithmetic for the last two lives here so every repository variant
//! reports identical metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 15;
pub const DEFAULT_SORT_FIELD: &str = "created_at";
/// Largest offset a SQL `OFFSET` (bigint) accepts.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Sort direction. Only `"asc"` sorts ascending; anything else is descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(dir) if dir.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Raw search input, usually deserialized from a query string.
///
/// Values are kept as sent; the accessors normalize them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Page size (default 15)
    pub per_page: Option<i64>,
    /// Field to sort by; unknown fields fall back to `created_at`
    pub sort: Option<String>,
    /// `asc` or `desc` (default `desc`)
    pub sort_dir: Option<String>,
    /// Case-insensitive substring filter
    pub filter: Option<String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: i64, per_page: i64) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>, sort_dir: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self.sort_dir = Some(sort_dir.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Requested page; values below 1 are clamped to 1.
    pub fn page(&self) -> u64 {
        match self.page {
            Some(page) if page >= 1 => page as u64,
            _ => DEFAULT_PAGE,
        }
    }

    /// Requested page size; values below 1 fall back to the default.
    pub fn per_page(&self) -> u64 {
        match self.per_page {
            Some(per_page) if per_page >= 1 => per_page as u64,
            _ => DEFAULT_PER_PAGE,
        }
    }

    /// Rows skipped before this page, capped at [`MAX_OFFSET`].
    pub fn offset(&self) -> u64 {
        (self.page() - 1)
            .saturating_mul(self.per_page())
            .min(MAX_OFFSET)
    }

    /// The filter when present and non-empty.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.is_empty())
    }

    /// Effective ordering for an entity that accepts `sortable` fields.
    pub fn resolve_sort(&self, sortable: &[&str]) -> SortSpec {
        match self.sort.as_deref() {
            Some(field) if sortable.contains(&field) => SortSpec {
                field: field.to_string(),
                direction: SortDirection::parse(self.sort_dir.as_deref()),
            },
            _ => SortSpec::default(),
        }
    }
}

/// A resolved sort field and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn is_default(&self) -> bool {
        self.field == DEFAULT_SORT_FIELD
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: DEFAULT_SORT_FIELD.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// One page of results plus the metadata needed to fetch the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub current_page: u64,
    pub per_page: u64,
    pub last_page: u64,
    pub sort: String,
    pub sort_dir: SortDirection,
    pub filter: Option<String>,
}

impl<T> SearchResult<T> {
    pub fn new(items: Vec<T>, total: u64, params: &SearchParams, sort: SortSpec) -> Self {
        let per_page = params.per_page();
        Self {
            items,
            total,
            current_page: params.page(),
            per_page,
            last_page: last_page(total, per_page),
            sort: sort.field,
            sort_dir: sort.direction,
            filter: params.filter().map(str::to_string),
        }
    }

    /// Convert the items, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchResult<U> {
        SearchResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter: self.filter,
        }
    }
}

/// `ceil(total / per_page)`, never less than 1.
pub fn last_page(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page.max(1)).max(1)
}

/// A comparable value extracted from an entity for sorting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Float(f64),
    Integer(i64),
    Timestamp(DateTime<Utc>),
}

impl SortKey<'_> {
    /// Text compares by raw bytes, so `"AA" < "Aa" < "a"`.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Timestamp(a), SortKey::Timestamp(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Per-entity search strategy: which fields sort and which field filters.
pub trait Searchable {
    /// Field names accepted as `sort`.
    const SORTABLE_FIELDS: &'static [&'static str];

    /// Text matched by the `filter` parameter.
    fn filter_text(&self) -> &str;

    /// Sort key for `field`, or `None` when the field is not sortable.
    fn sort_key(&self, field: &str) -> Option<SortKey<'_>>;

    fn matches_filter(&self, filter: &str) -> bool {
        self.filter_text()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}
