use sea_orm::Order;

use crate::search::SortDirection;

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

/// `ILIKE` pattern matching `filter` anywhere, with wildcards escaped.
pub fn contains_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// SQL for ordering a text column by raw bytes, matching in-memory ordering.
pub fn collated_text(column: &str) -> String {
    format!("\"{}\" COLLATE \"C\"", column)
}
