//! Derived View Projection
//!
//! Pure filter/sort/paginate over the task list. The view renders the result
//! and owns none of the data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::Todo;

/// Tasks shown per page
pub const PER_PAGE: usize = 6;

/// Sort selection for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    /// Parse a `<select>` value, falling back to newest-first.
    pub fn parse(value: &str) -> Self {
        match value {
            "oldest" => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }
}

/// One page of the filtered/sorted task list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Todo>,
    /// Total tasks matching the search text
    pub filtered: usize,
    /// Current page, clamped into `1..=pages`
    pub page: usize,
    pub pages: usize,
}

/// Sort key for a `created_at` timestamp, in milliseconds since the epoch.
/// Unparseable timestamps sort as zero.
pub fn timestamp_key(raw: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.and_utc().timestamp_millis();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return dt.and_utc().timestamp_millis();
        }
    }
    0
}

/// Display form of a `created_at` timestamp; falls back to the raw string.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Number of pages for `filtered` matching tasks, never less than one.
pub fn page_count(filtered: usize) -> usize {
    ((filtered + PER_PAGE - 1) / PER_PAGE).max(1)
}

/// Compute the visible page for the current search text, sort order, and
/// requested page. The page is clamped into range, so a stale page number
/// (e.g. after the filter shrank the list) degrades to the last page.
pub fn project(todos: &[Todo], query: &str, sort: SortOrder, page: usize) -> PageView {
    let needle = query.to_lowercase();
    let mut filtered: Vec<Todo> = todos
        .iter()
        .filter(|t| t.description.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortOrder::Newest => {
            filtered.sort_by_key(|t| std::cmp::Reverse(timestamp_key(&t.created_at)))
        }
        SortOrder::Oldest => filtered.sort_by_key(|t| timestamp_key(&t.created_at)),
    }

    let count = filtered.len();
    let pages = page_count(count);
    let page = page.clamp(1, pages);
    let items = filtered
        .into_iter()
        .skip((page - 1) * PER_PAGE)
        .take(PER_PAGE)
        .collect();

    PageView {
        items,
        filtered: count,
        page,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;

    fn make(id: &str, description: &str, created_at: &str) -> Todo {
        Todo {
            id: TodoId::Confirmed(id.to_string()),
            description: description.to_string(),
            completed: false,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn newest_sorts_latest_first() {
        let todos = vec![
            make("1", "a", "2024-01-01"),
            make("2", "b", "2024-02-01"),
            make("3", "c", "2024-03-01"),
        ];

        let newest = project(&todos, "", SortOrder::Newest, 1);
        let order: Vec<_> = newest.items.iter().map(|t| t.created_at.as_str()).collect();
        assert_eq!(order, ["2024-03-01", "2024-02-01", "2024-01-01"]);

        let oldest = project(&todos, "", SortOrder::Oldest, 1);
        let order: Vec<_> = oldest.items.iter().map(|t| t.created_at.as_str()).collect();
        assert_eq!(order, ["2024-01-01", "2024-02-01", "2024-03-01"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let todos = vec![
            make("1", "Buy Milk", "2024-01-01"),
            make("2", "walk the dog", "2024-01-02"),
        ];
        let view = project(&todos, "MILK", SortOrder::Newest, 1);
        assert_eq!(view.filtered, 1);
        assert_eq!(view.items[0].description, "Buy Milk");
    }

    #[test]
    fn thirteen_tasks_make_three_pages_and_clamp() {
        let todos: Vec<Todo> = (0..13)
            .map(|i| make(&i.to_string(), &format!("task {i}"), "2024-01-01"))
            .collect();

        let view = project(&todos, "", SortOrder::Newest, 1);
        assert_eq!(view.pages, 3);
        assert_eq!(view.items.len(), 6);

        // requesting page 4 clamps to page 3
        let view = project(&todos, "", SortOrder::Newest, 4);
        assert_eq!(view.page, 3);
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let view = project(&[], "", SortOrder::Newest, 1);
        assert_eq!(view.pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.items.is_empty());
    }

    #[test]
    fn unparseable_timestamps_sort_as_zero() {
        let todos = vec![
            make("1", "dated", "2024-01-01"),
            make("2", "garbage", "not a date"),
        ];
        let view = project(&todos, "", SortOrder::Newest, 1);
        assert_eq!(view.items[0].description, "dated");
        assert_eq!(view.items[1].description, "garbage");
    }

    #[test]
    fn timestamp_key_accepts_common_forms() {
        assert!(timestamp_key("2024-03-01T12:00:00Z") > 0);
        assert!(timestamp_key("2024-03-01T12:00:00.123") > 0);
        assert!(timestamp_key("2024-03-01") > 0);
        assert_eq!(timestamp_key(""), 0);
    }

    #[test]
    fn format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("2024-03-01T12:30:00Z"), "2024-03-01 12:30");
        assert_eq!(format_timestamp("whenever"), "whenever");
    }
}
