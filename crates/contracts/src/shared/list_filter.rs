//! Client-side filtering and ordering of fetched collections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::coerce::parse_flexible_date;
use crate::domain::common::ListEntity;

/// Filter inputs of a list page, kept as the raw text of the inputs.
///
/// An empty input disables its criterion. The date range only applies when
/// both bounds are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub search_name: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of criteria currently narrowing the list.
    pub fn active_count(&self) -> usize {
        usize::from(!self.search_name.is_empty())
            + usize::from(!self.category.is_empty())
            + usize::from(self.date_range().is_some())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Inclusive `(start, end)` bounds, or `None` unless both parse.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_flexible_date(&self.start_date)?;
        let end = parse_flexible_date(&self.end_date)?;
        Some((start, end))
    }

    pub fn matches<E: ListEntity>(&self, record: &E) -> bool {
        if !self.search_name.is_empty() {
            let needle = self.search_name.to_lowercase();
            if !record.customer_name().to_lowercase().contains(&needle) {
                return false;
            }
        }
        if !self.category.is_empty() && record.category() != Some(self.category.as_str()) {
            return false;
        }
        if let Some((start, end)) = self.date_range() {
            match record.order_date() {
                Some(day) if day >= start && day <= end => {}
                _ => return false,
            }
        }
        true
    }

    /// Filtered copy of `records`; the input is never modified.
    pub fn apply<E: ListEntity>(&self, records: &[E]) -> Vec<E> {
        records
            .iter()
            .filter(|record| self.matches(*record))
            .cloned()
            .collect()
    }
}

/// Order by `order_date`, newest first; undated records go last.
/// Ties keep their fetched order.
pub fn sort_newest_first<E: ListEntity>(records: &mut [E]) {
    records.sort_by(|a, b| b.order_date().cmp(&a.order_date()));
}

/// Distinct non-empty categories in order of first appearance.
pub fn distinct_categories<E: ListEntity>(records: &[E]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in records.iter().filter_map(|record| record.category()) {
        if !category.is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        cust: &'static str,
        mode: &'static str,
        day: Option<NaiveDate>,
    }

    impl ListEntity for Row {
        fn identity(&self) -> Option<&str> {
            Some(self.id)
        }
        fn customer_name(&self) -> &str {
            self.cust
        }
        fn category(&self) -> Option<&str> {
            Some(self.mode)
        }
        fn order_date(&self) -> Option<NaiveDate> {
            self.day
        }
    }

    fn row(id: &'static str, cust: &'static str, mode: &'static str, day: &str) -> Row {
        Row {
            id,
            cust,
            mode,
            day: parse_flexible_date(day),
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("1", "Bob Singh", "Cash", "2024-01-10"),
            row("2", "Alice Rao", "UPI", "2024-02-01"),
            row("3", "bobby tailor", "UPI", "2024-03-05"),
            row("4", "Meera", "", "2024-01-31"),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![
            row("B", "Bob Singh", "Cash", "2024-01-01"),
            row("A", "Alice Rao", "Cash", "2024-01-01"),
        ];
        let filter = ListFilter {
            search_name: "bob".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&rows)), vec!["B"]);
    }

    #[test]
    fn category_is_exact_match() {
        let filter = ListFilter {
            category: "UPI".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec!["2", "3"]);

        let lower = ListFilter {
            category: "upi".into(),
            ..Default::default()
        };
        assert!(lower.apply(&sample()).is_empty());
    }

    #[test]
    fn date_range_is_inclusive_and_needs_both_bounds() {
        let filter = ListFilter {
            start_date: "2024-01-10".into(),
            end_date: "2024-02-01".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&sample())), vec!["1", "2", "4"]);

        let half_open = ListFilter {
            start_date: "2024-02-01".into(),
            ..Default::default()
        };
        assert_eq!(half_open.apply(&sample()).len(), 4);
        assert_eq!(half_open.active_count(), 0);
    }

    #[test]
    fn criteria_compose_with_and() {
        let filter = ListFilter {
            search_name: "BOB".into(),
            category: "UPI".into(),
            start_date: "2024-03-01".into(),
            end_date: "2024-03-31".into(),
        };
        assert_eq!(filter.active_count(), 3);
        assert_eq!(ids(&filter.apply(&sample())), vec!["3"]);
    }

    #[test]
    fn filtered_view_is_a_subset_and_source_is_untouched() {
        let rows = sample();
        let before = rows.clone();
        let filters = [
            ListFilter {
                search_name: "a".into(),
                ..Default::default()
            },
            ListFilter {
                category: "Cash".into(),
                start_date: "2023-01-01".into(),
                end_date: "2025-01-01".into(),
                ..Default::default()
            },
            ListFilter {
                search_name: "nobody".into(),
                ..Default::default()
            },
        ];
        for filter in &filters {
            let view = filter.apply(&rows);
            assert!(view.iter().all(|v| rows.iter().any(|r| r.id == v.id)));
        }
        assert_eq!(rows, before);
    }

    #[test]
    fn cleared_filter_restores_everything() {
        let mut filter = ListFilter {
            search_name: "bob".into(),
            category: "Cash".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-02".into(),
        };
        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()), sample());
    }

    #[test]
    fn sorts_newest_first() {
        let mut rows = sample();
        sort_newest_first(&mut rows);
        assert_eq!(ids(&rows), vec!["3", "2", "4", "1"]);
        assert!(rows
            .windows(2)
            .all(|pair| pair[0].order_date() >= pair[1].order_date()));
    }

    #[test]
    fn undated_rows_sort_last_and_fall_outside_date_ranges() {
        let mut rows = sample();
        rows.insert(0, row("5", "Ravi", "Cash", ""));
        sort_newest_first(&mut rows);
        assert_eq!(ids(&rows), vec!["3", "2", "4", "1", "5"]);

        let filter = ListFilter {
            start_date: "2000-01-01".into(),
            end_date: "2100-01-01".into(),
            ..Default::default()
        };
        assert!(!ids(&filter.apply(&rows)).contains(&"5"));
        assert!(ids(&ListFilter::default().apply(&rows)).contains(&"5"));
    }

    #[test]
    fn distinct_categories_skip_blank_and_duplicates() {
        assert_eq!(distinct_categories(&sample()), vec!["Cash", "UPI"]);
    }
}
