use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::Searchable;

/// Active list predicates. All of them are ANDed; `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub status: Option<String>,
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterState {
    /// True when applying this filter returns the input unchanged.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status.is_none()
            && self.category.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        self.matches_search(item)
            && matches_choice(item.field_value(T::STATUS_FIELD), self.status.as_deref())
            && matches_choice(item.field_value(T::CATEGORY_FIELD), self.category.as_deref())
            && self.matches_dates(item)
    }

    fn matches_search<T: Searchable>(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.search_fields()
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&needle))
    }

    fn matches_dates<T: Searchable>(&self, item: &T) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        let Some(date) = item
            .field_value(T::DATE_FIELD)
            .as_deref()
            .and_then(parse_record_date)
        else {
            return false;
        };
        self.date_from.map_or(true, |from| date >= from) && self.date_to.map_or(true, |to| date <= to)
    }
}

fn matches_choice(value: Option<String>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value
            .map(|v| v.trim().to_lowercase() == wanted.trim().to_lowercase())
            .unwrap_or(false),
    }
}

/// Filter the collection, keeping server order.
pub fn apply<T: Searchable + Clone>(items: &[T], filter: &FilterState) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| filter.matches(*item))
        .cloned()
        .collect()
}

/// Non-blank values of `field` in first-seen order, deduplicated without
/// regard to case. Feeds selects whose options come from the data.
pub fn distinct_values<T: Searchable>(items: &[T], field: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .iter()
        .filter_map(|item| item.field_value(field))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && seen.insert(v.to_lowercase()))
        .collect()
}

/// `distinct_values` minus those already offered by `listed`.
pub fn extra_values<T: Searchable>(items: &[T], field: &str, listed: &[&str]) -> Vec<String> {
    distinct_values(items, field)
        .into_iter()
        .filter(|v| !listed.iter().any(|l| l.eq_ignore_ascii_case(v)))
        .collect()
}

/// Map a select value to a predicate: `""` and `"all"` clear it.
pub fn normalize_choice(value: &str) -> Option<String> {
    let v = value.trim().to_lowercase();
    if v.is_empty() || v == "all" {
        None
    } else {
        Some(v)
    }
}

/// Parse the date part of a record timestamp.
///
/// Accepts RFC 3339 (`2024-03-15T14:02:26.123Z`), naive datetimes and plain
/// `YYYY-MM-DD`.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value.get(..10).unwrap_or(value), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{rows, Row};
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let items = rows(12);
        let filter = FilterState {
            search: "   ".into(),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(apply(&items, &filter), items);
        assert_eq!(apply(&items, &FilterState::default()), items);
    }

    #[test]
    fn test_search_is_case_insensitive_over_whitelist() {
        let mut items = rows(3);
        items[2].email = Some("Farmer@Example.com".into());
        items[0].status = Some("example".into());

        let filter = FilterState {
            search: "EXAMPLE".into(),
            ..Default::default()
        };
        let found = apply(&items, &filter);
        // status is not in the search whitelist
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "id-3");
    }

    #[test]
    fn test_status_and_category_are_exact_lowercased() {
        let mut items = rows(4);
        items[0].status = Some("Active".into());
        items[1].status = Some("active ".into());
        items[2].status = Some("inactive".into());
        items[1].category = Some("Seeds".into());

        let by_status = FilterState {
            status: normalize_choice("ACTIVE"),
            ..Default::default()
        };
        let ids: Vec<_> = apply(&items, &by_status).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["id-1", "id-2"]);

        let both = FilterState {
            status: Some("active".into()),
            category: Some("seeds".into()),
            ..Default::default()
        };
        let ids: Vec<_> = apply(&items, &both).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["id-2"]);
    }

    #[test]
    fn test_date_range_inclusive() {
        let mut items: Vec<Row> = rows(4);
        items[0].created_at = Some("2024-03-01T00:00:00.000Z".into());
        items[1].created_at = Some("2024-03-15T23:59:59Z".into());
        items[2].created_at = Some("2024-03-31".into());
        items[3].created_at = None;

        let filter = FilterState {
            date_from: Some(date("2024-03-01")),
            date_to: Some(date("2024-03-15")),
            ..Default::default()
        };
        let ids: Vec<_> = apply(&items, &filter).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["id-1", "id-2"]);

        let open_ended = FilterState {
            date_from: Some(date("2024-03-15")),
            ..Default::default()
        };
        let ids: Vec<_> = apply(&items, &open_ended).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["id-2", "id-3"]);
    }

    #[test]
    fn test_normalize_choice() {
        assert_eq!(normalize_choice("all"), None);
        assert_eq!(normalize_choice(""), None);
        assert_eq!(normalize_choice(" Pending "), Some("pending".to_string()));
    }

    #[test]
    fn test_parse_record_date() {
        assert_eq!(
            parse_record_date("2024-03-15T14:02:26.123Z"),
            Some(date("2024-03-15"))
        );
        assert_eq!(
            parse_record_date("2024-03-15T14:02:26"),
            Some(date("2024-03-15"))
        );
        assert_eq!(parse_record_date("2024-03-15"), Some(date("2024-03-15")));
        assert_eq!(parse_record_date("yesterday"), None);
    }

    #[test]
    fn test_distinct_values_keep_first_spelling() {
        let mut items = rows(4);
        items[0].category = Some("Seeds".into());
        items[1].category = Some(" seeds ".into());
        items[2].category = Some("Tools".into());
        assert_eq!(distinct_values(&items, "category"), vec!["Seeds", "Tools"]);
        assert_eq!(extra_values(&items, "category", &["tools"]), vec!["Seeds"]);
    }

}
