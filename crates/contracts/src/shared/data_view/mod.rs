//! Client-side list pipeline shared by every list page.
//!
//! ```text
//! collection ─▶ filter::apply ─▶ group::group_by ─▶ paginate::paginate ─▶ rows
//!                     │
//!                     └──────────▶ export::build_csv
//! ```
//!
//! All functions here are pure; the frontend keeps the state in signals and
//! recomputes on every change.

pub mod export;
pub mod filter;
pub mod group;
pub mod paginate;
pub mod view;

pub use export::{build_csv, export_file_name, placeholder, ExportError, Exportable, PLACEHOLDER};
pub use filter::{apply, distinct_values, extra_values, FilterState};
pub use group::{group_by, CollapsedGroups, Group, GroupKey, ALL_RECORDS, UNASSIGNED};
pub use paginate::{paginate, Page};
pub use view::{ListView, ListViewState};

/// A record shown in a list page.
pub trait Searchable {
    /// Field read by the status filter.
    const STATUS_FIELD: &'static str = "status";
    /// Field read by the category filter.
    const CATEGORY_FIELD: &'static str = "category";
    /// Field read by the date range filter.
    const DATE_FIELD: &'static str = "createdAt";

    /// Stable server identifier.
    fn record_id(&self) -> &str;

    /// Whitelist of values matched by the free-text search.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Value of a named field, for predicates and grouping.
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Apply `patch` to the record with the given id. Returns `false` when the
/// id is not in the collection.
pub fn patch_by_id<T, F>(items: &mut [T], id: &str, patch: F) -> bool
where
    T: Searchable,
    F: FnOnce(&mut T),
{
    match items.iter_mut().find(|item| item.record_id() == id) {
        Some(item) => {
            patch(item);
            true
        }
        None => false,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Searchable;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: String,
        pub name: String,
        pub email: Option<String>,
        pub status: Option<String>,
        pub category: Option<String>,
        pub occupation: Option<String>,
        pub created_at: Option<String>,
    }

    impl Row {
        pub fn new(id: usize, name: &str) -> Self {
            Self {
                id: format!("id-{}", id),
                name: name.to_string(),
                email: None,
                status: None,
                category: None,
                occupation: None,
                created_at: None,
            }
        }
    }

    impl Searchable for Row {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![Some(self.name.as_str()), self.email.as_deref()]
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                "status" => self.status.clone(),
                "category" => self.category.clone(),
                "occupation" => self.occupation.clone(),
                "createdAt" => self.created_at.clone(),
                _ => None,
            }
        }
    }

    pub fn rows(n: usize) -> Vec<Row> {
        (1..=n).map(|i| Row::new(i, &format!("Customer {}", i))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::rows;
    use super::*;

    #[test]
    fn test_patch_by_id() {
        let mut items = rows(3);
        assert!(patch_by_id(&mut items, "id-2", |r| r.name = "Patched".into()));
        assert_eq!(items[1].name, "Patched");
        assert!(!patch_by_id(&mut items, "missing", |r| r.name = "x".into()));
    }
}
