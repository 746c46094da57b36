//! Page category constants.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_customer--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity part searchable: copy the id from the
//! DOM inspector and it names the `domain/` directory to open.

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Stat cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other shell pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_customer--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_customer"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_customer--detail"));
    }
}
