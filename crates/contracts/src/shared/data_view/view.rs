use chrono::NaiveDate;

use super::filter::{apply, normalize_choice, FilterState};
use super::group::{flatten, group_by, CollapsedGroups, Group, GroupKey};
use super::paginate::{paginate, Page};
use super::Searchable;

/// Everything a list page needs besides the collection itself.
///
/// Every setter that touches the filter or the grouping resets the page
/// index to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub filter: FilterState,
    pub group_key: GroupKey,
    pub collapsed: CollapsedGroups,
    pub page: usize,
    pub page_size: usize,
}

/// The rows of the current page, bucketed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub groups: Vec<Group<T>>,
    pub page: Page<T>,
}

impl ListViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: FilterState::default(),
            group_key: GroupKey::None,
            collapsed: CollapsedGroups::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    /// `""`/`"all"` clear the status predicate.
    pub fn set_status(&mut self, choice: &str) {
        self.filter.status = normalize_choice(choice);
        self.page = 1;
    }

    pub fn set_category(&mut self, choice: &str) {
        self.filter.category = normalize_choice(choice);
        self.page = 1;
    }

    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filter.date_from = from;
        self.filter.date_to = to;
        self.page = 1;
    }

    /// Resets the filters and the grouping, everything the "Clear" button
    /// counts in `active_filter_count`.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.group_key = GroupKey::None;
        self.collapsed.expand_all();
        self.page = 1;
    }

    pub fn active_filter_count(&self) -> usize {
        let f = &self.filter;
        [
            !f.search.trim().is_empty(),
            f.status.is_some(),
            f.category.is_some(),
            f.date_from.is_some(),
            f.date_to.is_some(),
            !self.group_key.is_none(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn set_group_key(&mut self, key: GroupKey) {
        self.group_key = key;
        self.collapsed.expand_all();
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filtered collection, in server order. This is what gets exported.
    pub fn filtered<T: Searchable + Clone>(&self, all: &[T]) -> Vec<T> {
        apply(all, &self.filter)
    }

    /// Filter → group → paginate. With a group key active the page window
    /// runs over the group-ordered sequence and the slice is re-bucketed.
    pub fn compute<T: Searchable + Clone>(&self, all: &[T]) -> ListView<T> {
        let filtered = self.filtered(all);
        let ordered = match self.group_key {
            GroupKey::None => filtered,
            _ => flatten(&group_by(&filtered, &self.group_key)),
        };
        let page = paginate(&ordered, self.page, self.page_size);
        let groups = group_by(&page.items, &self.group_key);
        ListView { groups, page }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::rows;
    use super::super::group::{ALL_RECORDS, UNASSIGNED};
    use super::*;

    #[test]
    fn test_search_resets_page_and_shrinks_total() {
        let mut items = rows(30);
        for (i, item) in items.iter_mut().enumerate() {
            if i % 6 == 0 {
                item.email = Some(format!("kisan{}@mandi.in", i));
            }
        }

        let mut state = ListViewState::new(10);
        assert_eq!(state.compute(&items).page.total_pages, 3);

        state.go_to(3);
        assert_eq!(state.compute(&items).page.page, 3);

        state.set_search("MANDI.IN");
        assert_eq!(state.page, 1);
        let view = state.compute(&items);
        assert_eq!(view.page.total_count, 5);
        assert_eq!(view.page.total_pages, 1);
        assert_eq!(view.page.page, 1);
    }

    #[test]
    fn test_every_filter_setter_resets_page() {
        let mut state = ListViewState::new(10);
        state.go_to(4);
        state.set_status("active");
        assert_eq!(state.page, 1);

        state.go_to(4);
        state.set_category("all");
        assert_eq!(state.page, 1);
        assert_eq!(state.filter.category, None);

        state.go_to(4);
        state.set_date_range(None, None);
        assert_eq!(state.page, 1);

        state.go_to(4);
        state.set_group_key(GroupKey::Field("occupation".into()));
        assert_eq!(state.page, 1);

        state.go_to(4);
        state.clear_filters();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_clear_resets_grouping_too() {
        let mut state = ListViewState::new(10);
        state.set_group_key(GroupKey::Field("gender".into()));
        assert_eq!(state.active_filter_count(), 1);

        state.set_search("  ");
        assert_eq!(state.active_filter_count(), 1);
        state.set_status("blocked");
        assert_eq!(state.active_filter_count(), 2);

        state.clear_filters();
        assert!(state.group_key.is_none());
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn test_grouped_pages_follow_group_order() {
        let mut items = rows(4);
        items[0].occupation = Some("Farmer".into());
        items[1].occupation = Some("Trader".into());
        items[2].occupation = Some("Farmer".into());

        let mut state = ListViewState::new(2);
        state.set_group_key(GroupKey::Field("occupation".into()));

        let first = state.compute(&items);
        assert_eq!(first.groups.len(), 1);
        assert_eq!(first.groups[0].label, "Farmer");
        assert_eq!(first.groups[0].items.len(), 2);

        state.go_to(2);
        let second = state.compute(&items);
        let labels: Vec<_> = second.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Trader", UNASSIGNED]);
    }

    #[test]
    fn test_ungrouped_view_has_single_bucket() {
        let items = rows(3);
        let view = ListViewState::new(10).compute(&items);
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].label, ALL_RECORDS);
        assert_eq!(view.groups[0].items, items);
    }
}
