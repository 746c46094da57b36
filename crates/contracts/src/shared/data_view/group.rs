use std::collections::{HashMap, HashSet};

use super::Searchable;

/// Bucket label for records whose group field is missing, null or blank.
pub const UNASSIGNED: &str = "Unassigned";
/// Label of the single bucket produced by `GroupKey::None`.
pub const ALL_RECORDS: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GroupKey {
    #[default]
    None,
    Field(String),
}

impl GroupKey {
    /// Build from a select value; `""` and `"none"` mean no grouping.
    pub fn from_choice(value: &str) -> Self {
        match value.trim() {
            "" | "none" => GroupKey::None,
            field => GroupKey::Field(field.to_string()),
        }
    }

    pub fn as_choice(&self) -> &str {
        match self {
            GroupKey::None => "none",
            GroupKey::Field(field) => field,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, GroupKey::None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    pub label: String,
    pub items: Vec<T>,
}

/// Partition by the literal field value. Buckets come out in order of first
/// occurrence and items keep their relative order.
pub fn group_by<T: Searchable + Clone>(items: &[T], key: &GroupKey) -> Vec<Group<T>> {
    let field = match key {
        GroupKey::None => {
            return vec![Group {
                label: ALL_RECORDS.to_string(),
                items: items.to_vec(),
            }]
        }
        GroupKey::Field(field) => field.as_str(),
    };

    let mut groups: Vec<Group<T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let label = item
            .field_value(field)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| UNASSIGNED.to_string());

        match index.get(&label) {
            Some(&i) => groups[i].items.push(item.clone()),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push(Group {
                    label,
                    items: vec![item.clone()],
                });
            }
        }
    }

    groups
}

/// Concatenate buckets back into one sequence, group by group.
pub fn flatten<T: Clone>(groups: &[Group<T>]) -> Vec<T> {
    groups.iter().flat_map(|g| g.items.iter().cloned()).collect()
}

/// Collapsed/expanded state per bucket label. Unknown labels are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedGroups(HashSet<String>);

impl CollapsedGroups {
    pub fn is_expanded(&self, label: &str) -> bool {
        !self.0.contains(label)
    }

    pub fn toggle(&mut self, label: &str) {
        if !self.0.remove(label) {
            self.0.insert(label.to_string());
        }
    }

    pub fn expand_all(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::rows;
    use super::*;

    #[test]
    fn test_none_yields_single_bucket_in_order() {
        let items = rows(7);
        let groups = group_by(&items, &GroupKey::None);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, ALL_RECORDS);
        assert_eq!(groups[0].items, items);
    }

    #[test]
    fn test_null_occupation_goes_to_unassigned() {
        let mut items = rows(3);
        items[0].occupation = Some("Farmer".into());
        items[1].occupation = None;
        items[2].occupation = Some("Farmer".into());

        let groups = group_by(&items, &GroupKey::Field("occupation".into()));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Farmer");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].label, UNASSIGNED);
        assert_eq!(groups[1].items.len(), 1);
        assert_eq!(groups[1].items[0].id, "id-2");
    }

    #[test]
    fn test_first_occurrence_order_and_blank_values() {
        let mut items = rows(5);
        items[0].occupation = Some("  ".into());
        items[1].occupation = Some("Trader".into());
        items[2].occupation = Some("Farmer".into());
        items[3].occupation = Some("Trader".into());
        items[4].occupation = None;

        let groups = group_by(&items, &GroupKey::Field("occupation".into()));
        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec![UNASSIGNED, "Trader", "Farmer"]);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(flatten(&groups).len(), 5);
    }

    #[test]
    fn test_group_key_choice() {
        assert_eq!(GroupKey::from_choice("none"), GroupKey::None);
        assert_eq!(
            GroupKey::from_choice("gender"),
            GroupKey::Field("gender".into())
        );
        assert_eq!(GroupKey::Field("gender".into()).as_choice(), "gender");
    }

    #[test]
    fn test_collapsed_defaults_to_expanded() {
        let mut collapsed = CollapsedGroups::default();
        assert!(collapsed.is_expanded("Farmer"));
        collapsed.toggle("Farmer");
        assert!(!collapsed.is_expanded("Farmer"));
        assert!(collapsed.is_expanded(UNASSIGNED));
        collapsed.toggle("Farmer");
        assert!(collapsed.is_expanded("Farmer"));
    }
}
