//! The menu item tree: the data model behind the rings.
//!
//! A `MenuTree` is a forest of labeled, iconified entries. Entries with
//! children open a sub-ring when selected; entries without children fire an
//! action. Trees arrive either from the remote report endpoint (see
//! `crate::net`) or from the bundled dataset, and every tree is validated
//! against the same two invariants before the engine will touch it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One entry of the radial menu.
///
/// `value` doubles as the unique key among siblings and, for leaves, as the
/// action token handed to the `ActionSink`. `icon` is a Material icon name
/// and purely presentational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn leaf(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn group(
        label: impl Into<String>,
        value: impl Into<String>,
        icon: impl Into<String>,
        children: Vec<MenuItem>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: Some(icon.into()),
            children,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Leaves trigger an action instead of opening a sub-ring.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether selecting this entry opens a sub-ring.
    ///
    /// A single-child group collapses to a direct action; a one-item
    /// sub-ring is never shown.
    pub fn drills_down(&self) -> bool {
        self.children.len() > 1
    }

    /// Recursively count this entry and all entries below it.
    pub fn entry_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.entry_count()).sum::<usize>()
    }
}

/// Invalid menu tree shape (duplicate sibling value, or nesting too deep).
#[derive(Debug, Clone)]
pub struct TreeError {
    pub message: String,
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The top-level forest shown on the first ring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTree {
    pub items: Vec<MenuItem>,
}

impl MenuTree {
    /// Build and validate a tree from top-level items.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, TreeError> {
        let tree = Self { items };
        tree.validate()?;
        Ok(tree)
    }

    /// Parse the wire format: a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let items: Vec<MenuItem> = serde_json::from_str(json).map_err(|e| TreeError {
            message: format!("malformed menu payload: {}", e),
        })?;
        Self::new(items)
    }

    /// Sibling values must be unique, and entries nest at most two levels
    /// below the center: top-level entries and their direct children only.
    pub fn validate(&self) -> Result<(), TreeError> {
        check_sibling_values(&self.items, "top level")?;
        for item in &self.items {
            check_sibling_values(&item.children, &item.value)?;
            for child in &item.children {
                if !child.children.is_empty() {
                    return Err(TreeError {
                        message: format!(
                            "entry '{}' nests below ring 2; only two levels are supported",
                            child.value
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    /// Total entry count across the whole forest.
    pub fn entry_count(&self) -> usize {
        self.items.iter().map(|i| i.entry_count()).sum()
    }

    /// Look up a top-level entry by value.
    pub fn top_level(&self, value: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.value == value)
    }

    /// The dataset shipped with the binary, used whenever the remote
    /// endpoint cannot produce one. Labels are Persian; values are the
    /// action tokens the investigation console dispatches on.
    pub fn bundled() -> Self {
        Self {
            items: vec![
                MenuItem::group(
                    "گسترش مرتبطین",
                    "expand_related",
                    "group",
                    vec![
                        MenuItem::leaf("کاربر", "user"),
                        MenuItem::leaf("تلفن", "phone"),
                        MenuItem::leaf("مکان", "location"),
                        MenuItem::leaf("قرارداد", "contract"),
                        MenuItem::leaf("کارت بانکی", "bank_card"),
                        MenuItem::leaf("حساب بانکی", "bank_account"),
                        MenuItem::leaf("سند", "document"),
                        MenuItem::leaf("انتخاب همه", "select_all"),
                    ],
                ),
                MenuItem::group(
                    "نمایش",
                    "show",
                    "visibility",
                    vec![
                        MenuItem::leaf("نمایش خلاصه", "show_summary"),
                        MenuItem::leaf("نمایش جزئیات", "show_detail"),
                    ],
                ),
                MenuItem::leaf("کپی", "copy").with_icon("content_copy"),
                MenuItem::leaf("ویرایش", "edit").with_icon("edit"),
                MenuItem::leaf("افزودن مشابه", "add_similar").with_icon("control_point_duplicate"),
                MenuItem::leaf("جستجوی مشخصه", "search_feature").with_icon("search"),
                MenuItem::group(
                    "افزودن از سرویس",
                    "add_from_service",
                    "cloud_download",
                    vec![
                        MenuItem::leaf("سرویس مبارزه با پولشویی", "service_aml"),
                        MenuItem::leaf("بانک مرکزی", "central_bank"),
                        MenuItem::leaf("رخنما", "rakhnama"),
                        MenuItem::leaf("سازمان مالیاتی", "tax_organization"),
                        MenuItem::leaf("لیست سفید", "white_list"),
                    ],
                ),
                MenuItem::leaf("گسترش روابط", "expand_relations").with_icon("device_hub"),
            ],
        }
    }
}

fn check_sibling_values(items: &[MenuItem], parent: &str) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.value.as_str()) {
            return Err(TreeError {
                message: format!("duplicate value '{}' under {}", item.value, parent),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tree_is_valid() {
        let tree = MenuTree::bundled();
        assert!(tree.validate().is_ok());
        assert_eq!(tree.items.len(), 8);
        // 8 top-level + 8 + 2 + 5 children
        assert_eq!(tree.entry_count(), 23);
    }

    #[test]
    fn duplicate_sibling_value_rejected() {
        let result = MenuTree::new(vec![
            MenuItem::leaf("Copy", "copy"),
            MenuItem::leaf("Copy again", "copy"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_value_across_rings_allowed() {
        let tree = MenuTree::new(vec![
            MenuItem::group(
                "Show",
                "show",
                "visibility",
                vec![MenuItem::leaf("Show all", "show"), MenuItem::leaf("Summary", "summary")],
            ),
        ]);
        assert!(tree.is_ok());
    }

    #[test]
    fn three_level_nesting_rejected() {
        let grandchild = MenuItem::leaf("Too deep", "deep");
        let child = MenuItem {
            children: vec![grandchild],
            ..MenuItem::leaf("Child", "child")
        };
        let result = MenuTree::new(vec![MenuItem::group("Top", "top", "group", vec![child])]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_wire_format() {
        let json = r#"[
            {"label": "نمایش", "value": "show", "icon": "visibility",
             "children": [{"label": "خلاصه", "value": "summary"}]},
            {"label": "کپی", "value": "copy"}
        ]"#;
        let tree = MenuTree::from_json(json).unwrap();
        assert_eq!(tree.items.len(), 2);
        assert_eq!(tree.items[0].children.len(), 1);
        assert!(tree.items[1].is_leaf());
        assert_eq!(tree.items[0].icon.as_deref(), Some("visibility"));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(MenuTree::from_json("{\"not\": \"an array\"}").is_err());
        assert!(MenuTree::from_json("nonsense").is_err());
    }

    #[test]
    fn single_child_group_does_not_drill() {
        let item = MenuItem::group(
            "Show",
            "show",
            "visibility",
            vec![MenuItem::leaf("Summary", "summary")],
        );
        assert!(!item.is_leaf());
        assert!(!item.drills_down());

        let two = MenuTree::bundled();
        assert!(two.top_level("show").unwrap().drills_down());
    }
}
