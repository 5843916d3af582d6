//! Element queries understood by a UI-automation driver.
//!
//! An [`Element`] is a path of lookups from the application root, e.g.
//! `tables["AppSettings"].cells["Search"]` or `navigationBars[0].buttons[0]`.
//! The driver decides how to resolve it; the graph only carries it around.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of UI element a lookup segment searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Button,
    TextField,
    Cell,
    StaticText,
    Table,
    CollectionView,
    NavigationBar,
    Other,
}

impl ElementKind {
    fn query_name(self) -> &'static str {
        match self {
            ElementKind::Button => "buttons",
            ElementKind::TextField => "textFields",
            ElementKind::Cell => "cells",
            ElementKind::StaticText => "staticTexts",
            ElementKind::Table => "tables",
            ElementKind::CollectionView => "collectionViews",
            ElementKind::NavigationBar => "navigationBars",
            ElementKind::Other => "otherElements",
        }
    }
}

/// How a segment picks one element out of its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Locator {
    /// Accessibility identifier or label.
    Id(String),
    /// Position among matches, in driver order.
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementSegment {
    pub kind: ElementKind,
    pub locator: Locator,
}

/// A query path identifying one element in the live UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element {
    path: Vec<ElementSegment>,
}

impl Element {
    pub fn new(kind: ElementKind, locator: Locator) -> Self {
        Self {
            path: vec![ElementSegment { kind, locator }],
        }
    }

    pub fn by_id(kind: ElementKind, id: impl Into<String>) -> Self {
        Self::new(kind, Locator::Id(id.into()))
    }

    pub fn by_index(kind: ElementKind, index: usize) -> Self {
        Self::new(kind, Locator::Index(index))
    }

    pub fn button(id: impl Into<String>) -> Self {
        Self::by_id(ElementKind::Button, id)
    }

    pub fn text_field(id: impl Into<String>) -> Self {
        Self::by_id(ElementKind::TextField, id)
    }

    pub fn table(id: impl Into<String>) -> Self {
        Self::by_id(ElementKind::Table, id)
    }

    pub fn navigation_bar(id: impl Into<String>) -> Self {
        Self::by_id(ElementKind::NavigationBar, id)
    }

    pub fn other(id: impl Into<String>) -> Self {
        Self::by_id(ElementKind::Other, id)
    }

    /// Narrow this query to a descendant.
    pub fn child(&self, kind: ElementKind, locator: Locator) -> Self {
        let mut path = self.path.clone();
        path.push(ElementSegment { kind, locator });
        Self { path }
    }

    pub fn cell(&self, id: impl Into<String>) -> Self {
        self.child(ElementKind::Cell, Locator::Id(id.into()))
    }

    pub fn button_at(&self, index: usize) -> Self {
        self.child(ElementKind::Button, Locator::Index(index))
    }

    pub fn child_button(&self, id: impl Into<String>) -> Self {
        self.child(ElementKind::Button, Locator::Id(id.into()))
    }

    pub fn static_text(&self, id: impl Into<String>) -> Self {
        self.child(ElementKind::StaticText, Locator::Id(id.into()))
    }

    pub fn segments(&self) -> &[ElementSegment] {
        &self.path
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match &seg.locator {
                Locator::Id(id) => write!(f, "{}[{:?}]", seg.kind.query_name(), id)?,
                Locator::Index(idx) => write!(f, "{}[{}]", seg.kind.query_name(), idx)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_query() {
        let cell = Element::table("AppSettingsTableViewController.tableView").cell("Search");
        assert_eq!(
            cell.to_string(),
            r#"tables["AppSettingsTableViewController.tableView"].cells["Search"]"#
        );
    }

    #[test]
    fn test_display_positional_query() {
        let back = Element::by_index(ElementKind::NavigationBar, 0).button_at(0);
        assert_eq!(back.to_string(), "navigationBars[0].buttons[0]");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let table = Element::table("Login List");
        let _cell = table.cell("first");
        assert_eq!(table.segments().len(), 1);
    }

    #[test]
    fn test_locator_deserializes_untagged() {
        let el: Element = serde_json::from_str(
            r#"[{"kind":"navigation_bar","locator":0},{"kind":"button","locator":"Back"}]"#,
        )
        .unwrap();
        assert_eq!(
            el,
            Element::by_index(ElementKind::NavigationBar, 0).child_button("Back")
        );
    }
}
