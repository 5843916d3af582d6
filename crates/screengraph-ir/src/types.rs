use serde::{Deserialize, Serialize};

use crate::element::{Element, SwipeDirection};

/// Declarative description of a screen graph, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSpec {
    pub initial: String,
    pub scenes: Vec<SceneSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSpec {
    pub id: String,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub back: Option<ActionSpec>,
    #[serde(default)]
    pub dismiss_on_use: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub to: String,
    pub action: ActionSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionSpec {
    /// Tap after verifying the element exists.
    Tap { element: Element },
    /// Type into the element after verifying it exists.
    TypeText { text: String, into: Element },
    /// Swipe without an existence check.
    Swipe {
        element: Element,
        direction: SwipeDirection,
    },
    /// Tap only if present; absence is not an error.
    TapIfExists { element: Element },
}
