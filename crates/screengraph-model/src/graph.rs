use std::collections::HashMap;
use std::fmt;

use screengraph_ir::Element;
use tracing::debug;

use crate::driver::{DriverError, UiDriver};

pub type SceneId = String;

/// Caller-supplied interaction, given the driver at execution time.
pub type GestureFn = Box<dyn Fn(&mut dyn UiDriver) -> Result<(), DriverError>>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Duplicate scene: '{scene}' is already registered")]
    DuplicateScene { scene: String },

    #[error("Dangling edge: '{from}' leads to '{to}', which is not registered")]
    DanglingEdge { from: String, to: String },

    #[error("No initial scene set")]
    MissingInitialScene,

    #[error("Initial scene '{scene}' is not registered")]
    UnknownInitialScene { scene: String },
}

/// Whether the navigator verifies an edge's element before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistenceCheck {
    Verify,
    /// Checking is unreliable for this element; act blindly.
    Skip,
}

/// The unit of work that performs a transition in the live UI.
pub enum Action {
    Tap(Element),
    TypeText { text: String, into: Element },
    Gesture(GestureFn),
}

impl Action {
    pub fn gesture<F>(f: F) -> Self
    where
        F: Fn(&mut dyn UiDriver) -> Result<(), DriverError> + 'static,
    {
        Action::Gesture(Box::new(f))
    }

    /// The element the navigator must find before acting, if any.
    pub fn target(&self) -> Option<&Element> {
        match self {
            Action::Tap(element) => Some(element),
            Action::TypeText { into, .. } => Some(into),
            Action::Gesture(_) => None,
        }
    }

    pub fn check(&self) -> ExistenceCheck {
        match self {
            Action::Gesture(_) => ExistenceCheck::Skip,
            _ => ExistenceCheck::Verify,
        }
    }

    pub fn perform(&self, driver: &mut dyn UiDriver) -> Result<(), DriverError> {
        match self {
            Action::Tap(element) => driver.tap(element),
            Action::TypeText { text, into } => driver.type_text(into, text),
            Action::Gesture(f) => f(driver),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tap(element) => f.debug_tuple("Tap").field(element).finish(),
            Action::TypeText { text, into } => f
                .debug_struct("TypeText")
                .field("text", text)
                .field("into", into)
                .finish(),
            Action::Gesture(_) => f.write_str("Gesture(..)"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tap(element) => write!(f, "tap {element}"),
            Action::TypeText { text, into } => write!(f, "type {text:?} into {into}"),
            Action::Gesture(_) => f.write_str("gesture"),
        }
    }
}

#[derive(Debug)]
pub struct Edge {
    pub from: SceneId,
    pub to: SceneId,
    pub action: Action,
}

impl Edge {
    pub fn check(&self) -> ExistenceCheck {
        self.action.check()
    }
}

#[derive(Debug)]
pub struct Scene {
    pub id: SceneId,
    /// Outgoing edges in registration order.
    pub edges: Vec<Edge>,
    pub back_action: Option<Action>,
    /// The scene closes after any edge out of it is taken.
    pub dismiss_on_use: bool,
}

impl Scene {
    fn new(id: SceneId) -> Self {
        Self {
            id,
            edges: Vec::new(),
            back_action: None,
            dismiss_on_use: false,
        }
    }

    pub fn edge_to(&self, to: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.to == to)
    }
}

/// Directed graph of UI scenes.
///
/// Scenes keep registration order, which is also the tie-break order the
/// navigator uses when several shortest paths exist.
#[derive(Debug, Default)]
pub struct ScreenGraph {
    scenes: Vec<Scene>,
    index: HashMap<SceneId, usize>,
    initial: Option<SceneId>,
}

impl ScreenGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new scene and return a builder for its edges.
    pub fn create_scene(&mut self, id: impl Into<SceneId>) -> Result<SceneBuilder<'_>, GraphError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateScene { scene: id });
        }
        debug!(scene = %id, "registering scene");
        let slot = self.scenes.len();
        self.index.insert(id.clone(), slot);
        self.scenes.push(Scene::new(id));
        Ok(SceneBuilder { graph: self, slot })
    }

    pub fn set_initial_scene(&mut self, id: impl Into<SceneId>) {
        self.initial = Some(id.into());
    }

    pub fn initial_scene(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.index.get(id).map(|&slot| &self.scenes[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    pub fn scene_ids(&self) -> impl Iterator<Item = &str> {
        self.scenes.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.scenes.iter().map(|s| s.edges.len()).sum()
    }

    pub fn validate(&self) -> Result<(), Vec<GraphError>> {
        crate::validate::validate_graph(self)
    }
}

/// Handle for registering edges on one scene.
#[derive(Debug)]
pub struct SceneBuilder<'g> {
    graph: &'g mut ScreenGraph,
    slot: usize,
}

impl<'g> SceneBuilder<'g> {
    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.graph.scenes[self.slot]
    }

    pub fn id(&self) -> &str {
        &self.graph.scenes[self.slot].id
    }

    /// Register an edge with an arbitrary action.
    pub fn edge(&mut self, to: impl Into<SceneId>, action: Action) -> &mut Self {
        let scene = self.scene_mut();
        let edge = Edge {
            from: scene.id.clone(),
            to: to.into(),
            action,
        };
        debug!(from = %edge.from, to = %edge.to, action = %edge.action, "registering edge");
        scene.edges.push(edge);
        self
    }

    /// Tap `element` to reach `to`. The element is verified first.
    pub fn tap(&mut self, element: Element, to: impl Into<SceneId>) -> &mut Self {
        self.edge(to, Action::Tap(element))
    }

    /// Type `text` into `into` to reach `to`. The element is verified first.
    pub fn type_text(
        &mut self,
        text: impl Into<String>,
        into: Element,
        to: impl Into<SceneId>,
    ) -> &mut Self {
        self.edge(
            to,
            Action::TypeText {
                text: text.into(),
                into,
            },
        )
    }

    /// Reach `to` through a caller-supplied interaction; no existence check.
    pub fn gesture<F>(&mut self, to: impl Into<SceneId>, f: F) -> &mut Self
    where
        F: Fn(&mut dyn UiDriver) -> Result<(), DriverError> + 'static,
    {
        self.edge(to, Action::gesture(f))
    }

    pub fn back_action(&mut self, action: Action) -> &mut Self {
        self.scene_mut().back_action = Some(action);
        self
    }

    pub fn back_gesture<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&mut dyn UiDriver) -> Result<(), DriverError> + 'static,
    {
        self.back_action(Action::gesture(f))
    }

    pub fn dismiss_on_use(&mut self, dismiss: bool) -> &mut Self {
        self.scene_mut().dismiss_on_use = dismiss;
        self
    }
}
