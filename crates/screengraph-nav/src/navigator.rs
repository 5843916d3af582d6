use screengraph_model::driver::{DriverError, UiDriver};
use screengraph_model::graph::{Action, ExistenceCheck, GraphError, SceneId, ScreenGraph};
use tracing::{debug, info, warn};

use crate::config::NavigatorConfig;
use crate::search::{find_path, next_back_stack, PlannedStep, StepKind};
use crate::trace::{CoverageReport, NavigationTrace, TraceStepKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavError {
    #[error("Scene not found: '{scene}'")]
    SceneNotFound { scene: String },

    #[error("No path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    #[error("Element not found in scene '{scene}': {element}")]
    ElementNotFound { scene: String, element: String },

    #[error("Scene '{scene}' has no back action")]
    MissingBackAction { scene: String },

    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    /// Failure raised by the action itself, passed through untouched.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// What a `goto` call did.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationReport {
    pub from: SceneId,
    pub to: SceneId,
    pub steps: Vec<PlannedStep>,
}

impl NavigationReport {
    pub fn actions_executed(&self) -> usize {
        self.steps.len()
    }
}

/// Walks a [`ScreenGraph`] in the live UI through a [`UiDriver`].
///
/// Owns the current-scene cursor and the back stack. One navigator per test
/// session; the graph itself is never mutated.
pub struct Navigator<'g, D: UiDriver> {
    graph: &'g ScreenGraph,
    driver: D,
    config: NavigatorConfig,
    current: SceneId,
    back_stack: Vec<SceneId>,
    trace: NavigationTrace,
    coverage: CoverageReport,
}

impl<'g, D: UiDriver> Navigator<'g, D> {
    /// Start at the graph's initial scene.
    pub fn new(graph: &'g ScreenGraph, driver: D, config: NavigatorConfig) -> Result<Self, NavError> {
        let initial = graph.initial_scene().ok_or(GraphError::MissingInitialScene)?;
        if !graph.contains(initial) {
            return Err(GraphError::UnknownInitialScene {
                scene: initial.to_string(),
            }
            .into());
        }
        Ok(Self {
            graph,
            driver,
            config,
            current: initial.to_string(),
            back_stack: Vec::new(),
            trace: NavigationTrace::new(),
            coverage: CoverageReport::default(),
        })
    }

    pub fn current_scene(&self) -> &str {
        &self.current
    }

    /// Scenes a back action can return to, nearest last.
    pub fn back_stack(&self) -> &[SceneId] {
        &self.back_stack
    }

    pub fn graph(&self) -> &'g ScreenGraph {
        self.graph
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn trace(&self) -> &NavigationTrace {
        &self.trace
    }

    pub fn coverage(&self) -> &CoverageReport {
        &self.coverage
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// The steps `goto(target)` would take from here, without acting.
    pub fn plan(&self, target: &str) -> Result<Vec<PlannedStep>, NavError> {
        if !self.graph.contains(target) {
            return Err(NavError::SceneNotFound {
                scene: target.to_string(),
            });
        }
        find_path(
            self.graph,
            &self.current,
            &self.back_stack,
            target,
            self.config.max_path_len,
            self.config.policy,
        )
        .ok_or_else(|| NavError::NoPath {
            from: self.current.clone(),
            to: target.to_string(),
        })
    }

    /// Drive the UI to `target`.
    ///
    /// On failure the cursor stays at the last scene actually reached.
    pub fn goto(&mut self, target: &str) -> Result<NavigationReport, NavError> {
        let from = self.current.clone();
        let steps = self.plan(target)?;
        debug!(from = %from, to = %target, steps = steps.len(), "planned navigation");

        for step in &steps {
            if let Err(err) = self.take_step(step) {
                warn!(at = %self.current, to = %target, error = %err, "navigation failed");
                return Err(err);
            }
        }

        info!(from = %from, to = %target, actions = steps.len(), "navigation complete");
        Ok(NavigationReport {
            from,
            to: target.to_string(),
            steps,
        })
    }

    /// Declare that the live UI is already at `scene`.
    ///
    /// Performs no action. The back stack is cleared, since how the UI got
    /// there is unknown.
    pub fn now_at(&mut self, scene: &str) -> Result<(), NavError> {
        if !self.graph.contains(scene) {
            return Err(NavError::SceneNotFound {
                scene: scene.to_string(),
            });
        }
        debug!(from = %self.current, to = %scene, "cursor moved without action");
        self.trace.record(&self.current, scene, TraceStepKind::NowAt);
        self.current = scene.to_string();
        self.back_stack.clear();
        Ok(())
    }

    fn take_step(&mut self, step: &PlannedStep) -> Result<(), NavError> {
        let graph = self.graph;
        let scene = graph.scene(&step.from).ok_or_else(|| NavError::SceneNotFound {
            scene: step.from.clone(),
        })?;
        if !graph.contains(&step.to) {
            return Err(NavError::SceneNotFound {
                scene: step.to.clone(),
            });
        }

        let (action, kind) = match step.kind {
            StepKind::Forward { edge } => {
                let edge = scene.edges.get(edge).ok_or_else(|| NavError::NoPath {
                    from: step.from.clone(),
                    to: step.to.clone(),
                })?;
                (
                    &edge.action,
                    TraceStepKind::Edge {
                        action: edge.action.to_string(),
                    },
                )
            }
            StepKind::Back => {
                let action = scene
                    .back_action
                    .as_ref()
                    .ok_or_else(|| NavError::MissingBackAction {
                        scene: step.from.clone(),
                    })?;
                (action, TraceStepKind::Back)
            }
        };

        self.perform(&step.from, action)?;

        self.back_stack = next_back_stack(scene, &self.back_stack, &step.to, step.kind);
        self.trace.record(&step.from, &step.to, kind);
        self.coverage.record(&step.from, &step.to);
        self.current = step.to.clone();
        debug!(from = %step.from, to = %step.to, "step complete");
        Ok(())
    }

    fn perform(&mut self, scene: &str, action: &Action) -> Result<(), NavError> {
        if action.check() == ExistenceCheck::Verify {
            if let Some(element) = action.target() {
                let timeout = self.config.existence_timeout();
                if !self.driver.wait_for_existence(element, timeout) {
                    return Err(NavError::ElementNotFound {
                        scene: scene.to_string(),
                        element: element.to_string(),
                    });
                }
            }
        }
        debug!(scene = %scene, action = %action, "performing action");
        action.perform(&mut self.driver)?;
        Ok(())
    }
}
