use std::collections::HashMap;

use screengraph_model::graph::SceneId;

/// A single executed navigation step.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub from: SceneId,
    pub to: SceneId,
    pub kind: TraceStepKind,
    /// Step number (monotonic for the navigator's lifetime).
    pub step_number: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TraceStepKind {
    /// Took a forward edge; `action` is its human-readable form.
    Edge { action: String },
    /// Ran the source scene's back action.
    Back,
    /// Cursor moved by `now_at`, no UI action.
    NowAt,
}

/// Everything a navigator has done, in order.
#[derive(Debug, Clone, Default)]
pub struct NavigationTrace {
    steps: Vec<TraceStep>,
    next_step: u64,
}

impl NavigationTrace {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            next_step: 0,
        }
    }

    pub fn record(&mut self, from: &str, to: &str, kind: TraceStepKind) {
        self.steps.push(TraceStep {
            from: from.to_string(),
            to: to.to_string(),
            kind,
            step_number: self.next_step,
        });
        self.next_step += 1;
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Which scenes and transitions a test run exercised.
#[derive(Debug, Clone, Default)]
pub struct CoverageReport {
    /// Times each scene was entered through a UI action.
    pub scene_visits: HashMap<SceneId, u64>,
    /// Times each `(from, to)` transition ran, back actions included.
    pub transition_counts: HashMap<(SceneId, SceneId), u64>,
}

impl CoverageReport {
    pub fn record(&mut self, from: &str, to: &str) {
        *self.scene_visits.entry(to.to_string()).or_insert(0) += 1;
        *self
            .transition_counts
            .entry((from.to_string(), to.to_string()))
            .or_insert(0) += 1;
    }

    pub fn unique_transitions(&self) -> usize {
        self.transition_counts.len()
    }

    pub fn total_actions(&self) -> u64 {
        self.transition_counts.values().sum()
    }

    pub fn visited(&self, scene: &str) -> bool {
        self.scene_visits.contains_key(scene)
    }
}
