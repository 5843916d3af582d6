//! Shortest-path planning over the screen graph.
//!
//! Back actions lead wherever the navigator came from, so the search runs
//! over `(scene, back stack)` states rather than bare scenes. Stacks never
//! hold a scene twice, which keeps the state space finite.

use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use screengraph_model::graph::{Scene, SceneId, ScreenGraph};
use tracing::debug;

use crate::config::PathPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Take the scene's edge at this index.
    Forward { edge: usize },
    /// Run the scene's back action.
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub from: SceneId,
    pub to: SceneId,
    pub kind: StepKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchState {
    scene: SceneId,
    back_stack: Vec<SceneId>,
}

struct SearchNode {
    state: SearchState,
    parent: Option<(usize, PlannedStep)>,
    depth: usize,
}

/// The back stack after taking `kind` out of `from` into `to`.
pub fn next_back_stack(from: &Scene, back_stack: &[SceneId], to: &str, kind: StepKind) -> Vec<SceneId> {
    let mut stack = back_stack.to_vec();
    match kind {
        StepKind::Back => {
            stack.pop();
        }
        StepKind::Forward { .. } => {
            if !from.dismiss_on_use {
                stack.push(from.id.clone());
            }
            // Reaching a scene we came through means the UI unwound to it.
            if let Some(pos) = stack.iter().position(|id| id == to) {
                stack.truncate(pos);
            }
        }
    }
    stack
}

/// Moves available from `scene`: forward edges first, then the back action.
fn candidate_moves(scene: &Scene, back_stack: &[SceneId]) -> Vec<(StepKind, SceneId)> {
    let mut moves: Vec<(StepKind, SceneId)> = scene
        .edges
        .iter()
        .enumerate()
        .map(|(edge, e)| (StepKind::Forward { edge }, e.to.clone()))
        .collect();
    if scene.back_action.is_some() {
        if let Some(parent) = back_stack.last() {
            moves.push((StepKind::Back, parent.clone()));
        }
    }
    moves
}

/// Breadth-first search for the shortest step sequence from `start` to `target`.
///
/// Returns `None` when no path of at most `max_len` steps exists. Edges into
/// unregistered scenes are skipped.
pub fn find_path(
    graph: &ScreenGraph,
    start: &str,
    back_stack: &[SceneId],
    target: &str,
    max_len: usize,
    policy: PathPolicy,
) -> Option<Vec<PlannedStep>> {
    if start == target {
        return Some(Vec::new());
    }

    let mut rng = match policy {
        PathPolicy::RegistrationOrder => None,
        PathPolicy::Seeded { seed } => Some(ChaCha8Rng::seed_from_u64(seed)),
    };

    let root = SearchState {
        scene: start.to_string(),
        back_stack: back_stack.to_vec(),
    };
    let mut visited = HashSet::new();
    visited.insert(root.clone());
    let mut nodes = vec![SearchNode {
        state: root,
        parent: None,
        depth: 0,
    }];
    let mut queue = VecDeque::from([0usize]);

    while let Some(idx) = queue.pop_front() {
        if nodes[idx].depth >= max_len {
            continue;
        }
        let Some(scene) = graph.scene(&nodes[idx].state.scene) else {
            continue;
        };

        let mut moves = candidate_moves(scene, &nodes[idx].state.back_stack);
        if let Some(rng) = rng.as_mut() {
            moves.shuffle(rng);
        }

        for (kind, to) in moves {
            if !graph.contains(&to) {
                debug!(from = %scene.id, to = %to, "skipping edge to unregistered scene");
                continue;
            }
            let next = SearchState {
                back_stack: next_back_stack(scene, &nodes[idx].state.back_stack, &to, kind),
                scene: to,
            };
            if !visited.insert(next.clone()) {
                continue;
            }

            let step = PlannedStep {
                from: scene.id.clone(),
                to: next.scene.clone(),
                kind,
            };
            let reached = next.scene == target;
            let depth = nodes[idx].depth + 1;
            nodes.push(SearchNode {
                state: next,
                parent: Some((idx, step)),
                depth,
            });
            if reached {
                return Some(reconstruct(&nodes, nodes.len() - 1));
            }
            queue.push_back(nodes.len() - 1);
        }
    }

    None
}

fn reconstruct(nodes: &[SearchNode], mut idx: usize) -> Vec<PlannedStep> {
    let mut steps = Vec::new();
    while let Some((parent, step)) = &nodes[idx].parent {
        steps.push(step.clone());
        idx = *parent;
    }
    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use screengraph_ir::Element;
    use screengraph_model::graph::Action;

    use super::*;

    fn targets(steps: &[PlannedStep]) -> Vec<&str> {
        steps.iter().map(|s| s.to.as_str()).collect()
    }

    /// Home -> List -> Detail, with back actions on List and Detail.
    fn drill_down_graph() -> ScreenGraph {
        let mut graph = ScreenGraph::new();
        graph
            .create_scene("Home")
            .unwrap()
            .tap(Element::button("list"), "List");
        graph
            .create_scene("List")
            .unwrap()
            .tap(Element::button("detail"), "Detail")
            .back_action(Action::Tap(Element::button("back")));
        graph
            .create_scene("Detail")
            .unwrap()
            .back_action(Action::Tap(Element::button("back")));
        graph.set_initial_scene("Home");
        graph
    }

    #[test]
    fn test_same_scene_is_empty_path() {
        let graph = drill_down_graph();
        let path = find_path(&graph, "List", &[], "List", 8, PathPolicy::default()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_forward_path() {
        let graph = drill_down_graph();
        let path = find_path(&graph, "Home", &[], "Detail", 8, PathPolicy::default()).unwrap();
        assert_eq!(targets(&path), vec!["List", "Detail"]);
        assert!(path
            .iter()
            .all(|s| matches!(s.kind, StepKind::Forward { edge: 0 })));
    }

    #[test]
    fn test_back_actions_follow_the_stack() {
        let graph = drill_down_graph();
        let stack = vec!["Home".to_string(), "List".to_string()];
        let path = find_path(&graph, "Detail", &stack, "Home", 8, PathPolicy::default()).unwrap();
        assert_eq!(targets(&path), vec!["List", "Home"]);
        assert!(path.iter().all(|s| s.kind == StepKind::Back));
    }

    #[test]
    fn test_back_unusable_without_history() {
        let graph = drill_down_graph();
        assert!(find_path(&graph, "Detail", &[], "Home", 8, PathPolicy::default()).is_none());
    }

    #[test]
    fn test_max_len_bounds_search() {
        let graph = drill_down_graph();
        assert!(find_path(&graph, "Home", &[], "Detail", 1, PathPolicy::default()).is_none());
    }

    #[test]
    fn test_forward_into_stacked_scene_unwinds() {
        let mut graph = ScreenGraph::new();
        graph.create_scene("Tab").unwrap();
        let mut scene = graph.create_scene("Menu").unwrap();
        scene.tap(Element::button("Close Menu"), "Tab");
        let menu = graph.scene("Menu").unwrap();

        let stack = vec!["Home".to_string(), "Tab".to_string()];
        let next = next_back_stack(menu, &stack, "Tab", StepKind::Forward { edge: 0 });
        assert_eq!(next, vec!["Home".to_string()]);
    }

    #[test]
    fn test_dismiss_on_use_scene_not_stacked() {
        let mut graph = ScreenGraph::new();
        graph
            .create_scene("Menu")
            .unwrap()
            .tap(Element::button("settings"), "Settings")
            .dismiss_on_use(true);
        let menu = graph.scene("Menu").unwrap();
        let next = next_back_stack(menu, &["Tab".to_string()], "Settings", StepKind::Forward { edge: 0 });
        assert_eq!(next, vec!["Tab".to_string()]);
    }

    #[test]
    fn test_dangling_edge_skipped() {
        let mut graph = ScreenGraph::new();
        graph
            .create_scene("A")
            .unwrap()
            .tap(Element::button("ghost"), "Ghost")
            .tap(Element::button("b"), "B");
        graph.create_scene("B").unwrap();
        let path = find_path(&graph, "A", &[], "B", 8, PathPolicy::default()).unwrap();
        assert_eq!(path[0].kind, StepKind::Forward { edge: 1 });
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let mut graph = ScreenGraph::new();
        graph
            .create_scene("Start")
            .unwrap()
            .tap(Element::button("left"), "Left")
            .tap(Element::button("right"), "Right");
        graph
            .create_scene("Left")
            .unwrap()
            .tap(Element::button("go"), "End");
        graph
            .create_scene("Right")
            .unwrap()
            .tap(Element::button("go"), "End");
        graph.create_scene("End").unwrap();

        let path = find_path(&graph, "Start", &[], "End", 8, PathPolicy::default()).unwrap();
        assert_eq!(targets(&path), vec!["Left", "End"]);
    }

    #[test]
    fn test_seeded_policy_is_reproducible() {
        let mut graph = ScreenGraph::new();
        {
            let mut start = graph.create_scene("Start").unwrap();
            for i in 0..6 {
                start.tap(Element::button(format!("b{i}")), format!("Mid{i}"));
            }
        }
        for i in 0..6 {
            graph
                .create_scene(format!("Mid{i}"))
                .unwrap()
                .tap(Element::button("go"), "End");
        }
        graph.create_scene("End").unwrap();

        let policy = PathPolicy::Seeded { seed: 42 };
        let first = find_path(&graph, "Start", &[], "End", 8, policy).unwrap();
        let second = find_path(&graph, "Start", &[], "End", 8, policy).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
