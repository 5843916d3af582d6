use crate::graph::{GraphError, ScreenGraph};

/// Check a graph eagerly for problems the navigator would otherwise only
/// hit at traversal time.
pub fn validate_graph(graph: &ScreenGraph) -> Result<(), Vec<GraphError>> {
    let mut errors = Vec::new();
    validate_initial_scene(graph, &mut errors);
    validate_edge_targets(graph, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_initial_scene(graph: &ScreenGraph, errors: &mut Vec<GraphError>) {
    match graph.initial_scene() {
        None => errors.push(GraphError::MissingInitialScene),
        Some(id) if !graph.contains(id) => errors.push(GraphError::UnknownInitialScene {
            scene: id.to_string(),
        }),
        Some(_) => {}
    }
}

/// Check that every edge leads to a registered scene.
fn validate_edge_targets(graph: &ScreenGraph, errors: &mut Vec<GraphError>) {
    for scene in graph.scenes() {
        for edge in &scene.edges {
            if !graph.contains(&edge.to) {
                errors.push(GraphError::DanglingEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            }
        }
    }
}
