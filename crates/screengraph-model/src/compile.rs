use screengraph_ir::types::{ActionSpec, GraphSpec};

use crate::graph::{Action, GraphError, ScreenGraph};

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Validation(Vec<GraphError>),
}

/// Build a validated [`ScreenGraph`] from its declarative description.
pub fn compile(spec: &GraphSpec) -> Result<ScreenGraph, CompileError> {
    let mut graph = ScreenGraph::new();

    for scene_spec in &spec.scenes {
        let mut scene = graph.create_scene(scene_spec.id.as_str())?;
        for edge in &scene_spec.edges {
            scene.edge(edge.to.as_str(), compile_action(&edge.action));
        }
        if let Some(back) = &scene_spec.back {
            scene.back_action(compile_action(back));
        }
        scene.dismiss_on_use(scene_spec.dismiss_on_use);
    }

    graph.set_initial_scene(spec.initial.as_str());
    graph.validate().map_err(CompileError::Validation)?;
    Ok(graph)
}

fn compile_action(spec: &ActionSpec) -> Action {
    match spec.clone() {
        ActionSpec::Tap { element } => Action::Tap(element),
        ActionSpec::TypeText { text, into } => Action::TypeText { text, into },
        ActionSpec::Swipe { element, direction } => {
            Action::gesture(move |driver| driver.swipe(&element, direction))
        }
        ActionSpec::TapIfExists { element } => Action::gesture(move |driver| {
            if driver.exists(&element) {
                driver.tap(&element)
            } else {
                Ok(())
            }
        }),
    }
}
