pub mod compile;
pub mod driver;
pub mod graph;
pub mod validate;

pub use compile::compile;
pub use driver::{DriverError, UiDriver};
pub use graph::{Action, Edge, ExistenceCheck, GraphError, Scene, SceneBuilder, ScreenGraph};
