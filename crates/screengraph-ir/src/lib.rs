pub mod element;
pub mod parse;
pub mod types;

pub use element::{Element, ElementKind, Locator, SwipeDirection};
pub use parse::parse_graph;
