//! The browser's UI flow as a screen graph, for UI tests.

pub mod elements;
pub mod graph;
pub mod scenes;

pub use graph::{create_screen_graph, BrowserNavigation, DEFAULT_URL};
