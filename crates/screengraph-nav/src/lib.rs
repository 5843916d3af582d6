pub mod config;
pub mod navigator;
pub mod search;
pub mod trace;

pub use config::{NavigatorConfig, PathPolicy};
pub use navigator::{NavError, NavigationReport, Navigator};
pub use search::{PlannedStep, StepKind};
