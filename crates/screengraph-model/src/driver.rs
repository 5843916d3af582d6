use std::collections::{HashMap, HashSet};
use std::time::Duration;

use screengraph_ir::{Element, SwipeDirection};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DriverError {
    #[error("Element not found: {element}")]
    ElementNotFound { element: String },

    #[error("Interaction with {element} failed: {message}")]
    Interaction { element: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl DriverError {
    pub fn not_found(element: &Element) -> Self {
        DriverError::ElementNotFound {
            element: element.to_string(),
        }
    }
}

/// Trait abstracting the UI-automation layer that drives the live app.
///
/// Every call blocks until the UI has reflected its effect. Implementations
/// decide how an [`Element`] query is resolved.
pub trait UiDriver {
    fn exists(&mut self, element: &Element) -> bool;

    /// Wait up to `timeout` for the element to appear.
    ///
    /// The default is a single `exists` call, for drivers that cannot poll.
    fn wait_for_existence(&mut self, element: &Element, timeout: Duration) -> bool {
        let _ = timeout;
        self.exists(element)
    }

    fn tap(&mut self, element: &Element) -> Result<(), DriverError>;

    fn type_text(&mut self, element: &Element, text: &str) -> Result<(), DriverError>;

    fn swipe(&mut self, element: &Element, direction: SwipeDirection) -> Result<(), DriverError>;
}

/// Lets a navigator borrow a driver the caller keeps ownership of.
impl<D: UiDriver + ?Sized> UiDriver for &mut D {
    fn exists(&mut self, element: &Element) -> bool {
        (**self).exists(element)
    }

    fn wait_for_existence(&mut self, element: &Element, timeout: Duration) -> bool {
        (**self).wait_for_existence(element, timeout)
    }

    fn tap(&mut self, element: &Element) -> Result<(), DriverError> {
        (**self).tap(element)
    }

    fn type_text(&mut self, element: &Element, text: &str) -> Result<(), DriverError> {
        (**self).type_text(element, text)
    }

    fn swipe(&mut self, element: &Element, direction: SwipeDirection) -> Result<(), DriverError> {
        (**self).swipe(element, direction)
    }
}

/// A primitive interaction recorded by [`RecordingDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    Tap(Element),
    TypeText(Element, String),
    Swipe(Element, SwipeDirection),
}

/// In-memory driver: a fixed set of present elements, every interaction logged.
///
/// Interacting with an absent element fails the way a real driver would.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    present: HashSet<Element>,
    failures: HashMap<Element, String>,
    calls: Vec<DriverCall>,
    existence_checks: u64,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<I: IntoIterator<Item = Element>>(elements: I) -> Self {
        Self {
            present: elements.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn show(&mut self, element: Element) {
        self.present.insert(element);
    }

    pub fn hide(&mut self, element: &Element) {
        self.present.remove(element);
    }

    /// Make every interaction with `element` fail with `message`.
    pub fn fail_on(&mut self, element: Element, message: impl Into<String>) {
        self.failures.insert(element, message.into());
    }

    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of existence checks performed so far.
    pub fn existence_checks(&self) -> u64 {
        self.existence_checks
    }

    fn interact(&mut self, element: &Element, call: DriverCall) -> Result<(), DriverError> {
        if let Some(message) = self.failures.get(element) {
            return Err(DriverError::Interaction {
                element: element.to_string(),
                message: message.clone(),
            });
        }
        if !self.present.contains(element) {
            return Err(DriverError::not_found(element));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl UiDriver for RecordingDriver {
    fn exists(&mut self, element: &Element) -> bool {
        self.existence_checks += 1;
        self.present.contains(element)
    }

    fn tap(&mut self, element: &Element) -> Result<(), DriverError> {
        self.interact(element, DriverCall::Tap(element.clone()))
    }

    fn type_text(&mut self, element: &Element, text: &str) -> Result<(), DriverError> {
        self.interact(
            element,
            DriverCall::TypeText(element.clone(), text.to_string()),
        )
    }

    fn swipe(&mut self, element: &Element, direction: SwipeDirection) -> Result<(), DriverError> {
        self.interact(element, DriverCall::Swipe(element.clone(), direction))
    }
}
