//! Activation - one concept for pointer and keyboard activation.
//!
//! A click and an Enter/Space press on a focused region are the same thing
//! to the caller: both end up as one `on_click(slug, event)` call through a
//! single handler per shape. Shapes of disabled regions never get a handler,
//! so activating them is inert rather than rejected.

use std::collections::HashMap;
use std::rc::Rc;

use super::keyboard::KeyboardEvent;
use super::mouse::MouseEvent;
use crate::types::BodyPartSlug;

// =============================================================================
// Event
// =============================================================================

/// The originating event of an activation.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivationEvent {
    Click(MouseEvent),
    Key(KeyboardEvent),
}

impl ActivationEvent {
    /// DOM-style event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Click(_) => "click",
            Self::Key(_) => "keydown",
        }
    }

    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Click(event) => Some(event),
            Self::Key(_) => None,
        }
    }

    pub fn as_key(&self) -> Option<&KeyboardEvent> {
        match self {
            Self::Key(event) => Some(event),
            Self::Click(_) => None,
        }
    }
}

// =============================================================================
// Callback Types
// =============================================================================

/// Caller-supplied activation callback.
///
/// Rc so a single callback can be captured by every shape's handler.
pub type ClickCallback = Rc<dyn Fn(BodyPartSlug, &ActivationEvent)>;

/// Per-shape handler with the slug already bound.
pub type ActivationHandler = Rc<dyn Fn(&ActivationEvent)>;

// =============================================================================
// Handler Registry
// =============================================================================

/// Shape index to handler. Absent index = no handler at all.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<usize, ActivationHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `callback` to `slug` for the shape at `index`.
    pub fn register(&mut self, index: usize, slug: BodyPartSlug, callback: ClickCallback) {
        self.handlers
            .insert(index, Rc::new(move |event: &ActivationEvent| callback(slug, event)));
    }

    pub fn has_handler(&self, index: usize) -> bool {
        self.handlers.contains_key(&index)
    }

    /// Invoke the handler for `index`. Returns true if one ran.
    pub fn activate(&self, index: usize, event: &ActivationEvent) -> bool {
        match self.handlers.get(&index) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut indices: Vec<_> = self.handlers.keys().copied().collect();
        indices.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("indices", &indices)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
