//! Focus System - Keyboard navigation over a rendered diagram
//!
//! Mirrors what a browser does with `tabindex`:
//! - shapes with tab index 0 are focusable, in document (draw) order
//! - shapes with tab index -1 (disabled regions) are skipped
//! - Tab / Shift+Tab cycle with wrap-around
//! - Enter / Space activate the focused shape
//!
//! Focus is tracked by shape index. After a re-render call [`FocusRing::sync`]
//! so focus does not linger on a shape that is no longer focusable.
//!
//! # Example
//!
//! ```rust
//! use body_highlighter::{BodyConfig, state::{FocusRing, KeyboardEvent}};
//!
//! let diagram = BodyConfig::default().render(None);
//! let mut ring = FocusRing::new();
//!
//! ring.route_key(&diagram, &mut KeyboardEvent::new("Tab"));
//! assert_eq!(ring.focused(), Some(0));
//! ```

use super::keyboard::KeyboardEvent;
use crate::renderer::{Diagram, DiagramTree};

// =============================================================================
// FOCUS RING
// =============================================================================

/// Currently focused shape of one diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRing {
    focused: Option<usize>,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the focused shape, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Check if any shape is focused
    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Check if a specific shape is focused
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Focus a specific shape. Fails for disabled or out-of-range shapes.
    pub fn focus(&mut self, tree: &DiagramTree, index: usize) -> bool {
        if !tree.is_focusable(index) {
            return false;
        }
        self.set(Some(index));
        true
    }

    /// Clear focus (no shape focused)
    pub fn blur(&mut self) {
        self.set(None);
    }

    /// Move focus to next focusable shape
    pub fn focus_next(&mut self, tree: &DiagramTree) -> bool {
        self.step(tree, true)
    }

    /// Move focus to previous focusable shape
    pub fn focus_previous(&mut self, tree: &DiagramTree) -> bool {
        self.step(tree, false)
    }

    /// Focus the first focusable shape
    pub fn focus_first(&mut self, tree: &DiagramTree) -> bool {
        match tree.focusable_indices().first() {
            Some(&index) => self.focus(tree, index),
            None => false,
        }
    }

    /// Focus the last focusable shape
    pub fn focus_last(&mut self, tree: &DiagramTree) -> bool {
        match tree.focusable_indices().last() {
            Some(&index) => self.focus(tree, index),
            None => false,
        }
    }

    /// Drop focus if the focused shape is gone or no longer focusable.
    pub fn sync(&mut self, tree: &DiagramTree) {
        if let Some(index) = self.focused {
            if !tree.is_focusable(index) {
                self.blur();
            }
        }
    }

    /// Route a key press: Tab / Shift+Tab move focus, Enter / Space
    /// activate the focused shape. Returns true if the key was handled.
    pub fn route_key(&mut self, diagram: &Diagram, event: &mut KeyboardEvent) -> bool {
        if !event.is_press() {
            return false;
        }

        if event.key == "Tab" {
            let tree = diagram.tree();
            let moved = if event.modifiers.shift {
                self.focus_previous(tree)
            } else {
                self.focus_next(tree)
            };
            if moved {
                event.prevent_default();
            }
            return moved;
        }

        match self.focused {
            Some(index) => diagram.key_down(index, event),
            None => false,
        }
    }

    fn step(&mut self, tree: &DiagramTree, forward: bool) -> bool {
        let focusables = tree.focusable_indices();
        match find_next_focusable(&focusables, self.focused, forward) {
            Some(next) if Some(next) != self.focused => {
                self.set(Some(next));
                true
            }
            _ => false,
        }
    }

    fn set(&mut self, index: Option<usize>) {
        if self.focused != index {
            tracing::trace!(from = ?self.focused, to = ?index, "focus moved");
            self.focused = index;
        }
    }
}

// =============================================================================
// FOCUS NAVIGATION
// =============================================================================

/// Find next focusable shape, wrapping at either end.
fn find_next_focusable(focusables: &[usize], from: Option<usize>, forward: bool) -> Option<usize> {
    if focusables.is_empty() {
        return None;
    }

    let current_pos = from.and_then(|index| focusables.iter().position(|&i| i == index));

    match current_pos {
        // Not currently on a focusable shape
        None => {
            if forward {
                focusables.first().copied()
            } else {
                focusables.last().copied()
            }
        }
        Some(pos) => {
            let len = focusables.len() as isize;
            let direction = if forward { 1 } else { -1 };
            let next_pos = ((pos as isize + direction) % len + len) % len;
            Some(focusables[next_pos as usize])
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
