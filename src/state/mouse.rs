//! Mouse Module - Pointer event types
//!
//! Coordinates are in the diagram's output space (after scaling). Hit
//! testing against path geometry belongs to the host: it knows which shape
//! was under the pointer and hands the event to that shape's index.

use serde::{Deserialize, Serialize};

use super::keyboard::Modifiers;

// =============================================================================
// TYPES
// =============================================================================

/// Mouse action type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseAction {
    Down,
    Up,
    Click,
}

/// Mouse button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Mouse event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MouseEvent {
    /// Action type (down, up, click)
    pub action: MouseAction,
    /// Button pressed
    pub button: MouseButton,
    pub x: f64,
    pub y: f64,
    /// Modifier keys state
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create a new mouse event
    pub fn new(action: MouseAction, button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            action,
            button,
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }

    /// Primary-button click
    pub fn click(x: f64, y: f64) -> Self {
        Self::new(MouseAction::Click, MouseButton::Left, x, y)
    }

    /// Create a mouse down event
    pub fn down(button: MouseButton, x: f64, y: f64) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    /// Create a mouse up event
    pub fn up(button: MouseButton, x: f64, y: f64) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }

    /// Only completed primary clicks activate a region.
    pub fn is_activation(&self) -> bool {
        self.action == MouseAction::Click && self.button == MouseButton::Left
    }
}

// =============================================================================
// TESTS
// =============================================================================
