//! Keyboard Module - Keyboard event types
//!
//! Events are plain values handed to a diagram by the host. There is no
//! global registry: a rendered diagram owns its own handlers.
//!
//! Only two keys activate a region: Enter and Space (`" "`). A handled
//! activation marks the event `default_prevented` so the host can suppress
//! its own default action (scrolling on Space, form submit on Enter).
//!
//! # Example
//!
//! ```rust
//! use body_highlighter::state::{KeyboardEvent, Modifiers};
//!
//! let enter = KeyboardEvent::new("Enter");
//! assert!(enter.is_activation());
//!
//! let shift_tab = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
//! assert!(!shift_tab.is_activation());
//! ```

use serde::{Deserialize, Serialize};

/// Keys that activate a focused region.
pub const ACTIVATION_KEYS: [&str; 2] = ["Enter", " "];

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", " ", "Tab")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
    /// Set once a handler has claimed the key's default action.
    pub default_prevented: bool,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
            default_prevented: false,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            ..Self::new(key)
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Enter or Space, pressed.
    pub fn is_activation(&self) -> bool {
        self.is_press() && ACTIVATION_KEYS.contains(&self.key.as_str())
    }

    /// Suppress the host's default action for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(KeyboardEvent::new("Enter").is_activation());
        assert!(KeyboardEvent::new(" ").is_activation());
        assert!(!KeyboardEvent::new("a").is_activation());
        assert!(!KeyboardEvent::new("Space").is_activation());
        assert!(!KeyboardEvent::new("Tab").is_activation());
    }

    #[test]
    fn test_only_press_activates() {
        let mut event = KeyboardEvent::new("Enter");
        event.state = KeyState::Repeat;
        assert!(!event.is_activation());

        event.state = KeyState::Release;
        assert!(!event.is_activation());
    }

    #[test]
    fn test_prevent_default() {
        let mut event = KeyboardEvent::new(" ");
        assert!(!event.default_prevented);
        event.prevent_default();
        assert!(event.default_prevented);
    }

    #[test]
    fn test_modifiers() {
        let event = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.ctrl);
        assert!(event.is_press());
        assert_eq!(Modifiers::none(), Modifiers::default());
    }
}
