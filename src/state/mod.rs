//! State Module - Interaction types and systems
//!
//! - **Activation** - Unified click/keyboard activation, handler registry
//! - **Focus** - Tab cycling over focusable shapes
//! - **Keyboard** - Key event types, activation keys
//! - **Mouse** - Pointer event types

mod activation;
mod focus;
mod keyboard;
mod mouse;

pub use activation::*;
pub use focus::*;
pub use keyboard::*;
pub use mouse::*;
