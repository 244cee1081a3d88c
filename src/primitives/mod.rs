//! Primitives - Component building blocks.
//!
//! - [`body`] - The anatomical diagram component
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `scale: 2.0.into()`
//! - Signals: `scale: my_signal.into()` (stays connected!)
//! - Getters: `scale: PropValue::getter(|| compute_scale())`
//!
//! Pass props directly - don't extract values before handing them over:
//!
//! ```ignore
//! // CORRECT - signal stays connected
//! body(BodyProps { data: PropValue::Signal(data_signal), ..Default::default() });
//!
//! // WRONG - extracts value, breaks reactivity
//! body(BodyProps { data: PropValue::Static(data_signal.get()), ..Default::default() });
//! ```

mod body;
mod types;

pub use body::{Body, body, create_color_map_derived, create_tree_derived};
pub use types::*;
