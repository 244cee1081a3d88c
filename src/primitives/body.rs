//! Body Primitive - The reactive anatomical diagram component.
//!
//! Two deriveds sit between the props and the visual tree:
//!
//! ```text
//! data ──► color map ──┐
//!                      ├──► tree
//! gender, side, scale, border, disabled, hidden, default fill ──┘
//! ```
//!
//! The color map only depends on `data`, so changing e.g. `scale` re-renders
//! the tree without rebuilding the highlight lookup.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use body_highlighter::primitives::{body, BodyProps};
//! use body_highlighter::state::MouseEvent;
//! use body_highlighter::BodyPartSlug;
//!
//! let component = body(BodyProps {
//!     on_click: Some(Rc::new(|slug, _event| println!("clicked {slug}"))),
//!     ..Default::default()
//! });
//!
//! let diagram = component.diagram();
//! if let Some((index, _)) = diagram.shapes_for(BodyPartSlug::Abs).next() {
//!     diagram.click(index, MouseEvent::click(0.0, 0.0));
//! }
//! ```

use spark_signals::{Derived, derived};

use super::types::{BodyProps, PropValue};
use crate::error::Result;
use crate::renderer::{Diagram, DiagramTree, RenderOptions, render_tree};
use crate::resolver::{ColorMap, Resolver};
use crate::state::ClickCallback;
use crate::types::BodyPartData;

// =============================================================================
// Deriveds
// =============================================================================

/// Highlight lookup, recomputed only when `data` changes.
pub fn create_color_map_derived(data: PropValue<Vec<BodyPartData>>) -> Derived<ColorMap> {
    derived(move || {
        let highlights = data.get();
        tracing::debug!(entries = highlights.len(), "rebuilding highlight lookup");
        ColorMap::from_highlights(&highlights)
    })
}

/// Visual tree, recomputed when the color map or any other prop changes.
pub fn create_tree_derived(colors: Derived<ColorMap>, props: &BodyProps) -> Derived<DiagramTree> {
    let gender = props.gender.clone();
    let side = props.side.clone();
    let scale = props.scale.clone();
    let border = props.border.clone();
    let disabled = props.disabled_parts.clone();
    let hidden = props.hidden_parts.clone();
    let default_fill = props.default_fill.clone();

    derived(move || {
        // 1. RESOLVER (reads color map dependency)
        let resolver = Resolver::new(colors.get(), disabled.get(), default_fill.get())
            .with_hidden(hidden.get());

        // 2. FRAME
        let options = RenderOptions {
            gender: gender.get(),
            side: side.get(),
            scale: scale.get(),
            border: border.get(),
        };

        // 3. TREE
        render_tree(&options, &resolver)
    })
}

// =============================================================================
// Body Component
// =============================================================================

/// A mounted body diagram.
///
/// Cheap to clone; clones share the same deriveds.
#[derive(Clone)]
pub struct Body {
    tree: Derived<DiagramTree>,
    on_click: Option<ClickCallback>,
}

impl Body {
    /// Current visual tree.
    pub fn tree(&self) -> DiagramTree {
        self.tree.get()
    }

    /// Current tree with handlers bound to the component's callback.
    pub fn diagram(&self) -> Diagram {
        Diagram::new(self.tree(), self.on_click.clone())
    }

    /// Current tree as SVG markup.
    pub fn to_svg(&self) -> Result<String> {
        self.diagram().to_svg()
    }

    pub fn has_callback(&self) -> bool {
        self.on_click.is_some()
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("on_click", &self.on_click.is_some())
            .finish_non_exhaustive()
    }
}

/// Create the body component.
///
/// Props are kept as-is: signals and getters stay connected, so later
/// changes show up in the next [`Body::tree`] read.
pub fn body(props: BodyProps) -> Body {
    let colors = create_color_map_derived(props.data.clone());
    Body {
        tree: create_tree_derived(colors, &props),
        on_click: props.on_click,
    }
}

// =============================================================================
// Tests
// =============================================================================
