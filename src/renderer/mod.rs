//! Renderer - visual tree construction and SVG output.
//!
//! - [`diagram`] resolves every region of the selected table into shapes
//!   and binds activation handlers
//! - [`svg`] serializes a tree to markup

pub mod diagram;
pub mod svg;

pub use diagram::{
    Diagram, DiagramTree, FRAME_ROLE, RenderOptions, SHAPE_ROLE, Shape, frame_label, render_tree,
};
pub use svg::{format_number, to_svg_string, write_svg};

use crate::resolver::Resolver;
use crate::state::ClickCallback;

/// Render and wire in one step.
pub fn render(options: &RenderOptions, resolver: &Resolver, on_click: Option<ClickCallback>) -> Diagram {
    Diagram::new(render_tree(options, resolver), on_click)
}
