//! # body-highlighter
//!
//! Interactive anatomical body diagram for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! A diagram is one of four static asset tables (male/female × front/back),
//! each an ordered list of anatomical regions with their path geometry.
//! Rendering walks the selected table, resolves each region's fill and
//! interactive state once, and emits one shape per path:
//!
//! ```text
//! props → color map derived → tree derived → Diagram (tree + handlers) → SVG
//! ```
//!
//! Click and Enter/Space activation of an enabled region are one concept:
//! both invoke `on_click(slug, event)` exactly once. Disabled regions have no
//! handler and are skipped in tab order; hidden regions are not drawn.
//!
//! ## Modules
//!
//! - [`types`] - Slugs, gender/side, highlight entries, fixed colors
//! - [`assets`] - The four geometry tables
//! - [`resolver`] - Per-region fill and interactive state
//! - [`renderer`] - Visual tree construction and SVG output
//! - [`state`] - Mouse/keyboard events, activation, focus
//! - [`primitives`] - The reactive body component
//! - [`config`] - JSON/serde configuration
//! - [`selection`] - Click-to-toggle highlighting
//!
//! ## Example
//!
//! ```rust
//! use body_highlighter::{BodyConfig, BodyPartData, BodyPartSlug};
//!
//! let config = BodyConfig {
//!     data: vec![BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000")],
//!     ..Default::default()
//! };
//! let svg = config.render(None).to_svg().unwrap();
//! assert!(svg.contains(r#"aria-label="male-body-front""#));
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod primitives;
pub mod renderer;
pub mod resolver;
pub mod selection;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use assets::{AssetTable, BodyPartAsset, all_tables, asset_table};

pub use config::BodyConfig;

pub use error::{Error, Result};

pub use primitives::{Body, BodyProps, PropValue, body};

pub use renderer::{Diagram, DiagramTree, RenderOptions, Shape, render, render_tree};

pub use resolver::{ColorMap, HighlightCache, RegionFlags, RegionState, Resolver, resolve};

pub use selection::{DEMO_PALETTE, Selection};

pub use state::{
    ActivationEvent, ClickCallback, FocusRing, KeyboardEvent, Modifiers, MouseEvent,
};
