//! Selection - click-to-toggle highlighting.
//!
//! Clicking a highlighted region removes it; clicking any other region adds
//! it with the next color of a rotating palette. The highlight list lives in
//! a signal, so a [`Selection`] can drive a body component directly:
//!
//! ```rust
//! use body_highlighter::primitives::{body, BodyProps};
//! use body_highlighter::selection::Selection;
//!
//! let selection = Selection::new();
//! let component = body(BodyProps {
//!     data: selection.data_prop(),
//!     on_click: Some(selection.click_handler()),
//!     ..Default::default()
//! });
//! ```

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::primitives::PropValue;
use crate::state::ClickCallback;
use crate::types::{BodyPartData, BodyPartSlug};

/// Rotating highlight palette.
pub const DEMO_PALETTE: [&str; 8] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dfe6e9", "#fd79a8", "#a29bfe",
];

/// Toggleable highlight list. Clones share state.
#[derive(Clone)]
pub struct Selection {
    data: Signal<Vec<BodyPartData>>,
    color_index: Rc<Cell<usize>>,
    last_clicked: Rc<Cell<Option<BodyPartSlug>>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::with_data(Vec::new())
    }

    /// Start from an existing highlight list.
    pub fn with_data(data: Vec<BodyPartData>) -> Self {
        Self {
            data: signal(data),
            color_index: Rc::new(Cell::new(0)),
            last_clicked: Rc::new(Cell::new(None)),
        }
    }

    /// The starting highlights of the demo page.
    pub fn demo() -> Self {
        Self::with_data(vec![
            BodyPartData::new(BodyPartSlug::LeftBiceps, DEMO_PALETTE[0]),
            BodyPartData::new(BodyPartSlug::RightBiceps, DEMO_PALETTE[0]),
            BodyPartData::new(BodyPartSlug::Abs, DEMO_PALETTE[1]),
            BodyPartData::new(BodyPartSlug::LeftQuadriceps, DEMO_PALETTE[2]),
            BodyPartData::new(BodyPartSlug::RightQuadriceps, DEMO_PALETTE[2]),
        ])
    }

    /// Add or remove `slug`. Returns true if it is now highlighted.
    pub fn toggle(&self, slug: BodyPartSlug) -> bool {
        self.last_clicked.set(Some(slug));

        let mut data = self.data.get();
        let added = if data.iter().any(|entry| entry.slug == slug) {
            data.retain(|entry| entry.slug != slug);
            false
        } else {
            let index = self.color_index.get();
            data.push(BodyPartData::new(slug, DEMO_PALETTE[index % DEMO_PALETTE.len()]));
            self.color_index.set(index + 1);
            true
        };
        tracing::debug!(slug = slug.as_str(), added, "selection toggled");
        self.data.set(data);
        added
    }

    pub fn contains(&self, slug: BodyPartSlug) -> bool {
        self.data.get().iter().any(|entry| entry.slug == slug)
    }

    /// Color currently assigned to `slug`.
    pub fn color(&self, slug: BodyPartSlug) -> Option<String> {
        self.data
            .get()
            .into_iter()
            .find(|entry| entry.slug == slug)
            .map(|entry| entry.color)
    }

    /// Remove every highlight. The palette position is kept.
    pub fn clear(&self) {
        self.data.set(Vec::new());
        self.last_clicked.set(None);
    }

    pub fn last_clicked(&self) -> Option<BodyPartSlug> {
        self.last_clicked.get()
    }

    /// Current highlight list.
    pub fn data(&self) -> Vec<BodyPartData> {
        self.data.get()
    }

    /// The highlight list as a reactive prop.
    pub fn data_prop(&self) -> PropValue<Vec<BodyPartData>> {
        PropValue::Signal(self.data.clone())
    }

    /// Activation callback that toggles the activated region.
    pub fn click_handler(&self) -> ClickCallback {
        let selection = self.clone();
        Rc::new(move |slug, _event| {
            selection.toggle(slug);
        })
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("data", &self.data.get())
            .field("color_index", &self.color_index.get())
            .field("last_clicked", &self.last_clicked.get())
            .finish()
    }
}
