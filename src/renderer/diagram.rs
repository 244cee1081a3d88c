//! Diagram Renderer - asset table + resolver → visual tree.
//!
//! One pass over the selected asset table, in table order:
//! 1. hidden regions are skipped (no shape, no handler, no label)
//! 2. the region's state is resolved once
//! 3. one shape is emitted per path string, all copying that state
//!
//! The visual tree ([`DiagramTree`]) is plain data: comparable, cloneable
//! and serializable. Event wiring lives next to it in [`Diagram`], which
//! binds the caller's callback to the shapes of enabled regions only.

use serde::Serialize;

use crate::assets::asset_table;
use crate::resolver::{RegionState, Resolver};
use crate::state::{ActivationEvent, ClickCallback, HandlerRegistry, KeyboardEvent, MouseEvent};
use crate::types::{BASE_HEIGHT, BASE_WIDTH, BodyPartSlug, Border, Cursor, Gender, Side};

/// ARIA role of every region shape.
pub const SHAPE_ROLE: &str = "button";

/// ARIA role of the frame.
pub const FRAME_ROLE: &str = "img";

// =============================================================================
// Render Options
// =============================================================================

/// Frame and table selection for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub gender: Gender,
    pub side: Side,
    /// Uniform multiplier on the 200×400 base canvas.
    pub scale: f64,
    pub border: Border,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            side: Side::default(),
            scale: 1.0,
            border: Border::default(),
        }
    }
}

// =============================================================================
// Shape
// =============================================================================

/// One drawable, interactive path primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub slug: BodyPartSlug,
    /// Opaque path data, copied verbatim from the asset table.
    pub path: &'static str,
    pub fill: String,
    pub cursor: Cursor,
    pub role: &'static str,
    pub tab_index: i32,
    pub aria_label: String,
    pub aria_disabled: bool,
}

impl Shape {
    fn new(slug: BodyPartSlug, path: &'static str, state: &RegionState) -> Self {
        Self {
            slug,
            path,
            fill: state.fill.clone(),
            cursor: state.cursor(),
            role: SHAPE_ROLE,
            tab_index: state.tab_index(),
            aria_label: slug.aria_label(),
            aria_disabled: state.is_disabled(),
        }
    }

    /// Stable identifier attribute: the raw slug.
    pub fn test_id(&self) -> &'static str {
        self.slug.as_str()
    }

    /// Enabled shapes receive activation and sit in tab order.
    pub fn is_interactive(&self) -> bool {
        !self.aria_disabled
    }
}

// =============================================================================
// Diagram Tree
// =============================================================================

/// The complete visual output of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramTree {
    /// Accessible name of the frame, `"<gender>-body-<side>"`.
    pub label: String,
    pub gender: Gender,
    pub side: Side,
    pub width: f64,
    pub height: f64,
    pub view_box: &'static str,
    pub border: Border,
    pub outline: &'static [&'static str],
    /// Shapes in draw order.
    pub shapes: Vec<Shape>,
}

impl DiagramTree {
    /// Every shape carrying `slug`'s identifier, with its index.
    pub fn shapes_for(&self, slug: BodyPartSlug) -> impl Iterator<Item = (usize, &Shape)> + '_ {
        self.shapes
            .iter()
            .enumerate()
            .filter(move |(_, shape)| shape.slug == slug)
    }

    /// Whether any shape of `slug` was emitted.
    pub fn contains(&self, slug: BodyPartSlug) -> bool {
        self.shapes.iter().any(|shape| shape.slug == slug)
    }

    pub fn is_focusable(&self, index: usize) -> bool {
        self.shapes
            .get(index)
            .is_some_and(|shape| shape.tab_index >= 0)
    }

    /// Focusable shape indices, sorted by tab index then document order.
    pub fn focusable_indices(&self) -> Vec<usize> {
        let mut result: Vec<usize> = (0..self.shapes.len())
            .filter(|&i| self.is_focusable(i))
            .collect();
        result.sort_by_key(|&i| (self.shapes[i].tab_index, i));
        result
    }
}

/// Frame label for a (gender, side) pair.
pub fn frame_label(gender: Gender, side: Side) -> String {
    format!("{}-body-{}", gender, side)
}

/// Build the visual tree. Pure: same inputs, same tree.
pub fn render_tree(options: &RenderOptions, resolver: &Resolver) -> DiagramTree {
    // 1. SELECT TABLE
    let table = asset_table(options.gender, options.side);

    // 2. EMIT SHAPES
    let mut shapes = Vec::with_capacity(table.path_count());
    let mut hidden = 0usize;
    for part in table.parts {
        let state = resolver.region_state(part.slug);
        if state.is_hidden() {
            hidden += 1;
            continue;
        }
        for &path in part.path_data {
            shapes.push(Shape::new(part.slug, path, &state));
        }
    }

    // 3. FRAME
    let label = frame_label(options.gender, options.side);
    tracing::debug!(
        label = %label,
        scale = options.scale,
        shapes = shapes.len(),
        hidden_regions = hidden,
        "rendered body diagram"
    );

    DiagramTree {
        label,
        gender: options.gender,
        side: options.side,
        width: BASE_WIDTH * options.scale,
        height: BASE_HEIGHT * options.scale,
        view_box: table.view_box,
        border: options.border.clone(),
        outline: table.outline,
        shapes,
    }
}

// =============================================================================
// Diagram - tree + event wiring
// =============================================================================

/// A rendered diagram with its activation handlers attached.
#[derive(Debug, Clone)]
pub struct Diagram {
    tree: DiagramTree,
    handlers: HandlerRegistry,
}

impl Diagram {
    /// Attach `on_click` to every enabled shape of `tree`.
    ///
    /// Disabled shapes get no handler at all. Without a callback no shape
    /// gets one either.
    pub fn new(tree: DiagramTree, on_click: Option<ClickCallback>) -> Self {
        let mut handlers = HandlerRegistry::new();
        if let Some(callback) = on_click {
            for (index, shape) in tree.shapes.iter().enumerate() {
                if shape.is_interactive() {
                    handlers.register(index, shape.slug, callback.clone());
                }
            }
        }
        Self { tree, handlers }
    }

    pub fn tree(&self) -> &DiagramTree {
        &self.tree
    }

    pub fn into_tree(self) -> DiagramTree {
        self.tree
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.tree.shapes
    }

    pub fn shapes_for(&self, slug: BodyPartSlug) -> impl Iterator<Item = (usize, &Shape)> + '_ {
        self.tree.shapes_for(slug)
    }

    /// Whether the shape at `index` has an activation handler.
    pub fn has_handler(&self, index: usize) -> bool {
        self.handlers.has_handler(index)
    }

    /// Pointer click on the shape at `index`.
    pub fn click(&self, index: usize, event: MouseEvent) -> bool {
        if !event.is_activation() {
            return false;
        }
        self.activate(index, ActivationEvent::Click(event))
    }

    /// Key press on the shape at `index` while it has focus.
    ///
    /// Only Enter and Space on an enabled shape are claimed. A claimed key is
    /// marked `default_prevented` before the callback runs, whether or not a
    /// callback is bound. Returns true if the key was claimed.
    pub fn key_down(&self, index: usize, event: &mut KeyboardEvent) -> bool {
        let enabled = self.tree.shapes.get(index).is_some_and(Shape::is_interactive);
        if !event.is_activation() || !enabled {
            return false;
        }
        event.prevent_default();
        self.activate(index, ActivationEvent::Key(event.clone()));
        true
    }

    /// Single activation path shared by pointer and keyboard.
    pub fn activate(&self, index: usize, event: ActivationEvent) -> bool {
        let handled = self.handlers.activate(index, &event);
        tracing::trace!(
            index,
            slug = self.tree.shapes.get(index).map(|s| s.slug.as_str()),
            kind = event.event_type(),
            handled,
            "activation"
        );
        handled
    }

    /// Serialize to SVG markup.
    pub fn to_svg(&self) -> crate::error::Result<String> {
        super::svg::to_svg_string(&self.tree)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use crate::types::{BodyPartData, DEFAULT_FILL, DISABLED_COLOR};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn render_with(
        highlights: &[BodyPartData],
        disabled: &[BodyPartSlug],
        hidden: &[BodyPartSlug],
    ) -> DiagramTree {
        let resolver =
            resolve(highlights, disabled.iter().copied(), DEFAULT_FILL).with_hidden(hidden.iter().copied());
        render_tree(&RenderOptions::default(), &resolver)
    }

    #[test]
    fn test_frame_label() {
        assert_eq!(frame_label(Gender::Male, Side::Front), "male-body-front");
        assert_eq!(frame_label(Gender::Female, Side::Back), "female-body-back");
    }

    #[test]
    fn test_one_shape_per_path() {
        let tree = render_with(&[], &[], &[]);
        let table = asset_table(Gender::Male, Side::Front);
        assert_eq!(tree.shapes.len(), table.path_count());

        let abs_paths = table.get(BodyPartSlug::Abs).unwrap().path_data;
        let abs: Vec<_> = tree.shapes_for(BodyPartSlug::Abs).map(|(_, s)| s.path).collect();
        assert_eq!(abs, abs_paths.to_vec());
    }

    #[test]
    fn test_draw_order_follows_table() {
        let tree = render_with(&[], &[], &[]);
        let mut order: Vec<BodyPartSlug> = tree.shapes.iter().map(|s| s.slug).collect();
        order.dedup();
        let table: Vec<BodyPartSlug> = asset_table(Gender::Male, Side::Front).slugs().collect();
        assert_eq!(order, table);
    }

    #[test]
    fn test_enabled_shape_attributes() {
        let tree = render_with(&[BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000")], &[], &[]);
        for (_, shape) in tree.shapes_for(BodyPartSlug::LeftBiceps) {
            assert_eq!(shape.fill, "#ff0000");
            assert_eq!(shape.cursor, Cursor::Pointer);
            assert_eq!(shape.role, "button");
            assert_eq!(shape.tab_index, 0);
            assert_eq!(shape.aria_label, "left biceps");
            assert!(!shape.aria_disabled);
            assert_eq!(shape.test_id(), "left-biceps");
        }
        for shape in tree.shapes.iter().filter(|s| s.slug != BodyPartSlug::LeftBiceps) {
            assert_eq!(shape.fill, DEFAULT_FILL);
        }
    }

    #[test]
    fn test_disabled_shape_attributes() {
        let tree = render_with(
            &[BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000")],
            &[BodyPartSlug::LeftBiceps],
            &[],
        );
        let shapes: Vec<_> = tree.shapes_for(BodyPartSlug::LeftBiceps).collect();
        assert!(!shapes.is_empty());
        for (index, shape) in shapes {
            assert_eq!(shape.fill, DISABLED_COLOR);
            assert_eq!(shape.cursor, Cursor::Default);
            assert_eq!(shape.tab_index, -1);
            assert!(shape.aria_disabled);
            assert!(!tree.is_focusable(index));
        }
    }

    #[test]
    fn test_hidden_beats_everything() {
        let slug = BodyPartSlug::LeftBiceps;
        let tree = render_with(&[BodyPartData::new(slug, "#ff0000")], &[slug], &[slug]);
        assert!(!tree.contains(slug));
        assert!(tree.contains(BodyPartSlug::RightBiceps));
    }

    #[test]
    fn test_multi_path_regions_agree() {
        let tree = render_with(
            &[BodyPartData::new(BodyPartSlug::Abs, "#00ff00")],
            &[BodyPartSlug::LeftForearm],
            &[],
        );
        for slug in [BodyPartSlug::Abs, BodyPartSlug::LeftForearm] {
            let shapes: Vec<&Shape> = tree.shapes_for(slug).map(|(_, s)| s).collect();
            assert!(shapes.len() > 1);
            for shape in &shapes[1..] {
                assert_eq!(shape.fill, shapes[0].fill);
                assert_eq!(shape.tab_index, shapes[0].tab_index);
                assert_eq!(shape.aria_disabled, shapes[0].aria_disabled);
            }
        }
    }

    #[test]
    fn test_scale() {
        let resolver = resolve(&[], [], DEFAULT_FILL);
        for (scale, width, height) in [(0.5, 100.0, 200.0), (1.0, 200.0, 400.0), (2.0, 400.0, 800.0)] {
            let tree = render_tree(
                &RenderOptions {
                    scale,
                    ..Default::default()
                },
                &resolver,
            );
            assert_eq!(tree.width, width);
            assert_eq!(tree.height, height);
        }
    }

    #[test]
    fn test_idempotent() {
        let highlights = [BodyPartData::new(BodyPartSlug::Abs, "#00ff00")];
        let a = render_with(&highlights, &[BodyPartSlug::Head], &[BodyPartSlug::Hair]);
        let b = render_with(&highlights, &[BodyPartSlug::Head], &[BodyPartSlug::Hair]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_click_invokes_once() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::new(RefCell::new(None));
        let count_clone = count.clone();
        let seen_clone = seen.clone();
        let callback: ClickCallback = Rc::new(move |slug, event| {
            count_clone.set(count_clone.get() + 1);
            *seen_clone.borrow_mut() = Some((slug, event.event_type()));
        });

        let tree = render_with(&[], &[], &[]);
        let diagram = Diagram::new(tree, Some(callback));
        let (index, _) = diagram.shapes_for(BodyPartSlug::LeftBiceps).next().unwrap();

        assert!(diagram.click(index, MouseEvent::click(0.0, 0.0)));
        assert_eq!(count.get(), 1);
        assert_eq!(*seen.borrow(), Some((BodyPartSlug::LeftBiceps, "click")));
    }

    #[test]
    fn test_disabled_shapes_have_no_handler() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let callback: ClickCallback = Rc::new(move |_, _| count_clone.set(count_clone.get() + 1));

        let tree = render_with(&[], &[BodyPartSlug::LeftBiceps], &[]);
        let diagram = Diagram::new(tree, Some(callback));

        for (index, _) in diagram.shapes_for(BodyPartSlug::LeftBiceps) {
            assert!(!diagram.has_handler(index));
            assert!(!diagram.click(index, MouseEvent::click(0.0, 0.0)));

            let mut enter = KeyboardEvent::new("Enter");
            assert!(!diagram.key_down(index, &mut enter));
            assert!(!enter.default_prevented);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_key_activation() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        let callback: ClickCallback = Rc::new(move |slug, event| {
            events_clone.borrow_mut().push((slug, event.clone()));
        });

        let diagram = Diagram::new(render_with(&[], &[], &[]), Some(callback));
        let (index, _) = diagram.shapes_for(BodyPartSlug::Abs).next().unwrap();

        let mut enter = KeyboardEvent::new("Enter");
        assert!(diagram.key_down(index, &mut enter));
        assert!(enter.default_prevented);

        let mut space = KeyboardEvent::new(" ");
        assert!(diagram.key_down(index, &mut space));

        let mut letter = KeyboardEvent::new("a");
        assert!(!diagram.key_down(index, &mut letter));
        assert!(!letter.default_prevented);

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, BodyPartSlug::Abs);
        // The callback sees the event after its default was suppressed
        assert!(events[0].1.as_key().unwrap().default_prevented);
        assert_eq!(events[1].1.as_key().unwrap().key, " ");
    }

    #[test]
    fn test_no_callback_no_handlers() {
        let diagram = Diagram::new(render_with(&[], &[], &[]), None);
        assert!(!diagram.has_handler(0));
        assert!(!diagram.click(0, MouseEvent::click(0.0, 0.0)));
        // Still focusable: tab order does not depend on a callback
        assert!(diagram.tree().is_focusable(0));
    }

    #[test]
    fn test_key_claimed_without_callback() {
        let tree = render_with(&[], &[BodyPartSlug::Abs], &[]);
        let diagram = Diagram::new(tree, None);

        let mut enter = KeyboardEvent::new("Enter");
        assert!(diagram.key_down(0, &mut enter));
        assert!(enter.default_prevented);

        let mut space = KeyboardEvent::new(" ");
        assert!(diagram.key_down(0, &mut space));
        assert!(space.default_prevented);

        // Disabled shapes never claim the key
        let (disabled, _) = diagram.shapes_for(BodyPartSlug::Abs).next().unwrap();
        let mut enter = KeyboardEvent::new("Enter");
        assert!(!diagram.key_down(disabled, &mut enter));
        assert!(!enter.default_prevented);

        // Out-of-range index
        let mut enter = KeyboardEvent::new("Enter");
        assert!(!diagram.key_down(diagram.shapes().len(), &mut enter));
        assert!(!enter.default_prevented);
    }

    #[test]
    fn test_non_click_mouse_events_ignored() {
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let callback: ClickCallback = Rc::new(move |_, _| count_clone.set(count_clone.get() + 1));
        let diagram = Diagram::new(render_with(&[], &[], &[]), Some(callback));

        assert!(!diagram.click(0, MouseEvent::down(crate::state::MouseButton::Left, 0.0, 0.0)));
        assert_eq!(count.get(), 0);
    }
}
