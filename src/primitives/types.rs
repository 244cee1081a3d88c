//! Primitive types - Props for the body component.
//!
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;

use spark_signals::Signal;

use crate::config::BodyConfig;
use crate::state::ClickCallback;
use crate::types::{BodyPartData, BodyPartSlug, Border, DEFAULT_FILL, Gender, Side};

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reading a `Signal` or a `Getter` that reads signals inside a derived
/// registers the dependency, so the derived re-runs when it changes.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }

    /// Wrap a closure as a getter prop.
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        PropValue::Getter(Rc::new(f))
    }

    /// Whether reads can change over time.
    pub fn is_reactive(&self) -> bool {
        !matches!(self, PropValue::Static(_))
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

impl From<&str> for PropValue<Border> {
    fn from(value: &str) -> Self {
        PropValue::Static(Border::from(value))
    }
}

impl<T: Clone + PartialEq + std::fmt::Debug + 'static> std::fmt::Debug for PropValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::Static(v) => f.debug_tuple("Static").field(v).finish(),
            PropValue::Signal(_) => f.write_str("Signal(..)"),
            PropValue::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

// =============================================================================
// Body Props
// =============================================================================

/// Properties for the body component.
///
/// Every field defaults to the documented option default: no highlights,
/// male front view, scale 1, `#dfdfdf` border, nothing disabled or hidden,
/// `#3f3f3f` default fill, no callback.
///
/// # Example
///
/// ```rust
/// use body_highlighter::primitives::{body, BodyProps};
/// use body_highlighter::{BodyPartData, BodyPartSlug};
/// use spark_signals::signal;
///
/// let data = signal(vec![BodyPartData::new(BodyPartSlug::Abs, "#ff0000")]);
/// let diagram = body(BodyProps {
///     data: data.clone().into(),
///     scale: 2.0.into(),
///     ..Default::default()
/// });
///
/// assert_eq!(diagram.tree().width, 400.0);
/// data.set(Vec::new());
/// ```
#[derive(Clone)]
pub struct BodyProps {
    /// Highlight list.
    pub data: PropValue<Vec<BodyPartData>>,
    pub gender: PropValue<Gender>,
    pub side: PropValue<Side>,
    /// Multiplier on the 200×400 base canvas.
    pub scale: PropValue<f64>,
    /// Outline color, or `Border::None`.
    pub border: PropValue<Border>,
    pub disabled_parts: PropValue<Vec<BodyPartSlug>>,
    pub hidden_parts: PropValue<Vec<BodyPartSlug>>,
    pub default_fill: PropValue<String>,
    /// Invoked on activation of an enabled region.
    pub on_click: Option<ClickCallback>,
}

impl Default for BodyProps {
    fn default() -> Self {
        Self {
            data: PropValue::default(),
            gender: PropValue::default(),
            side: PropValue::default(),
            scale: PropValue::Static(1.0),
            border: PropValue::default(),
            disabled_parts: PropValue::default(),
            hidden_parts: PropValue::default(),
            default_fill: PropValue::Static(DEFAULT_FILL.to_string()),
            on_click: None,
        }
    }
}

impl From<BodyConfig> for BodyProps {
    fn from(config: BodyConfig) -> Self {
        Self {
            data: config.data.into(),
            gender: config.gender.into(),
            side: config.side.into(),
            scale: config.scale.into(),
            border: config.border.into(),
            disabled_parts: config.disabled_parts.into(),
            hidden_parts: config.hidden_parts.into(),
            default_fill: config.default_fill.into(),
            on_click: None,
        }
    }
}

impl std::fmt::Debug for BodyProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyProps")
            .field("data", &self.data)
            .field("gender", &self.gender)
            .field("side", &self.side)
            .field("scale", &self.scale)
            .field("border", &self.border)
            .field("disabled_parts", &self.disabled_parts)
            .field("hidden_parts", &self.hidden_parts)
            .field("default_fill", &self.default_fill)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
