//! Region Resolver - highlight, disabled and hidden precedence.
//!
//! Turns the caller's highlight list plus the disabled/hidden sets into one
//! decision per region: its fill color and whether it is highlighted,
//! disabled or hidden.
//!
//! Precedence, strongest first:
//! 1. hidden   - region is not rendered at all
//! 2. disabled - fill is [`DISABLED_COLOR`], highlight color is dropped
//! 3. highlight color (last entry wins on duplicate slugs)
//! 4. default fill
//!
//! # Example
//!
//! ```rust
//! use body_highlighter::resolver::resolve;
//! use body_highlighter::{BodyPartData, BodyPartSlug};
//!
//! let highlights = vec![BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000")];
//! let resolver = resolve(&highlights, [BodyPartSlug::Abs], "#3f3f3f");
//!
//! assert_eq!(resolver.fill(BodyPartSlug::LeftBiceps), "#ff0000");
//! assert_eq!(resolver.fill(BodyPartSlug::Abs), "#EBEBE4");
//! assert_eq!(resolver.fill(BodyPartSlug::Head), "#3f3f3f");
//! ```

use std::collections::{HashMap, HashSet};

use crate::types::{BodyPartData, BodyPartSlug, Cursor, DISABLED_COLOR};

// =============================================================================
// Region Flags
// =============================================================================

bitflags::bitflags! {
    /// Resolved state bits of one region.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RegionFlags: u8 {
        const NONE = 0;
        /// A highlight entry exists for the region (even if disabled).
        const HIGHLIGHTED = 1 << 0;
        const DISABLED = 1 << 1;
        const HIDDEN = 1 << 2;
    }
}

/// Final state of one region, shared by every path primitive it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionState {
    pub fill: String,
    pub flags: RegionFlags,
}

impl RegionState {
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(RegionFlags::HIDDEN)
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(RegionFlags::DISABLED)
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(RegionFlags::HIGHLIGHTED)
    }

    /// Enabled regions take part in activation and tab order.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        !self.is_disabled() && !self.is_hidden()
    }

    pub fn cursor(&self) -> Cursor {
        if self.is_disabled() {
            Cursor::Default
        } else {
            Cursor::Pointer
        }
    }

    /// 0 keeps the region in tab order, -1 removes it.
    pub fn tab_index(&self) -> i32 {
        if self.is_disabled() { -1 } else { 0 }
    }
}

// =============================================================================
// Color Map
// =============================================================================

/// Slug to color lookup built from a highlight list.
///
/// Duplicate slugs are resolved by iteration order: the last entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<BodyPartSlug, String>,
}

impl ColorMap {
    pub fn from_highlights(highlights: &[BodyPartData]) -> Self {
        let mut colors = HashMap::with_capacity(highlights.len());
        for entry in highlights {
            colors.insert(entry.slug, entry.color.clone());
        }
        Self { colors }
    }

    pub fn get(&self, slug: BodyPartSlug) -> Option<&str> {
        self.colors.get(&slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// =============================================================================
// Highlight Cache
// =============================================================================

/// Recompute-on-change cache for the [`ColorMap`].
///
/// Keeps the last highlight list it saw and only rebuilds the map when the
/// incoming list differs structurally. Purely a performance aid: a rebuild
/// always yields the same map.
#[derive(Debug, Default)]
pub struct HighlightCache {
    source: Option<Vec<BodyPartData>>,
    map: ColorMap,
    builds: usize,
}

impl HighlightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the color map for `highlights`, rebuilding only if it changed.
    pub fn get(&mut self, highlights: &[BodyPartData]) -> &ColorMap {
        if self.source.as_deref() != Some(highlights) {
            self.map = ColorMap::from_highlights(highlights);
            self.source = Some(highlights.to_vec());
            self.builds += 1;
            tracing::debug!(
                entries = highlights.len(),
                regions = self.map.len(),
                "rebuilt highlight color map"
            );
        }
        &self.map
    }

    /// Number of times the map has been built.
    pub fn builds(&self) -> usize {
        self.builds
    }

    /// Drop the cached map; the next `get` rebuilds.
    pub fn invalidate(&mut self) {
        self.source = None;
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Per-render region resolver.
///
/// Pure: holds only values derived from the current props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    colors: ColorMap,
    disabled: HashSet<BodyPartSlug>,
    hidden: HashSet<BodyPartSlug>,
    default_fill: String,
}

impl Resolver {
    pub fn new(
        colors: ColorMap,
        disabled: impl IntoIterator<Item = BodyPartSlug>,
        default_fill: impl Into<String>,
    ) -> Self {
        Self {
            colors,
            disabled: disabled.into_iter().collect(),
            hidden: HashSet::new(),
            default_fill: default_fill.into(),
        }
    }

    /// Set the regions omitted from output.
    pub fn with_hidden(mut self, hidden: impl IntoIterator<Item = BodyPartSlug>) -> Self {
        self.hidden = hidden.into_iter().collect();
        self
    }

    /// Fill color for `slug`.
    ///
    /// Disabled beats highlight beats default. Slugs with no entry, including
    /// ones not drawn in any table, fall back to the default fill.
    pub fn fill(&self, slug: BodyPartSlug) -> &str {
        if self.disabled.contains(&slug) {
            return DISABLED_COLOR;
        }
        self.colors.get(slug).unwrap_or(self.default_fill.as_str())
    }

    #[inline]
    pub fn is_disabled(&self, slug: BodyPartSlug) -> bool {
        self.disabled.contains(&slug)
    }

    #[inline]
    pub fn is_hidden(&self, slug: BodyPartSlug) -> bool {
        self.hidden.contains(&slug)
    }

    pub fn default_fill(&self) -> &str {
        &self.default_fill
    }

    /// Full state of one region. Computed once and shared by all its paths.
    pub fn region_state(&self, slug: BodyPartSlug) -> RegionState {
        let mut flags = RegionFlags::NONE;
        if self.colors.get(slug).is_some() {
            flags |= RegionFlags::HIGHLIGHTED;
        }
        if self.is_disabled(slug) {
            flags |= RegionFlags::DISABLED;
        }
        if self.is_hidden(slug) {
            flags |= RegionFlags::HIDDEN;
        }
        RegionState {
            fill: self.fill(slug).to_string(),
            flags,
        }
    }
}

/// Build a resolver from a highlight list.
pub fn resolve(
    highlights: &[BodyPartData],
    disabled: impl IntoIterator<Item = BodyPartSlug>,
    default_fill: impl Into<String>,
) -> Resolver {
    Resolver::new(ColorMap::from_highlights(highlights), disabled, default_fill)
}

// =============================================================================
// Tests
// =============================================================================
