//! Asset tables - static body geometry.
//!
//! Four fixed tables, one per (gender, side). Each table carries the frame
//! data (view box, outline silhouette) and the ordered region assets. Table
//! order is draw order: later entries paint over earlier ones.
//!
//! Path strings are opaque to the rest of the crate. Nothing parses them;
//! they are copied verbatim into the `d` attribute of the output.
//!
//! # Example
//!
//! ```rust
//! use body_highlighter::assets::asset_table;
//! use body_highlighter::{BodyPartSlug, Gender, Side};
//!
//! let table = asset_table(Gender::Male, Side::Front);
//! assert!(table.contains(BodyPartSlug::LeftBiceps));
//! assert!(!table.contains(BodyPartSlug::LeftNeck));
//! ```

mod female_back;
mod female_front;
mod male_back;
mod male_front;

pub use female_back::FEMALE_BACK;
pub use female_front::FEMALE_FRONT;
pub use male_back::MALE_BACK;
pub use male_front::MALE_FRONT;

use crate::types::{BodyPartSlug, Gender, Side};

// =============================================================================
// Types
// =============================================================================

/// One anatomical region of a table.
///
/// A region may own several disjoint path strings. They are drawn and
/// interact independently but always share the region's resolved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPartAsset {
    pub slug: BodyPartSlug,
    pub path_data: &'static [&'static str],
}

/// All geometry for one (gender, side) combination.
#[derive(Debug)]
pub struct AssetTable {
    pub gender: Gender,
    pub side: Side,
    /// SVG `viewBox` of the frame. Back views live in the right half of the
    /// shared coordinate space.
    pub view_box: &'static str,
    /// Body silhouette, stroked with the border color.
    pub outline: &'static [&'static str],
    /// Regions in draw order.
    pub parts: &'static [BodyPartAsset],
}

impl AssetTable {
    /// Whether this table draws `slug` at all.
    pub fn contains(&self, slug: BodyPartSlug) -> bool {
        self.parts.iter().any(|part| part.slug == slug)
    }

    /// The region asset for `slug`, if drawn in this table.
    pub fn get(&self, slug: BodyPartSlug) -> Option<&'static BodyPartAsset> {
        self.parts.iter().find(|part| part.slug == slug)
    }

    /// Slugs in draw order.
    pub fn slugs(&self) -> impl Iterator<Item = BodyPartSlug> + '_ {
        self.parts.iter().map(|part| part.slug)
    }

    /// Total number of path primitives across all regions.
    pub fn path_count(&self) -> usize {
        self.parts.iter().map(|part| part.path_data.len()).sum()
    }
}

// =============================================================================
// Table selection
// =============================================================================

/// Select the table for a (gender, side) pair.
pub fn asset_table(gender: Gender, side: Side) -> &'static AssetTable {
    match (gender, side) {
        (Gender::Male, Side::Front) => &MALE_FRONT,
        (Gender::Male, Side::Back) => &MALE_BACK,
        (Gender::Female, Side::Front) => &FEMALE_FRONT,
        (Gender::Female, Side::Back) => &FEMALE_BACK,
    }
}

/// All four tables.
pub fn all_tables() -> [&'static AssetTable; 4] {
    [&MALE_FRONT, &MALE_BACK, &FEMALE_FRONT, &FEMALE_BACK]
}

// =============================================================================
// Tests
// =============================================================================
