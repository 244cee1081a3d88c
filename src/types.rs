//! Core types for body-highlighter.
//!
//! These types define the vocabulary everything else builds on: the closed
//! set of body part slugs, the gender/side selectors that pick an asset
//! table, highlight entries, and the few fixed colors and dimensions of the
//! diagram.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

// =============================================================================
// Fixed colors and dimensions
// =============================================================================

/// Fill used for every disabled region, whatever its highlight color.
pub const DISABLED_COLOR: &str = "#EBEBE4";

/// Fill for regions without a highlight entry.
pub const DEFAULT_FILL: &str = "#3f3f3f";

/// Outline color of the body silhouette.
pub const DEFAULT_BORDER: &str = "#dfdfdf";

/// Base canvas width before scaling.
pub const BASE_WIDTH: f64 = 200.0;

/// Base canvas height before scaling.
pub const BASE_HEIGHT: f64 = 400.0;

// =============================================================================
// Body Part Slugs
// =============================================================================

macro_rules! body_part_slugs {
    ($( $(#[$meta:meta])* $variant:ident => $slug:literal, )*) => {
        /// Stable semantic name of one anatomical region.
        ///
        /// The set is closed and shared by every asset table, but not every
        /// slug is drawn in every table (plain `neck` only exists in front
        /// views, `left-neck`/`right-neck` only in back views).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BodyPartSlug {
            $( $(#[$meta])* $variant, )*
        }

        impl BodyPartSlug {
            /// Every slug, in declaration order.
            pub const ALL: &'static [BodyPartSlug] = &[ $( BodyPartSlug::$variant, )* ];

            /// The raw slug string (e.g. `"left-biceps"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( BodyPartSlug::$variant => $slug, )*
                }
            }
        }

        impl FromStr for BodyPartSlug {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $slug => Ok(BodyPartSlug::$variant), )*
                    _ => Err(Error::UnknownSlug(s.to_string())),
                }
            }
        }
    };
}

body_part_slugs! {
    // Bilateral (19 pairs)
    LeftAdductors => "left-adductors",
    RightAdductors => "right-adductors",
    LeftAnkles => "left-ankles",
    RightAnkles => "right-ankles",
    LeftBiceps => "left-biceps",
    RightBiceps => "right-biceps",
    LeftCalves => "left-calves",
    RightCalves => "right-calves",
    LeftChest => "left-chest",
    RightChest => "right-chest",
    LeftDeltoids => "left-deltoids",
    RightDeltoids => "right-deltoids",
    LeftFeet => "left-feet",
    RightFeet => "right-feet",
    LeftForearm => "left-forearm",
    RightForearm => "right-forearm",
    LeftGluteal => "left-gluteal",
    RightGluteal => "right-gluteal",
    LeftHamstring => "left-hamstring",
    RightHamstring => "right-hamstring",
    LeftHands => "left-hands",
    RightHands => "right-hands",
    LeftKnees => "left-knees",
    RightKnees => "right-knees",
    LeftLowerBack => "left-lower-back",
    RightLowerBack => "right-lower-back",
    LeftObliques => "left-obliques",
    RightObliques => "right-obliques",
    LeftQuadriceps => "left-quadriceps",
    RightQuadriceps => "right-quadriceps",
    LeftTibialis => "left-tibialis",
    RightTibialis => "right-tibialis",
    LeftTrapezius => "left-trapezius",
    RightTrapezius => "right-trapezius",
    LeftTriceps => "left-triceps",
    RightTriceps => "right-triceps",
    LeftUpperBack => "left-upper-back",
    RightUpperBack => "right-upper-back",
    // Centerline
    Abs => "abs",
    Head => "head",
    Hair => "hair",
    Neck => "neck",
    /// Back view only.
    LeftNeck => "left-neck",
    /// Back view only.
    RightNeck => "right-neck",
}

impl BodyPartSlug {
    /// Human-readable label: the slug with hyphens replaced by spaces.
    ///
    /// `left-lower-back` becomes `"left lower back"`.
    pub fn aria_label(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for BodyPartSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BodyPartSlug {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BodyPartSlug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Gender / Side
// =============================================================================

/// Asset family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(Error::UnknownGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the body faces the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            _ => Err(Error::UnknownSide(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Highlight entry
// =============================================================================

/// One caller-supplied highlight: paint `slug` with `color`.
///
/// Colors are opaque strings (hex, rgb(), named) and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartData {
    pub slug: BodyPartSlug,
    pub color: String,
}

impl BodyPartData {
    pub fn new(slug: BodyPartSlug, color: impl Into<String>) -> Self {
        Self {
            slug,
            color: color.into(),
        }
    }
}

/// Parses `slug=color`, e.g. `left-biceps=#ff0000`.
impl FromStr for BodyPartData {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (slug, color) = s
            .split_once('=')
            .ok_or_else(|| Error::InvalidHighlight(s.to_string()))?;
        let color = color.trim();
        if color.is_empty() {
            return Err(Error::InvalidHighlight(s.to_string()));
        }
        Ok(Self::new(slug.trim().parse()?, color))
    }
}

// =============================================================================
// Border
// =============================================================================

/// Outline of the body silhouette: a stroke color, or no outline at all.
///
/// Serialized as the color string, with `"none"` meaning no outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Border {
    Color(String),
    None,
}

impl Border {
    /// Stroke color, if any.
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Color(c) => Some(c),
            Self::None => None,
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::Color(DEFAULT_BORDER.to_string())
    }
}

impl From<&str> for Border {
    fn from(value: &str) -> Self {
        if value == "none" {
            Self::None
        } else {
            Self::Color(value.to_string())
        }
    }
}

impl From<String> for Border {
    fn from(value: String) -> Self {
        if value == "none" {
            Self::None
        } else {
            Self::Color(value)
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color().unwrap_or("none"))
    }
}

impl Serialize for Border {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.color().unwrap_or("none"))
    }
}

impl<'de> Deserialize<'de> for Border {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Border::from(String::deserialize(deserializer)?))
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Pointer affordance of a shape. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Pointer,
    Default,
}

impl Cursor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pointer => "pointer",
            Self::Default => "default",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slug_universe() {
        assert_eq!(BodyPartSlug::ALL.len(), 44);

        let unique: HashSet<_> = BodyPartSlug::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(unique.len(), 44);

        let bilateral = BodyPartSlug::ALL
            .iter()
            .filter(|s| s.as_str().starts_with("left-") || s.as_str().starts_with("right-"))
            .count();
        assert_eq!(bilateral, 40); // 19 pairs + left/right neck
    }

    #[test]
    fn test_slug_parse() {
        for slug in BodyPartSlug::ALL {
            assert_eq!(slug.as_str().parse::<BodyPartSlug>().unwrap(), *slug);
        }
        assert!(matches!(
            "left-wing".parse::<BodyPartSlug>(),
            Err(Error::UnknownSlug(s)) if s == "left-wing"
        ));
        // Slugs are case sensitive
        assert!("Left-Biceps".parse::<BodyPartSlug>().is_err());
    }

    #[test]
    fn test_aria_label() {
        assert_eq!(BodyPartSlug::LeftBiceps.aria_label(), "left biceps");
        assert_eq!(BodyPartSlug::RightLowerBack.aria_label(), "right lower back");
        assert_eq!(BodyPartSlug::Abs.aria_label(), "abs");
    }

    #[test]
    fn test_slug_serde() {
        let json = serde_json::to_string(&BodyPartSlug::LeftUpperBack).unwrap();
        assert_eq!(json, "\"left-upper-back\"");

        let data: BodyPartData =
            serde_json::from_str(r##"{"slug":"abs","color":"#ff0000"}"##).unwrap();
        assert_eq!(data, BodyPartData::new(BodyPartSlug::Abs, "#ff0000"));

        assert!(serde_json::from_str::<BodyPartSlug>("\"tail\"").is_err());
    }

    #[test]
    fn test_gender_side_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());

        assert_eq!("back".parse::<Side>().unwrap(), Side::Back);
        assert!(matches!("top".parse::<Side>(), Err(Error::UnknownSide(_))));

        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(Side::default(), Side::Front);
    }

    #[test]
    fn test_border() {
        assert_eq!(Border::default(), Border::Color("#dfdfdf".to_string()));
        assert_eq!(Border::from("none"), Border::None);
        assert_eq!(Border::from("#000"), Border::Color("#000".to_string()));
        assert_eq!(Border::None.color(), None);
        assert_eq!(Border::None.to_string(), "none");

        let border: Border = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(border, Border::None);
    }

    #[test]
    fn test_highlight_parse() {
        let data: BodyPartData = "left-biceps=#ff0000".parse().unwrap();
        assert_eq!(data, BodyPartData::new(BodyPartSlug::LeftBiceps, "#ff0000"));

        let named: BodyPartData = "abs = rgb(0, 255, 0)".parse().unwrap();
        assert_eq!(named.color, "rgb(0, 255, 0)");

        assert!(matches!("abs".parse::<BodyPartData>(), Err(Error::InvalidHighlight(_))));
        assert!(matches!("abs=".parse::<BodyPartData>(), Err(Error::InvalidHighlight(_))));
        assert!(matches!("tail=#fff".parse::<BodyPartData>(), Err(Error::UnknownSlug(_))));
    }
}
