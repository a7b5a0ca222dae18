//! Overlay definitions: hotspots and drawn annotations.

mod annotation;
mod hotspot;

pub use annotation::{Annotation, AnnotationKind, MIN_ANNOTATION_EXTENT};
pub use hotspot::{Hotspot, HOTSPOT_POSITION_MAX, HOTSPOT_POSITION_MIN};

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Validation failures reported by creation/edit dialogs.
///
/// These are recovered locally: the dialog stays open and no partial
/// record is ever committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("label is required")]
    MissingLabel,
    #[error("title is required")]
    MissingTitle,
    #[error("text is required")]
    EmptyText,
}

/// Color names from the fixed palette.
///
/// Wire values are the theme token names used by the hosting shell.
/// Unknown names deserialize to [`PaletteColor::Primary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Secondary,
    Accent,
    Warning,
    Destructive,
    Muted,
    // The fallback variant must be declared last for #[serde(other)].
    #[default]
    #[serde(other)]
    Primary,
}

impl PaletteColor {
    /// The wire/theme token name.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Primary => "primary",
            PaletteColor::Secondary => "secondary",
            PaletteColor::Accent => "accent",
            PaletteColor::Warning => "warning",
            PaletteColor::Destructive => "destructive",
            PaletteColor::Muted => "muted",
        }
    }

    /// Display name for the swatch picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaletteColor::Primary => "Orange",
            PaletteColor::Secondary => "Green",
            PaletteColor::Accent => "Coral",
            PaletteColor::Warning => "Yellow",
            PaletteColor::Destructive => "Red",
            PaletteColor::Muted => "Gray",
        }
    }

    /// RGBA swatch for renderers that cannot resolve theme tokens.
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            PaletteColor::Primary => [234, 88, 12, 255],
            PaletteColor::Secondary => [22, 163, 74, 255],
            PaletteColor::Accent => [244, 114, 92, 255],
            PaletteColor::Warning => [234, 179, 8, 255],
            PaletteColor::Destructive => [220, 38, 38, 255],
            PaletteColor::Muted => [113, 113, 122, 255],
        }
    }

    /// All palette entries, in swatch order.
    pub fn all() -> &'static [PaletteColor] {
        &[
            PaletteColor::Primary,
            PaletteColor::Secondary,
            PaletteColor::Accent,
            PaletteColor::Warning,
            PaletteColor::Destructive,
            PaletteColor::Muted,
        ]
    }

    /// Parse a wire name, falling back to the default color.
    pub fn parse(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .unwrap_or_default()
    }
}

/// Symbolic icon names for hotspot markers.
///
/// Unknown names deserialize to [`HotspotIcon::Sparkles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotIcon {
    Sun,
    Leaf,
    Droplets,
    Wind,
    Cloud,
    Star,
    Zap,
    Globe,
    Atom,
    Flame,
    Snowflake,
    // The fallback variant must be declared last for #[serde(other)].
    #[default]
    #[serde(other)]
    Sparkles,
}

impl HotspotIcon {
    /// The wire name.
    pub fn name(&self) -> &'static str {
        match self {
            HotspotIcon::Sparkles => "sparkles",
            HotspotIcon::Sun => "sun",
            HotspotIcon::Leaf => "leaf",
            HotspotIcon::Droplets => "droplets",
            HotspotIcon::Wind => "wind",
            HotspotIcon::Cloud => "cloud",
            HotspotIcon::Star => "star",
            HotspotIcon::Zap => "zap",
            HotspotIcon::Globe => "globe",
            HotspotIcon::Atom => "atom",
            HotspotIcon::Flame => "flame",
            HotspotIcon::Snowflake => "snowflake",
        }
    }

    /// All icon choices, in picker order.
    pub fn all() -> &'static [HotspotIcon] {
        &[
            HotspotIcon::Sparkles,
            HotspotIcon::Sun,
            HotspotIcon::Leaf,
            HotspotIcon::Droplets,
            HotspotIcon::Wind,
            HotspotIcon::Cloud,
            HotspotIcon::Star,
            HotspotIcon::Zap,
            HotspotIcon::Globe,
            HotspotIcon::Atom,
            HotspotIcon::Flame,
            HotspotIcon::Snowflake,
        ]
    }

    /// Parse a wire name, falling back to the default icon.
    pub fn parse(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|i| i.name() == name)
            .unwrap_or_default()
    }
}

/// Generate a timestamp-derived overlay identifier (`{prefix}-{millis}`).
///
/// Uniqueness is only guaranteed for interactive creation rates: two ids
/// generated within the same millisecond collide. This matches the stored
/// data format and is an accepted limitation for single-user editing.
pub(crate) fn overlay_id(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{prefix}-{millis}")
}

/// Distance from a point to a line segment (a→b), all in normalized units.
pub(crate) fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = kurbo::Vec2::new(b.x - a.x, b.y - a.y);
    let pv = kurbo::Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    ((point.x - proj.x).powi(2) + (point.y - proj.y).powi(2)).sqrt()
}
