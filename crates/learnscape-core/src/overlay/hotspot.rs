//! Interactive hotspot markers.

use super::{overlay_id, HotspotIcon, PaletteColor, ValidationError};
use kurbo::Point;
use serde::{Deserialize, Deserializer, Serialize};

/// Minimum normalized position for a hotspot center.
///
/// Keeps the marker's visual footprint on-canvas while dragging.
pub const HOTSPOT_POSITION_MIN: f64 = 2.0;
/// Maximum normalized position for a hotspot center.
pub const HOTSPOT_POSITION_MAX: f64 = 98.0;

/// An interactive marker anchored at a normalized point.
///
/// Stored documents carry the supplementary text under `fun_fact`, but
/// legacy records may use `funFact` or even both names. Deserialization
/// reconciles the pair (explicit name wins); serialization only ever
/// writes `fun_fact`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotspot {
    pub id: String,
    /// Horizontal position, percentage of canvas width.
    pub x: f64,
    /// Vertical position, percentage of canvas height.
    pub y: f64,
    /// Short marker label, shown as glyph/tooltip.
    pub label: String,
    pub icon: HotspotIcon,
    pub color: PaletteColor,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
}

/// Wire form of a hotspot; exists only to absorb the dual fun-fact names.
#[derive(Deserialize)]
struct HotspotWire {
    id: String,
    x: f64,
    y: f64,
    label: String,
    #[serde(default)]
    icon: HotspotIcon,
    #[serde(default)]
    color: PaletteColor,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    fun_fact: Option<String>,
    #[serde(default, rename = "funFact")]
    fun_fact_legacy: Option<String>,
}

impl<'de> Deserialize<'de> for Hotspot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = HotspotWire::deserialize(deserializer)?;
        Ok(Self {
            id: wire.id,
            x: wire.x,
            y: wire.y,
            label: wire.label,
            icon: wire.icon,
            color: wire.color,
            title: wire.title,
            description: wire.description,
            fun_fact: wire.fun_fact.or(wire.fun_fact_legacy),
        })
    }
}

impl Hotspot {
    /// Create a hotspot at a normalized position with a fresh identifier.
    pub fn new(at: Point, label: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: overlay_id("hotspot"),
            x: at.x,
            y: at.y,
            label: label.into(),
            icon: HotspotIcon::default(),
            color: PaletteColor::default(),
            title: title.into(),
            description: String::new(),
            fun_fact: None,
        }
    }

    /// Check the commit invariant: `label` and `title` must be non-empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::MissingLabel);
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(())
    }

    /// The marker position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the marker, clamping to the draggable range [2, 98].
    pub fn move_to(&mut self, at: Point) {
        self.x = at.x.clamp(HOTSPOT_POSITION_MIN, HOTSPOT_POSITION_MAX);
        self.y = at.y.clamp(HOTSPOT_POSITION_MIN, HOTSPOT_POSITION_MAX);
    }

    /// The glyph shown inside the marker circle.
    pub fn glyph(&self) -> char {
        self.label.chars().next().unwrap_or('?')
    }

    /// Hit test against the marker circle, in normalized units.
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        dx * dx + dy * dy <= radius * radius
    }
}
