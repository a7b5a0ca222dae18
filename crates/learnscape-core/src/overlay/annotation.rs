//! Drawn annotations: arrows, boxes, and text labels.

use super::{overlay_id, point_to_segment_dist, PaletteColor, ValidationError};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Minimum drag extent, in normalized units, for a drawn shape to commit.
///
/// Arrows need the extent on either axis; boxes need it on both. Drags
/// below the threshold are treated as accidental clicks and discarded.
pub const MIN_ANNOTATION_EXTENT: f64 = 2.0;

/// A drawn annotation, tagged by shape on the wire.
///
/// All coordinates are normalized percentages of the canvas. `x`/`y` is
/// the drag start for arrows and the top-left corner for boxes; text
/// labels anchor at their placement point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Annotation {
    Arrow {
        id: String,
        x: f64,
        y: f64,
        end_x: f64,
        end_y: f64,
        #[serde(default)]
        color: PaletteColor,
    },
    Box {
        id: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        color: PaletteColor,
    },
    Text {
        id: String,
        x: f64,
        y: f64,
        text: String,
        #[serde(default)]
        color: PaletteColor,
    },
}

/// Shape discriminant, used for tool/annotation matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Arrow,
    Box,
    Text,
}

impl AnnotationKind {
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationKind::Arrow => "arrow",
            AnnotationKind::Box => "box",
            AnnotationKind::Text => "text",
        }
    }
}

impl Annotation {
    /// An arrow from `start` to `end`, with a fresh identifier.
    pub fn arrow(start: Point, end: Point, color: PaletteColor) -> Self {
        Annotation::Arrow {
            id: overlay_id("annotation"),
            x: start.x,
            y: start.y,
            end_x: end.x,
            end_y: end.y,
            color,
        }
    }

    /// A box spanning the rectangle between two drag corners.
    ///
    /// The corners may arrive in any order; the stored origin is the
    /// top-left of the spanned rectangle and width/height are positive.
    pub fn rect(a: Point, b: Point, color: PaletteColor) -> Self {
        Annotation::Box {
            id: overlay_id("annotation"),
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
            color,
        }
    }

    /// A text label anchored at `at`.
    pub fn text(at: Point, text: impl Into<String>, color: PaletteColor) -> Self {
        Annotation::Text {
            id: overlay_id("annotation"),
            x: at.x,
            y: at.y,
            text: text.into(),
            color,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Annotation::Arrow { id, .. }
            | Annotation::Box { id, .. }
            | Annotation::Text { id, .. } => id,
        }
    }

    pub fn color(&self) -> PaletteColor {
        match self {
            Annotation::Arrow { color, .. }
            | Annotation::Box { color, .. }
            | Annotation::Text { color, .. } => *color,
        }
    }

    pub fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::Arrow { .. } => AnnotationKind::Arrow,
            Annotation::Box { .. } => AnnotationKind::Box,
            Annotation::Text { .. } => AnnotationKind::Text,
        }
    }

    /// Check the commit threshold against the shape's drag extent.
    ///
    /// Text labels are click-placed and always pass.
    pub fn meets_min_extent(&self) -> bool {
        match self {
            Annotation::Arrow { x, y, end_x, end_y, .. } => {
                (end_x - x).abs() > MIN_ANNOTATION_EXTENT
                    || (end_y - y).abs() > MIN_ANNOTATION_EXTENT
            }
            Annotation::Box { width, height, .. } => {
                *width > MIN_ANNOTATION_EXTENT && *height > MIN_ANNOTATION_EXTENT
            }
            Annotation::Text { .. } => true,
        }
    }

    /// Check the commit invariant for label content.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Annotation::Text { text, .. } if text.trim().is_empty() => {
                Err(ValidationError::EmptyText)
            }
            _ => Ok(()),
        }
    }

    /// Bounding rectangle in normalized units.
    ///
    /// Text bounds are approximate: labels size to content when drawn,
    /// so a nominal footprint is used for selection purposes.
    pub fn bounds(&self) -> Rect {
        match self {
            Annotation::Arrow { x, y, end_x, end_y, .. } => {
                Rect::from_points(Point::new(*x, *y), Point::new(*end_x, *end_y))
            }
            Annotation::Box { x, y, width, height, .. } => {
                Rect::new(*x, *y, x + width, y + height)
            }
            Annotation::Text { x, y, text, .. } => {
                let w = (text.chars().count() as f64 * 1.2).max(4.0);
                Rect::new(*x, *y, x + w, y + 3.0)
            }
        }
    }

    /// Hit test with a tolerance in normalized units.
    ///
    /// Arrows test against their segment, boxes against their outline or
    /// interior, text against its nominal footprint.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Annotation::Arrow { x, y, end_x, end_y, .. } => {
                point_to_segment_dist(point, Point::new(*x, *y), Point::new(*end_x, *end_y))
                    <= tolerance
            }
            Annotation::Box { .. } | Annotation::Text { .. } => {
                self.bounds().inflate(tolerance, tolerance).contains(point)
            }
        }
    }

}
