//! Mapping overlay records to drawable primitives.
//!
//! All geometry stays in normalized units; hosts map to CSS percentage
//! positions directly. Only shape math lives here, no styling.

use crate::editor::{EditorSession, Selection};
use crate::overlay::{Annotation, Hotspot, PaletteColor};
use kurbo::{Line, Point, Rect, Vec2};

/// Length of the arrowhead barbs, in normalized units.
pub const ARROW_HEAD_LENGTH: f64 = 2.0;
/// Barb angle off the shaft, in radians.
const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;

pub const STROKE_NORMAL: f64 = 3.0;
pub const STROKE_SELECTED: f64 = 5.0;

/// A directed line segment with a head at the end point.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowVisual {
    pub shaft: Line,
    pub head: [Line; 2],
    pub stroke_width: f64,
    pub color: PaletteColor,
    /// Endpoint handles, present only while selected.
    pub handles: Option<[Point; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxVisual {
    pub rect: Rect,
    pub stroke_width: f64,
    pub color: PaletteColor,
    pub focus_ring: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextVisual {
    pub anchor: Point,
    pub text: String,
    pub color: PaletteColor,
    pub focus_ring: bool,
}

/// A circular marker with a glyph and a cosmetic pulsing halo.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotVisual {
    pub center: Point,
    pub glyph: char,
    pub color: PaletteColor,
    pub pulsing: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationVisual {
    Arrow(ArrowVisual),
    Box(BoxVisual),
    Text(TextVisual),
}

/// Everything the host needs to paint one topic's overlay.
///
/// `preview`, when present, is the uncommitted shape of an active drag
/// and paints above the committed shapes, never selected.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScene {
    pub shapes: Vec<AnnotationVisual>,
    pub hotspots: Vec<HotspotVisual>,
    pub preview: Option<AnnotationVisual>,
}

pub fn annotation_visual(annotation: &Annotation, selected: bool) -> AnnotationVisual {
    let stroke = if selected { STROKE_SELECTED } else { STROKE_NORMAL };
    match annotation {
        Annotation::Arrow { x, y, end_x, end_y, color, .. } => {
            let start = Point::new(*x, *y);
            let end = Point::new(*end_x, *end_y);
            AnnotationVisual::Arrow(ArrowVisual {
                shaft: Line::new(start, end),
                head: arrow_head(start, end),
                stroke_width: stroke,
                color: *color,
                handles: selected.then_some([start, end]),
            })
        }
        Annotation::Box { x, y, width, height, color, .. } => {
            AnnotationVisual::Box(BoxVisual {
                rect: Rect::new(*x, *y, x + width, y + height),
                stroke_width: stroke,
                color: *color,
                focus_ring: selected,
            })
        }
        Annotation::Text { x, y, text, color, .. } => AnnotationVisual::Text(TextVisual {
            anchor: Point::new(*x, *y),
            text: text.clone(),
            color: *color,
            focus_ring: selected,
        }),
    }
}

pub fn hotspot_visual(hotspot: &Hotspot, selected: bool) -> HotspotVisual {
    HotspotVisual {
        center: hotspot.position(),
        glyph: hotspot.glyph(),
        color: hotspot.color,
        pulsing: true,
        selected,
    }
}

/// Build the full scene for an open editing session.
pub fn editor_scene(session: &EditorSession) -> OverlayScene {
    let topic = session.topic();
    let shapes = topic
        .annotations
        .iter()
        .map(|a| {
            let selected = matches!(
                session.selection(),
                Some(Selection::Annotation(id)) if id == a.id()
            );
            annotation_visual(a, selected)
        })
        .collect();
    let hotspots = topic
        .hotspots
        .iter()
        .map(|h| {
            let selected = matches!(
                session.selection(),
                Some(Selection::Hotspot(id)) if *id == h.id
            );
            hotspot_visual(h, selected)
        })
        .collect();
    let preview = session
        .draw_preview()
        .map(|shape| annotation_visual(&shape, false));
    OverlayScene {
        shapes,
        hotspots,
        preview,
    }
}

/// The two barb segments of an arrowhead at `end`, pointing back along
/// the shaft. A degenerate shaft yields zero-length barbs.
fn arrow_head(start: Point, end: Point) -> [Line; 2] {
    let dir = end - start;
    if dir.hypot() < f64::EPSILON {
        return [Line::new(end, end), Line::new(end, end)];
    }
    let angle = dir.atan2();
    let barb = |offset: f64| {
        let a = angle + std::f64::consts::PI + offset;
        end + Vec2::new(a.cos(), a.sin()) * ARROW_HEAD_LENGTH
    };
    [
        Line::new(end, barb(ARROW_HEAD_ANGLE)),
        Line::new(end, barb(-ARROW_HEAD_ANGLE)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerEvent;
    use crate::tools::ToolKind;
    use crate::topic::Topic;

    #[test]
    fn test_arrow_head_points_backward() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(50.0, 0.0);
        let [a, b] = arrow_head(start, end);
        assert!(((a.p1 - end).hypot() - ARROW_HEAD_LENGTH).abs() < 1e-9);
        // Barbs trail the tip along the shaft direction.
        assert!(a.p1.x < end.x);
        assert!(b.p1.x < end.x);
        // One barb above, one below the shaft.
        assert!(a.p1.y * b.p1.y < 0.0);
    }

    #[test]
    fn test_selection_thickens_stroke_and_adds_handles() {
        let a = Annotation::Arrow {
            id: "annotation-1".into(),
            x: 10.0,
            y: 10.0,
            end_x: 50.0,
            end_y: 50.0,
            color: PaletteColor::Primary,
        };
        match annotation_visual(&a, false) {
            AnnotationVisual::Arrow(v) => {
                assert_eq!(v.stroke_width, STROKE_NORMAL);
                assert!(v.handles.is_none());
            }
            _ => unreachable!(),
        }
        match annotation_visual(&a, true) {
            AnnotationVisual::Arrow(v) => {
                assert_eq!(v.stroke_width, STROKE_SELECTED);
                assert_eq!(
                    v.handles,
                    Some([Point::new(10.0, 10.0), Point::new(50.0, 50.0)])
                );
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_scene_includes_drag_preview() {
        let mut s = EditorSession::new(Topic::new("T", "c"));
        s.set_tool(ToolKind::Box);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(40.0, 30.0)));
        let scene = editor_scene(&s);
        assert!(scene.shapes.is_empty());
        match scene.preview {
            Some(AnnotationVisual::Box(v)) => {
                assert_eq!(v.rect, Rect::new(10.0, 10.0, 40.0, 30.0));
                assert!(!v.focus_ring);
            }
            other => panic!("expected a box preview, got {other:?}"),
        }
    }

    #[test]
    fn test_scene_marks_selected_hotspot() {
        let mut topic = Topic::new("T", "c");
        let mut h = Hotspot::new(Point::new(30.0, 40.0), "Sun", "The Sun");
        h.id = "hotspot-1".into();
        topic.add_hotspot(h);
        let mut s = EditorSession::new(topic);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(30.0, 40.0));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(30.0, 40.0)));
        let scene = editor_scene(&s);
        assert!(scene.hotspots[0].selected);
        assert_eq!(scene.hotspots[0].glyph, 'S');
    }
}
