//! Tool selection and the drawing drag state machine.

use crate::overlay::{Annotation, PaletteColor};
use kurbo::Point;

/// The editor's tool palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    /// Pick, move, and edit existing overlay items.
    #[default]
    Select,
    /// Place an interactive marker with a click.
    Hotspot,
    /// Drag an arrow between two points.
    Arrow,
    /// Drag a rectangle.
    Box,
    /// Place a text label with a click.
    Text,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Hotspot => "hotspot",
            ToolKind::Arrow => "arrow",
            ToolKind::Box => "box",
            ToolKind::Text => "text",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Hotspot => "Hotspot",
            ToolKind::Arrow => "Arrow",
            ToolKind::Box => "Box",
            ToolKind::Text => "Text",
        }
    }

    /// All tools, in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Select,
            ToolKind::Hotspot,
            ToolKind::Arrow,
            ToolKind::Box,
            ToolKind::Text,
        ]
    }

    /// Whether the tool draws shapes with a press-drag-release gesture.
    pub fn is_drawing(&self) -> bool {
        matches!(self, ToolKind::Arrow | ToolKind::Box)
    }
}

/// State of an in-progress drawing drag.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Active { start: Point, current: Point },
}

/// Owns the active tool and any drawing drag in progress.
///
/// Only arrow and box drags live here; click-placed items (hotspots,
/// text labels) and selection gestures are driven by the session since
/// they open dialogs rather than track geometry.
#[derive(Debug, Clone)]
pub struct ToolController {
    active: ToolKind,
    color: PaletteColor,
    drag: DragState,
}

impl Default for ToolController {
    fn default() -> Self {
        Self {
            active: ToolKind::Select,
            color: PaletteColor::Primary,
            drag: DragState::Idle,
        }
    }
}

impl ToolController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ToolKind {
        self.active
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.color = color;
    }

    /// Switch tools, discarding any drag in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.active = tool;
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Active { .. })
    }

    /// Start a drawing drag at a normalized point.
    ///
    /// No-op unless the active tool draws shapes.
    pub fn begin(&mut self, at: Point) {
        if self.active.is_drawing() {
            self.drag = DragState::Active {
                start: at,
                current: at,
            };
        }
    }

    /// Extend the drag to a new pointer position.
    pub fn update(&mut self, at: Point) {
        if let DragState::Active { current, .. } = &mut self.drag {
            *current = at;
        }
    }

    /// The shape the drag would commit, for preview rendering.
    ///
    /// The preview carries a placeholder id; a committed shape gets a
    /// fresh identifier from [`ToolController::end`].
    pub fn preview(&self) -> Option<Annotation> {
        let DragState::Active { start, current } = self.drag else {
            return None;
        };
        Some(self.shape_between(start, current, "preview".to_string()))
    }

    /// Finish the drag at the last tracked pointer position.
    ///
    /// Returns the committed shape, or `None` when the drag never
    /// reached the minimum extent and is discarded as a stray click.
    pub fn end(&mut self) -> Option<Annotation> {
        let DragState::Active { start, current } = self.drag else {
            return None;
        };
        self.drag = DragState::Idle;
        let shape = match self.active {
            ToolKind::Arrow => Annotation::arrow(start, current, self.color),
            ToolKind::Box => Annotation::rect(start, current, self.color),
            _ => return None,
        };
        shape.meets_min_extent().then_some(shape)
    }

    /// Abandon the drag without committing.
    pub fn cancel(&mut self) {
        self.drag = DragState::Idle;
    }

    fn shape_between(&self, start: Point, current: Point, id: String) -> Annotation {
        match self.active {
            ToolKind::Box => Annotation::Box {
                id,
                x: start.x.min(current.x),
                y: start.y.min(current.y),
                width: (current.x - start.x).abs(),
                height: (current.y - start.y).abs(),
                color: self.color,
            },
            _ => Annotation::Arrow {
                id,
                x: start.x,
                y: start.y,
                end_x: current.x,
                end_y: current.y,
                color: self.color,
            },
        }
    }
}
