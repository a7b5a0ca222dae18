//! LearnScape Core Library
//!
//! Overlay editing engine for interactive ebook pages: normalized
//! coordinates, the tool state machine, overlay records and mutators,
//! and the rendering contracts for hotspots and drawn annotations.

pub mod compose;
pub mod coords;
pub mod editor;
pub mod input;
pub mod overlay;
pub mod reader;
pub mod render;
pub mod store;
pub mod tools;
pub mod topic;

pub use coords::{CanvasBounds, NORM_MAX};
pub use editor::{Dialog, EditorSession, SavePayload, SaveState, Selection};
pub use input::{Key, PointerEvent};
pub use overlay::{
    Annotation, AnnotationKind, Hotspot, HotspotIcon, PaletteColor, ValidationError,
    HOTSPOT_POSITION_MAX, HOTSPOT_POSITION_MIN, MIN_ANNOTATION_EXTENT,
};
pub use reader::{HotspotDetail, ReaderView};
pub use render::{editor_scene, AnnotationVisual, OverlayScene};
pub use store::{MemoryStore, StoreError, StoreResult, TopicStore};
pub use tools::{ToolController, ToolKind};
pub use topic::{Chapter, Topic};
