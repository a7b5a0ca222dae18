//! The editing session: selection, gestures, dialogs, and saving.
//!
//! One [`EditorSession`] owns the working copy of a topic while it is
//! open in the editor. All transitions happen synchronously inside the
//! pointer/keyboard handlers; a gesture fully resolves before the next
//! pointer-down arrives, so no gesture state outlives its gesture.

use crate::input::{Key, PointerEvent};
use crate::overlay::{
    Annotation, Hotspot, HotspotIcon, PaletteColor, ValidationError,
};
use crate::tools::{ToolController, ToolKind};
use crate::topic::Topic;
use kurbo::{Point, Vec2};

/// Reference to the selected overlay item, if any. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Hotspot(String),
    Annotation(String),
}

/// In-progress hotspot move. Records the grab offset so the marker does
/// not jump to the pointer on the first move.
#[derive(Debug, Clone)]
struct HotspotMove {
    id: String,
    offset: Vec2,
}

/// Draft fields for the hotspot creation/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotDraft {
    pub at: Point,
    pub label: String,
    pub title: String,
    pub description: String,
    pub fun_fact: String,
    pub icon: HotspotIcon,
    pub color: PaletteColor,
}

impl HotspotDraft {
    fn blank(at: Point) -> Self {
        Self {
            at,
            label: String::new(),
            title: String::new(),
            description: String::new(),
            fun_fact: String::new(),
            icon: HotspotIcon::default(),
            color: PaletteColor::default(),
        }
    }

    fn from_hotspot(h: &Hotspot) -> Self {
        Self {
            at: h.position(),
            label: h.label.clone(),
            title: h.title.clone(),
            description: h.description.clone(),
            fun_fact: h.fun_fact.clone().unwrap_or_default(),
            icon: h.icon,
            color: h.color,
        }
    }
}

/// Draft fields for the text label creation/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraft {
    pub at: Point,
    pub text: String,
    pub color: PaletteColor,
}

/// An open modal form. While one is open, pointer input on the canvas
/// and the Delete shortcut are ignored; Escape still applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    CreateHotspot(HotspotDraft),
    EditHotspot { id: String, draft: HotspotDraft },
    CreateText(TextDraft),
    EditText { id: String, draft: TextDraft },
}

/// Save lifecycle for the one-save-in-flight discipline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

/// The full overlay sequences handed to the persistence layer.
///
/// Saves are full-replace: the session's working copy is the source of
/// truth for the duration of the edit.
#[derive(Debug, Clone, PartialEq)]
pub struct SavePayload {
    pub hotspots: Vec<Hotspot>,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug)]
pub struct EditorSession {
    topic: Topic,
    tools: ToolController,
    selection: Option<Selection>,
    hotspot_move: Option<HotspotMove>,
    dialog: Option<Dialog>,
    save: SaveState,
}

impl EditorSession {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            tools: ToolController::new(),
            selection: None,
            hotspot_move: None,
            dialog: None,
            save: SaveState::Idle,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn tool(&self) -> ToolKind {
        self.tools.active()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    pub fn save_state(&self) -> &SaveState {
        &self.save
    }

    pub fn color(&self) -> PaletteColor {
        self.tools.color()
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.tools.set_color(color);
    }

    /// The uncommitted shape of an active drawing drag, for preview.
    pub fn draw_preview(&self) -> Option<Annotation> {
        self.tools.preview()
    }

    /// Switch tools. Selection only survives while the select tool is
    /// active.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
        if tool != ToolKind::Select {
            self.selection = None;
        }
        self.hotspot_move = None;
    }

    /// Pointer input whose target is the canvas background.
    ///
    /// Clicks on existing overlay items do not arrive here; they go to
    /// [`EditorSession::pointer_down_on_hotspot`] and
    /// [`EditorSession::pointer_down_on_annotation`] instead.
    pub fn handle_canvas_pointer(&mut self, event: PointerEvent) {
        if self.dialog.is_some() {
            return;
        }
        match event {
            PointerEvent::Down(at) => self.canvas_pointer_down(at),
            PointerEvent::Move(at) => self.canvas_pointer_move(at),
            PointerEvent::Up(_) | PointerEvent::Leave => self.canvas_pointer_up(),
        }
    }

    fn canvas_pointer_down(&mut self, at: Point) {
        match self.tools.active() {
            ToolKind::Select => self.selection = None,
            ToolKind::Hotspot => {
                self.dialog = Some(Dialog::CreateHotspot(HotspotDraft::blank(at)));
            }
            ToolKind::Text => {
                self.dialog = Some(Dialog::CreateText(TextDraft {
                    at,
                    text: String::new(),
                    color: self.tools.color(),
                }));
            }
            ToolKind::Arrow | ToolKind::Box => self.tools.begin(at),
        }
    }

    fn canvas_pointer_move(&mut self, at: Point) {
        if let Some(gesture) = &self.hotspot_move {
            let target = at + gesture.offset;
            let id = gesture.id.clone();
            if let Some(h) = self.topic.hotspots.iter_mut().find(|h| h.id == id) {
                h.move_to(target);
            }
            return;
        }
        self.tools.update(at);
    }

    /// Release or pointer-leave ends whichever gesture is active.
    ///
    /// A hotspot move needs no commit step since the model was updated
    /// live. A drawing drag commits or discards per the minimum-extent
    /// rule; either way the tool reverts to select, so each drawing
    /// tool is single-use per invocation.
    fn canvas_pointer_up(&mut self) {
        if self.hotspot_move.take().is_some() {
            return;
        }
        if !self.tools.is_dragging() {
            return;
        }
        if let Some(shape) = self.tools.end() {
            self.selection = Some(Selection::Annotation(shape.id().to_string()));
            self.topic.add_annotation(shape);
        }
        self.tools.set_tool(ToolKind::Select);
    }

    /// Pointer-down intercepted by a hotspot marker.
    ///
    /// With the select tool this selects the marker and starts a move
    /// gesture anchored at the grab offset. Other tools ignore it.
    pub fn pointer_down_on_hotspot(&mut self, id: &str, at: Point) {
        if self.dialog.is_some() || self.tools.active() != ToolKind::Select {
            return;
        }
        let Some(h) = self.topic.hotspot(id) else {
            return;
        };
        let offset = h.position() - at;
        self.selection = Some(Selection::Hotspot(id.to_string()));
        self.hotspot_move = Some(HotspotMove {
            id: id.to_string(),
            offset,
        });
    }

    /// Pointer-down intercepted by a drawn annotation.
    pub fn pointer_down_on_annotation(&mut self, id: &str) {
        if self.dialog.is_some() || self.tools.active() != ToolKind::Select {
            return;
        }
        if self.topic.annotation(id).is_some() {
            self.selection = Some(Selection::Annotation(id.to_string()));
        }
    }

    /// Open the edit dialog for the current selection.
    ///
    /// Hotspots and text labels are editable; arrow and box shapes are
    /// adjusted by deleting and redrawing. Returns whether a dialog
    /// opened.
    pub fn edit_selection(&mut self) -> bool {
        if self.dialog.is_some() {
            return false;
        }
        match &self.selection {
            Some(Selection::Hotspot(id)) => {
                let Some(h) = self.topic.hotspot(id) else {
                    return false;
                };
                self.dialog = Some(Dialog::EditHotspot {
                    id: id.clone(),
                    draft: HotspotDraft::from_hotspot(h),
                });
                true
            }
            Some(Selection::Annotation(id)) => {
                let Some(Annotation::Text { x, y, text, color, .. }) =
                    self.topic.annotation(id)
                else {
                    return false;
                };
                self.dialog = Some(Dialog::EditText {
                    id: id.clone(),
                    draft: TextDraft {
                        at: Point::new(*x, *y),
                        text: text.clone(),
                        color: *color,
                    },
                });
                true
            }
            None => false,
        }
    }

    /// Confirm the open dialog.
    ///
    /// Validation failure keeps the dialog open and mutates nothing.
    /// Successful creation selects the new item, closes the dialog, and
    /// reverts the tool to select; successful edits replace by id.
    pub fn confirm_dialog(&mut self) -> Result<(), ValidationError> {
        let Some(dialog) = self.dialog.clone() else {
            return Ok(());
        };
        match dialog {
            Dialog::CreateHotspot(draft) => {
                let hotspot = Self::hotspot_from_draft(&draft, None)?;
                self.selection = Some(Selection::Hotspot(hotspot.id.clone()));
                self.topic.add_hotspot(hotspot);
                self.dialog = None;
                self.tools.set_tool(ToolKind::Select);
            }
            Dialog::EditHotspot { id, draft } => {
                let hotspot = Self::hotspot_from_draft(&draft, Some(id))?;
                // Silent no-op if the target vanished under the dialog.
                self.topic.replace_hotspot(hotspot);
                self.dialog = None;
            }
            Dialog::CreateText(draft) => {
                let label = Annotation::text(draft.at, draft.text.clone(), draft.color);
                label.validate()?;
                self.selection = Some(Selection::Annotation(label.id().to_string()));
                self.topic.add_annotation(label);
                self.dialog = None;
                self.tools.set_tool(ToolKind::Select);
            }
            Dialog::EditText { id, draft } => {
                let label = Annotation::Text {
                    id: id.clone(),
                    x: draft.at.x,
                    y: draft.at.y,
                    text: draft.text.clone(),
                    color: draft.color,
                };
                label.validate()?;
                self.topic.replace_annotation(label);
                self.dialog = None;
            }
        }
        Ok(())
    }

    /// Dismiss the open dialog without mutating the model.
    ///
    /// Unlike a successful commit, cancel leaves the active tool
    /// unchanged, so the user can immediately click again.
    pub fn cancel_dialog(&mut self) {
        self.dialog = None;
    }

    fn hotspot_from_draft(
        draft: &HotspotDraft,
        id: Option<String>,
    ) -> Result<Hotspot, ValidationError> {
        let mut h = Hotspot::new(draft.at, draft.label.clone(), draft.title.clone());
        if let Some(id) = id {
            h.id = id;
        }
        h.description = draft.description.clone();
        h.icon = draft.icon;
        h.color = draft.color;
        let fact = draft.fun_fact.trim();
        h.fun_fact = (!fact.is_empty()).then(|| fact.to_string());
        h.validate()?;
        Ok(h)
    }

    /// Keyboard shortcuts.
    ///
    /// Delete/Backspace removes the selected item, but is a no-op while
    /// a dialog is open since modal forms capture typing. Escape always
    /// applies: it abandons any drag, clears selection, and forces the
    /// tool back to select.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Delete | Key::Backspace => {
                if self.dialog.is_some() {
                    return;
                }
                self.delete_selection();
            }
            Key::Escape => {
                self.tools.cancel();
                self.hotspot_move = None;
                self.selection = None;
                self.tools.set_tool(ToolKind::Select);
            }
        }
    }

    /// Remove the selected item from its owning sequence.
    ///
    /// No selection, or a selection whose target already vanished,
    /// is a silent no-op.
    pub fn delete_selection(&mut self) {
        match self.selection.take() {
            Some(Selection::Hotspot(id)) => {
                self.topic.remove_hotspot(&id);
            }
            Some(Selection::Annotation(id)) => {
                self.topic.remove_annotation(&id);
            }
            None => {}
        }
        self.hotspot_move = None;
    }

    /// Start a save, enforcing at most one in flight.
    ///
    /// Returns the payload to transmit, or `None` when a save is
    /// already running. Editing may continue while the save resolves.
    pub fn begin_save(&mut self) -> Option<SavePayload> {
        if self.save == SaveState::Saving {
            return None;
        }
        self.save = SaveState::Saving;
        Some(SavePayload {
            hotspots: self.topic.hotspots.clone(),
            annotations: self.topic.annotations.clone(),
        })
    }

    /// Record the outcome of the in-flight save.
    ///
    /// Failure leaves the working copy untouched so the user can retry
    /// without re-entering work.
    pub fn finish_save(&mut self, result: Result<(), String>) {
        self.save = match result {
            Ok(()) => SaveState::Saved,
            Err(message) => SaveState::Failed(message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::AnnotationKind;

    fn session() -> EditorSession {
        EditorSession::new(Topic::new("Photosynthesis", "Plants make food from light."))
    }

    fn session_with_hotspot(id: &str, x: f64, y: f64) -> EditorSession {
        let mut topic = Topic::new("T", "c");
        let mut h = Hotspot::new(Point::new(x, y), "A", "Title");
        h.id = id.to_string();
        topic.add_hotspot(h);
        EditorSession::new(topic)
    }

    #[test]
    fn test_select_click_on_background_clears_selection() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));
        assert!(s.selection().is_some());
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
        assert!(s.selection().is_none());
    }

    #[test]
    fn test_arrow_drag_appends_and_reverts_tool() {
        let mut s = session();
        s.set_tool(ToolKind::Arrow);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(50.0, 50.0)));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));

        assert_eq!(s.topic().annotations.len(), 1);
        match &s.topic().annotations[0] {
            Annotation::Arrow { x, y, end_x, end_y, .. } => {
                assert_eq!((*x, *y, *end_x, *end_y), (10.0, 10.0, 50.0, 50.0));
            }
            _ => panic!("expected an arrow"),
        }
        assert_eq!(s.tool(), ToolKind::Select);
        assert_eq!(
            s.selection(),
            Some(&Selection::Annotation(
                s.topic().annotations[0].id().to_string()
            ))
        );
    }

    #[test]
    fn test_tiny_drag_discards_but_still_reverts_tool() {
        let mut s = session();
        s.set_tool(ToolKind::Box);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(60.0, 60.0)));
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(61.0, 61.0)));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(61.0, 61.0)));
        assert!(s.topic().annotations.is_empty());
        assert_eq!(s.tool(), ToolKind::Select);
    }

    #[test]
    fn test_pointer_leave_ends_drag_like_release() {
        let mut s = session();
        s.set_tool(ToolKind::Arrow);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(70.0, 10.0)));
        s.handle_canvas_pointer(PointerEvent::Leave);
        assert_eq!(s.topic().annotations.len(), 1);
        assert_eq!(s.tool(), ToolKind::Select);
    }

    #[test]
    fn test_hotspot_dialog_validation_keeps_dialog_open() {
        let mut s = session();
        s.set_tool(ToolKind::Hotspot);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(30.0, 40.0)));
        assert!(matches!(s.dialog(), Some(Dialog::CreateHotspot(_))));

        // Missing title: nothing appended, dialog stays, tool stays.
        if let Some(Dialog::CreateHotspot(draft)) = s.dialog_mut() {
            draft.label = "Sunlight".into();
        }
        assert_eq!(s.confirm_dialog(), Err(ValidationError::MissingTitle));
        assert!(s.dialog().is_some());
        assert!(s.topic().hotspots.is_empty());
        assert_eq!(s.tool(), ToolKind::Hotspot);
    }

    #[test]
    fn test_hotspot_dialog_commit_appends_selects_and_reverts() {
        let mut s = session();
        s.set_tool(ToolKind::Hotspot);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(30.0, 40.0)));
        if let Some(Dialog::CreateHotspot(draft)) = s.dialog_mut() {
            draft.label = "Sunlight".into();
            draft.title = "Light Energy".into();
            draft.color = PaletteColor::Warning;
        }
        assert_eq!(s.confirm_dialog(), Ok(()));

        assert_eq!(s.topic().hotspots.len(), 1);
        let h = &s.topic().hotspots[0];
        assert_eq!((h.x, h.y), (30.0, 40.0));
        assert_eq!(h.label, "Sunlight");
        assert_eq!(h.color, PaletteColor::Warning);
        assert_eq!(h.fun_fact, None);
        assert_eq!(s.selection(), Some(&Selection::Hotspot(h.id.clone())));
        assert!(s.dialog().is_none());
        assert_eq!(s.tool(), ToolKind::Select);
    }

    // Named behavior: commit reverts the tool, cancel does not.
    #[test]
    fn test_dialog_cancel_leaves_tool_unchanged() {
        let mut s = session();
        s.set_tool(ToolKind::Hotspot);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(30.0, 40.0)));
        s.cancel_dialog();
        assert!(s.dialog().is_none());
        assert!(s.topic().hotspots.is_empty());
        assert_eq!(s.tool(), ToolKind::Hotspot);
    }

    #[test]
    fn test_text_dialog_commit() {
        let mut s = session();
        s.set_tool(ToolKind::Text);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(20.0, 70.0)));
        assert_eq!(s.confirm_dialog(), Err(ValidationError::EmptyText));
        if let Some(Dialog::CreateText(draft)) = s.dialog_mut() {
            draft.text = "Chloroplast".into();
        }
        assert_eq!(s.confirm_dialog(), Ok(()));
        assert_eq!(s.topic().annotations.len(), 1);
        assert_eq!(s.topic().annotations[0].kind(), AnnotationKind::Text);
        assert_eq!(s.tool(), ToolKind::Select);
    }

    #[test]
    fn test_hotspot_drag_clamps_position() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(150.0, -20.0)));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(150.0, -20.0)));
        let h = s.topic().hotspot("hotspot-1").unwrap();
        assert_eq!((h.x, h.y), (98.0, 2.0));
    }

    #[test]
    fn test_hotspot_drag_keeps_grab_offset() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        // Grab 3 units right of center; marker should track that offset.
        s.pointer_down_on_hotspot("hotspot-1", Point::new(53.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(63.0, 50.0)));
        let h = s.topic().hotspot("hotspot-1").unwrap();
        assert_eq!((h.x, h.y), (60.0, 50.0));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));
        s.handle_key(Key::Delete);
        assert!(s.topic().hotspots.is_empty());
        assert!(s.selection().is_none());
        // Second delete with no selection leaves the model unchanged.
        s.handle_key(Key::Delete);
        assert!(s.topic().hotspots.is_empty());
    }

    #[test]
    fn test_delete_ignored_while_dialog_open() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));
        assert!(s.edit_selection());
        s.handle_key(Key::Delete);
        assert_eq!(s.topic().hotspots.len(), 1);
    }

    #[test]
    fn test_escape_clears_selection_and_reverts_tool() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));
        s.set_tool(ToolKind::Select);
        s.pointer_down_on_annotation("nope");
        s.handle_key(Key::Escape);
        assert!(s.selection().is_none());
        assert_eq!(s.tool(), ToolKind::Select);
    }

    #[test]
    fn test_escape_stops_hotspot_drag() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_key(Key::Escape);
        // The abandoned gesture must not keep tracking the pointer.
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(80.0, 80.0)));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(80.0, 80.0)));
        let h = s.topic().hotspot("hotspot-1").unwrap();
        assert_eq!((h.x, h.y), (50.0, 50.0));
        assert!(s.selection().is_none());
    }

    #[test]
    fn test_tool_change_away_from_select_clears_selection() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));
        s.set_tool(ToolKind::Arrow);
        assert!(s.selection().is_none());
    }

    #[test]
    fn test_edit_dialog_replaces_by_id_without_tool_change() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        s.pointer_down_on_hotspot("hotspot-1", Point::new(50.0, 50.0));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));
        assert!(s.edit_selection());
        if let Some(Dialog::EditHotspot { draft, .. }) = s.dialog_mut() {
            draft.title = "Revised".into();
            draft.fun_fact = "  The sun is a star.  ".into();
        }
        assert_eq!(s.confirm_dialog(), Ok(()));
        let h = s.topic().hotspot("hotspot-1").unwrap();
        assert_eq!(h.title, "Revised");
        assert_eq!(h.fun_fact.as_deref(), Some("The sun is a star."));
    }

    #[test]
    fn test_one_save_in_flight() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        let payload = s.begin_save().unwrap();
        assert_eq!(payload.hotspots.len(), 1);
        assert_eq!(s.save_state(), &SaveState::Saving);
        assert!(s.begin_save().is_none());

        s.finish_save(Err("connection refused".into()));
        assert_eq!(
            s.save_state(),
            &SaveState::Failed("connection refused".into())
        );
        // Failure preserves the working copy and allows retry.
        assert_eq!(s.topic().hotspots.len(), 1);
        assert!(s.begin_save().is_some());
        s.finish_save(Ok(()));
        assert_eq!(s.save_state(), &SaveState::Saved);
    }

    #[test]
    fn test_editing_continues_while_save_in_flight() {
        let mut s = session_with_hotspot("hotspot-1", 50.0, 50.0);
        let _ = s.begin_save().unwrap();
        s.set_tool(ToolKind::Arrow);
        s.handle_canvas_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
        s.handle_canvas_pointer(PointerEvent::Move(Point::new(40.0, 40.0)));
        s.handle_canvas_pointer(PointerEvent::Up(Point::new(40.0, 40.0)));
        assert_eq!(s.topic().annotations.len(), 1);
    }
}
