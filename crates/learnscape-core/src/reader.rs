//! Read-mode hotspot activation.
//!
//! Readers click markers to reveal their content; annotations are
//! inert in this mode. This path is separate from the editor's
//! select/drag handling and shares no state with it.

use crate::overlay::Hotspot;
use crate::topic::Topic;

/// Content revealed when a marker is activated.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotDetail {
    pub label: String,
    pub title: String,
    pub description: String,
    pub fun_fact: Option<String>,
}

impl HotspotDetail {
    fn of(hotspot: &Hotspot) -> Self {
        Self {
            label: hotspot.label.clone(),
            title: hotspot.title.clone(),
            description: hotspot.description.clone(),
            fun_fact: hotspot.fun_fact.clone(),
        }
    }
}

/// One topic open for reading, tracking which marker is revealed.
#[derive(Debug)]
pub struct ReaderView {
    topic: Topic,
    active: Option<String>,
}

impl ReaderView {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            active: None,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Activate a marker, returning its detail content. Activating an
    /// unknown id is a no-op and dismisses nothing.
    pub fn activate(&mut self, hotspot_id: &str) -> Option<HotspotDetail> {
        let detail = self.topic.hotspot(hotspot_id).map(HotspotDetail::of)?;
        self.active = Some(hotspot_id.to_string());
        Some(detail)
    }

    /// Toggle semantics: activating the already-open marker closes it.
    pub fn toggle(&mut self, hotspot_id: &str) -> Option<HotspotDetail> {
        if self.active.as_deref() == Some(hotspot_id) {
            self.active = None;
            return None;
        }
        self.activate(hotspot_id)
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }

    pub fn active_detail(&self) -> Option<HotspotDetail> {
        let id = self.active.as_deref()?;
        self.topic.hotspot(id).map(HotspotDetail::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::Hotspot;
    use kurbo::Point;

    fn topic() -> Topic {
        let mut t = Topic::new("Water Cycle", "Evaporation and rain.");
        let mut h = Hotspot::new(Point::new(30.0, 40.0), "Sun", "The Sun");
        h.id = "hotspot-1".into();
        h.description = "Drives evaporation.".into();
        h.fun_fact = Some("It is quite large.".into());
        t.add_hotspot(h);
        t
    }

    #[test]
    fn test_activation_reveals_content() {
        let mut view = ReaderView::new(topic());
        let detail = view.activate("hotspot-1").unwrap();
        assert_eq!(detail.title, "The Sun");
        assert_eq!(detail.fun_fact.as_deref(), Some("It is quite large."));
        assert!(view.active_detail().is_some());
    }

    #[test]
    fn test_unknown_id_keeps_current_panel() {
        let mut view = ReaderView::new(topic());
        view.activate("hotspot-1");
        assert!(view.activate("hotspot-404").is_none());
        assert!(view.active_detail().is_some());
    }

    #[test]
    fn test_toggle_closes_open_panel() {
        let mut view = ReaderView::new(topic());
        assert!(view.toggle("hotspot-1").is_some());
        assert!(view.toggle("hotspot-1").is_none());
        assert!(view.active_detail().is_none());
    }
}
