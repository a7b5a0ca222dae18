//! Chapter and topic documents.

use crate::overlay::{Annotation, Hotspot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One illustrated page: body text, an illustration, and its overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    /// Illustration image URL, if one has been generated or attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illustration_prompt: Option<String>,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Topic {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            subtitle: None,
            content: content.into(),
            illustration: None,
            illustration_prompt: None,
            hotspots: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    pub fn annotation(&self, id: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id() == id)
    }

    pub fn add_hotspot(&mut self, hotspot: Hotspot) {
        self.hotspots.push(hotspot);
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Replace the hotspot with the same id, preserving list order.
    ///
    /// Returns false (and leaves the list untouched) if no entry matches.
    pub fn replace_hotspot(&mut self, hotspot: Hotspot) -> bool {
        match self.hotspots.iter_mut().find(|h| h.id == hotspot.id) {
            Some(slot) => {
                *slot = hotspot;
                true
            }
            None => false,
        }
    }

    /// Replace the annotation with the same id, preserving list order.
    pub fn replace_annotation(&mut self, annotation: Annotation) -> bool {
        match self
            .annotations
            .iter_mut()
            .find(|a| a.id() == annotation.id())
        {
            Some(slot) => {
                *slot = annotation;
                true
            }
            None => false,
        }
    }

    pub fn remove_hotspot(&mut self, id: &str) -> bool {
        let before = self.hotspots.len();
        self.hotspots.retain(|h| h.id != id);
        self.hotspots.len() != before
    }

    pub fn remove_annotation(&mut self, id: &str) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id() != id);
        self.annotations.len() != before
    }
}

/// An ordered collection of topics under one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    pub created_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            subject: subject.into(),
            description: None,
            topics: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn topic_mut(&mut self, id: &str) -> Option<&mut Topic> {
        self.topics.iter_mut().find(|t| t.id == id)
    }
}
