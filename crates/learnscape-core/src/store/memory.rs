//! In-memory chapter store.

use super::{BoxFuture, StoreError, StoreResult, TopicStore};
use crate::editor::SavePayload;
use crate::topic::{Chapter, Topic};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory store for testing and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    chapters: RwLock<HashMap<String, Chapter>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TopicStore for MemoryStore {
    fn save_chapter(&self, chapter: &Chapter) -> BoxFuture<'_, StoreResult<()>> {
        let chapter = chapter.clone();
        Box::pin(async move {
            let mut chapters = self
                .chapters
                .write()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            log::debug!("storing chapter {}", chapter.id);
            chapters.insert(chapter.id.clone(), chapter);
            Ok(())
        })
    }

    fn load_chapter(&self, id: &str) -> BoxFuture<'_, StoreResult<Chapter>> {
        let id = id.to_string();
        Box::pin(async move {
            let chapters = self
                .chapters
                .read()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            chapters
                .get(&id)
                .cloned()
                .ok_or(StoreError::ChapterNotFound(id))
        })
    }

    fn list_chapters(&self) -> BoxFuture<'_, StoreResult<Vec<Chapter>>> {
        Box::pin(async move {
            let chapters = self
                .chapters
                .read()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            let mut all: Vec<Chapter> = chapters.values().cloned().collect();
            all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(all)
        })
    }

    fn delete_chapter(&self, id: &str) -> BoxFuture<'_, StoreResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut chapters = self
                .chapters
                .write()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            chapters.remove(&id);
            Ok(())
        })
    }

    fn save_topic(
        &self,
        chapter_id: &str,
        topic_id: &str,
        payload: &SavePayload,
    ) -> BoxFuture<'_, StoreResult<()>> {
        let chapter_id = chapter_id.to_string();
        let topic_id = topic_id.to_string();
        let payload = payload.clone();
        Box::pin(async move {
            let mut chapters = self
                .chapters
                .write()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            let chapter = chapters
                .get_mut(&chapter_id)
                .ok_or(StoreError::ChapterNotFound(chapter_id))?;
            let topic = chapter
                .topic_mut(&topic_id)
                .ok_or(StoreError::TopicNotFound(topic_id))?;
            log::debug!(
                "replacing overlays for topic {}: {} hotspots, {} annotations",
                topic.id,
                payload.hotspots.len(),
                payload.annotations.len()
            );
            topic.hotspots = payload.hotspots;
            topic.annotations = payload.annotations;
            Ok(())
        })
    }

    fn load_topic(&self, chapter_id: &str, topic_id: &str) -> BoxFuture<'_, StoreResult<Topic>> {
        let chapter_id = chapter_id.to_string();
        let topic_id = topic_id.to_string();
        Box::pin(async move {
            let chapters = self
                .chapters
                .read()
                .map_err(|e| StoreError::Other(format!("Lock error: {}", e)))?;
            let chapter = chapters
                .get(&chapter_id)
                .ok_or(StoreError::ChapterNotFound(chapter_id))?;
            chapter
                .topic(&topic_id)
                .cloned()
                .ok_or(StoreError::TopicNotFound(topic_id))
        })
    }
}
