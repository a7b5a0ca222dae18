//! Persistence abstraction for chapters and topics.

mod memory;

pub use memory::MemoryStore;

use crate::editor::SavePayload;
use crate::topic::{Chapter, Topic};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),
    #[error("Topic not found: {0}")]
    TopicNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Store error: {0}")]
    Other(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for chapter persistence backends.
///
/// Implementations can keep chapters in memory or behind a remote API.
/// Topic saves are full-replace: the payload's hotspot and annotation
/// sequences overwrite the stored ones for that topic.
pub trait TopicStore: Send + Sync {
    /// Save a whole chapter.
    fn save_chapter(&self, chapter: &Chapter) -> BoxFuture<'_, StoreResult<()>>;

    /// Load a chapter by id.
    fn load_chapter(&self, id: &str) -> BoxFuture<'_, StoreResult<Chapter>>;

    /// List all chapters.
    fn list_chapters(&self) -> BoxFuture<'_, StoreResult<Vec<Chapter>>>;

    /// Delete a chapter.
    fn delete_chapter(&self, id: &str) -> BoxFuture<'_, StoreResult<()>>;

    /// Replace one topic's overlay sequences.
    fn save_topic(
        &self,
        chapter_id: &str,
        topic_id: &str,
        payload: &SavePayload,
    ) -> BoxFuture<'_, StoreResult<()>>;

    /// Load one topic.
    fn load_topic(&self, chapter_id: &str, topic_id: &str) -> BoxFuture<'_, StoreResult<Topic>>;
}
