//! Chapter API client.

use crate::ApiError;
use learnscape_core::editor::SavePayload;
use learnscape_core::store::{BoxFuture, StoreError, StoreResult, TopicStore};
use learnscape_core::topic::{Chapter, Topic};
use serde::{Deserialize, Serialize};

/// Request body for creating a chapter from pasted content.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterCreate {
    pub title: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw text the backend parses into topics.
    pub content: String,
}

/// Body of a topic overlay save. The backend merges set fields into the
/// stored topic, so sending only the two sequences is a full replace of
/// the overlay state and nothing else.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TopicOverlayUpdate<'a> {
    hotspots: &'a [learnscape_core::Hotspot],
    annotations: &'a [learnscape_core::Annotation],
}

#[derive(Debug, Deserialize)]
struct TopicUpdateResponse {
    topic: Topic,
}

/// Blocking HTTP client for the chapter backend.
pub struct ApiClient {
    agent: ureq::Agent,
    base: String,
}

impl ApiClient {
    /// Create a client for a backend root, e.g. `https://host/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            agent: ureq::Agent::new(),
            base,
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    pub(crate) fn agent(&self) -> &ureq::Agent {
        &self.agent
    }

    pub fn list_chapters(&self) -> Result<Vec<Chapter>, ApiError> {
        let resp = self
            .agent
            .get(&self.endpoint("chapters"))
            .call()
            .map_err(ApiError::from)?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn get_chapter(&self, chapter_id: &str) -> Result<Chapter, ApiError> {
        let resp = self
            .agent
            .get(&self.endpoint(&format!("chapters/{chapter_id}")))
            .call()
            .map_err(ApiError::from)?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create a chapter; the backend splits `content` into topics and
    /// seeds starter hotspots.
    pub fn create_chapter(&self, request: &ChapterCreate) -> Result<Chapter, ApiError> {
        let resp = self
            .agent
            .post(&self.endpoint("chapters"))
            .send_json(request)
            .map_err(ApiError::from)?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn delete_chapter(&self, chapter_id: &str) -> Result<(), ApiError> {
        self.agent
            .delete(&self.endpoint(&format!("chapters/{chapter_id}")))
            .call()
            .map_err(ApiError::from)?;
        Ok(())
    }

    /// Replace one topic's overlay sequences, returning the stored topic.
    pub fn save_topic(
        &self,
        chapter_id: &str,
        topic_id: &str,
        payload: &SavePayload,
    ) -> Result<Topic, ApiError> {
        log::debug!(
            "saving topic {topic_id}: {} hotspots, {} annotations",
            payload.hotspots.len(),
            payload.annotations.len()
        );
        let resp = self
            .agent
            .put(&self.endpoint(&format!("chapters/{chapter_id}/topics/{topic_id}")))
            .send_json(TopicOverlayUpdate {
                hotspots: &payload.hotspots,
                annotations: &payload.annotations,
            })
            .map_err(ApiError::from)?;
        let body: TopicUpdateResponse = resp
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.topic)
    }
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { code: 404, message } => StoreError::ChapterNotFound(message),
            ApiError::Decode(message) => StoreError::Serialization(message),
            other => StoreError::Transport(other.to_string()),
        }
    }
}

/// [`TopicStore`] backed by the remote API, so the editor shell can be
/// handed either this or an in-memory store.
pub struct RemoteStore {
    client: ApiClient,
}

impl RemoteStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl TopicStore for RemoteStore {
    fn save_chapter(&self, chapter: &Chapter) -> BoxFuture<'_, StoreResult<()>> {
        let request = ChapterCreate {
            title: chapter.title.clone(),
            subject: chapter.subject.clone(),
            description: chapter.description.clone(),
            content: String::new(),
        };
        Box::pin(async move {
            self.client.create_chapter(&request)?;
            Ok(())
        })
    }

    fn load_chapter(&self, id: &str) -> BoxFuture<'_, StoreResult<Chapter>> {
        let id = id.to_string();
        Box::pin(async move { Ok(self.client.get_chapter(&id)?) })
    }

    fn list_chapters(&self) -> BoxFuture<'_, StoreResult<Vec<Chapter>>> {
        Box::pin(async move { Ok(self.client.list_chapters()?) })
    }

    fn delete_chapter(&self, id: &str) -> BoxFuture<'_, StoreResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.client.delete_chapter(&id)?;
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
            self.client.save_topic(&chapter_id, &topic_id, &payload)?;
            Ok(())
        })
    }

    fn load_topic(&self, chapter_id: &str, topic_id: &str) -> BoxFuture<'_, StoreResult<Topic>> {
        let chapter_id = chapter_id.to_string();
        let topic_id = topic_id.to_string();
        Box::pin(async move {
            let chapter = self.client.get_chapter(&chapter_id)?;
            chapter
                .topic(&topic_id)
                .cloned()
                .ok_or(StoreError::TopicNotFound(topic_id))
        })
    }
}
