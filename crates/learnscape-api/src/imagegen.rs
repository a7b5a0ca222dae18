//! Illustration generation: job submission and status polling.

use crate::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Image models the generation service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageModel {
    #[default]
    NanoBananaPro,
    FluxKontextPro,
    FluxKontextMax,
    FourOImage,
}

impl ImageModel {
    /// The wire id.
    pub fn name(&self) -> &'static str {
        match self {
            ImageModel::NanoBananaPro => "nano-banana-pro",
            ImageModel::FluxKontextPro => "flux-kontext-pro",
            ImageModel::FluxKontextMax => "flux-kontext-max",
            ImageModel::FourOImage => "4o-image",
        }
    }

    pub fn all() -> &'static [ImageModel] {
        &[
            ImageModel::NanoBananaPro,
            ImageModel::FluxKontextPro,
            ImageModel::FluxKontextMax,
            ImageModel::FourOImage,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub aspect_ratio: String,
    pub output_format: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, model: ImageModel) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.name().to_string(),
            aspect_ratio: "16:9".to_string(),
            output_format: "png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSubmitted {
    pub task_id: String,
    pub status: String,
    pub message: String,
}

/// One poll of the generation job.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskStatus {
    pub task_id: String,
    pub status: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// What a polled status means for the polling loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Done { image_url: Option<String> },
    Failed { message: String },
}

impl TaskStatus {
    /// Classify a status report. An image URL counts as completion even
    /// when the status string lags behind.
    pub fn state(&self) -> TaskState {
        if self.status == "completed" || self.status == "success" || self.image_url.is_some() {
            return TaskState::Done {
                image_url: self.image_url.clone(),
            };
        }
        if self.status == "failed" || self.status == "error" {
            let message = if self.message.is_empty() {
                "image generation failed".to_string()
            } else {
                self.message.clone()
            };
            return TaskState::Failed { message };
        }
        TaskState::Pending
    }
}

/// Polling bounds: 60 attempts, 2 seconds apart (2 minutes max).
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval: Duration::from_secs(2),
        }
    }
}

impl ApiClient {
    /// Submit a generation job, returning its task id.
    pub fn submit_image(&self, request: &GenerationRequest) -> Result<GenerationSubmitted, ApiError> {
        let resp = self
            .agent()
            .post(&self.endpoint("generate-image"))
            .send_json(request)
            .map_err(ApiError::from)?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Poll a job once.
    pub fn image_status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        let resp = self
            .agent()
            .get(&self.endpoint(&format!("image-status/{task_id}")))
            .call()
            .map_err(ApiError::from)?;
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Poll until the job resolves, sleeping between attempts.
    ///
    /// Returns the image URL on completion. Exhausting the attempt
    /// budget is a terminal [`ApiError::TimedOut`]; transient poll
    /// failures consume an attempt rather than aborting.
    pub fn wait_for_image(
        &self,
        task_id: &str,
        config: PollConfig,
    ) -> Result<Option<String>, ApiError> {
        for attempt in 0..config.max_attempts {
            if attempt > 0 {
                std::thread::sleep(config.interval);
            }
            let status = match self.image_status(task_id) {
                Ok(status) => status,
                Err(err) => {
                    log::warn!("image status poll failed: {err}");
                    continue;
                }
            };
            match status.state() {
                TaskState::Pending => {}
                TaskState::Done { image_url } => return Ok(image_url),
                TaskState::Failed { message } => {
                    return Err(ApiError::GenerationFailed(message));
                }
            }
        }
        Err(ApiError::TimedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: &str, image_url: Option<&str>) -> TaskStatus {
        TaskStatus {
            task_id: "task-1".into(),
            status: status.into(),
            image_url: image_url.map(str::to_string),
            message: String::new(),
        }
    }

    #[test]
    fn test_terminal_states() {
        assert_eq!(
            status("completed", Some("https://img/1.png")).state(),
            TaskState::Done {
                image_url: Some("https://img/1.png".into())
            }
        );
        assert_eq!(
            status("success", None).state(),
            TaskState::Done { image_url: None }
        );
        assert!(matches!(
            status("failed", None).state(),
            TaskState::Failed { .. }
        ));
        assert!(matches!(
            status("error", None).state(),
            TaskState::Failed { .. }
        ));
    }

    #[test]
    fn test_url_counts_as_completion() {
        assert_eq!(
            status("processing", Some("https://img/2.png")).state(),
            TaskState::Done {
                image_url: Some("https://img/2.png".into())
            }
        );
    }

    #[test]
    fn test_unknown_status_is_pending() {
        assert_eq!(status("queued", None).state(), TaskState::Pending);
        assert_eq!(status("processing", None).state(), TaskState::Pending);
    }

    #[test]
    fn test_request_defaults() {
        let req = GenerationRequest::new("a sunny meadow", ImageModel::default());
        assert_eq!(req.model, "nano-banana-pro");
        assert_eq!(req.aspect_ratio, "16:9");
        assert_eq!(req.output_format, "png");
    }
}
