//! Coaching advice requests.
//!
//! Questions are posted to the coach service. Whatever goes wrong on the
//! way (transport error, non-2xx status, unreadable body, no advice in the
//! reply) the learner gets the fixed fallback advice and the failure is
//! only logged.

use serde::{Deserialize, Serialize};

use super::catalog::SkillLevel;

/// Route of the advice endpoint, relative to the service base URL.
pub const ADVICE_ROUTE: &str = "/api/coach/advice";

/// Advice shown whenever the service cannot answer.
pub const FALLBACK_ADVICE: &str = "As a poker coach, I'd recommend focusing on position, pot odds, and hand selection. These are fundamental concepts that will improve your game the most.";

/// Request body for the advice endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceRequest<'a> {
    pub question: &'a str,
    pub skill_level: SkillLevel,
    pub context: &'a str,
}

impl<'a> AdviceRequest<'a> {
    pub fn general(question: &'a str, skill_level: SkillLevel) -> Self {
        Self { question, skill_level, context: "general" }
    }
}

/// Response body of the advice endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub advice: Option<String>,
}

/// Where the coach service lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub base_url: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:5000".to_string() }
    }
}

impl CoachConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Errors surfaced to the learner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoachError {
    #[error("Please enter a question for the coach")]
    EmptyQuestion,
}

/// Why a request fell back. Logged, never returned.
#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("response carried no advice")]
    NoAdvice,
}

/// Client for the coach service.
#[derive(Debug, Clone)]
pub struct CoachClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CoachClient {
    pub fn new(config: &CoachConfig) -> Self {
        let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), ADVICE_ROUTE);
        Self { http: reqwest::Client::new(), endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the coach a question.
    ///
    /// Returns `Err(CoachError::EmptyQuestion)` without sending anything if
    /// the question is blank. A non-blank question is sent as typed. Otherwise always returns advice: the service's
    /// answer, or [`FALLBACK_ADVICE`] when the service fails.
    pub async fn ask(&self, question: &str, skill_level: SkillLevel) -> Result<String, CoachError> {
        if question.trim().is_empty() {
            return Err(CoachError::EmptyQuestion);
        }

        match self.fetch(&AdviceRequest::general(question, skill_level)).await {
            Ok(advice) => Ok(advice),
            Err(e) => {
                log::error!("Error getting coach advice: {}", e);
                Ok(FALLBACK_ADVICE.to_string())
            }
        }
    }

    async fn fetch(&self, request: &AdviceRequest<'_>) -> Result<String, FetchError> {
        log::debug!("POST {} ({})", self.endpoint, request.skill_level);
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: AdviceResponse = response.json().await?;
        body.advice
            .filter(|advice| !advice.is_empty())
            .ok_or(FetchError::NoAdvice)
    }
}
