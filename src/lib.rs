pub mod bank;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::{
    llm_service::{GeminiService, TextGenerator},
    quiz_service::QuizService,
    tutor_service::TutorService,
};
use crate::views::Pages;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Headroom of the client-wide timeout over the per-request one.
const CLIENT_TIMEOUT_SLACK: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: QuizService,
    pub tutor_service: TutorService,
    pub pages: Pages,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, llm_timeout: Duration) -> Result<Self> {
        let quiz_service = QuizService::new(generator.clone(), llm_timeout);
        let tutor_service = TutorService::new(generator, llm_timeout);
        let pages = Pages::new()?;

        Ok(Self {
            quiz_service,
            tutor_service,
            pages,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.llm_timeout().saturating_add(CLIENT_TIMEOUT_SLACK))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let gemini = GeminiService::new(config, http_client)?;
        Self::new(Arc::new(gemini), config.llm_timeout())
    }
}
