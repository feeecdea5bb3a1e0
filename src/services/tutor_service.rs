use std::sync::Arc;
use std::time::Duration;

use crate::dto::tutor_dto::TutorRequest;
use crate::models::markup::Markup;
use crate::services::llm_service::{generate_bounded, TextGenerator};
use crate::services::parser_service::strip_wrapping_fence;
use crate::services::prompt_service::build_tutor_prompt;

pub const RETRY_WARNING: &str = r#"<p class="warning">⚠️ No pude preparar la explicación en este momento. Esperá unos segundos y volvé a intentarlo.</p>"#;

#[derive(Clone)]
pub struct TutorService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl TutorService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// The model's HTML answer, or [`RETRY_WARNING`] when the call fails or
    /// returns nothing.
    pub async fn explain(&self, request: &TutorRequest) -> Markup {
        let prompt = build_tutor_prompt(&request.duda);

        match generate_bounded(self.generator.as_ref(), &prompt, self.timeout).await {
            Ok(text) => {
                let answer = strip_wrapping_fence(&text, "html");
                if answer.is_empty() {
                    tracing::warn!("Tutor answer came back empty");
                    Markup::trusted(RETRY_WARNING)
                } else {
                    Markup::trusted(answer)
                }
            }
            Err(e) => {
                tracing::error!("Tutor generation failed: {}", e);
                Markup::trusted(RETRY_WARNING)
            }
        }
    }
}
