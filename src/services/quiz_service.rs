use std::sync::Arc;
use std::time::Duration;

use crate::bank::{fallback_bank, QUESTIONS_PER_TIER};
use crate::models::question::QuizQuestion;
use crate::models::subject::{Difficulty, Subject};
use crate::services::llm_service::{generate_bounded, TextGenerator};
use crate::services::parser_service::{extract_json_payload, question_records};
use crate::services::prompt_service::build_quiz_prompt;
use crate::services::sanitize_service::normalize_questions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub subject: Subject,
    pub difficulty: Difficulty,
    pub questions: Vec<QuizQuestion>,
    pub source: QuizSource,
}

impl Quiz {
    pub fn fallback(subject: Subject, difficulty: Difficulty) -> Self {
        Self {
            subject,
            difficulty,
            questions: fallback_bank().questions(subject, difficulty).to_vec(),
            source: QuizSource::Fallback,
        }
    }
}

#[derive(Clone)]
pub struct QuizService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl QuizService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Always returns exactly [`QUESTIONS_PER_TIER`] questions: a generated
    /// set when the model delivers enough valid ones, otherwise the curated
    /// bank entry. The two sources are never mixed.
    pub async fn build_quiz(&self, subject: Subject, difficulty: Difficulty) -> Quiz {
        let generated = self.generate_questions(subject, difficulty).await;

        if generated.len() >= QUESTIONS_PER_TIER {
            tracing::info!(
                subject = subject.name(),
                level = difficulty.key(),
                "Generated quiz with {} valid questions",
                generated.len()
            );
            let mut questions = generated;
            questions.truncate(QUESTIONS_PER_TIER);
            return Quiz {
                subject,
                difficulty,
                questions,
                source: QuizSource::Generated,
            };
        }

        tracing::warn!(
            subject = subject.name(),
            level = difficulty.key(),
            "Only {} valid generated questions, serving fallback bank",
            generated.len()
        );
        Quiz::fallback(subject, difficulty)
    }

    async fn generate_questions(&self, subject: Subject, difficulty: Difficulty) -> Vec<QuizQuestion> {
        let prompt = match build_quiz_prompt(subject, difficulty) {
            Ok(prompt) => prompt,
            Err(e) => {
                tracing::error!("Quiz prompt could not be rendered: {}", e);
                return vec![];
            }
        };

        let raw = match generate_bounded(self.generator.as_ref(), &prompt, self.timeout).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Quiz generation failed: {}", e);
                return vec![];
            }
        };

        match extract_json_payload(&raw) {
            Some(payload) => normalize_questions(question_records(&payload)),
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use async_trait::async_trait;
    use serde_json::json;

    struct Canned(std::result::Result<String, ()>);

    #[async_trait]
    impl TextGenerator for Canned {
        async fn generate(&self, _prompt: &str, _timeout: Duration) -> std::result::Result<String, LlmError> {
            self.0
                .clone()
                .map_err(|_| LlmError::Malformed("canned failure".into()))
        }
    }

    fn service(reply: std::result::Result<String, ()>) -> QuizService {
        QuizService::new(Arc::new(Canned(reply)), Duration::from_secs(30))
    }

    #[tokio::test]
    async fn repaired_records_still_count_towards_ten() {
        let records: Vec<_> = (0..10)
            .map(|i| {
                json!({
                    "question": format!(" Pregunta {} ", i),
                    "options": ["uno", "dos", "tres", "cuatro", "cinco"],
                    "correct": "seis",
                    "tip": ""
                })
            })
            .collect();
        let quiz = service(Ok(json!({ "questions": records }).to_string()))
            .build_quiz(Subject::Ingles, Difficulty::Intermedio)
            .await;

        assert_eq!(quiz.source, QuizSource::Generated);
        assert_eq!(quiz.questions.len(), QUESTIONS_PER_TIER);
        for q in &quiz.questions {
            assert!(q.is_well_formed());
            assert_eq!(q.options, vec!["uno", "dos", "tres", "seis"]);
        }
    }

    #[tokio::test]
    async fn invalid_records_push_the_count_below_ten() {
        let mut records: Vec<_> = (0..10)
            .map(|i| json!({"question": format!("q{}", i), "options": ["a", "b"], "correct": "a"}))
            .collect();
        records[3] = json!({"question": "", "options": ["a", "b"], "correct": "a"});

        let quiz = service(Ok(serde_json::to_string(&records).unwrap()))
            .build_quiz(Subject::Matematica, Difficulty::Desafiante)
            .await;

        assert_eq!(quiz.source, QuizSource::Fallback);
        assert_eq!(
            quiz.questions,
            fallback_bank().questions(Subject::Matematica, Difficulty::Desafiante)
        );
    }

    #[tokio::test]
    async fn provider_error_serves_fallback() {
        let quiz = service(Err(()))
            .build_quiz(Subject::CsNaturales, Difficulty::Facil)
            .await;
        assert_eq!(quiz.source, QuizSource::Fallback);
        assert_eq!(quiz.questions.len(), QUESTIONS_PER_TIER);
        assert!(quiz.questions.iter().all(QuizQuestion::is_well_formed));
    }
}
