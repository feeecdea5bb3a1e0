use axum::{
    extract::{RawQuery, State},
    response::Html,
};

use crate::dto::quiz_dto::{QuizPage, QuizParams};
use crate::error::{Error, Result};
use crate::models::subject::{Difficulty, Subject};
use crate::services::quiz_service::Quiz;
use crate::AppState;

/// `GET /test?materia=..&nivel=..`. Always renders a full quiz, whatever the
/// query string looks like.
#[axum::debug_handler]
pub async fn test_page(State(state): State<AppState>, RawQuery(query): RawQuery) -> Result<Html<String>> {
    let params = QuizParams::from_query(query.as_deref());
    let subject = Subject::resolve(params.materia.as_deref());
    let difficulty = Difficulty::resolve(params.nivel.as_deref());

    // A panicking generation task still yields a quiz.
    let service = state.quiz_service.clone();
    let quiz = match tokio::spawn(async move { service.build_quiz(subject, difficulty).await }).await {
        Ok(quiz) => quiz,
        Err(e) => {
            let err = Error::Internal(format!("quiz task aborted: {}", e));
            tracing::error!("{}; serving fallback bank", err);
            Quiz::fallback(subject, difficulty)
        }
    };

    let page = QuizPage {
        materia: subject.name().to_string(),
        materias: Subject::names(),
        preguntas: quiz.questions,
        nivel: difficulty.key(),
        nivel_label: difficulty.label(),
    };
    state.pages.quiz(&page)
}
