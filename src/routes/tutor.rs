use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

use crate::dto::tutor_dto::{TutorForm, TutorRequest};
use crate::error::Result;
use crate::AppState;

/// `POST /buscar`. Questions outside the accepted length, and bodies that are
/// not a readable form, bounce back to the home page without an error message.
#[axum::debug_handler]
pub async fn buscar(
    State(state): State<AppState>,
    form: std::result::Result<Form<TutorForm>, FormRejection>,
) -> Result<Response> {
    let Ok(Form(form)) = form else {
        return Ok(back_home());
    };
    let request = match TutorRequest::from_form(form) {
        Ok(request) => request,
        Err(_) => return Ok(back_home()),
    };

    let respuesta = state.tutor_service.explain(&request).await;
    Ok(state.pages.answer(&request.duda, &respuesta)?.into_response())
}

/// 302 Found back to `/`.
fn back_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
