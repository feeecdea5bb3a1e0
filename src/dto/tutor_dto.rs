use serde::Deserialize;
use validator::Validate;

pub const MIN_QUESTION_CHARS: usize = 3;
pub const MAX_QUESTION_CHARS: usize = 500;

/// Raw `POST /buscar` form body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TutorForm {
    #[serde(default)]
    pub duda: String,
}

#[derive(Debug, Clone, Validate)]
pub struct TutorRequest {
    #[validate(length(min = 3, max = 500))]
    pub duda: String,
}

impl TutorRequest {
    /// Trims the submitted question and checks its length in characters.
    pub fn from_form(form: TutorForm) -> crate::error::Result<Self> {
        let request = Self {
            duda: form.duda.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }
}
