use serde::Serialize;

use crate::models::question::QuizQuestion;

/// `GET /test` query string. Both fields are optional and never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizParams {
    pub materia: Option<String>,
    pub nivel: Option<String>,
}

impl QuizParams {
    /// Reads the raw query leniently: the first occurrence of each key wins,
    /// unknown keys are ignored and undecodable bytes are replaced.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(query) = query else {
            return params;
        };

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "materia" => &mut params.materia,
                "nivel" => &mut params.nivel,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

/// Everything the quiz view needs.
#[derive(Debug, Clone, Serialize)]
pub struct QuizPage {
    pub materia: String,
    pub materias: Vec<&'static str>,
    pub preguntas: Vec<QuizQuestion>,
    pub nivel: &'static str,
    pub nivel_label: &'static str,
}
