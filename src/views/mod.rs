//! Server-rendered pages.
//!
//! Templates are registered under `.html` names so Tera autoescapes every
//! value; the tutor answer is the only one marked `safe`.

use std::sync::Arc;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::dto::quiz_dto::QuizPage;
use crate::dto::tutor_dto::{MAX_QUESTION_CHARS, MIN_QUESTION_CHARS};
use crate::error::Result;
use crate::models::markup::Markup;
use crate::models::subject::Difficulty;

pub const APP_NAME: &str = "GATTO";

const SUGGESTIONS: [&str; 4] = [
    "¿Qué es la fotosíntesis?",
    "¿Cómo se suman fracciones?",
    "¿Por qué llueve?",
    "¿Qué es un sustantivo?",
];

const LAYOUT_TEMPLATE: &str = include_str!("../../templates/layout.html");
const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const ANSWER_TEMPLATE: &str = include_str!("../../templates/answer.html");
const QUIZ_TEMPLATE: &str = include_str!("../../templates/quiz.html");

#[derive(Serialize)]
struct LevelOption {
    key: &'static str,
    label: &'static str,
}

#[derive(Clone)]
pub struct Pages {
    tera: Arc<Tera>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", LAYOUT_TEMPLATE),
            ("home.html", HOME_TEMPLATE),
            ("answer.html", ANSWER_TEMPLATE),
            ("quiz.html", QUIZ_TEMPLATE),
        ])?;
        Ok(Self { tera: Arc::new(tera) })
    }

    pub fn home(&self) -> Result<Html<String>> {
        let mut context = base_context();
        context.insert("min", &MIN_QUESTION_CHARS);
        context.insert("max", &MAX_QUESTION_CHARS);
        context.insert("suggestions", &SUGGESTIONS);
        self.render("home.html", &context)
    }

    pub fn answer(&self, duda: &str, respuesta: &Markup) -> Result<Html<String>> {
        let mut context = base_context();
        context.insert("duda", duda);
        context.insert("respuesta", respuesta.as_str());
        self.render("answer.html", &context)
    }

    pub fn quiz(&self, page: &QuizPage) -> Result<Html<String>> {
        let niveles: Vec<LevelOption> = Difficulty::ALL
            .iter()
            .map(|d| LevelOption {
                key: d.key(),
                label: d.label(),
            })
            .collect();

        let mut context = base_context();
        context.insert("page", page);
        context.insert("niveles", &niveles);
        self.render("quiz.html", &context)
    }

    fn render(&self, name: &str, context: &Context) -> Result<Html<String>> {
        Ok(Html(self.tera.render(name, context)?))
    }
}

fn base_context() -> Context {
    let mut context = Context::new();
    context.insert("app", APP_NAME);
    context
}
