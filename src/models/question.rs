use serde::Serialize;

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;

/// One multiple-choice quiz item, ready for display.
///
/// `options` is in display order and always contains `correct` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: String,
    pub tip: String,
}

impl QuizQuestion {
    pub fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty()
            && (MIN_OPTIONS..=MAX_OPTIONS).contains(&self.options.len())
            && self.options.iter().all(|o| !o.trim().is_empty())
            && self.options.contains(&self.correct)
            && !self.tip.trim().is_empty()
    }
}
