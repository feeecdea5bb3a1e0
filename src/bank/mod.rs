//! Curated quiz questions served whenever generation fails or comes back short.
//!
//! The seed tables are plain static data; [`fallback_bank`] turns them into owned
//! [`QuizQuestion`]s once per process and hands out shared references afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::question::QuizQuestion;
use crate::models::subject::{Difficulty, Subject};

pub const QUESTIONS_PER_TIER: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct SeedQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: &'static str,
    pub tip: &'static str,
}

pub type Tier = [SeedQuestion; QUESTIONS_PER_TIER];

macro_rules! seed {
    ($question:expr, [$($opt:expr),+ $(,)?], $correct:expr, $tip:expr $(,)?) => {
        SeedQuestion {
            question: $question,
            options: &[$($opt),+],
            correct: $correct,
            tip: $tip,
        }
    };
}

mod ingles;
mod matematica;
mod naturales;
mod pdl;
mod sociales;

impl SeedQuestion {
    fn to_question(self) -> QuizQuestion {
        QuizQuestion {
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct: self.correct.to_string(),
            tip: self.tip.to_string(),
        }
    }
}

fn seeds(subject: Subject, difficulty: Difficulty) -> &'static Tier {
    match (subject, difficulty) {
        (Subject::Matematica, Difficulty::Facil) => &matematica::FACIL,
        (Subject::Matematica, Difficulty::Intermedio) => &matematica::INTERMEDIO,
        (Subject::Matematica, Difficulty::Desafiante) => &matematica::DESAFIANTE,
        (Subject::Pdl, Difficulty::Facil) => &pdl::FACIL,
        (Subject::Pdl, Difficulty::Intermedio) => &pdl::INTERMEDIO,
        (Subject::Pdl, Difficulty::Desafiante) => &pdl::DESAFIANTE,
        (Subject::CsNaturales, Difficulty::Facil) => &naturales::FACIL,
        (Subject::CsNaturales, Difficulty::Intermedio) => &naturales::INTERMEDIO,
        (Subject::CsNaturales, Difficulty::Desafiante) => &naturales::DESAFIANTE,
        (Subject::CsSociales, Difficulty::Facil) => &sociales::FACIL,
        (Subject::CsSociales, Difficulty::Intermedio) => &sociales::INTERMEDIO,
        (Subject::CsSociales, Difficulty::Desafiante) => &sociales::DESAFIANTE,
        (Subject::Ingles, Difficulty::Facil) => &ingles::FACIL,
        (Subject::Ingles, Difficulty::Intermedio) => &ingles::INTERMEDIO,
        (Subject::Ingles, Difficulty::Desafiante) => &ingles::DESAFIANTE,
    }
}

#[derive(Debug)]
pub struct FallbackBank {
    tiers: HashMap<Subject, HashMap<Difficulty, Vec<QuizQuestion>>>,
}

impl FallbackBank {
    fn build() -> Self {
        let tiers = Subject::ALL
            .into_iter()
            .map(|subject| {
                let by_level = Difficulty::ALL
                    .into_iter()
                    .map(|difficulty| {
                        let questions = seeds(subject, difficulty)
                            .iter()
                            .map(|s| s.to_question())
                            .collect();
                        (difficulty, questions)
                    })
                    .collect();
                (subject, by_level)
            })
            .collect();
        Self { tiers }
    }

    /// Always exactly [`QUESTIONS_PER_TIER`] questions, in their curated order.
    pub fn questions(&self, subject: Subject, difficulty: Difficulty) -> &[QuizQuestion] {
        self.tiers
            .get(&subject)
            .and_then(|by_level| by_level.get(&difficulty))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total_questions(&self) -> usize {
        self.tiers
            .values()
            .flat_map(|by_level| by_level.values())
            .map(Vec::len)
            .sum()
    }
}

static BANK: OnceLock<FallbackBank> = OnceLock::new();

pub fn fallback_bank() -> &'static FallbackBank {
    BANK.get_or_init(FallbackBank::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_ten_well_formed_questions() {
        let bank = fallback_bank();
        for subject in Subject::ALL {
            for difficulty in Difficulty::ALL {
                let questions = bank.questions(subject, difficulty);
                assert_eq!(questions.len(), QUESTIONS_PER_TIER, "{:?}/{:?}", subject, difficulty);
                for q in questions {
                    assert!(q.is_well_formed(), "{:?}/{:?}: {:?}", subject, difficulty, q);
                }
            }
        }
        assert_eq!(bank.total_questions(), 5 * 3 * QUESTIONS_PER_TIER);
    }

    #[test]
    fn lookups_are_stable_across_calls() {
        let first = fallback_bank().questions(Subject::Matematica, Difficulty::Facil).to_vec();
        let second = fallback_bank().questions(Subject::Matematica, Difficulty::Facil).to_vec();
        assert_eq!(first, second);
        assert_eq!(first[0].question, "¿Cuánto es 7 + 5?");
    }
}
