#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Matematica,
    Pdl,
    CsNaturales,
    CsSociales,
    Ingles,
}

impl Subject {
    /// Selector order shown on the quiz page.
    pub const ALL: [Subject; 5] = [
        Subject::Matematica,
        Subject::Pdl,
        Subject::CsNaturales,
        Subject::CsSociales,
        Subject::Ingles,
    ];

    pub const DEFAULT: Subject = Subject::Matematica;

    pub fn name(self) -> &'static str {
        match self {
            Subject::Matematica => "Matemática",
            Subject::Pdl => "PDL",
            Subject::CsNaturales => "Cs. Naturales",
            Subject::CsSociales => "Cs. Sociales",
            Subject::Ingles => "Inglés",
        }
    }

    /// Longer name used inside prompts, where "PDL" alone would confuse the model.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Subject::Pdl => "Prácticas del Lenguaje (PDL)",
            Subject::CsNaturales => "Ciencias Naturales",
            Subject::CsSociales => "Ciencias Sociales",
            other => other.name(),
        }
    }

    pub fn from_name(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|s| s.name() == raw)
    }

    /// Unknown or missing names fall back to [`Subject::DEFAULT`].
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_name).unwrap_or(Self::DEFAULT)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Facil,
    Intermedio,
    Desafiante,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Facil,
        Difficulty::Intermedio,
        Difficulty::Desafiante,
    ];

    pub const DEFAULT: Difficulty = Difficulty::Facil;

    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Facil => "facil",
            Difficulty::Intermedio => "intermedio",
            Difficulty::Desafiante => "desafiante",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Facil => "Fácil",
            Difficulty::Intermedio => "Intermedio",
            Difficulty::Desafiante => "Desafiante",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Facil => {
                "nivel fácil: preguntas directas sobre conceptos básicos, con vocabulario simple y una sola idea por pregunta"
            }
            Difficulty::Intermedio => {
                "nivel intermedio: preguntas que piden aplicar el concepto en una situación cotidiana o relacionar dos ideas"
            }
            Difficulty::Desafiante => {
                "nivel desafiante: preguntas que requieren razonar en varios pasos, comparar o resolver un pequeño problema"
            }
        }
    }

    /// Case-insensitive; unknown or missing keys fall back to [`Difficulty::DEFAULT`].
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.map(|r| r.trim().to_lowercase())
            .and_then(|key| Self::ALL.into_iter().find(|d| d.key() == key))
            .unwrap_or(Self::DEFAULT)
    }
}
