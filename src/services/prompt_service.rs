use tera::{Context, Tera};

use crate::bank::QUESTIONS_PER_TIER;
use crate::error::Result;
use crate::models::subject::{Difficulty, Subject};

pub const TUTOR_PROMPT: &str = r#"Sos un profesor paciente y divertido para chicos de primaria (7 a 12 años).
Respondé SIEMPRE en español. Tu respuesta se va a mostrar directamente dentro de una página web,
así que usá SOLO estos fragmentos HTML, sin bloques de código, sin Markdown y sin etiquetas <html>, <head> ni <body>:

<h3>1) Explicación más técnica</h3>
<ul>
  <li>Explicá el concepto con términos correctos pero accesibles.</li>
  <li>Usá de 3 a 5 puntos claros.</li>
</ul>

<h3>2) Explicación simple</h3>
<p>Reexplicá como si se lo contaras a un amigo de la misma edad, con frases cortas y ejemplos sencillos.</p>

<h3>3) Ejemplos de la vida real</h3>
<ol>
  <li>Dá de 2 a 3 situaciones cotidianas y variadas, con pasos.</li>
  <li>Incluí números o elementos concretos cuando sirva.</li>
</ol>

<h3>4) Desafío para practicar</h3>
<p>Planteá una mini actividad o juego breve (no solo un multiple choice). Invitá a que escriban, dibujen,
cuenten, midan, clasifiquen o armen algo.</p>
"#;

pub const QUIZ_PROMPT: &str = r#"Sos un docente de primaria que arma evaluaciones para chicos de 7 a 12 años.
Respondé SOLO con JSON válido, sin texto antes ni después y sin delimitadores de código.
El JSON debe ser un arreglo con exactamente {{ count }} objetos, cada uno con este formato exacto:
{"question": "texto de la pregunta", "options": ["opción 1", "opción 2", "opción 3", "opción 4"], "correct": "texto exacto de la opción correcta", "tip": "pista breve para pensar la respuesta"}
Reglas:
- Todo en español (salvo las palabras en inglés que la materia necesite).
- Cada pregunta tiene 4 opciones distintas y una sola correcta.
- "correct" debe ser idéntico, letra por letra, a una de las opciones.
- Variá la posición de la opción correcta.
- La pista ayuda a pensar pero no revela la respuesta.

Materia: {{ materia }}
Dificultad: {{ dificultad }}
Generá las {{ count }} preguntas ahora."#;

/// Prompt for the free-text tutoring flow. `question` is expected to be
/// validated already.
pub fn build_tutor_prompt(question: &str) -> String {
    format!("{}\nDuda del alumno: {}", TUTOR_PROMPT, question)
}

/// Plain-text prompt, rendered without HTML escaping.
pub fn build_quiz_prompt(subject: Subject, difficulty: Difficulty) -> Result<String> {
    let mut context = Context::new();
    context.insert("count", &QUESTIONS_PER_TIER);
    context.insert("materia", subject.prompt_name());
    context.insert("dificultad", difficulty.description());
    Ok(Tera::one_off(QUIZ_PROMPT, &context, false)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutor_prompt_appends_question_verbatim() {
        let prompt = build_tutor_prompt("¿Qué es la fotosíntesis?");
        assert!(prompt.starts_with(TUTOR_PROMPT));
        assert!(prompt.ends_with("Duda del alumno: ¿Qué es la fotosíntesis?"));
        for section in ["<h3>1)", "<h3>2)", "<h3>3)", "<h3>4)"] {
            assert!(prompt.contains(section), "missing {}", section);
        }
    }

    #[test]
    fn quiz_prompt_names_subject_and_tier() {
        let prompt = build_quiz_prompt(Subject::CsNaturales, Difficulty::Desafiante).unwrap();
        assert!(prompt.contains("Materia: Ciencias Naturales"));
        assert!(prompt.contains(&format!("Dificultad: {}", Difficulty::Desafiante.description())));
        assert!(prompt.contains("exactamente 10 objetos"));
        assert!(prompt.ends_with("Generá las 10 preguntas ahora."));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn quiz_prompt_keeps_json_example_and_accents_verbatim() {
        let prompt = build_quiz_prompt(Subject::Ingles, Difficulty::Facil).unwrap();
        assert!(prompt.contains(r#"{"question": "texto de la pregunta", "options": ["opción 1""#));
        assert!(prompt.contains(r#""correct" debe ser idéntico"#));
        assert!(!prompt.contains("&quot;"));
    }
}
