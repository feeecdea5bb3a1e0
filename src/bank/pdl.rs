use super::{SeedQuestion, Tier};

pub static FACIL: Tier = [
    seed!(
        "¿Cuál de estas palabras es un sustantivo?",
        ["correr", "mesa", "lindo", "rápido"],
        "mesa",
        "Los sustantivos nombran personas, animales, cosas o lugares."
    ),
    seed!(
        "¿Qué signo se usa al final de una pregunta?",
        ["Punto (.)", "Coma (,)", "Signo de interrogación (?)", "Signo de exclamación (!)"],
        "Signo de interrogación (?)",
        "En español las preguntas se abren con ¿ y se cierran con ?."
    ),
    seed!(
        "¿Cuál es un sinónimo de \"contento\"?",
        ["triste", "feliz", "enojado", "cansado"],
        "feliz",
        "Un sinónimo es una palabra que significa lo mismo o casi lo mismo."
    ),
    seed!(
        "¿Cuál es el antónimo de \"alto\"?",
        ["grande", "bajo", "largo", "ancho"],
        "bajo",
        "Un antónimo significa lo contrario."
    ),
    seed!(
        "¿Cuántas sílabas tiene la palabra \"mariposa\"?",
        ["2", "3", "4", "5"],
        "4",
        "Decila despacio y dá una palmada por cada golpe de voz: ma-ri-po-sa."
    ),
    seed!(
        "¿Cómo se escribe la primera letra de un nombre propio?",
        ["Con minúscula", "Con mayúscula", "Con un número", "Con un guion"],
        "Con mayúscula",
        "Pensá cómo escribís tu nombre o el de tu ciudad."
    ),
    seed!(
        "¿Cuál de estas palabras es un verbo?",
        ["saltar", "casa", "azul", "perro"],
        "saltar",
        "Los verbos indican acciones; muchos terminan en -ar, -er o -ir."
    ),
    seed!(
        "Si ordenamos alfabéticamente, ¿qué palabra va primero?",
        ["gato", "árbol", "casa", "perro"],
        "árbol",
        "Mirá la primera letra de cada palabra y recordá el orden del abecedario."
    ),
    seed!(
        "¿Cómo se llama el personaje principal de un cuento?",
        ["El autor", "El protagonista", "El lector", "El título"],
        "El protagonista",
        "Es el personaje al que le pasan las cosas más importantes de la historia."
    ),
    seed!(
        "¿Cuál de estas palabras es un adjetivo?",
        ["pelota", "suave", "comer", "ayer"],
        "suave",
        "Los adjetivos dicen cómo son las cosas."
    ),
];

pub static INTERMEDIO: Tier = [
    seed!(
        "¿Qué tipo de texto cuenta una historia inventada con personajes?",
        ["Receta", "Cuento", "Noticia", "Instructivo"],
        "Cuento",
        "La noticia cuenta hechos reales; la receta y el instructivo dan pasos."
    ),
    seed!(
        "En la oración \"El perro ladra fuerte\", ¿cuál es el verbo?",
        ["perro", "ladra", "fuerte", "El"],
        "ladra",
        "Buscá la palabra que dice qué hace el perro."
    ),
    seed!(
        "¿Cuál de estas palabras está bien escrita?",
        ["arbol", "cancion", "lápiz", "raton"],
        "lápiz",
        "Fijate cuáles necesitan tilde y no la tienen."
    ),
    seed!(
        "¿En qué parte del cuento aparece el problema o conflicto?",
        ["Introducción", "Nudo", "Desenlace", "Título"],
        "Nudo",
        "Un cuento tiene introducción, nudo y desenlace; el problema está en el medio."
    ),
    seed!(
        "¿Cuál es el plural de \"lápiz\"?",
        ["lápizes", "lápices", "lapices", "lápiz"],
        "lápices",
        "Cuando una palabra termina en z, el plural se escribe con c."
    ),
    seed!(
        "¿Qué palabra rima con \"canción\"?",
        ["camión", "cantar", "canto", "casa"],
        "camión",
        "Dos palabras riman cuando terminan con los mismos sonidos."
    ),
    seed!(
        "¿Qué texto sirve para explicar cómo hacer algo paso a paso?",
        ["Poesía", "Instructivo", "Leyenda", "Historieta"],
        "Instructivo",
        "Pensá en el papel que viene con un juguete para armar."
    ),
    seed!(
        "¿Cuál de estas palabras es aguda?",
        ["mesa", "camión", "árbol", "lápiz"],
        "camión",
        "En las palabras agudas la sílaba más fuerte es la última."
    ),
    seed!(
        "En la oración \"Las niñas juegan\", ¿cuál es el sujeto?",
        ["juegan", "Las niñas", "niñas juegan", "Las"],
        "Las niñas",
        "Preguntale al verbo: ¿quiénes juegan?"
    ),
    seed!(
        "¿Qué signo indica que habla un personaje en un diálogo?",
        ["Raya de diálogo", "Punto y coma", "Paréntesis", "Asterisco"],
        "Raya de diálogo",
        "Es una línea horizontal larga que se pone antes de lo que dice el personaje."
    ),
];

pub static DESAFIANTE: Tier = [
    seed!(
        "¿Qué recurso aparece en \"sus ojos son dos luceros\"?",
        ["Metáfora", "Rima", "Onomatopeya", "Hipérbole"],
        "Metáfora",
        "Se nombra una cosa con el nombre de otra porque se parecen."
    ),
    seed!(
        "¿Cuál de estas palabras es esdrújula?",
        ["música", "canción", "papel", "examen"],
        "música",
        "En las esdrújulas la sílaba fuerte es la antepenúltima y siempre llevan tilde."
    ),
    seed!(
        "¿Cuál de estas palabras es una onomatopeya?",
        ["¡Guau!", "perro", "ladrar", "animal"],
        "¡Guau!",
        "Una onomatopeya imita un sonido."
    ),
    seed!(
        "La frase \"Había una vez\" suele aparecer al comienzo de...",
        ["una noticia", "un cuento", "una receta", "una carta formal"],
        "un cuento",
        "Pensá en los cuentos clásicos que te leyeron."
    ),
    seed!(
        "¿Cuál de estas oraciones es interrogativa?",
        ["Hoy llueve.", "¿Vamos al parque?", "¡Qué lindo día!", "Cerrá la puerta."],
        "¿Vamos al parque?",
        "Las oraciones interrogativas hacen una pregunta."
    ),
    seed!(
        "En \"Mañana viajaremos a Córdoba\", ¿en qué tiempo está el verbo?",
        ["Pasado", "Presente", "Futuro", "No tiene verbo"],
        "Futuro",
        "La palabra \"mañana\" te da una pista."
    ),
    seed!(
        "¿Qué significa el prefijo \"des-\" en \"deshacer\"?",
        ["Volver a hacer", "Lo contrario de hacer", "Hacer mucho", "Hacer antes"],
        "Lo contrario de hacer",
        "Pensá en otras palabras como \"desatar\" o \"desarmar\"."
    ),
    seed!(
        "¿Qué hace el narrador de un cuento?",
        [
            "Dibuja las ilustraciones",
            "Cuenta lo que pasa en la historia",
            "Vende el libro",
            "Es siempre el villano"
        ],
        "Cuenta lo que pasa en la historia",
        "El narrador es la voz que relata los hechos."
    ),
    seed!(
        "¿Qué palabra tiene diptongo?",
        ["país", "tierra", "día", "poeta"],
        "tierra",
        "En un diptongo dos vocales se pronuncian juntas en la misma sílaba."
    ),
    seed!(
        "¿Qué conector indica causa?",
        ["porque", "pero", "además", "finalmente"],
        "porque",
        "La causa responde a la pregunta ¿por qué?"
    ),
];
