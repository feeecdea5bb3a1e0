use super::{SeedQuestion, Tier};

pub static FACIL: Tier = [
    seed!(
        "¿Cómo se dice \"perro\" en inglés?",
        ["Cat", "Dog", "Bird", "Fish"],
        "Dog",
        "Cat es gato, Bird es pájaro y Fish es pez."
    ),
    seed!(
        "¿Qué significa \"red\"?",
        ["Azul", "Rojo", "Verde", "Amarillo"],
        "Rojo",
        "Es el color de una frutilla."
    ),
    seed!(
        "¿Cómo se dice \"hola\" en inglés?",
        ["Goodbye", "Hello", "Thanks", "Please"],
        "Hello",
        "Goodbye se usa para despedirse."
    ),
    seed!(
        "¿Qué número es \"three\"?",
        ["2", "3", "4", "5"],
        "3",
        "Contá en inglés: one, two, three..."
    ),
    seed!(
        "¿Cómo se dice \"manzana\" en inglés?",
        ["Banana", "Orange", "Apple", "Grape"],
        "Apple",
        "Orange es naranja y Grape es uva."
    ),
    seed!(
        "¿Qué significa \"mother\"?",
        ["Padre", "Madre", "Hermana", "Abuela"],
        "Madre",
        "Father es padre."
    ),
    seed!(
        "¿Cómo se dice \"gracias\" en inglés?",
        ["Sorry", "Thank you", "Please", "Welcome"],
        "Thank you",
        "Sorry se usa para pedir perdón."
    ),
    seed!(
        "¿Qué significa \"big\"?",
        ["Pequeño", "Grande", "Rápido", "Lento"],
        "Grande",
        "Lo contrario de big es small."
    ),
    seed!(
        "¿Cómo se dice \"escuela\" en inglés?",
        ["House", "School", "Park", "Shop"],
        "School",
        "Se parece a la palabra \"escolar\"."
    ),
    seed!(
        "¿Qué día es \"Monday\"?",
        ["Lunes", "Martes", "Domingo", "Viernes"],
        "Lunes",
        "Es el primer día de la semana escolar."
    ),
];

pub static INTERMEDIO: Tier = [
    seed!(
        "Completá: \"I ___ a student.\"",
        ["am", "is", "are", "be"],
        "am",
        "Con I siempre se usa am."
    ),
    seed!(
        "¿Cuál es el plural de \"child\"?",
        ["childs", "children", "childes", "child"],
        "children",
        "Es un plural irregular, no lleva -s."
    ),
    seed!(
        "¿Qué significa \"I am hungry\"?",
        ["Tengo sueño", "Tengo hambre", "Tengo frío", "Estoy feliz"],
        "Tengo hambre",
        "Lo decís cuando querés comer."
    ),
    seed!(
        "Completá: \"She ___ a cat.\"",
        ["have", "has", "having", "haves"],
        "has",
        "Con he, she e it, have cambia a has."
    ),
    seed!(
        "¿Cómo se dice \"cocina\" (el lugar de la casa) en inglés?",
        ["Bedroom", "Kitchen", "Bathroom", "Garden"],
        "Kitchen",
        "Bedroom es dormitorio y Bathroom es baño."
    ),
    seed!(
        "¿Qué pregunta sirve para saber la edad de alguien?",
        [
            "What's your name?",
            "How old are you?",
            "Where are you from?",
            "What time is it?"
        ],
        "How old are you?",
        "Old significa viejo; la pregunta es \"¿qué tan viejo sos?\"."
    ),
    seed!(
        "¿Cuál es el opuesto de \"hot\"?",
        ["Warm", "Cold", "Sunny", "Wet"],
        "Cold",
        "Hot es caliente."
    ),
    seed!(
        "¿Qué significa \"run\"?",
        ["Correr", "Comer", "Dormir", "Leer"],
        "Correr",
        "Comer es eat y dormir es sleep."
    ),
    seed!(
        "Completá: \"There ___ three books on the table.\"",
        ["is", "are", "am", "be"],
        "are",
        "Para varias cosas se usa there are."
    ),
    seed!(
        "¿Qué mes es \"August\"?",
        ["Abril", "Agosto", "Octubre", "Junio"],
        "Agosto",
        "Suena parecido en los dos idiomas."
    ),
];

pub static DESAFIANTE: Tier = [
    seed!(
        "¿Cuál es el pasado de \"go\"?",
        ["goed", "went", "gone", "going"],
        "went",
        "Go es un verbo irregular."
    ),
    seed!(
        "Completá: \"Yesterday I ___ football.\"",
        ["play", "played", "playing", "plays"],
        "played",
        "Yesterday indica pasado; los verbos regulares agregan -ed."
    ),
    seed!(
        "¿Qué significa \"I can swim\"?",
        ["Yo quiero nadar", "Yo puedo nadar", "Yo nadé", "Yo nado mucho"],
        "Yo puedo nadar",
        "Can expresa que sabés o podés hacer algo."
    ),
    seed!(
        "¿Cuál de estas oraciones está bien escrita?",
        [
            "He don't like milk.",
            "He doesn't like milk.",
            "He not like milk.",
            "He doesn't likes milk."
        ],
        "He doesn't like milk.",
        "Con he se usa doesn't y el verbo queda sin -s."
    ),
    seed!(
        "Completá: \"An elephant is ___ than a mouse.\"",
        ["big", "bigger", "biggest", "more big"],
        "bigger",
        "Para comparar dos cosas, los adjetivos cortos agregan -er."
    ),
    seed!(
        "¿Qué significa \"They are playing in the park\"?",
        [
            "Ellos juegan siempre en el parque",
            "Ellos están jugando en el parque",
            "Ellos jugaron en el parque",
            "Ellos van a jugar en el parque"
        ],
        "Ellos están jugando en el parque",
        "La terminación -ing indica algo que está pasando ahora."
    ),
    seed!(
        "¿Qué pregunta se responde con \"I live in Córdoba\"?",
        [
            "Where do you live?",
            "What do you do?",
            "When do you live?",
            "Who do you live?"
        ],
        "Where do you live?",
        "Where pregunta por un lugar."
    ),
    seed!(
        "Completá: \"We ___ going to the zoo tomorrow.\"",
        ["is", "am", "are", "be"],
        "are",
        "Con we se usa are."
    ),
    seed!(
        "¿Cuál de estas palabras es un adjetivo?",
        ["quickly", "beautiful", "jump", "table"],
        "beautiful",
        "Un adjetivo describe cómo es algo."
    ),
    seed!(
        "¿Qué significa \"often\"?",
        ["Nunca", "A menudo", "Ayer", "Ahora"],
        "A menudo",
        "Se usa para decir que algo pasa muchas veces."
    ),
];
