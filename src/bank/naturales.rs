use super::{SeedQuestion, Tier};

pub static FACIL: Tier = [
    seed!(
        "¿Qué necesitan las plantas para fabricar su alimento?",
        ["Luz del sol", "Arena", "Plástico", "Oscuridad"],
        "Luz del sol",
        "Pensá qué pasa con una planta que dejás mucho tiempo en un armario."
    ),
    seed!(
        "¿Cuál de estos animales es un mamífero?",
        ["Gallina", "Perro", "Sapo", "Pez"],
        "Perro",
        "Los mamíferos toman leche de su mamá cuando son crías."
    ),
    seed!(
        "¿En qué estado está el hielo?",
        ["Sólido", "Líquido", "Gaseoso", "Ninguno"],
        "Sólido",
        "El hielo tiene forma propia y lo podés agarrar con la mano."
    ),
    seed!(
        "¿Qué órgano bombea la sangre por todo el cuerpo?",
        ["Pulmones", "Estómago", "Corazón", "Cerebro"],
        "Corazón",
        "Apoyá la mano en el pecho y sentí sus latidos."
    ),
    seed!(
        "¿Cuántas patas tiene un insecto?",
        ["4", "6", "8", "10"],
        "6",
        "Las arañas tienen 8 patas y no son insectos."
    ),
    seed!(
        "¿Qué órganos usamos para respirar?",
        ["Pulmones", "Riñones", "Huesos", "Uñas"],
        "Pulmones",
        "Se llenan de aire cuando inspirás."
    ),
    seed!(
        "¿Cuál es la estrella más cercana a la Tierra?",
        ["La Luna", "El Sol", "Marte", "La Estrella Polar"],
        "El Sol",
        "La Luna es un satélite y Marte es un planeta."
    ),
    seed!(
        "¿Qué parte de la planta absorbe el agua del suelo?",
        ["Hoja", "Flor", "Raíz", "Fruto"],
        "Raíz",
        "Es la parte que está debajo de la tierra."
    ),
    seed!(
        "¿Qué animal nace de un huevo?",
        ["Vaca", "Gallina", "Perro", "Gato"],
        "Gallina",
        "Los animales ovíparos nacen de huevos."
    ),
    seed!(
        "¿Qué sentido usamos con la nariz?",
        ["Vista", "Oído", "Olfato", "Gusto"],
        "Olfato",
        "Es el sentido que te deja sentir el aroma de la comida."
    ),
];

pub static INTERMEDIO: Tier = [
    seed!(
        "¿Qué gas liberan las plantas durante la fotosíntesis?",
        ["Oxígeno", "Dióxido de carbono", "Nitrógeno", "Helio"],
        "Oxígeno",
        "Es el gas que nosotros necesitamos para respirar."
    ),
    seed!(
        "¿Cómo se llama el paso de líquido a gas?",
        ["Fusión", "Solidificación", "Evaporación", "Condensación"],
        "Evaporación",
        "Pensá en un charco que desaparece en un día de sol."
    ),
    seed!(
        "¿Cuál de estos animales es herbívoro?",
        ["León", "Vaca", "Tiburón", "Águila"],
        "Vaca",
        "Los herbívoros se alimentan solo de plantas."
    ),
    seed!(
        "¿Cuál es el planeta más cercano al Sol?",
        ["Venus", "Tierra", "Mercurio", "Marte"],
        "Mercurio",
        "Es también el planeta más pequeño del sistema solar."
    ),
    seed!(
        "¿En qué órgano se mezclan los alimentos con jugos digestivos después de tragarlos?",
        ["Estómago", "Corazón", "Pulmón", "Piel"],
        "Estómago",
        "Es el órgano con forma de bolsa que forma parte del sistema digestivo."
    ),
    seed!(
        "¿Cómo se llaman los animales que tienen columna vertebral?",
        ["Invertebrados", "Vertebrados", "Insectos", "Moluscos"],
        "Vertebrados",
        "La columna está formada por huesos llamados vértebras."
    ),
    seed!(
        "¿Qué material es buen conductor de la electricidad?",
        ["Madera", "Plástico", "Cobre", "Goma"],
        "Cobre",
        "Los cables tienen por dentro un metal de color rojizo."
    ),
    seed!(
        "¿Qué produce el día y la noche?",
        [
            "La rotación de la Tierra",
            "La traslación de la Tierra",
            "Las nubes",
            "La Luna"
        ],
        "La rotación de la Tierra",
        "La Tierra gira sobre sí misma una vez cada 24 horas."
    ),
    seed!(
        "¿A qué temperatura hierve el agua a nivel del mar?",
        ["50 °C", "100 °C", "0 °C", "200 °C"],
        "100 °C",
        "A 0 °C el agua se congela."
    ),
    seed!(
        "¿Qué tipo de animal es la rana?",
        ["Reptil", "Anfibio", "Mamífero", "Ave"],
        "Anfibio",
        "Los anfibios viven una parte de su vida en el agua y otra en la tierra."
    ),
];

pub static DESAFIANTE: Tier = [
    seed!(
        "¿Qué sustancia verde de las hojas captura la luz del sol?",
        ["Clorofila", "Savia", "Néctar", "Almidón"],
        "Clorofila",
        "Es la que le da el color verde a las plantas."
    ),
    seed!(
        "¿Cuánto tarda la Tierra en dar una vuelta completa alrededor del Sol?",
        ["Un día", "Un mes", "Un año", "Una semana"],
        "Un año",
        "Ese movimiento se llama traslación."
    ),
    seed!(
        "En una cadena alimentaria, ¿quiénes son los productores?",
        ["Las plantas", "Los carnívoros", "Los hongos", "Los herbívoros"],
        "Las plantas",
        "Los productores fabrican su propio alimento."
    ),
    seed!(
        "¿Qué le pasa al agua cuando se congela?",
        [
            "Se convierte en gas",
            "Pasa de líquido a sólido",
            "Desaparece",
            "Se calienta"
        ],
        "Pasa de líquido a sólido",
        "Pensá en la cubetera del freezer."
    ),
    seed!(
        "¿Qué fuerza hace que los objetos caigan al suelo?",
        ["Magnetismo", "Gravedad", "Fricción", "Electricidad"],
        "Gravedad",
        "Es la misma fuerza que mantiene a la Luna girando alrededor de la Tierra."
    ),
    seed!(
        "¿Cuál es la función de los glóbulos rojos?",
        [
            "Transportar oxígeno",
            "Defender de infecciones",
            "Digerir alimentos",
            "Mover los músculos"
        ],
        "Transportar oxígeno",
        "Llevan el oxígeno desde los pulmones a todo el cuerpo."
    ),
    seed!(
        "¿Qué mezcla se puede separar usando un colador?",
        ["Agua y sal", "Arroz y agua", "Agua y azúcar", "Aire y humo"],
        "Arroz y agua",
        "El colador retiene lo que es más grande que sus agujeros."
    ),
    seed!(
        "¿Qué material atrae un imán?",
        ["Madera", "Hierro", "Vidrio", "Papel"],
        "Hierro",
        "Los imanes atraen algunos metales."
    ),
    seed!(
        "¿Cuál es la capa más externa de la Tierra?",
        ["Núcleo", "Manto", "Corteza", "Centro"],
        "Corteza",
        "Es la capa sobre la que vivimos."
    ),
    seed!(
        "¿Por qué vemos fases de la Luna?",
        [
            "Porque la Luna cambia de forma",
            "Porque vemos distintas partes iluminadas por el Sol",
            "Porque las nubes la tapan",
            "Porque la Luna se apaga"
        ],
        "Porque vemos distintas partes iluminadas por el Sol",
        "La Luna no tiene luz propia: refleja la luz del Sol."
    ),
];
