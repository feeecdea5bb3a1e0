use super::{SeedQuestion, Tier};

pub static FACIL: Tier = [
    seed!(
        "¿Cuál es la capital de Argentina?",
        ["Córdoba", "Rosario", "Buenos Aires", "Mendoza"],
        "Buenos Aires",
        "Es la ciudad donde está la Casa Rosada."
    ),
    seed!(
        "¿Qué se recuerda el 25 de Mayo?",
        [
            "La Declaración de la Independencia",
            "La Revolución de Mayo",
            "El Día de la Bandera",
            "La Navidad"
        ],
        "La Revolución de Mayo",
        "En 1810 se formó el primer gobierno patrio."
    ),
    seed!(
        "¿Quién creó la bandera argentina?",
        [
            "José de San Martín",
            "Manuel Belgrano",
            "Domingo F. Sarmiento",
            "Cristóbal Colón"
        ],
        "Manuel Belgrano",
        "Su día se recuerda el 20 de junio."
    ),
    seed!(
        "¿Qué instrumento sirve para orientarse porque señala el norte?",
        ["Brújula", "Reloj", "Termómetro", "Regla"],
        "Brújula",
        "Tiene una aguja imantada."
    ),
    seed!(
        "¿Qué es un mapa?",
        [
            "Un dibujo que representa un lugar",
            "Un libro de cuentos",
            "Un instrumento musical",
            "Un animal"
        ],
        "Un dibujo que representa un lugar",
        "Los mapas muestran ciudades, ríos, montañas y caminos."
    ),
    seed!(
        "¿Qué trabajador apaga incendios?",
        ["Bombero", "Médico", "Maestro", "Panadero"],
        "Bombero",
        "Usa un camión rojo con mangueras."
    ),
    seed!(
        "¿En qué continente está Argentina?",
        ["Europa", "África", "América", "Asia"],
        "América",
        "Argentina está en el sur de este continente."
    ),
    seed!(
        "¿Qué día se celebra la Independencia argentina?",
        ["25 de mayo", "9 de julio", "20 de junio", "17 de agosto"],
        "9 de julio",
        "Se declaró en Tucumán en 1816."
    ),
    seed!(
        "¿Qué medio de transporte viaja por el agua?",
        ["Barco", "Tren", "Avión", "Colectivo"],
        "Barco",
        "Flota y navega por ríos y mares."
    ),
    seed!(
        "¿Qué colores tiene la bandera argentina?",
        ["Rojo y blanco", "Celeste y blanco", "Verde y amarillo", "Azul y rojo"],
        "Celeste y blanco",
        "En el centro tiene un Sol."
    ),
];

pub static INTERMEDIO: Tier = [
    seed!(
        "¿Qué océano baña las costas de Argentina?",
        ["Pacífico", "Atlántico", "Índico", "Ártico"],
        "Atlántico",
        "Es el océano que está al este del país."
    ),
    seed!(
        "¿Quién cruzó la cordillera de los Andes para liberar Chile y Perú?",
        [
            "Manuel Belgrano",
            "José de San Martín",
            "Juan Manuel de Rosas",
            "Mariano Moreno"
        ],
        "José de San Martín",
        "Es conocido como el Padre de la Patria."
    ),
    seed!(
        "¿Cuál es la cordillera más importante de Argentina?",
        ["Los Alpes", "Los Andes", "El Himalaya", "Los Pirineos"],
        "Los Andes",
        "Recorre el oeste del país, en el límite con Chile."
    ),
    seed!(
        "¿Por qué punto cardinal sale el Sol?",
        ["Norte", "Sur", "Este", "Oeste"],
        "Este",
        "También se lo llama oriente o levante."
    ),
    seed!(
        "¿Qué es la Constitución Nacional?",
        [
            "La ley más importante del país",
            "Un libro de cuentos",
            "Un mapa del país",
            "Una canción patria"
        ],
        "La ley más importante del país",
        "Establece los derechos de las personas y cómo se organiza el gobierno."
    ),
    seed!(
        "¿En qué ciudad se declaró la Independencia en 1816?",
        ["Buenos Aires", "San Miguel de Tucumán", "Córdoba", "Salta"],
        "San Miguel de Tucumán",
        "Allí está la Casa Histórica."
    ),
    seed!(
        "¿Qué actividad económica se realiza principalmente en el campo?",
        ["Agricultura", "Fabricación de autos", "Venta en shoppings", "Transporte aéreo"],
        "Agricultura",
        "Consiste en sembrar y cosechar."
    ),
    seed!(
        "¿Qué río forma el Río de la Plata junto con el río Uruguay?",
        ["Paraná", "Amazonas", "Nilo", "Colorado"],
        "Paraná",
        "Es uno de los ríos más largos de América del Sur."
    ),
    seed!(
        "¿Quiénes vivían en América antes de la llegada de los europeos?",
        ["Pueblos originarios", "Romanos", "Vikingos", "Egipcios"],
        "Pueblos originarios",
        "Por ejemplo, los guaraníes, los diaguitas y los mapuches."
    ),
    seed!(
        "¿Cuántas provincias tiene Argentina?",
        ["20", "23", "24", "25"],
        "23",
        "Además de las provincias está la Ciudad Autónoma de Buenos Aires."
    ),
];

pub static DESAFIANTE: Tier = [
    seed!(
        "¿En qué año llegó Cristóbal Colón a América?",
        ["1492", "1810", "1816", "1500"],
        "1492",
        "Fue casi tres siglos antes de la Revolución de Mayo."
    ),
    seed!(
        "¿Qué forma de gobierno tiene Argentina?",
        [
            "Monarquía",
            "República representativa y federal",
            "Imperio",
            "Dictadura"
        ],
        "República representativa y federal",
        "El pueblo elige a sus representantes y las provincias tienen autonomía."
    ),
    seed!(
        "¿Cuáles son los tres poderes del Estado?",
        [
            "Ejecutivo, Legislativo y Judicial",
            "Rey, Reina y Príncipe",
            "Policía, Ejército y Bomberos",
            "Nación, Provincia y Municipio"
        ],
        "Ejecutivo, Legislativo y Judicial",
        "Uno gobierna, otro hace las leyes y otro juzga."
    ),
    seed!(
        "¿Qué línea imaginaria divide la Tierra en hemisferio norte y hemisferio sur?",
        ["Ecuador", "Meridiano de Greenwich", "Trópico de Cáncer", "Círculo Polar Ártico"],
        "Ecuador",
        "El meridiano de Greenwich divide en este y oeste."
    ),
    seed!(
        "¿Qué se conmemora el 2 de abril en Argentina?",
        [
            "Día del Veterano y de los Caídos en la Guerra de Malvinas",
            "Día de la Bandera",
            "Día del Maestro",
            "Día de la Tradición"
        ],
        "Día del Veterano y de los Caídos en la Guerra de Malvinas",
        "Recuerda un conflicto de 1982."
    ),
    seed!(
        "¿Cuál de estos es un recurso natural renovable?",
        ["Energía solar", "Petróleo", "Gas natural", "Carbón"],
        "Energía solar",
        "Un recurso renovable no se agota aunque lo usemos."
    ),
    seed!(
        "¿Quién fue Domingo Faustino Sarmiento?",
        [
            "Un presidente que impulsó la educación",
            "El creador de la bandera",
            "Un navegante europeo",
            "Un cacique mapuche"
        ],
        "Un presidente que impulsó la educación",
        "Se lo recuerda el 11 de septiembre, Día del Maestro."
    ),
    seed!(
        "¿Qué región argentina es famosa por sus glaciares?",
        ["Patagonia", "Noreste", "Cuyo", "Región pampeana"],
        "Patagonia",
        "Allí está el glaciar Perito Moreno."
    ),
    seed!(
        "¿Qué era el Cabildo en la época colonial?",
        [
            "El edificio donde se reunía el gobierno de la ciudad",
            "Un río",
            "Un barco",
            "Una comida típica"
        ],
        "El edificio donde se reunía el gobierno de la ciudad",
        "Frente a él se reunió la gente el 25 de mayo de 1810."
    ),
    seed!(
        "¿Qué mide la latitud?",
        [
            "La distancia a la línea del Ecuador",
            "La altura de una montaña",
            "La temperatura del aire",
            "La cantidad de habitantes"
        ],
        "La distancia a la línea del Ecuador",
        "Se mide en grados hacia el norte o hacia el sur."
    ),
];
