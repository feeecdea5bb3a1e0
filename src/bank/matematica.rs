use super::{SeedQuestion, Tier};

pub static FACIL: Tier = [
    seed!(
        "¿Cuánto es 7 + 5?",
        ["10", "11", "12", "13"],
        "12",
        "Empezá en el 7 y contá 5 lugares hacia adelante."
    ),
    seed!(
        "¿Cuánto es 9 - 4?",
        ["3", "4", "5", "6"],
        "5",
        "Restar es quitar: si tenés 9 y sacás 4, fijate cuántos quedan."
    ),
    seed!(
        "¿Cuántos lados tiene un triángulo?",
        ["2", "3", "4", "5"],
        "3",
        "\"Tri\" quiere decir tres."
    ),
    seed!(
        "¿Qué número viene después del 99?",
        ["90", "98", "100", "101"],
        "100",
        "Cuando llegás a 9 unidades y 9 decenas, el siguiente número forma una centena."
    ),
    seed!(
        "¿Cuánto es 3 × 2?",
        ["5", "6", "8", "9"],
        "6",
        "Multiplicar es sumar varias veces: 3 + 3."
    ),
    seed!(
        "¿Cuál de estos números es par?",
        ["7", "9", "12", "15"],
        "12",
        "Los números pares terminan en 0, 2, 4, 6 u 8."
    ),
    seed!(
        "¿Cuántos días tiene una semana?",
        ["5", "6", "7", "10"],
        "7",
        "Contá de lunes a domingo."
    ),
    seed!(
        "¿Qué figura tiene 4 lados iguales?",
        ["Círculo", "Cuadrado", "Triángulo", "Óvalo"],
        "Cuadrado",
        "El círculo y el óvalo no tienen lados rectos."
    ),
    seed!(
        "Si tenés 10 caramelos y regalás 3, ¿cuántos te quedan?",
        ["6", "7", "8", "13"],
        "7",
        "Regalar es quitar, así que tenés que restar."
    ),
    seed!(
        "¿Cuál es el número más grande?",
        ["58", "85", "50", "80"],
        "85",
        "Compará primero las decenas y después las unidades."
    ),
];

pub static INTERMEDIO: Tier = [
    seed!(
        "¿Cuánto es 6 × 7?",
        ["36", "42", "48", "49"],
        "42",
        "Repasá la tabla del 6: 6, 12, 18, 24, 30, 36, ..."
    ),
    seed!(
        "¿Cuánto es 56 ÷ 8?",
        ["6", "7", "8", "9"],
        "7",
        "Buscá qué número multiplicado por 8 da 56."
    ),
    seed!(
        "¿Qué fracción representa la mitad de algo?",
        ["1/3", "1/2", "1/4", "2/3"],
        "1/2",
        "La mitad es dividir en 2 partes iguales y tomar 1."
    ),
    seed!(
        "¿Cuántos centímetros tiene un metro?",
        ["10", "100", "1000", "50"],
        "100",
        "\"Centi\" significa la centésima parte."
    ),
    seed!(
        "¿Cuál es el perímetro de un cuadrado de 5 cm de lado?",
        ["10 cm", "15 cm", "20 cm", "25 cm"],
        "20 cm",
        "El perímetro es la suma de todos los lados."
    ),
    seed!(
        "¿Cuánto es 125 + 75?",
        ["190", "200", "210", "250"],
        "200",
        "Sumá primero las unidades: 5 + 5 forman una decena."
    ),
    seed!(
        "Redondeá 48 a la decena más cercana.",
        ["40", "45", "50", "60"],
        "50",
        "Si las unidades son 5 o más, se redondea hacia arriba."
    ),
    seed!(
        "¿Cuántos minutos hay en 2 horas?",
        ["60", "100", "120", "200"],
        "120",
        "Una hora tiene 60 minutos."
    ),
    seed!(
        "Si un lápiz cuesta $15, ¿cuánto cuestan 4 lápices?",
        ["$45", "$50", "$60", "$75"],
        "$60",
        "Multiplicá el precio de uno por la cantidad."
    ),
    seed!(
        "¿Qué número falta en la serie 3, 6, 9, __, 15?",
        ["10", "11", "12", "13"],
        "12",
        "Fijate cuánto aumenta de un número al siguiente."
    ),
];

pub static DESAFIANTE: Tier = [
    seed!(
        "¿Cuánto es 3/4 de 20?",
        ["5", "10", "15", "16"],
        "15",
        "Dividí 20 en 4 partes iguales y tomá 3 de esas partes."
    ),
    seed!(
        "¿Cuál es el área de un rectángulo de 8 cm por 3 cm?",
        ["11 cm²", "22 cm²", "24 cm²", "32 cm²"],
        "24 cm²",
        "El área del rectángulo es base por altura."
    ),
    seed!(
        "¿Cuál es el resultado de 2 + 3 × 4?",
        ["20", "14", "24", "18"],
        "14",
        "Primero se resuelve la multiplicación y después la suma."
    ),
    seed!(
        "Juan tiene el triple de figuritas que Ana. Si Ana tiene 12, ¿cuántas tienen entre los dos?",
        ["36", "40", "48", "24"],
        "48",
        "Calculá primero las de Juan y después sumá las de Ana."
    ),
    seed!(
        "¿Qué número decimal es igual a 1/4?",
        ["0,14", "0,25", "0,4", "0,5"],
        "0,25",
        "Pensá en monedas: un cuarto de $1 son 25 centavos."
    ),
    seed!(
        "¿Cuál es el menor número que es múltiplo de 4 y de 6 a la vez?",
        ["10", "12", "18", "24"],
        "12",
        "Escribí los múltiplos de cada uno y buscá el primero que se repite."
    ),
    seed!(
        "Un tren sale a las 9:45 y viaja 1 hora y 30 minutos. ¿A qué hora llega?",
        ["10:75", "11:15", "11:00", "10:45"],
        "11:15",
        "Sumá la hora primero y después los minutos; 60 minutos forman una hora."
    ),
    seed!(
        "¿Cuánto es el 10% de 250?",
        ["2,5", "25", "125", "10"],
        "25",
        "El 10% es dividir por 10."
    ),
    seed!(
        "¿Cuántas caras tiene un cubo?",
        ["4", "6", "8", "12"],
        "6",
        "Pensá en un dado."
    ),
    seed!(
        "Si 5 cuadernos cuestan $400, ¿cuánto cuestan 8 cuadernos iguales?",
        ["$560", "$600", "$640", "$800"],
        "$640",
        "Averiguá primero cuánto cuesta un cuaderno."
    ),
];
