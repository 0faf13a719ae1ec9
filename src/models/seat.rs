use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BookingError;

/// Место в зале: пара индексов с нуля (ряд, место в ряду).
///
/// Каноничный внешний формат - метка вида "B7": буква ряда ('A' + row)
/// и номер места с единицы. Метки - единственный обменный формат;
/// алгоритмы работают в индексах, но на границе всегда метки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat {
    row: usize,
    column: usize,
}

impl Seat {
    /// Последний индекс ряда, кодируемый одной буквой A..Z.
    pub const MAX_ROW_INDEX: usize = 25;

    // Кодек охраняет только выход ряда за алфавит A..Z; границы
    // конкретного зала проверяет вызывающая сторона по своей конфигурации.
    pub fn new(row: usize, column: usize) -> Result<Self, BookingError> {
        if row > Self::MAX_ROW_INDEX {
            return Err(BookingError::OutOfRange(format!("row index {row}")));
        }
        Ok(Self { row, column })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Буква ряда: 'A' + row.
    pub fn row_letter(&self) -> char {
        (b'A' + self.row as u8) as char
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column + 1)
    }
}

impl FromStr for Seat {
    type Err = BookingError;

    // Разбор метки "B7": ровно одна буква ряда (регистр не важен), затем
    // номер места с единицы. Ведущие нули и номер 0 в обменном формате
    // запрещены. Границы зала здесь не проверяются.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::InvalidFormat(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_alphabetic() {
            return Err(invalid());
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if digits.starts_with('0') {
            return Err(invalid());
        }

        let number: usize = digits.parse().map_err(|_| invalid())?;
        let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        Seat::new(row, number - 1)
    }
}

// В сериализации место - это его метка, чтобы обменный формат броней
// совпадал с тем, что видит оператор ("A1", "C12").
impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}
