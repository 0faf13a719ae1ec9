use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::models::seat::Seat;

/// Конфигурация зала: количество рядов и мест в ряду.
/// Неизменяема после старта сеанса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingConfig {
    row_count: usize,
    seats_per_row: usize,
}

impl SeatingConfig {
    /// Максимум рядов: каждому ряду соответствует одна буква A..Z.
    pub const MAX_ROW_COUNT: usize = 26;

    pub fn new(row_count: usize, seats_per_row: usize) -> Result<Self, BookingError> {
        if row_count == 0 || row_count > Self::MAX_ROW_COUNT {
            return Err(BookingError::OutOfRange(format!("row count {row_count}")));
        }
        if seats_per_row == 0 {
            return Err(BookingError::OutOfRange(format!(
                "seats per row {seats_per_row}"
            )));
        }
        Ok(Self { row_count, seats_per_row })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Общее количество мест в зале.
    pub fn total_seats(&self) -> usize {
        self.row_count * self.seats_per_row
    }

    /// Центральная колонка (индекс с нуля): для четной ширины - правая
    /// из двух средних, для нечетной - точный центр.
    pub fn center_column(&self) -> usize {
        self.seats_per_row / 2
    }

    /// Проверка границ для пары (ряд, место).
    pub fn is_in_bounds(&self, row: usize, column: usize) -> bool {
        row < self.row_count && column < self.seats_per_row
    }

    /// Существует ли место в этом зале.
    pub fn contains(&self, seat: Seat) -> bool {
        self.is_in_bounds(seat.row(), seat.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_dimensions() {
        let config = SeatingConfig::new(10, 10).unwrap();
        assert_eq!(config.row_count(), 10);
        assert_eq!(config.seats_per_row(), 10);
        assert_eq!(config.total_seats(), 100);
    }

    #[test]
    fn rejects_zero_or_oversized_dimensions() {
        assert_eq!(
            SeatingConfig::new(0, 10),
            Err(BookingError::OutOfRange("row count 0".to_string()))
        );
        assert_eq!(
            SeatingConfig::new(27, 10),
            Err(BookingError::OutOfRange("row count 27".to_string()))
        );
        assert_eq!(
            SeatingConfig::new(10, 0),
            Err(BookingError::OutOfRange("seats per row 0".to_string()))
        );
        // 26 рядов - предел алфавита, но он разрешен.
        assert!(SeatingConfig::new(26, 1).is_ok());
    }

    #[test]
    fn center_column_is_integer_division() {
        // Четная ширина: правая из двух средних колонок.
        assert_eq!(SeatingConfig::new(5, 10).unwrap().center_column(), 5);
        // Нечетная ширина: точный центр.
        assert_eq!(SeatingConfig::new(5, 11).unwrap().center_column(), 5);
        assert_eq!(SeatingConfig::new(5, 1).unwrap().center_column(), 0);
    }

    #[test]
    fn bounds_checks_cover_the_grid() {
        let config = SeatingConfig::new(5, 10).unwrap();
        assert!(config.is_in_bounds(0, 0));
        assert!(config.is_in_bounds(4, 9));
        assert!(!config.is_in_bounds(5, 0));
        assert!(!config.is_in_bounds(0, 10));

        assert!(config.contains("E10".parse().unwrap()));
        assert!(!config.contains("F1".parse().unwrap()));
        assert!(!config.contains("A11".parse().unwrap()));
    }
}
