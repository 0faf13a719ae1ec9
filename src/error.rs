use thiserror::Error;

// Ошибки бронирования. Каждый вариант соответствует одному правилу
// валидации; меню показывает их тексты оператору и просит ввод заново.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Метка места не разбирается как "буква ряда + номер места".
    #[error("invalid seat label '{0}': expected a row letter followed by a seat number, e.g. B7")]
    InvalidFormat(String),

    /// Ряд, место или количество билетов вне границ конфигурации зала.
    #[error("{0} is out of range for this seating map")]
    OutOfRange(String),

    /// Свободных мест меньше, чем запрошено.
    #[error("not enough seats available: requested {requested}, available {available}")]
    InsufficientCapacity { requested: usize, available: usize },

    /// Попытка занять место, уже входящее в подтверждённую бронь.
    #[error("seat {0} is already taken")]
    AlreadyOccupied(String),
}
