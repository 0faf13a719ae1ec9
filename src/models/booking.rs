use serde::{Deserialize, Serialize};

use crate::models::seat::Seat;

/// Подтверждённая бронь: непрозрачный идентификатор и список мест.
///
/// Создается пустой, заполняется ровно один раз при фиксации выбора и
/// после этого не меняется. Отмена - это просто отказ от черновика до
/// фиксации: такая бронь никогда не попадает в данные сеанса.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    id: String,
    seats: Vec<Seat>,
}

impl Booking {
    /// Новая бронь без мест; места появятся при подтверждении выбора.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), seats: Vec::new() }
    }

    /// Фиксирует выбранные места, потребляя черновик брони.
    pub fn with_seats(mut self, seats: Vec<Seat>) -> Self {
        self.seats = seats;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn contains(&self, seat: Seat) -> bool {
        self.seats.contains(&seat)
    }
}
