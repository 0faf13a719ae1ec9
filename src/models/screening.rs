use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::models::{Booking, Movie, Seat, SeatingConfig};

/// Сеанс: фильм, время начала, конфигурация зала и подтверждённые брони.
///
/// Занятость мест нигде не хранится отдельно - она выводится из списка
/// броней, чтобы "что забронировано" и "список броней" не расходились.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screening {
    pub start_time: NaiveDateTime,
    pub seating_config: SeatingConfig,
    pub movie: Movie,
    booking_data: Vec<Booking>,
}

impl Screening {
    pub fn new(start_time: NaiveDateTime, seating_config: SeatingConfig, movie: Movie) -> Self {
        Self {
            start_time,
            seating_config,
            movie,
            booking_data: Vec::new(),
        }
    }

    pub fn booking_data(&self) -> &[Booking] {
        &self.booking_data
    }

    /// Занято ли место какой-либо подтверждённой бронью.
    pub fn is_seat_booked(&self, seat: Seat) -> bool {
        self.booking_data.iter().any(|booking| booking.contains(seat))
    }

    pub fn total_seats(&self) -> usize {
        self.seating_config.total_seats()
    }

    /// Количество свободных мест на данный момент.
    pub fn seats_available(&self) -> usize {
        let booked: usize = self.booking_data.iter().map(|b| b.seats().len()).sum();
        self.total_seats() - booked
    }

    /// Поиск брони по идентификатору.
    pub fn find_booking(&self, id: &str) -> Option<&Booking> {
        self.booking_data.iter().find(|booking| booking.id() == id)
    }

    /// Фиксирует бронь - единственная точка изменения занятости.
    ///
    /// Проверка и добавление выполняются одним шагом: место не может
    /// оказаться в двух подтверждённых бронях одновременно.
    pub fn commit(&mut self, booking: Booking) -> Result<(), BookingError> {
        let mut seen = HashSet::new();
        for &seat in booking.seats() {
            if self.is_seat_booked(seat) || !seen.insert(seat) {
                tracing::warn!("booking {} rejected: seat {} is already taken", booking.id(), seat);
                return Err(BookingError::AlreadyOccupied(seat.to_string()));
            }
        }

        tracing::info!("booking {} committed with {} seats", booking.id(), booking.seats().len());
        self.booking_data.push(booking);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn screening(rows: usize, seats_per_row: usize) -> Screening {
        Screening::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            SeatingConfig::new(rows, seats_per_row).unwrap(),
            Movie::new("TestMovie"),
        )
    }

    fn seats(labels: &[&str]) -> Vec<Seat> {
        labels.iter().map(|label| label.parse().unwrap()).collect()
    }

    #[test]
    fn occupancy_is_derived_from_committed_bookings() {
        let mut screening = screening(5, 10);
        assert_eq!(screening.seats_available(), 50);

        screening
            .commit(Booking::new("GIC0001").with_seats(seats(&["A1", "A2"])))
            .unwrap();

        assert!(screening.is_seat_booked("A1".parse().unwrap()));
        assert!(screening.is_seat_booked("A2".parse().unwrap()));
        assert!(!screening.is_seat_booked("A3".parse().unwrap()));
        assert_eq!(screening.seats_available(), 48);
    }

    #[test]
    fn commit_rejects_double_booking() {
        let mut screening = screening(5, 10);
        screening
            .commit(Booking::new("GIC0001").with_seats(seats(&["A1", "A2"])))
            .unwrap();

        let err = screening
            .commit(Booking::new("GIC0002").with_seats(seats(&["A2", "A3"])))
            .unwrap_err();
        assert_eq!(err, BookingError::AlreadyOccupied("A2".to_string()));

        // Отвергнутая бронь не меняет занятость.
        assert!(!screening.is_seat_booked("A3".parse().unwrap()));
        assert_eq!(screening.booking_data().len(), 1);
    }

    #[test]
    fn commit_rejects_duplicates_within_one_booking() {
        let mut screening = screening(5, 10);
        let err = screening
            .commit(Booking::new("GIC0001").with_seats(seats(&["B1", "B1"])))
            .unwrap_err();
        assert_eq!(err, BookingError::AlreadyOccupied("B1".to_string()));
    }

    #[test]
    fn finds_bookings_by_id() {
        let mut screening = screening(5, 10);
        screening
            .commit(Booking::new("GIC0001").with_seats(seats(&["C5"])))
            .unwrap();

        assert!(screening.find_booking("GIC0001").is_some());
        assert!(screening.find_booking("GIC0002").is_none());
    }
}
