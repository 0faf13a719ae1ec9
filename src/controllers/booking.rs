//! booking.rs
//!
//! Контроллер бронирования - ядро системы. Здесь живут оба алгоритма
//! подбора мест и проверка занятости:
//!
//! 1.  **select_seats_from_center**: правило "лучшие доступные" - от
//!     центра ряда наружу, попеременно вправо и влево, с переходом на
//!     следующий ряд и возвратом к ряду A после последнего.
//! 2.  **select_seats_from_anchor**: подбор от места, указанного
//!     оператором: ряд якоря заполняется вправо, остаток добирается
//!     правилом от центра со следующего ряда.
//! 3.  **Проверка занятости**: оба алгоритма сверяются с занятостью на
//!     каждом кандидате и не берут одно место дважды за один вызов.
//!
//! Контроллер не меняет занятость сам: алгоритмы подбора работают только
//! на чтение, а фиксация выбора - отдельный явный шаг `save_booking`.

use crate::error::BookingError;
use crate::models::{Booking, Screening, Seat};

/// Ряд по умолчанию для подбора от центра: ряд A - самый дальний от
/// экрана (индексы рядов растут к экрану, карта зала печатается от
/// экрана вниз). Стартовый ряд - явный параметр алгоритма; это его
/// документированное значение для вызова "просто дай лучшие места".
pub const DEFAULT_STARTING_ROW: usize = 0;

pub struct BookingController {
    screening: Screening,
}

impl BookingController {
    pub fn new(screening: Screening) -> Self {
        Self { screening }
    }

    pub fn screening(&self) -> &Screening {
        &self.screening
    }

    /* ---------- OCCUPANCY ---------- */

    /// Занято ли место какой-либо подтверждённой бронью.
    pub fn is_seat_booked(&self, seat: Seat) -> bool {
        self.screening.is_seat_booked(seat)
    }

    /// Граница валидации прямого запроса места: занятое место - ошибка.
    /// Сам поиск мест занятые просто пропускает, сюда они не доходят.
    pub fn ensure_seat_free(&self, seat: Seat) -> Result<(), BookingError> {
        if self.is_seat_booked(seat) {
            return Err(BookingError::AlreadyOccupied(seat.to_string()));
        }
        Ok(())
    }

    pub fn total_seats(&self) -> usize {
        self.screening.total_seats()
    }

    pub fn seats_available(&self) -> usize {
        self.screening.seats_available()
    }

    /* ---------- SEAT SELECTION ---------- */

    /// Подбор по умолчанию: от центра ряда наружу, начиная со
    /// `starting_row`, с переходом к следующему ряду и возвратом к ряду A
    /// после последнего. Возвращает ровно `seat_count` мест в порядке
    /// обнаружения либо ошибку; короткий список не возвращается никогда.
    pub fn select_seats_from_center(
        &self,
        seat_count: usize,
        starting_row: usize,
    ) -> Result<Vec<Seat>, BookingError> {
        self.validate_seat_count(seat_count)?;
        let row_count = self.screening.seating_config.row_count();
        if starting_row >= row_count {
            return Err(BookingError::OutOfRange(format!("starting row {starting_row}")));
        }

        tracing::debug!("selecting {} seats from center, starting row {}", seat_count, starting_row);
        let mut selected = Vec::with_capacity(seat_count);
        self.fill_from_center(seat_count, starting_row, &mut selected)?;
        Ok(selected)
    }

    /// Подбор от якоря: ряд якоря заполняется слева направо от указанного
    /// места, остаток добирается правилом от центра со следующего ряда
    /// (после последнего ряда - ряд A, как и в основном алгоритме).
    pub fn select_seats_from_anchor(
        &self,
        seat_count: usize,
        anchor_label: &str,
    ) -> Result<Vec<Seat>, BookingError> {
        self.validate_seat_count(seat_count)?;
        // 1) Разбираем якорь и проверяем его границы.
        let anchor = self.validate_anchor(anchor_label)?;
        tracing::debug!("selecting {} seats from anchor {}", seat_count, anchor);

        let config = &self.screening.seating_config;
        let seats_per_row = config.seats_per_row();
        let mut selected = Vec::with_capacity(seat_count);

        // 2) Полностью занятый ряд распознаётся до цикла заполнения:
        //    перебирать его нечего, сразу уходим на правило от центра.
        if self.is_row_fully_booked(anchor.row())? {
            tracing::debug!("anchor row {} is fully booked, falling back to center fill", anchor.row());
        } else {
            // 3) Добираем ряд якоря вправо до конца ряда.
            for column in anchor.column()..seats_per_row {
                if selected.len() == seat_count {
                    break;
                }
                let seat = Seat::new(anchor.row(), column)?;
                if self.is_seat_free_for(seat, &selected) {
                    selected.push(seat);
                } else {
                    tracing::debug!("seat {} is already booked, trying next", seat);
                }
            }
        }

        // 4) Остаток - от центра, на один ряд ближе к экрану.
        let remaining = seat_count - selected.len();
        if remaining > 0 {
            let next_row = (anchor.row() + 1) % config.row_count();
            self.fill_from_center(remaining, next_row, &mut selected)?;
        }

        Ok(selected)
    }

    /// Проверяет метку якоря: сначала формат, затем границы зала.
    pub fn validate_anchor(&self, anchor_label: &str) -> Result<Seat, BookingError> {
        let seat: Seat = anchor_label.parse()?;
        if !self.screening.seating_config.contains(seat) {
            return Err(BookingError::OutOfRange(format!("seat {seat}")));
        }
        Ok(seat)
    }

    // Количество билетов: положительное и не больше свободных мест.
    // Проверка ёмкости до начала поиска гарантирует, что поиск всегда
    // завершится полным набором.
    fn validate_seat_count(&self, seat_count: usize) -> Result<(), BookingError> {
        if seat_count == 0 {
            return Err(BookingError::OutOfRange("ticket count 0".to_string()));
        }
        let available = self.seats_available();
        if seat_count > available {
            return Err(BookingError::InsufficientCapacity {
                requested: seat_count,
                available,
            });
        }
        Ok(())
    }

    // Добирает `needed` мест в `selected`, обходя ряды одним полным
    // кругом: от стартового ряда к экрану, после последнего - снова ряд A.
    // Каждый ряд просматривается ровно один раз и отдает все свои
    // свободные места, так что второй круг не нашел бы ничего нового.
    fn fill_from_center(
        &self,
        needed: usize,
        starting_row: usize,
        selected: &mut Vec<Seat>,
    ) -> Result<(), BookingError> {
        if needed == 0 {
            return Ok(());
        }
        let row_count = self.screening.seating_config.row_count();
        let mut remaining = needed;

        for step in 0..row_count {
            let row = (starting_row + step) % row_count;
            let taken = self.collect_row_from_center(row, remaining, selected)?;
            remaining -= taken;
            if remaining == 0 {
                return Ok(());
            }
            tracing::debug!("row {} yielded {} seats, {} still needed", row, taken, remaining);
        }

        // Круг пройден, мест не хватило. Предварительная проверка ёмкости
        // делает эту ветку недостижимой из публичных методов.
        Err(BookingError::InsufficientCapacity {
            requested: needed,
            available: needed - remaining,
        })
    }

    // Просматривает один ряд в порядке "от центра наружу" и добирает
    // свободные места в `selected`. Возвращает число добранных.
    fn collect_row_from_center(
        &self,
        row: usize,
        needed: usize,
        selected: &mut Vec<Seat>,
    ) -> Result<usize, BookingError> {
        if needed == 0 {
            return Ok(0);
        }
        let seats_per_row = self.screening.seating_config.seats_per_row();
        let mut taken = 0;

        for column in center_out_columns(seats_per_row) {
            if taken == needed {
                break;
            }
            let seat = Seat::new(row, column)?;
            if self.is_seat_free_for(seat, selected) {
                selected.push(seat);
                taken += 1;
            } else {
                tracing::debug!("seat {} is already booked or selected, trying next", seat);
            }
        }

        Ok(taken)
    }

    // Свободно для текущего выбора: не занято бронью и не взято ранее в
    // рамках этого же вызова (кандидатный набор без дублей).
    fn is_seat_free_for(&self, seat: Seat, selected: &[Seat]) -> bool {
        !self.is_seat_booked(seat) && !selected.contains(&seat)
    }

    fn is_row_fully_booked(&self, row: usize) -> Result<bool, BookingError> {
        let seats_per_row = self.screening.seating_config.seats_per_row();
        for column in 0..seats_per_row {
            if !self.is_seat_booked(Seat::new(row, column)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /* ---------- BOOKINGS ---------- */

    /// Новая пустая бронь со следующим идентификатором: "GIC" + счетчик
    /// подтверждённых броней с ведущими нулями.
    pub fn new_booking(&self) -> Booking {
        let new_id = format!("GIC{:04}", self.screening.booking_data().len() + 1);
        Booking::new(new_id)
    }

    /// Фиксирует бронь в сеансе - единственная точка записи занятости.
    pub fn save_booking(&mut self, booking: Booking) -> Result<(), BookingError> {
        self.screening.commit(booking)
    }

    /// Поиск подтверждённой брони по идентификатору.
    pub fn find_booking(&self, id: &str) -> Option<&Booking> {
        self.screening.find_booking(id)
    }
}

// Порядок обхода одного ряда: центр, затем попеременно правый и левый
// указатели наружу. Чередование указателей покрывает ряд целиком при
// любой ширине, включая крайние колонки.
fn center_out_columns(seats_per_row: usize) -> Vec<usize> {
    let center = seats_per_row / 2;
    let mut columns = Vec::with_capacity(seats_per_row);
    columns.push(center);

    let mut offset = 1;
    while columns.len() < seats_per_row {
        if center + offset < seats_per_row {
            columns.push(center + offset);
        }
        if offset <= center {
            columns.push(center - offset);
        }
        offset += 1;
    }

    columns
}
