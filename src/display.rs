//! Текстовая карта зала: экран сверху, ряды от экрана вниз, легенда снизу.

use crate::models::{Booking, Screening, Seat, SeatingConfig};

const SCREEN_TEXT: &str = "SCREEN";
const SELECTED_SYMBOL: char = 'o';
const AVAILABLE_SYMBOL: char = '.';
const UNAVAILABLE_SYMBOL: char = 'x';

/// Отрисовка состояния зала поверх списка подтверждённых броней.
///
/// Чистый форматтер: ничего не знает о поиске мест и занятость не меняет,
/// один и тот же вход всегда дает одну и ту же строку.
pub struct SeatingDisplay<'a> {
    seating_config: SeatingConfig,
    booking_data: &'a [Booking],
}

impl<'a> SeatingDisplay<'a> {
    pub fn new(seating_config: SeatingConfig, booking_data: &'a [Booking]) -> Self {
        Self { seating_config, booking_data }
    }

    pub fn for_screening(screening: &'a Screening) -> Self {
        Self::new(screening.seating_config, screening.booking_data())
    }

    /// Возвращает карту зала одной строкой с завершающим переводом строки.
    ///
    /// `selected_seats` - текущий, еще не подтверждённый выбор: такие
    /// места рисуются поверх занятости, чтобы оператор видел свой выбор
    /// даже на фоне чужих броней.
    pub fn render(&self, selected_seats: &[Seat]) -> String {
        let seats_per_row = self.seating_config.seats_per_row();
        let row_count = self.seating_config.row_count();
        let rule_width = seats_per_row * 3 + 1;

        let mut lines = Vec::with_capacity(row_count + 5);

        // Надпись SCREEN по центру над линейкой экрана.
        let padding = rule_width.saturating_sub(SCREEN_TEXT.len()) / 2;
        lines.push(format!("{}{}", " ".repeat(padding), SCREEN_TEXT));
        lines.push("-".repeat(rule_width));

        // Ряды идут от экрана вниз: первым печатается ближний к экрану
        // ряд (последняя буква), последним - ряд A.
        for row in (0..row_count).rev() {
            let mut line = String::with_capacity(rule_width + 1);
            line.push((b'A' + row as u8) as char);
            line.push(' ');
            for column in 0..seats_per_row {
                line.push(' ');
                line.push(self.symbol_for(row, column, selected_seats));
                line.push(' ');
            }
            lines.push(line);
        }

        // Номера мест, по три знака на колонку - в створе клеток выше.
        let mut ruler = String::from(" ");
        for column in 0..seats_per_row {
            ruler.push_str(&format!("{:>3}", column + 1));
        }
        lines.push(ruler);

        lines.push(String::new());
        lines.push(format!(
            "{SELECTED_SYMBOL} - Selected seat | {AVAILABLE_SYMBOL} - Available seat | {UNAVAILABLE_SYMBOL} - Unavailable seat"
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn symbol_for(&self, row: usize, column: usize, selected_seats: &[Seat]) -> char {
        let matches = |seat: &Seat| seat.row() == row && seat.column() == column;
        if selected_seats.iter().any(matches) {
            SELECTED_SYMBOL
        } else if self
            .booking_data
            .iter()
            .any(|booking| booking.seats().iter().any(matches))
        {
            UNAVAILABLE_SYMBOL
        } else {
            AVAILABLE_SYMBOL
        }
    }
}
