//! Главное меню кинотеатра: бронирование, проверка брони, выход.

use std::io::{self, BufRead, Write};

use crate::controllers::{BookingController, DEFAULT_STARTING_ROW};
use crate::display::SeatingDisplay;
use crate::error::BookingError;
use crate::menu::read_line;
use crate::models::{Screening, Seat};

pub struct BookingMenu {
    controller: BookingController,
}

impl BookingMenu {
    pub fn new(screening: Screening) -> Self {
        Self { controller: BookingController::new(screening) }
    }

    /// Состояние после сессии: тесты и вызывающая сторона читают брони
    /// через контроллер.
    pub fn controller(&self) -> &BookingController {
        &self.controller
    }

    /// Цикл главного меню до команды выхода или конца ввода.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
        loop {
            let title = self.controller.screening().movie.title.clone();
            let available = self.controller.seats_available();

            writeln!(output)?;
            writeln!(output, "Welcome to GIC Cinemas")?;
            writeln!(output, "[1] Book Tickets for '{title}' ({available} seats available)")?;
            writeln!(output, "[2] Check Bookings")?;
            writeln!(output, "[3] Exit")?;
            writeln!(output)?;
            writeln!(output, "Please enter your selection:")?;

            let Some(choice) = read_line(input)? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.book_tickets(input, output)?,
                "2" => self.check_bookings(input, output)?,
                "3" => {
                    writeln!(output)?;
                    writeln!(output, "Thank you for using GIC Cinemas System. Bye!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(output)?;
                    writeln!(output, "Invalid choice, please try again.")?;
                }
            }
        }
    }

    // Ветка [1]: количество билетов, подбор по умолчанию, просмотр карты,
    // затем либо подтверждение, либо пересадка от указанного места.
    fn book_tickets(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
        loop {
            writeln!(output)?;
            writeln!(
                output,
                "Enter number of tickets to purchase, or enter blank to go back to main menu:"
            )?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            if line.is_empty() {
                return Ok(());
            }

            if !line.bytes().all(|b| b.is_ascii_digit()) {
                writeln!(output, "Please enter a positive number of tickets.")?;
                continue;
            }
            // Строка из одних цифр: переполнение уводим в потолок, его
            // отсечет проверка ёмкости.
            let seat_count: usize = line.parse().unwrap_or(usize::MAX);
            if seat_count == 0 {
                writeln!(output, "Please enter a positive number of tickets.")?;
                continue;
            }

            match self.controller.select_seats_from_center(seat_count, DEFAULT_STARTING_ROW) {
                Ok(selected) => return self.review_selection(seat_count, selected, input, output),
                Err(BookingError::InsufficientCapacity { available, .. }) => {
                    writeln!(output, "Sorry, there are only {available} seats available.")?;
                }
                Err(err) => writeln!(output, "{err}")?,
            }
        }
    }

    // Карта с кандидатами, затем: пустая строка подтверждает бронь, метка
    // места пересаживает выбор от нового якоря. Занятость меняется только
    // на подтверждении.
    fn review_selection(
        &mut self,
        seat_count: usize,
        mut selected: Vec<Seat>,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<()> {
        let booking = self.controller.new_booking();
        let title = self.controller.screening().movie.title.clone();
        writeln!(output)?;
        writeln!(output, "Successfully reserved {seat_count} {title} tickets.")?;

        loop {
            writeln!(output, "Booking id: {}", booking.id())?;
            writeln!(output, "Selected seats:")?;
            let map = SeatingDisplay::for_screening(self.controller.screening()).render(&selected);
            writeln!(output, "{map}")?;
            writeln!(
                output,
                "Enter blank to accept seat selection, or enter new seating position:"
            )?;

            let Some(line) = read_line(input)? else {
                // Конец ввода до подтверждения: выбор отбрасывается.
                return Ok(());
            };
            if line.is_empty() {
                let id = booking.id().to_string();
                match self.controller.save_booking(booking.with_seats(selected)) {
                    Ok(()) => writeln!(output, "Booking id: {id} confirmed.")?,
                    Err(err) => writeln!(output, "{err}")?,
                }
                return Ok(());
            }

            // Пересадка: новый якорь проверяется целиком (формат, границы,
            // занятость), при ошибке старый выбор остается на экране.
            match self.reanchor(seat_count, &line) {
                Ok(new_selection) => selected = new_selection,
                Err(err) => writeln!(output, "{err}")?,
            }
        }
    }

    fn reanchor(&self, seat_count: usize, anchor_label: &str) -> Result<Vec<Seat>, BookingError> {
        let anchor = self.controller.validate_anchor(anchor_label)?;
        self.controller.ensure_seat_free(anchor)?;
        self.controller.select_seats_from_anchor(seat_count, anchor_label)
    }

    // Ветка [2]: карта зала с местами указанной брони поверх занятости.
    fn check_bookings(&self, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<()> {
        loop {
            writeln!(output)?;
            writeln!(output, "Enter booking id, or enter blank to go back to main menu:")?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            if line.is_empty() {
                return Ok(());
            }

            let id = line.to_uppercase();
            match self.controller.find_booking(&id) {
                Some(booking) => {
                    writeln!(output, "Booking id: {}", booking.id())?;
                    writeln!(output, "Selected seats:")?;
                    let map = SeatingDisplay::for_screening(self.controller.screening())
                        .render(booking.seats());
                    writeln!(output, "{map}")?;
                }
                None => writeln!(output, "Booking id {id} not found.")?,
            }
        }
    }
}
