//! Интерактивные меню поверх движка бронирования.
//!
//! Оба меню не считают места сами: каждое решение - вызов контроллера,
//! рендерера или моделей. Ввод/вывод параметризованы (`BufRead`/`Write`),
//! чтобы сессии можно было прогонять в тестах по сценарию.

pub mod booking;
pub mod config;

pub use booking::BookingMenu;
pub use config::{ConfigMenu, ScreeningSetup};

use std::io::{self, BufRead};

// Одна строка ввода без обрамляющих пробелов; None - конец потока.
pub(crate) fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
