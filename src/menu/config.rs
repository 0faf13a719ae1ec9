//! Стартовое меню: название фильма и размеры зала одной строкой.

use std::io::{self, BufRead, Write};

use crate::config::SeatingLimits;
use crate::menu::read_line;

/// Разобранная строка настройки: название и размеры зала.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningSetup {
    pub title: String,
    pub row_count: usize,
    pub seats_per_row: usize,
}

/// Результат разбора одной строки меню настройки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInput {
    Exit,
    Setup(ScreeningSetup),
}

/// Разбор и валидация строки "[Title] [Row] [Seats Per Row]".
///
/// Правила проверяются по одному, побеждает первое нарушенное; текст
/// ошибки возвращается как есть для показа оператору.
pub fn parse_config_line(line: &str, limits: &SeatingLimits) -> Result<ConfigInput, String> {
    let text = line.trim();
    if text.is_empty() {
        return Err(
            "Input cannot be empty. Please enter in [Title] [Row] [Seats Per Row] format."
                .to_string(),
        );
    }

    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() == 1 && parts[0].eq_ignore_ascii_case("exit") {
        return Ok(ConfigInput::Exit);
    }

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if parts.len() != 3 || !all_digits(parts[1]) || !all_digits(parts[2]) {
        return Err(
            "Invalid format. Please enter in [Title] [Row] [Seats Per Row] format.".to_string(),
        );
    }

    // Строки уже из одних цифр: переполнение уводим в потолок, его
    // отсечет проверка максимума ниже.
    let row_count: usize = parts[1].parse().unwrap_or(usize::MAX);
    let seats_per_row: usize = parts[2].parse().unwrap_or(usize::MAX);

    if row_count == 0 {
        return Err("Row count must be a positive integer.".to_string());
    }
    if seats_per_row == 0 {
        return Err("Seats per row must be a positive integer.".to_string());
    }
    if row_count > limits.max_row_count {
        return Err(format!("Row count cannot exceed {}.", limits.max_row_count));
    }
    if seats_per_row > limits.max_seats_per_row {
        return Err(format!(
            "Seats per row cannot exceed {}.",
            limits.max_seats_per_row
        ));
    }

    Ok(ConfigInput::Setup(ScreeningSetup {
        title: parts[0].to_string(),
        row_count,
        seats_per_row,
    }))
}

pub struct ConfigMenu {
    limits: SeatingLimits,
}

impl ConfigMenu {
    pub fn new(limits: SeatingLimits) -> Self {
        Self { limits }
    }

    /// Крутит приглашение до валидной строки. None - оператор вышел
    /// (команда exit или конец ввода).
    pub fn run(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<Option<ScreeningSetup>> {
        loop {
            writeln!(
                output,
                "Please define movie title and seating map in [Title] [Row] [Seats Per Row] format."
            )?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };
            tracing::debug!("config menu input: {}", line);

            match parse_config_line(&line, &self.limits) {
                Ok(ConfigInput::Exit) => {
                    writeln!(output, "Exiting Configuration Menu")?;
                    return Ok(None);
                }
                Ok(ConfigInput::Setup(setup)) => {
                    writeln!(output, "Configured: {line}")?;
                    return Ok(Some(setup));
                }
                Err(message) => writeln!(output, "{message}")?,
            }
        }
    }
}
