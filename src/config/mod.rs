use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub seating: SeatingLimits,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
    // Готовый сеанс вида "Inception 8 10" - пропускает меню настройки.
    pub screening_preset: Option<String>,
}

// Пределы зала, на которые проверяется ввод оператора при настройке
#[derive(Debug, Clone, Deserialize)]
pub struct SeatingLimits {
    pub max_row_count: usize,
    pub max_seats_per_row: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_booking_system=debug".to_string()),
                screening_preset: env::var("SCREENING_PRESET").ok(),
            },
            seating: SeatingLimits {
                max_row_count: env::var("MAX_ROW_COUNT")
                    .unwrap_or_else(|_| "26".to_string())
                    .parse()
                    .expect("MAX_ROW_COUNT must be a valid number"),
                max_seats_per_row: env::var("MAX_SEATS_PER_ROW")
                    .unwrap_or_else(|_| "50".to_string())
                    .parse()
                    .expect("MAX_SEATS_PER_ROW must be a valid number"),
            },
        }
    }
}
