pub mod config;
pub mod controllers;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;

pub use controllers::{BookingController, DEFAULT_STARTING_ROW};
pub use display::SeatingDisplay;
pub use error::BookingError;
pub use menu::{BookingMenu, ConfigMenu};
pub use models::{Booking, Movie, Screening, Seat, SeatingConfig};
