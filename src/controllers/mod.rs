pub mod booking;

pub use booking::{BookingController, DEFAULT_STARTING_ROW};
