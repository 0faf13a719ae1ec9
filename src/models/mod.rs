pub mod booking;
pub mod movie;
pub mod screening;
pub mod seat;
pub mod seating_config;

pub use booking::Booking;
pub use movie::Movie;
pub use screening::Screening;
pub use seat::Seat;
pub use seating_config::SeatingConfig;
