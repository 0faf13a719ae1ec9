use serde::{Deserialize, Serialize};

// Фильм. Бронированию нужен только заголовок.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}
