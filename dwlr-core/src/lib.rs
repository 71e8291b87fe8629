pub mod alert;
pub mod chat;
pub mod place;
pub mod seasonal;
pub mod tips;
pub mod water_level;
