pub mod field;
pub mod time;
