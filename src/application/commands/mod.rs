pub mod categories;
pub mod posts;
pub mod uploads;
