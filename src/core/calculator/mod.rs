pub mod flags;
pub mod working_hours;
