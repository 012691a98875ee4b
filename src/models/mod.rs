pub mod daily_summary;
pub mod flag_encoding;
pub mod parse_error;
pub mod punch;
