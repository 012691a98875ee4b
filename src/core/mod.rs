pub mod calculator;
pub mod collector;
pub mod config;
pub mod dedup;
pub mod grouper;
pub mod parser;
pub mod pipeline;
pub mod search;
pub mod shift;
pub mod stats;
pub mod summarizer;
pub mod timezone;
