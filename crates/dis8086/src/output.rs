//! Text output: per-instruction formatting and whole-program listings.

pub mod formatter;
pub mod listing;
