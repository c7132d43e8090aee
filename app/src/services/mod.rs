//! Application services.

pub mod generate;
