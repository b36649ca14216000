//! Core operations.
//!
//! This module contains the business logic for rosalina commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod discover;
pub mod generate;

pub use check::check;
pub use clean::clean;
pub use discover::discover;
pub use generate::generate;
