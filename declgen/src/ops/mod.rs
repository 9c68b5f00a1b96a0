//! Core operations.
//!
//! This module contains the business logic for declgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod targets;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use targets::targets;
