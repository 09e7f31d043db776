//! Judgment analysis domain.

pub mod example;
pub mod model;

pub use model::{Analysis, Outcome};
