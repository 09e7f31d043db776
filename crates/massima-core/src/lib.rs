//! Massima Core Library
//!
//! Domain models and session state for the tax-judgment analyzer.

pub mod analysis;
pub mod error;
pub mod session;

pub use error::{AnalysisError, AnalysisResult};
