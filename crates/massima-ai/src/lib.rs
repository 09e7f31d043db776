//! Massima AI
//!
//! Client for the hosted generative model. Builds the extraction prompt,
//! issues one `generateContent` call with a declared JSON response schema,
//! and decodes the reply into an `Analysis` or fails.

pub mod gemini;
pub mod prompt;

pub use gemini::{Analyzer, GeminiClient, DEFAULT_GEMINI_URL, DEFAULT_MODEL};
