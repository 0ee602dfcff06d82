//! Content analysis through the Claude messages API.
//!
//! Builds the fixed instructional prompt, performs the single request,
//! and parses the model's JSON answer into a validated verdict.

pub mod client;
pub mod model;
pub mod parse;
pub mod prompt;
