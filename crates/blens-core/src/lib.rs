//! Biblical Lens core library.
//!
//! Credential storage, the Claude analysis client, and the verdict domain
//! model behind the `blens` CLI.

pub mod analysis;
pub mod error;
pub mod key;

pub use error::{LensError, LensResult};
