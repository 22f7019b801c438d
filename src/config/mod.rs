//! Configuration management for batchscribe.
//!
//! Application settings come from a TOML file in the user's config directory;
//! the API credential comes from the environment (optionally via a `.env`
//! file). Core batch logic never touches either directly.

pub mod env;
pub mod file;

pub use env::assemblyai_api_key;
pub use file::{AssemblyAiConfig, BatchscribeConfig};
