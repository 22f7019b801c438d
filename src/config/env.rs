//! API credential loading from the environment.
//!
//! The AssemblyAI API key is taken from the `ASSEMBLYAI_API_KEY` environment
//! variable, with `.env` files honored via dotenvy. Credentials are resolved
//! here, at the edge, and handed to the client as a plain value.

/// Environment variable holding the AssemblyAI API key.
pub const API_KEY_VAR: &str = "ASSEMBLYAI_API_KEY";

/// Resolves the AssemblyAI API key from the environment.
///
/// # Errors
/// If the variable is unset or empty.
pub fn assemblyai_api_key() -> Result<String, anyhow::Error> {
    // Load .env if present; ignore a missing file.
    dotenvy::dotenv().ok();

    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(anyhow::anyhow!(
            "{API_KEY_VAR} environment variable not set"
        )),
    }
}
