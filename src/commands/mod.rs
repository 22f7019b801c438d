//! Application command handlers for batchscribe.
//!
//! Each submodule owns one CLI command:
//! - `batch`: locate, transcribe and persist a batch of media files
//! - `read`: load and print a previously saved transcript
//! - `info`: list supported languages and media formats

pub mod batch;
pub mod info;
pub mod read;

pub use batch::handle_batch;
pub use info::handle_info;
pub use read::handle_read;
