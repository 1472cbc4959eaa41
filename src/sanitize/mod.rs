pub mod filename;
pub mod platform;

pub use filename::{extract_extension, sanitize, sanitize_file_name, sanitize_for};   // re-export
pub use platform::Platform;   // re-export
