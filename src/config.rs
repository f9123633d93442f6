//! Application configuration constants.

/// File extensions accepted for filesystem ingestion (drop, dialog, command line).
pub const SUPPORTED_FILE_EXTENSIONS: [&str; 2] = ["json", "txt"];

/// Stand-in path reported for documents pasted from the clipboard.
pub const CLIPBOARD_SOURCE_PATH: &str = "from clipboard";

/// Placeholder for stats that have no meaning for clipboard content.
pub const NOT_AVAILABLE: &str = "n/a";
