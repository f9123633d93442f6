//! Service layer for blocking I/O.
//!
//! Kept free of UI types so the controller can drive it headless.

pub mod clipboard_service;
pub mod ingest_service;

pub use clipboard_service::{ClipboardSource, SystemClipboard};
pub use ingest_service::{Ingested, ingest_file};
