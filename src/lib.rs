//! autoexec: a config script generator for a game client
//!
//! Turns a structured form snapshot into the ordered lines of an
//! `autoexec.cfg`. Generation is a pure function of the snapshot: sections
//! are gated by their include flags, values fall back to a single canonical
//! default, and key names are rewritten to scancodes.
//!
//! # Example
//!
//! ```
//! use autoexec::codegen::{generate_json, GenerationOptions};
//! use serde_json::json;
//!
//! let snapshot = json!({
//!     "consoleColor": "green",
//!     "includeSections": { "settings": true, "hud": true },
//!     "includeCommands": { "cl_hud_color": true },
//!     "cl_hud_color": "3"
//! });
//!
//! let lines = generate_json(&snapshot, &GenerationOptions::preview()).unwrap();
//! assert!(lines.iter().any(|line| line.starts_with("cl_hud_color ")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod codegen;
pub mod config;
pub mod export;
pub mod form;

pub use codegen::{generate, generate_json, GenerationOptions};
pub use export::{preview_text, render_download, Download};
pub use form::{FormState, GenerationError};
