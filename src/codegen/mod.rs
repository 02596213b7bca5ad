//! Code generation module
//!
//! This module turns a form snapshot into config script text:
//!
//! - `autoexec`: the line generator and its options
//! - `format`: column-aligned command lines, banners and sub-headings
//! - `keys`: key name to scancode translation for bind lines

mod autoexec;
pub mod format;
pub mod keys;

pub use autoexec::{generate, generate_json, AutoexecGenerator, GenerationOptions};
pub use format::Layout;
