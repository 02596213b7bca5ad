//! Form state module
//!
//! This module describes the data the generator consumes:
//!
//! - `schema`: static tables of settings, binds and aliases with their defaults
//! - `state`: the typed `FormState` snapshot and its JSON validation boundary
//! - `derive`: pure flag derivations and quick selection presets
//! - `error`: errors raised for malformed snapshots

mod derive;
mod error;
pub mod schema;
mod state;

pub use derive::{apply_preset, derive_parent_flags, sync_setting_flags, Preset};
pub use error::{json_type, GenerationError, GenerationResult};
pub use state::{ConsoleColor, CustomBind, FormState, Section};
