//! Filesystem boundary for the Leitstand UI metadata layer
//!
//! Provides normalized path handling, format-agnostic document loading
//! (YAML, JSON, TOML) and atomic writes for exported descriptors.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigStore, Format};
pub use constants::UiPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
