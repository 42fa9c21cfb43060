//! Orchestration layer for the Leitstand UI metadata
//!
//! Resolves settings for a UI root, loads module descriptors and
//! contributions from disk, and serves merged descriptors and the main menu
//! through cached services.

pub mod error;
pub mod leitstand;
pub mod loader;
pub mod service;
pub mod settings;

pub use error::{Error, Result};
pub use leitstand::Leitstand;
pub use loader::{ContributionLoader, FsModuleLoader, ModuleLoader};
pub use service::{MainMenuService, ModuleDescriptorService};
pub use settings::{Settings, SettingsResolver};
