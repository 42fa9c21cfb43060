//! Command implementations for leitstand-cli

pub mod completions;
pub mod contributions;
pub mod main_menu;
pub mod module;
pub mod settings;

pub use completions::run_completions;
pub use contributions::run_contributions;
pub use main_menu::{run_main_menu, run_welcome};
pub use module::run_module;
pub use settings::run_settings;
