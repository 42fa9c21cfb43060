//! Well-known names in a Leitstand UI directory tree.

use std::path::Path;

/// Standard UI directory markers and file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPath {
    /// The `ui` directory below the UI root
    UiDir,
    /// The `ui/modules` directory holding one directory per module
    ModulesDir,
    /// The `ui/contrib` directory holding contribution documents
    ContribDir,
    /// The per-module descriptor file name
    ModuleDescriptor,
    /// The main menu document
    MainMenu,
    /// The shared settings file at the UI root
    Settings,
    /// The local, unversioned settings override at the UI root
    LocalSettings,
}

impl UiPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UiDir => "ui",
            Self::ModulesDir => "ui/modules",
            Self::ContribDir => "ui/contrib",
            Self::ModuleDescriptor => "module.yaml",
            Self::MainMenu => "ui/modules/main-menu.yaml",
            Self::Settings => "leitstand.toml",
            Self::LocalSettings => "leitstand.local.toml",
        }
    }
}

impl AsRef<Path> for UiPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for UiPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for UiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
