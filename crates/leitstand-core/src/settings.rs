//! Layered settings resolution
//!
//! Settings locate the UI metadata below a root directory. They are merged
//! from the following layers, later ones overriding earlier ones field by
//! field:
//!
//! 1. Built-in defaults
//! 2. `<root>/leitstand.toml`, `[ui]` table
//! 3. `<root>/leitstand.local.toml`, `[ui]` table
//!
//! ```toml
//! [ui]
//! modules_dir = "ui/modules"
//! contrib_dir = "ui/contrib"
//! main_menu = "ui/modules/main-menu.yaml"
//! ```

use leitstand_fs::{ConfigStore, NormalizedPath, UiPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Resolved locations of the UI metadata, relative to the root unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub modules_dir: String,
    pub contrib_dir: String,
    pub main_menu: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modules_dir: UiPath::ModulesDir.as_str().to_string(),
            contrib_dir: UiPath::ContribDir.as_str().to_string(),
            main_menu: UiPath::MainMenu.as_str().to_string(),
        }
    }
}

impl Settings {
    pub fn modules_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.modules_dir)
    }

    pub fn contrib_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.contrib_dir)
    }

    pub fn main_menu_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(&self.main_menu)
    }

    fn merge(&mut self, layer: SettingsLayer) {
        if let Some(modules_dir) = layer.modules_dir {
            self.modules_dir = modules_dir;
        }
        if let Some(contrib_dir) = layer.contrib_dir {
            self.contrib_dir = contrib_dir;
        }
        if let Some(main_menu) = layer.main_menu {
            self.main_menu = main_menu;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    ui: SettingsLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsLayer {
    modules_dir: Option<String>,
    contrib_dir: Option<String>,
    main_menu: Option<String>,
}

/// Resolves [`Settings`] for a UI root directory
pub struct SettingsResolver {
    root: NormalizedPath,
}

impl SettingsResolver {
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    /// Merge all layers. Missing layers are skipped; invalid TOML is an error.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        let store = ConfigStore::new();

        for (layer, file) in [(2, UiPath::Settings), (3, UiPath::LocalSettings)] {
            let path = self.root.join(file.as_str());
            let parsed: SettingsFile = match store.load(&path) {
                Ok(parsed) => parsed,
                Err(e) if e.is_not_found() => {
                    tracing::debug!(%path, layer, "No settings file found, skipping");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            tracing::debug!(%path, layer, "Loaded settings");
            settings.merge(parsed.ui);
        }

        Ok(settings)
    }
}
