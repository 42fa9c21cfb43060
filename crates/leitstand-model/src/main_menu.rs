//! The application-wide main menu listing every top-level module.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ConfigMap;
use crate::defaults::require;
use crate::error::{Error, Result};
use crate::extension::{Extension, ExtensionPayload};
use crate::sorter::{Constraints, ExtensionSorter, Named};

/// A main menu entry pointing at a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainMenuItem {
    #[serde(default)]
    module: String,
    #[serde(default)]
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default)]
    label: String,
    #[serde(default)]
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<String>,
    #[serde(default, alias = "scopesAllowed", skip_serializing_if = "BTreeSet::is_empty")]
    scopes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "ConfigMap::is_empty")]
    config: ConfigMap,
    #[serde(default, skip_serializing)]
    welcome: bool,
}

impl MainMenuItem {
    pub fn builder() -> MainMenuItemBuilder {
        MainMenuItemBuilder::default()
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Path of the module's entry view.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Whether this module is shown after login.
    pub fn is_welcome_module(&self) -> bool {
        self.welcome
    }

    pub(crate) fn validate(self) -> Result<Self> {
        require("main menu item", "module", &self.module)?;
        require("main menu item", "title", &self.title)?;
        require("main menu item", "label", &self.label)?;
        require("main menu item", "path", &self.path)?;
        Ok(self)
    }
}

impl Named for MainMenuItem {
    fn name(&self) -> &str {
        &self.module
    }
}

/// Builder for [`MainMenuItem`]. `module`, `title`, `label` and `path` are required.
#[derive(Debug, Clone, Default)]
pub struct MainMenuItemBuilder {
    item: MainMenuItem,
}

impl MainMenuItemBuilder {
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.item.module = module.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.item.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.item.subtitle = Some(subtitle.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.item.label = label.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.item.path = path.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.item.position = Some(position.into());
        self
    }

    pub fn scopes<S: Into<String>>(mut self, scopes: impl IntoIterator<Item = S>) -> Self {
        self.item.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: ConfigMap) -> Self {
        self.item.config = config;
        self
    }

    pub fn welcome(mut self, welcome: bool) -> Self {
        self.item.welcome = welcome;
        self
    }

    pub fn build(self) -> Result<MainMenuItem> {
        self.item.validate()
    }
}

/// The ordered list of top-level modules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainMenu {
    #[serde(default)]
    menu: Vec<MainMenuItem>,
}

impl MainMenu {
    pub fn new(items: impl IntoIterator<Item = MainMenuItem>) -> Self {
        Self {
            menu: items.into_iter().collect(),
        }
    }

    /// Parse and validate a `main-menu.yaml` document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let menu: Self = serde_yaml::from_str(content).map_err(|source| Error::Parse {
            entity: "main menu",
            source,
        })?;
        let items = menu
            .menu
            .into_iter()
            .map(MainMenuItem::validate)
            .collect::<Result<_>>()?;
        Ok(Self { menu: items })
    }

    pub fn items(&self) -> &[MainMenuItem] {
        &self.menu
    }

    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
    }

    pub fn find_item(&self, module: &str) -> Option<&MainMenuItem> {
        self.menu.iter().find(|item| item.module == module)
    }

    /// Add contributed modules, one constraint per extension.
    ///
    /// Only main menu payloads are considered. A module already listed keeps
    /// its entry and the contributed one is dropped.
    pub fn add_extensions(&mut self, extensions: impl IntoIterator<Item = Extension>) {
        let mut constraints = Constraints::new();

        for extension in extensions {
            let (point, payload) = extension.into_parts();
            let ExtensionPayload::MainMenu(item) = payload else {
                continue;
            };
            if self.find_item(&item.module).is_some() {
                tracing::warn!(module = %item.module, "dropping contributed main menu entry with duplicate module");
                continue;
            }
            constraints.insert(item.module.clone(), vec![point]);
            self.menu.push(item);
        }

        if constraints.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.menu);
        self.menu = ExtensionSorter::new(&constraints).sort(items);
    }

    /// The module to open after login.
    ///
    /// The first entry flagged as welcome module, otherwise the first entry.
    pub fn find_welcome_module(&self) -> Option<&MainMenuItem> {
        self.menu
            .iter()
            .find(|item| item.welcome)
            .or_else(|| self.menu.first())
    }
}
