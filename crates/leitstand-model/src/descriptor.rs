//! Module descriptors and the merge of contributed menus.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::defaults::require;
use crate::error::{Error, Result};
use crate::extension::{Extension, ExtensionPayload};
use crate::menu::ModuleMenu;
use crate::sorter::{Constraints, ExtensionSorter};

fn default_controller() -> String {
    "controller.js".to_string()
}

/// A sub-application bootstrapped when a module is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleApplication {
    pub application: String,
    #[serde(default = "default_controller")]
    pub controller: String,
    #[serde(default)]
    pub defer: bool,
}

impl ModuleApplication {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            controller: default_controller(),
            defer: false,
        }
    }

    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = controller.into();
        self
    }

    pub fn defer(mut self, defer: bool) -> Self {
        self.defer = defer;
        self
    }
}

/// A UI module: its menus, sub-applications and allowed scopes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    #[serde(default)]
    module: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    applications: Vec<ModuleApplication>,
    #[serde(default)]
    menus: Vec<ModuleMenu>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    scopes_allowed: BTreeSet<String>,
}

impl ModuleDescriptor {
    pub fn builder() -> ModuleDescriptorBuilder {
        ModuleDescriptorBuilder::default()
    }

    /// Parse and validate a `module.yaml` document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let descriptor: Self = serde_yaml::from_str(content).map_err(|source| Error::Parse {
            entity: "module descriptor",
            source,
        })?;
        descriptor.validate()
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn applications(&self) -> &[ModuleApplication] {
        &self.applications
    }

    pub fn menus(&self) -> &[ModuleMenu] {
        &self.menus
    }

    pub fn find_menu(&self, menu: &str) -> Option<&ModuleMenu> {
        self.menus.iter().find(|m| m.menu() == menu)
    }

    pub fn scopes_allowed(&self) -> &BTreeSet<String> {
        &self.scopes_allowed
    }

    /// Register a sub-application unless one with the same name exists.
    pub fn add_application(&mut self, application: ModuleApplication) {
        if self
            .applications
            .iter()
            .any(|a| a.application == application.application)
        {
            tracing::debug!(
                module = %self.module,
                application = %application.application,
                "application already registered"
            );
            return;
        }
        self.applications.push(application);
    }

    /// Merge contributed menus and menu items into this module.
    ///
    /// Contributed menus are appended and sorted first. Item extensions are
    /// then handed to the menu they name, so items may target menus that
    /// were contributed in the same call. Extensions for other modules and
    /// main menu payloads are skipped.
    pub fn add_extensions(&mut self, extensions: impl IntoIterator<Item = Extension>) {
        let mut constraints = Constraints::new();
        let mut item_extensions = Vec::new();

        for extension in extensions {
            if !extension.is_extension_for(&self.module) {
                tracing::debug!(
                    module = %self.module,
                    target = %extension.point().module,
                    "skipping extension of another module"
                );
                continue;
            }
            if extension.is_module_menu_extension() {
                item_extensions.push(extension);
                continue;
            }
            if !extension.is_module_extension() {
                continue;
            }

            let (point, payload) = extension.into_parts();
            let ExtensionPayload::Menus(menus) = payload else {
                continue;
            };
            for menu in menus {
                if self.find_menu(menu.menu()).is_some() {
                    tracing::warn!(
                        module = %self.module,
                        menu = %menu.menu(),
                        "dropping contributed menu with duplicate name"
                    );
                    continue;
                }
                constraints
                    .entry(menu.menu().to_string())
                    .or_default()
                    .push(point.clone());
                self.menus.push(menu);
            }
        }

        if !constraints.is_empty() {
            tracing::debug!(module = %self.module, contributed = constraints.len(), "sorting menus");
            let menus = std::mem::take(&mut self.menus);
            self.menus = ExtensionSorter::new(&constraints).sort(menus);
        }

        for menu in &mut self.menus {
            let (matching, rest): (Vec<_>, Vec<_>) = item_extensions
                .into_iter()
                .partition(|e| e.point().menu.as_deref() == Some(menu.menu()));
            item_extensions = rest;
            if !matching.is_empty() {
                menu.add_extensions(matching);
            }
        }

        for extension in &item_extensions {
            tracing::debug!(
                module = %self.module,
                menu = ?extension.point().menu,
                "no menu for contributed items"
            );
        }
    }

    /// Push menu query parameters down onto every menu item.
    pub fn apply_defaults(&mut self) {
        for menu in &mut self.menus {
            menu.apply_query_defaults();
        }
    }

    fn validate(mut self) -> Result<Self> {
        require("module descriptor", "module", &self.module)?;
        self.menus = self
            .menus
            .into_iter()
            .map(ModuleMenu::validate)
            .collect::<Result<_>>()?;
        Ok(self)
    }
}

/// Builder for [`ModuleDescriptor`]. `module` is required.
#[derive(Debug, Clone, Default)]
pub struct ModuleDescriptorBuilder {
    descriptor: ModuleDescriptor,
}

impl ModuleDescriptorBuilder {
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.descriptor.module = module.into();
        self
    }

    pub fn applications(mut self, applications: impl IntoIterator<Item = ModuleApplication>) -> Self {
        self.descriptor.applications.clear();
        for application in applications {
            self.descriptor.add_application(application);
        }
        self
    }

    pub fn menus(mut self, menus: impl IntoIterator<Item = ModuleMenu>) -> Self {
        self.descriptor.menus = menus.into_iter().collect();
        self
    }

    pub fn scopes_allowed<S: Into<String>>(mut self, scopes: impl IntoIterator<Item = S>) -> Self {
        self.descriptor.scopes_allowed = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<ModuleDescriptor> {
        self.descriptor.validate()
    }
}
