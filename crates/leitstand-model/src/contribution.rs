//! Contributions: plugin bundles extending modules and the main menu.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::ConfigMap;
use crate::descriptor::ModuleApplication;
use crate::error::{Error, Result};
use crate::extension::{Extension, ExtensionPayload};
use crate::item::ModuleMenuItem;

/// A set of extensions shipped together, with defaults shared by all of them.
///
/// ```yaml
/// baseUri: /pods
/// controller: pods-controller.js
/// name: pods
/// category: Pods
/// scopesAllowed: [ivt]
/// extensions:
///   - extend:
///       module: inventory
///       menu: element
///       after: element-settings
///     items:
///       - item: element-pods
///         view: pods.html
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    #[serde(default)]
    base_uri: Option<String>,
    #[serde(default)]
    controller: Option<String>,
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    scopes_allowed: BTreeSet<String>,
    #[serde(default)]
    config: ConfigMap,
    #[serde(default)]
    extensions: Vec<Extension>,
}

impl Contribution {
    pub fn builder() -> ContributionBuilder {
        ContributionBuilder::default()
    }

    /// Parse a contribution document and apply its defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let mut contribution: Self =
            serde_yaml::from_str(content).map_err(|source| Error::Parse {
                entity: "contribution",
                source,
            })?;
        contribution.apply_defaults();
        Ok(contribution)
    }

    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn scopes_allowed(&self) -> &BTreeSet<String> {
        &self.scopes_allowed
    }

    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Whether any extension targets `module`.
    pub fn contributes_to(&self, module: &str) -> bool {
        self.extensions.iter().any(|e| e.is_extension_for(module))
    }

    /// Whether this contribution adds a top-level module to the main menu.
    pub fn is_new_module(&self) -> bool {
        self.extensions.iter().any(Extension::is_main_menu_item)
    }

    /// The sub-application bootstrapping this contribution in an extended module.
    ///
    /// Named after the contribution, or its base URI when unnamed. The
    /// controller path is resolved against the base URI.
    pub fn application(&self) -> ModuleApplication {
        let name = self
            .name
            .as_deref()
            .or(self.base_uri.as_deref())
            .unwrap_or_default();
        let controller = self.controller.as_deref().unwrap_or("controller.js");
        let controller = match self.base_uri.as_deref() {
            Some(base_uri) => format!("{}/{}", base_uri.trim_end_matches('/'), controller),
            None => controller.to_string(),
        };
        ModuleApplication::new(name).controller(controller).defer(false)
    }

    /// Push category, config, scopes and base URI onto every contributed
    /// menu and item. Values set on the item itself win.
    fn apply_defaults(&mut self) {
        let base_uri = self.base_uri.as_deref();
        for extension in &mut self.extensions {
            match extension.payload_mut() {
                ExtensionPayload::Items(items) => {
                    for item in items {
                        inherit(item, self.category.as_deref(), &self.config, &self.scopes_allowed, base_uri);
                    }
                }
                ExtensionPayload::Menus(menus) => {
                    for menu in menus {
                        menu.add_config(&self.config);
                        menu.add_scopes_allowed(&self.scopes_allowed);
                        for item in menu.items_mut() {
                            inherit(item, self.category.as_deref(), &self.config, &self.scopes_allowed, base_uri);
                        }
                    }
                }
                ExtensionPayload::MainMenu(_) => {}
            }
        }
    }
}

fn inherit(
    item: &mut ModuleMenuItem,
    category: Option<&str>,
    config: &ConfigMap,
    scopes: &BTreeSet<String>,
    base_uri: Option<&str>,
) {
    if let Some(category) = category {
        item.set_category(category);
    }
    item.add_config(config);
    item.add_scopes_allowed(scopes);
    item.apply_base_uri(base_uri);
}

/// Builder for [`Contribution`]. Defaults are applied on [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ContributionBuilder {
    contribution: Contribution,
}

impl ContributionBuilder {
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.contribution.base_uri = Some(base_uri.into());
        self
    }

    pub fn controller(mut self, controller: impl Into<String>) -> Self {
        self.contribution.controller = Some(controller.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.contribution.provider = Some(provider.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.contribution.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.contribution.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.contribution.category = Some(category.into());
        self
    }

    pub fn scopes_allowed<S: Into<String>>(mut self, scopes: impl IntoIterator<Item = S>) -> Self {
        self.contribution.scopes_allowed = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: ConfigMap) -> Self {
        self.contribution.config = config;
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.contribution.extensions.push(extension);
        self
    }

    pub fn extensions(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.contribution.extensions.extend(extensions);
        self
    }

    pub fn build(self) -> Contribution {
        let mut contribution = self.contribution;
        contribution.apply_defaults();
        contribution
    }
}
