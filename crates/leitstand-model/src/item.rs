//! Menu items: the leaf entries of a module menu, each bound to a view.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ConfigMap;
use crate::defaults::{merge_missing, require, union};
use crate::error::Result;
use crate::sorter::Named;

/// Condition on the view model that must hold for an item to be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModelProperty {
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches_not: Option<String>,
}

impl ViewModelProperty {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..Self::default()
        }
    }

    pub fn exists(mut self, exists: bool) -> Self {
        self.exists = Some(exists);
        self
    }

    pub fn matches(mut self, pattern: impl Into<String>) -> Self {
        self.matches = Some(pattern.into());
        self
    }

    pub fn matches_not(mut self, pattern: impl Into<String>) -> Self {
        self.matches_not = Some(pattern.into());
        self
    }
}

/// An entry of a [`ModuleMenu`](crate::ModuleMenu).
///
/// `item` names the entry within its menu and is the anchor other
/// contributions refer to in `before` / `after`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMenuItem {
    #[serde(default)]
    item: String,
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    query: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    requires: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    view_model: Vec<ViewModelProperty>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    scopes_allowed: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    config: ConfigMap,
    #[serde(default)]
    view: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl ModuleMenuItem {
    pub fn builder() -> ModuleMenuItemBuilder {
        ModuleMenuItemBuilder::default()
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn requires(&self) -> &BTreeSet<String> {
        &self.requires
    }

    pub fn view_model(&self) -> &[ViewModelProperty] {
        &self.view_model
    }

    pub fn scopes_allowed(&self) -> &BTreeSet<String> {
        &self.scopes_allowed
    }

    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Path of the view template rendering this item.
    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Check required fields and default the label to the item name.
    pub(crate) fn validate(mut self) -> Result<Self> {
        require("menu item", "item", &self.item)?;
        require("menu item", "view", &self.view)?;
        if self.label.trim().is_empty() {
            self.label = self.item.clone();
        }
        Ok(self)
    }

    /// Inherit query parameters. Parameters the item sets itself win.
    pub(crate) fn add_query_parameters(&mut self, parameters: &BTreeMap<String, String>) {
        merge_missing(&mut self.query, parameters);
    }

    /// Inherit configuration. Keys the item sets itself win.
    pub(crate) fn add_config(&mut self, config: &ConfigMap) {
        merge_missing(&mut self.config, config);
    }

    pub(crate) fn add_scopes_allowed(&mut self, scopes: &BTreeSet<String>) {
        union(&mut self.scopes_allowed, scopes);
    }

    pub(crate) fn set_category(&mut self, category: impl Into<String>) {
        self.category = Some(category.into());
    }

    /// Qualify a relative view path with the contribution base URI.
    ///
    /// Absolute paths and fully qualified URLs are left alone.
    pub(crate) fn apply_base_uri(&mut self, base_uri: Option<&str>) {
        let Some(base_uri) = base_uri else {
            return;
        };
        if self.view.starts_with('/') || self.view.contains("://") {
            return;
        }
        self.view = format!("{}/{}", base_uri.trim_end_matches('/'), self.view);
    }
}

impl Named for ModuleMenuItem {
    fn name(&self) -> &str {
        &self.item
    }
}

/// Builder for [`ModuleMenuItem`]. `item` and `view` are required.
#[derive(Debug, Clone, Default)]
pub struct ModuleMenuItemBuilder {
    item: ModuleMenuItem,
}

impl ModuleMenuItemBuilder {
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.item.item = item.into();
        self
    }

    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.item.view = view.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.item.label = label.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.item.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.item.category = Some(category.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.item.target = Some(target.into());
        self
    }

    pub fn query<K, V>(mut self, query: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.item.query = query
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn requires<S: Into<String>>(mut self, requires: impl IntoIterator<Item = S>) -> Self {
        self.item.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn view_model(mut self, view_model: impl IntoIterator<Item = ViewModelProperty>) -> Self {
        self.item.view_model = view_model.into_iter().collect();
        self
    }

    pub fn scopes_allowed<S: Into<String>>(mut self, scopes: impl IntoIterator<Item = S>) -> Self {
        self.item.scopes_allowed = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: ConfigMap) -> Self {
        self.item.config = config;
        self
    }

    pub fn build(self) -> Result<ModuleMenuItem> {
        self.item.validate()
    }
}
