//! Module menus and the merge of contributed menu items.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ConfigMap;
use crate::defaults::{merge_missing, require, union};
use crate::error::Result;
use crate::extension::{Extension, ExtensionPayload};
use crate::item::{ModuleMenuItem, ViewModelProperty};
use crate::sorter::{Constraints, ExtensionSorter, Named};

/// A named, ordered group of [`ModuleMenuItem`]s within a module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMenu {
    #[serde(default)]
    menu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expand: Option<String>,
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
    items: Vec<ModuleMenuItem>,
}

impl ModuleMenu {
    pub fn builder() -> ModuleMenuBuilder {
        ModuleMenuBuilder::default()
    }

    pub fn menu(&self) -> &str {
        &self.menu
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn expand(&self) -> Option<&str> {
        self.expand.as_deref()
    }

    /// Query parameters inherited by every item of this menu.
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

    pub fn items(&self) -> &[ModuleMenuItem] {
        &self.items
    }

    pub fn find_item(&self, item: &str) -> Option<&ModuleMenuItem> {
        self.items.iter().find(|i| i.item() == item)
    }

    /// Merge contributed items into this menu.
    ///
    /// The first item of each extension is placed by the extension's point.
    /// Every following item is chained after its predecessor in the same
    /// extension, so a contribution's items stay together in declared
    /// order. Items whose name is already taken are dropped.
    pub fn add_extensions(&mut self, extensions: impl IntoIterator<Item = Extension>) {
        let mut constraints = Constraints::new();

        for extension in extensions {
            if !extension.is_module_menu_extension() {
                continue;
            }
            let (point, payload) = extension.into_parts();
            if point.menu.as_deref() != Some(self.menu.as_str()) {
                continue;
            }
            let ExtensionPayload::Items(items) = payload else {
                continue;
            };

            let mut predecessor: Option<String> = None;
            for item in items {
                let item_point = match &predecessor {
                    Some(previous) => point.chained_after(previous),
                    None => point.clone(),
                };
                predecessor = Some(item.item().to_string());

                if self.find_item(item.item()).is_some() {
                    tracing::warn!(
                        menu = %self.menu,
                        item = %item.item(),
                        "dropping contributed menu item with duplicate name"
                    );
                    continue;
                }
                constraints
                    .entry(item.item().to_string())
                    .or_default()
                    .push(item_point);
                self.items.push(item);
            }
        }

        if constraints.is_empty() {
            return;
        }
        tracing::debug!(menu = %self.menu, contributed = constraints.len(), "sorting menu items");
        let items = std::mem::take(&mut self.items);
        self.items = ExtensionSorter::new(&constraints).sort(items);
    }

    /// Push the menu query parameters down onto every item.
    pub fn apply_query_defaults(&mut self) {
        for item in &mut self.items {
            item.add_query_parameters(&self.query);
        }
    }

    pub(crate) fn items_mut(&mut self) -> &mut [ModuleMenuItem] {
        &mut self.items
    }

    pub(crate) fn add_config(&mut self, config: &ConfigMap) {
        merge_missing(&mut self.config, config);
    }

    pub(crate) fn add_scopes_allowed(&mut self, scopes: &BTreeSet<String>) {
        union(&mut self.scopes_allowed, scopes);
    }

    pub(crate) fn validate(mut self) -> Result<Self> {
        require("menu", "menu", &self.menu)?;
        self.items = self
            .items
            .into_iter()
            .map(ModuleMenuItem::validate)
            .collect::<Result<_>>()?;
        Ok(self)
    }
}

impl Named for ModuleMenu {
    fn name(&self) -> &str {
        &self.menu
    }
}

/// Builder for [`ModuleMenu`]. `menu` is required.
#[derive(Debug, Clone, Default)]
pub struct ModuleMenuBuilder {
    menu: ModuleMenu,
}

impl ModuleMenuBuilder {
    pub fn menu(mut self, menu: impl Into<String>) -> Self {
        self.menu.menu = menu.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.menu.label = Some(label.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.menu.title = Some(title.into());
        self
    }

    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.menu.entity = Some(entity.into());
        self
    }

    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.menu.expand = Some(expand.into());
        self
    }

    pub fn query<K, V>(mut self, query: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.menu.query = query
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    pub fn requires<S: Into<String>>(mut self, requires: impl IntoIterator<Item = S>) -> Self {
        self.menu.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn view_model(mut self, view_model: impl IntoIterator<Item = ViewModelProperty>) -> Self {
        self.menu.view_model = view_model.into_iter().collect();
        self
    }

    pub fn scopes_allowed<S: Into<String>>(mut self, scopes: impl IntoIterator<Item = S>) -> Self {
        self.menu.scopes_allowed = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: ConfigMap) -> Self {
        self.menu.config = config;
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = ModuleMenuItem>) -> Self {
        self.menu.items = items.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<ModuleMenu> {
        self.menu.validate()
    }
}
