//! Extension points: where a contribution attaches to a module.

use serde::{Deserialize, Serialize};

/// A positional constraint attached to contributed menus and items.
///
/// `module` names the extended module. Without `menu` the extension adds
/// whole menus to the module; with `menu` it adds items to that menu.
/// `after` and `before` name siblings the contributed value must follow or
/// precede. A point with neither leaves the value where it was appended.
///
/// ```yaml
/// extend:
///   module: inventory
///   menu: element
///   after: element-settings
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionPoint {
    pub module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ExtensionPoint {
    /// Create an unanchored point extending `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Self::default()
        }
    }

    /// Target a menu of the module.
    pub fn menu(mut self, menu: impl Into<String>) -> Self {
        self.menu = Some(menu.into());
        self
    }

    /// Require placement right after the sibling named `after`.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Require placement right before the sibling named `before`.
    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Whether this point adds menus to a module.
    pub fn is_module_extension(&self) -> bool {
        self.menu.is_none()
    }

    /// Whether this point adds items to a menu.
    pub fn is_module_menu_extension(&self) -> bool {
        self.menu.is_some()
    }

    /// Whether this point constrains ordering at all.
    pub fn is_anchored(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// A point chaining a value right after `predecessor`, in the same
    /// module and menu as this one.
    pub(crate) fn chained_after(&self, predecessor: &str) -> Self {
        Self {
            module: self.module.clone(),
            menu: self.menu.clone(),
            after: Some(predecessor.to_string()),
            before: None,
        }
    }
}
