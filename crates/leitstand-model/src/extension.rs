//! A single extension: what a contribution injects, and where.

use serde::Deserialize;

use crate::error::Error;
use crate::item::ModuleMenuItem;
use crate::main_menu::MainMenuItem;
use crate::menu::ModuleMenu;
use crate::point::ExtensionPoint;

/// The values an [`Extension`] contributes.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionPayload {
    /// Whole menus added to a module.
    Menus(Vec<ModuleMenu>),
    /// Items added to a menu of a module.
    Items(Vec<ModuleMenuItem>),
    /// A new top-level module announced in the main menu.
    MainMenu(MainMenuItem),
}

/// An [`ExtensionPoint`] paired with the values it places.
///
/// Parsed from an entry with an `extend` point and exactly one of `menus`,
/// `items` or `mainMenu`:
///
/// ```yaml
/// extend:
///   module: inventory
///   menu: element
///   after: element-settings
/// items:
///   - item: element-pods
///     view: pods.html
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ExtensionDocument")]
pub struct Extension {
    point: ExtensionPoint,
    payload: ExtensionPayload,
}

impl Extension {
    pub fn new(point: ExtensionPoint, payload: ExtensionPayload) -> Self {
        Self { point, payload }
    }

    pub fn point(&self) -> &ExtensionPoint {
        &self.point
    }

    pub fn payload(&self) -> &ExtensionPayload {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut ExtensionPayload {
        &mut self.payload
    }

    pub fn into_parts(self) -> (ExtensionPoint, ExtensionPayload) {
        (self.point, self.payload)
    }

    /// Contributed menus, empty unless this is a menu payload.
    pub fn menus(&self) -> &[ModuleMenu] {
        match &self.payload {
            ExtensionPayload::Menus(menus) => menus,
            _ => &[],
        }
    }

    /// Contributed menu items, empty unless this is an item payload.
    pub fn items(&self) -> &[ModuleMenuItem] {
        match &self.payload {
            ExtensionPayload::Items(items) => items,
            _ => &[],
        }
    }

    pub fn main_menu_item(&self) -> Option<&MainMenuItem> {
        match &self.payload {
            ExtensionPayload::MainMenu(item) => Some(item),
            _ => None,
        }
    }

    /// Carries menus and targets a module, not one of its menus.
    pub fn is_module_extension(&self) -> bool {
        self.point.is_module_extension() && !self.menus().is_empty()
    }

    /// Carries items and targets a menu.
    pub fn is_module_menu_extension(&self) -> bool {
        self.point.is_module_menu_extension() && !self.items().is_empty()
    }

    pub fn is_main_menu_item(&self) -> bool {
        self.main_menu_item().is_some()
    }

    pub fn is_extension_for(&self, module: &str) -> bool {
        self.point.module == module
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtensionDocument {
    extend: ExtensionPoint,
    #[serde(default)]
    menus: Vec<ModuleMenu>,
    #[serde(default)]
    items: Vec<ModuleMenuItem>,
    #[serde(default)]
    main_menu: Option<MainMenuItem>,
}

impl TryFrom<ExtensionDocument> for Extension {
    type Error = Error;

    fn try_from(doc: ExtensionDocument) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| Error::InvalidExtension {
            module: doc.extend.module.clone(),
            reason: reason.to_string(),
        };

        if doc.extend.module.trim().is_empty() {
            return Err(Error::missing("extension point", "module"));
        }

        let populated = usize::from(!doc.menus.is_empty())
            + usize::from(!doc.items.is_empty())
            + usize::from(doc.main_menu.is_some());
        if populated != 1 {
            return Err(invalid(
                "expected exactly one of 'menus', 'items' or 'mainMenu'",
            ));
        }
        if !doc.items.is_empty() && doc.extend.menu.is_none() {
            return Err(invalid("contributed items require 'extend.menu'"));
        }
        if !doc.menus.is_empty() && doc.extend.menu.is_some() {
            return Err(invalid("contributed menus must not set 'extend.menu'"));
        }

        let payload = if let Some(item) = doc.main_menu {
            ExtensionPayload::MainMenu(item.validate()?)
        } else if !doc.menus.is_empty() {
            ExtensionPayload::Menus(
                doc.menus
                    .into_iter()
                    .map(ModuleMenu::validate)
                    .collect::<Result<_, _>>()?,
            )
        } else {
            ExtensionPayload::Items(
                doc.items
                    .into_iter()
                    .map(ModuleMenuItem::validate)
                    .collect::<Result<_, _>>()?,
            )
        };

        Ok(Self {
            point: doc.extend,
            payload,
        })
    }
}
