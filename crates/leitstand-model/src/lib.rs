//! Module descriptors, contributions and extension ordering for the Leitstand UI.
//!
//! A UI module is described by a [`ModuleDescriptor`]: an ordered list of
//! [`ModuleMenu`]s, each holding ordered [`ModuleMenuItem`]s. Other modules
//! extend it through [`Contribution`]s whose [`Extension`]s declare where
//! their menus and items go, relative to existing ones, via an
//! [`ExtensionPoint`]. The [`ExtensionSorter`] resolves those `before` /
//! `after` constraints into a single deterministic order.
//!
//! ```
//! use leitstand_model::{ExtensionPoint, ExtensionSorter, Named, Constraints};
//!
//! #[derive(Debug, PartialEq)]
//! struct Item(&'static str);
//!
//! impl Named for Item {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! let mut constraints = Constraints::new();
//! constraints.insert("c".to_string(), vec![ExtensionPoint::default().after("b")]);
//!
//! let sorted = ExtensionSorter::new(&constraints).sort(vec![Item("a"), Item("b"), Item("d"), Item("c")]);
//! assert_eq!(sorted, vec![Item("a"), Item("b"), Item("c"), Item("d")]);
//! ```

pub mod contribution;
pub mod descriptor;
pub mod error;
pub mod extension;
pub mod item;
pub mod main_menu;
pub mod menu;
pub mod point;
pub mod registry;
pub mod sorter;

mod defaults;

pub use contribution::{Contribution, ContributionBuilder};
pub use descriptor::{ModuleApplication, ModuleDescriptor, ModuleDescriptorBuilder};
pub use error::{Error, Result};
pub use extension::{Extension, ExtensionPayload};
pub use item::{ModuleMenuItem, ModuleMenuItemBuilder, ViewModelProperty};
pub use main_menu::{MainMenu, MainMenuItem, MainMenuItemBuilder};
pub use menu::{ModuleMenu, ModuleMenuBuilder};
pub use point::ExtensionPoint;
pub use registry::Contributions;
pub use sorter::{Constraints, ExtensionSorter, Named};

/// Configuration values attached to contributions, menus and items.
pub type ConfigMap = std::collections::BTreeMap<String, serde_json::Value>;
