//! Entry point wiring settings, loaders and services for a UI root

use std::sync::Arc;

use leitstand_fs::NormalizedPath;
use leitstand_model::{Contribution, Contributions, MainMenu, MainMenuItem, ModuleDescriptor};

use crate::Result;
use crate::loader::{ContributionLoader, FsModuleLoader};
use crate::service::{MainMenuService, ModuleDescriptorService};
use crate::settings::{Settings, SettingsResolver};

/// The UI metadata of one root directory.
///
/// # Example
///
/// ```ignore
/// use leitstand_core::Leitstand;
///
/// let leitstand = Leitstand::open("/srv/leitstand")?;
/// if let Some(inventory) = leitstand.module_descriptor("inventory")? {
///     println!("{} menus", inventory.menus().len());
/// }
/// ```
pub struct Leitstand {
    root: NormalizedPath,
    settings: Settings,
    modules: ModuleDescriptorService,
    main_menu: MainMenuService,
}

impl Leitstand {
    /// Open `root` with file-system contributions only.
    pub fn open(root: impl Into<NormalizedPath>) -> Result<Self> {
        Self::open_with(root, Vec::new())
    }

    /// Open `root`, registering `builtins` ahead of file-system contributions.
    pub fn open_with(
        root: impl Into<NormalizedPath>,
        builtins: impl IntoIterator<Item = Contribution>,
    ) -> Result<Self> {
        let root = root.into();
        let settings = SettingsResolver::new(root.clone()).resolve()?;
        tracing::debug!(%root, ?settings, "Opening UI root");

        let mut loader = ContributionLoader::new(settings.contrib_path(&root));
        for builtin in builtins {
            loader = loader.with_builtin(builtin);
        }
        let contributions = Arc::new(loader.load()?);

        let main_menu = MainMenuService::load(&settings.main_menu_path(&root), &contributions)?;
        let modules = ModuleDescriptorService::new(
            Arc::new(FsModuleLoader::new(settings.modules_path(&root))),
            contributions,
        );

        Ok(Self {
            root,
            settings,
            modules,
            main_menu,
        })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn contributions(&self) -> &Contributions {
        self.modules.contributions()
    }

    pub fn modules(&self) -> &ModuleDescriptorService {
        &self.modules
    }

    pub fn module_descriptor(&self, module: &str) -> Result<Option<Arc<ModuleDescriptor>>> {
        self.modules.get_module_descriptor(module)
    }

    /// The merged descriptor of `module` as pretty-printed JSON.
    pub fn module_descriptor_json(&self, module: &str) -> Result<Option<String>> {
        match self.module_descriptor(module)? {
            Some(descriptor) => Ok(Some(serde_json::to_string_pretty(descriptor.as_ref())?)),
            None => Ok(None),
        }
    }

    pub fn main_menu(&self) -> &MainMenu {
        self.main_menu.main_menu()
    }

    pub fn welcome_module(&self) -> Option<&MainMenuItem> {
        self.main_menu.welcome_module()
    }
}
