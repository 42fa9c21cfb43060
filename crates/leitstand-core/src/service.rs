//! Cached module descriptor and main menu services
//!
//! Descriptors are resolved lazily and cached per module name. Resolving a
//! descriptor loads the base document, merges every contribution targeting
//! the module and pushes menu query parameters down onto the items. The
//! merge is pure, so two threads racing on the same uncached module compute
//! equal descriptors; the first one inserted is kept and returned to both.

use std::collections::HashMap;
use std::sync::Arc;

use leitstand_fs::{NormalizedPath, io};
use leitstand_model::{Contributions, MainMenu, MainMenuItem, ModuleDescriptor};
use parking_lot::RwLock;

use crate::Result;
use crate::loader::ModuleLoader;

/// Resolves and caches merged [`ModuleDescriptor`]s
pub struct ModuleDescriptorService {
    loader: Arc<dyn ModuleLoader>,
    contributions: Arc<Contributions>,
    cache: RwLock<HashMap<String, Arc<ModuleDescriptor>>>,
}

impl ModuleDescriptorService {
    pub fn new(loader: Arc<dyn ModuleLoader>, contributions: Arc<Contributions>) -> Self {
        Self {
            loader,
            contributions,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn contributions(&self) -> &Contributions {
        &self.contributions
    }

    /// Return the merged descriptor of `module`, computing it on first access.
    ///
    /// `Ok(None)` means the module is unknown. Unknown modules are not cached.
    pub fn get_module_descriptor(&self, module: &str) -> Result<Option<Arc<ModuleDescriptor>>> {
        if let Some(descriptor) = self.cache.read().get(module) {
            return Ok(Some(Arc::clone(descriptor)));
        }

        tracing::debug!(module, "Module descriptor cache miss");
        let Some(mut descriptor) = self.loader.load(module)? else {
            return Ok(None);
        };
        let extensions = self.contributions.find_extensions(&mut descriptor);
        descriptor.add_extensions(extensions);
        descriptor.apply_defaults();

        let mut cache = self.cache.write();
        let cached = cache
            .entry(module.to_string())
            .or_insert_with(|| Arc::new(descriptor));
        Ok(Some(Arc::clone(cached)))
    }

    /// Resolve every module the loader knows. Returns the number of modules cached.
    pub fn preload(&self) -> Result<usize> {
        let mut resolved = 0;
        for module in self.loader.module_names()? {
            if self.get_module_descriptor(&module)?.is_some() {
                resolved += 1;
            }
        }
        tracing::debug!(resolved, "Preloaded module descriptors");
        Ok(resolved)
    }

    /// Names of all cached modules, sorted.
    pub fn cached_modules(&self) -> Vec<String> {
        let mut names: Vec<String> = self.cache.read().keys().cloned().collect();
        names.sort();
        names
    }
}

/// Serves the main menu extended by contributed modules
#[derive(Debug, Clone)]
pub struct MainMenuService {
    menu: MainMenu,
}

impl MainMenuService {
    /// Load the main menu document at `path` and merge contributed modules.
    ///
    /// A missing document yields an empty main menu.
    pub fn load(path: &NormalizedPath, contributions: &Contributions) -> Result<Self> {
        let mut menu = match io::read_text(path) {
            Ok(content) => {
                tracing::debug!(%path, "Loading main menu");
                MainMenu::from_yaml(&content)?
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(%path, "No main menu found, starting empty");
                MainMenu::default()
            }
            Err(e) => return Err(e.into()),
        };
        menu.add_extensions(contributions.find_main_menu_extensions());
        Ok(Self { menu })
    }

    pub fn main_menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn welcome_module(&self) -> Option<&MainMenuItem> {
        self.menu.find_welcome_module()
    }
}
