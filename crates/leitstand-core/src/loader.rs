//! Loaders for module descriptors and contributions
//!
//! ```text
//! ui/
//!   modules/
//!     main-menu.yaml
//!     inventory/
//!       module.yaml
//!     image/
//!       module.yaml
//!   contrib/
//!     pods.yaml
//!     metrics.yml
//! ```

use leitstand_fs::{NormalizedPath, UiPath, io};
use leitstand_model::{Contribution, Contributions, ModuleDescriptor};

use crate::{Error, Result};

/// Source of base module descriptors, before contributions are merged.
pub trait ModuleLoader: Send + Sync {
    /// Load the descriptor of `module`, or `None` if the module is unknown.
    fn load(&self, module: &str) -> Result<Option<ModuleDescriptor>>;

    /// Names of all modules this loader can provide.
    fn module_names(&self) -> Result<Vec<String>>;
}

/// Loads `<modules_dir>/<module>/module.yaml` files.
#[derive(Debug, Clone)]
pub struct FsModuleLoader {
    modules_dir: NormalizedPath,
}

impl FsModuleLoader {
    pub fn new(modules_dir: NormalizedPath) -> Self {
        Self { modules_dir }
    }

    fn descriptor_path(&self, module: &str) -> NormalizedPath {
        self.modules_dir
            .join(module)
            .join(UiPath::ModuleDescriptor.as_str())
    }
}

/// Module names become path segments and must stay inside the modules directory.
fn is_valid_module_name(module: &str) -> bool {
    !module.is_empty()
        && module != "."
        && module != ".."
        && !module.contains(['/', '\\', ':'])
}

impl ModuleLoader for FsModuleLoader {
    fn load(&self, module: &str) -> Result<Option<ModuleDescriptor>> {
        if !is_valid_module_name(module) {
            tracing::debug!(module, "Rejecting invalid module name");
            return Ok(None);
        }

        let path = self.descriptor_path(module);
        if !path.is_file() {
            tracing::debug!(module, %path, "Unknown UI module requested");
            return Ok(None);
        }

        tracing::debug!(module, %path, "Loading module descriptor");
        let content = io::read_text(&path).map_err(|e| Error::ModuleLoad {
            module: module.to_string(),
            reason: e.to_string(),
        })?;
        let descriptor = ModuleDescriptor::from_yaml(&content).map_err(|e| Error::ModuleLoad {
            module: module.to_string(),
            reason: e.to_string(),
        })?;

        if descriptor.module() != module {
            tracing::warn!(
                module,
                declared = descriptor.module(),
                "Module descriptor declares a different module name"
            );
        }
        Ok(Some(descriptor))
    }

    fn module_names(&self) -> Result<Vec<String>> {
        let names = io::list_dirs(&self.modules_dir)?
            .into_iter()
            .filter(|name| self.descriptor_path(name).is_file())
            .collect();
        Ok(names)
    }
}

/// Builds the [`Contributions`] registry from built-in and file-system contributions.
#[derive(Debug, Clone)]
pub struct ContributionLoader {
    contrib_dir: NormalizedPath,
    builtins: Vec<Contribution>,
}

impl ContributionLoader {
    pub fn new(contrib_dir: NormalizedPath) -> Self {
        Self {
            contrib_dir,
            builtins: Vec::new(),
        }
    }

    /// Register an in-process contribution. Built-ins precede file contributions.
    pub fn with_builtin(mut self, contribution: Contribution) -> Self {
        self.builtins.push(contribution);
        self
    }

    /// Load every `*.yaml` / `*.yml` file in file-name order.
    ///
    /// A file that cannot be read or parsed is skipped with a warning.
    pub fn load(&self) -> Result<Contributions> {
        let mut contributions: Contributions = self.builtins.iter().cloned().collect();

        for path in io::list_files(&self.contrib_dir, &["yaml", "yml"])? {
            let loaded = io::read_text(&path)
                .map_err(Error::from)
                .and_then(|content| Contribution::from_yaml(&content).map_err(Error::from));
            match loaded {
                Ok(contribution) => {
                    tracing::debug!(%path, name = ?contribution.name(), "Loaded contribution");
                    contributions.register(contribution);
                }
                Err(e) => {
                    // Log warning but continue loading other files
                    tracing::warn!(%path, error = %e, "Skipping invalid contribution");
                }
            }
        }

        Ok(contributions)
    }
}
