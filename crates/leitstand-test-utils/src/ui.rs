//! [`TestUi`] builder for UI metadata test scenarios.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary UI root laid out like a deployed Leitstand installation.
///
/// # Example
///
/// ```rust,no_run
/// use leitstand_test_utils::TestUi;
///
/// let ui = TestUi::new()
///     .module("inventory", "module: inventory\n")
///     .contribution("pods.yaml", "name: pods\n");
/// ui.assert_file_exists("ui/modules/inventory/module.yaml");
/// ```
pub struct TestUi {
    temp_dir: TempDir,
}

impl Default for TestUi {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUi {
    /// Create an empty temporary root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `path`, relative to the root, creating parent directories.
    pub fn file(self, path: &str, content: &str) -> Self {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
        self
    }

    /// Write `ui/modules/<module>/module.yaml`.
    pub fn module(self, module: &str, yaml: &str) -> Self {
        self.file(&format!("ui/modules/{module}/module.yaml"), yaml)
    }

    /// Write `ui/contrib/<file_name>`.
    pub fn contribution(self, file_name: &str, yaml: &str) -> Self {
        self.file(&format!("ui/contrib/{file_name}"), yaml)
    }

    /// Write `ui/modules/main-menu.yaml`.
    pub fn main_menu(self, yaml: &str) -> Self {
        self.file("ui/modules/main-menu.yaml", yaml)
    }

    /// Write `leitstand.toml`.
    pub fn settings(self, toml: &str) -> Self {
        self.file("leitstand.toml", toml)
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
