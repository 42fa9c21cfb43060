//! Registry of all contributions known to the application.

use crate::contribution::Contribution;
use crate::descriptor::ModuleDescriptor;
use crate::extension::Extension;

/// Ordered collection of [`Contribution`]s.
///
/// Registration order is kept; it decides the order in which extensions
/// are applied and therefore how conflicting constraints resolve.
#[derive(Debug, Clone, Default)]
pub struct Contributions {
    contributions: Vec<Contribution>,
}

impl Contributions {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            contributions: Vec::new(),
        }
    }

    /// Register a contribution after all previously registered ones.
    pub fn register(&mut self, contribution: Contribution) {
        self.contributions.push(contribution);
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contribution> {
        self.contributions.iter()
    }

    /// Collect every extension targeting `descriptor`.
    ///
    /// Registers the bootstrap application of each contributing
    /// contribution on the descriptor.
    pub fn find_extensions(&self, descriptor: &mut ModuleDescriptor) -> Vec<Extension> {
        let mut extensions = Vec::new();
        for contribution in &self.contributions {
            if !contribution.contributes_to(descriptor.module()) {
                continue;
            }
            extensions.extend(
                contribution
                    .extensions()
                    .iter()
                    .filter(|e| e.is_extension_for(descriptor.module()))
                    .cloned(),
            );
            descriptor.add_application(contribution.application());
        }
        tracing::debug!(
            module = %descriptor.module(),
            extensions = extensions.len(),
            "collected module extensions"
        );
        extensions
    }

    /// Collect the main menu entries of contributions adding new modules.
    pub fn find_main_menu_extensions(&self) -> Vec<Extension> {
        self.contributions
            .iter()
            .filter(|c| c.is_new_module())
            .flat_map(|c| c.extensions().iter().filter(|e| e.is_main_menu_item()))
            .cloned()
            .collect()
    }
}

impl Extend<Contribution> for Contributions {
    fn extend<I: IntoIterator<Item = Contribution>>(&mut self, iter: I) {
        self.contributions.extend(iter);
    }
}

impl FromIterator<Contribution> for Contributions {
    fn from_iter<I: IntoIterator<Item = Contribution>>(iter: I) -> Self {
        Self {
            contributions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Contributions {
    type Item = &'a Contribution;
    type IntoIter = std::slice::Iter<'a, Contribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
