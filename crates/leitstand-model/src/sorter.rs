//! Constraint-driven ordering of menus and menu items.
//!
//! Contributed values are appended to their container first and then moved
//! into place by [`ExtensionSorter`]. Every constraint says "put item X right
//! after Y" or "right before Y", where Y is a sibling name. Unlike a
//! topological sort, the sorter never fails: references to unknown siblings
//! are ignored and cyclic constraints are cut off after a bounded number of
//! rounds, leaving whatever order the last round produced.
//!
//! Resolution runs two passes over the same working list:
//!
//! 1. **After-pass**: for every constrained item and each of its `after`
//!    references, move the item to directly follow the reference.
//! 2. **Before-pass**: the same for `before` references, moving the item to
//!    directly precede the reference.
//!
//! Each pass repeats until a full round moves nothing, at most `n - 1`
//! rounds for `n` items. The before-pass runs last, so `before` wins when an
//! item carries both kinds of constraint.

use indexmap::IndexMap;

use crate::point::ExtensionPoint;

/// Anything that can be positioned by name within a list.
pub trait Named {
    /// The name of this value, unique within its list.
    fn name(&self) -> &str;
}

/// Item name to the extension points constraining it, in insertion order.
///
/// Iteration order decides which constraint is applied first and therefore
/// the result for conflicting constraints, so the map must keep the order
/// in which contributions were registered.
pub type Constraints = IndexMap<String, Vec<ExtensionPoint>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    After,
    Before,
}

impl Anchor {
    fn reference(self, point: &ExtensionPoint) -> Option<&str> {
        match self {
            Anchor::After => point.after.as_deref(),
            Anchor::Before => point.before.as_deref(),
        }
    }

    /// Index the item must end up at once it has been taken out of `from`.
    fn destination(self, from: usize, reference: usize) -> usize {
        match (self, from < reference) {
            (Anchor::After, true) => reference,
            (Anchor::After, false) => reference + 1,
            (Anchor::Before, true) => reference - 1,
            (Anchor::Before, false) => reference,
        }
    }

    fn is_satisfied(self, position: usize, reference: usize) -> bool {
        match self {
            Anchor::After => position == reference + 1,
            Anchor::Before => position + 1 == reference,
        }
    }
}

/// Reorders a list so that `before` / `after` constraints hold where possible.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionSorter<'a> {
    constraints: &'a Constraints,
}

impl<'a> ExtensionSorter<'a> {
    /// Create a sorter applying `constraints`.
    pub fn new(constraints: &'a Constraints) -> Self {
        Self { constraints }
    }

    /// Sort `items`, which must already contain every constrained item.
    ///
    /// Constraints naming an item missing from `items`, a reference missing
    /// from `items`, or the item itself are skipped.
    pub fn sort<T: Named>(&self, mut items: Vec<T>) -> Vec<T> {
        let rounds = items.len().saturating_sub(1);
        self.run_pass(&mut items, Anchor::After, rounds);
        self.run_pass(&mut items, Anchor::Before, rounds);
        items
    }

    fn run_pass<T: Named>(&self, items: &mut [T], anchor: Anchor, rounds: usize) {
        for round in 0..rounds {
            if !self.run_round(items, anchor) {
                tracing::trace!(?anchor, round, "extension order converged");
                return;
            }
        }
        if rounds > 0 {
            tracing::debug!(
                ?anchor,
                rounds,
                "extension order did not converge, constraints are likely cyclic"
            );
        }
    }

    /// Apply every constraint once. Returns whether anything moved.
    fn run_round<T: Named>(&self, items: &mut [T], anchor: Anchor) -> bool {
        let mut moved = false;
        for (name, points) in self.constraints {
            for point in points {
                let Some(reference) = anchor.reference(point) else {
                    continue;
                };
                if reference == name {
                    continue;
                }
                let (Some(from), Some(target)) = (position(items, name), position(items, reference))
                else {
                    continue;
                };
                if anchor.is_satisfied(from, target) {
                    continue;
                }

                let to = anchor.destination(from, target);
                relocate(items, from, to);
                tracing::trace!(item = %name, %reference, ?anchor, from, to, "moved contributed item");
                moved = true;
            }
        }
        moved
    }
}

fn position<T: Named>(items: &[T], name: &str) -> Option<usize> {
    items.iter().position(|item| item.name() == name)
}

/// Move the element at `from` to `to`, shifting the elements in between.
fn relocate<T>(items: &mut [T], from: usize, to: usize) {
    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }
}
