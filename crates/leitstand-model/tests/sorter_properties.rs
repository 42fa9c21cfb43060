use std::collections::HashSet;

use leitstand_model::{Constraints, ExtensionPoint, ExtensionSorter, Named};
use proptest::prelude::*;
use proptest::sample::Index;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry(String);

impl Named for Entry {
    fn name(&self) -> &str {
        &self.0
    }
}

fn entries(names: &[String]) -> Vec<Entry> {
    names.iter().cloned().map(Entry).collect()
}

fn names(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.0.clone()).collect()
}

fn position(entries: &[Entry], name: &str) -> Option<usize> {
    entries.iter().position(|e| e.0 == name)
}

fn shuffled_names() -> impl Strategy<Value = Vec<String>> {
    (1usize..10).prop_flat_map(|n| Just((0..n).map(|i| format!("item-{i}")).collect::<Vec<_>>()).prop_shuffle())
}

fn push(constraints: &mut Constraints, name: &str, point: ExtensionPoint) {
    constraints.entry(name.to_string()).or_default().push(point);
}

/// A list order, a ranking of the same names and an optional anchor pick per rank.
fn acyclic_input() -> impl Strategy<Value = (Vec<String>, Vec<String>, Vec<Option<Index>>)> {
    (1usize..10).prop_flat_map(|n| {
        let names: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
        (
            Just(names.clone()).prop_shuffle(),
            Just(names).prop_shuffle(),
            prop::collection::vec(proptest::option::of(any::<Index>()), n),
        )
    })
}

/// Constraints of one kind where every item references an item ranked
/// before it and no item is referenced twice, so they form disjoint chains.
fn acyclic_constraints(rank: &[String], anchors: &[Option<Index>], after: bool) -> Constraints {
    let mut constraints = Constraints::new();
    let mut referenced = HashSet::new();
    for (k, name) in rank.iter().enumerate().skip(1) {
        let Some(anchor) = &anchors[k] else {
            continue;
        };
        let reference = rank[anchor.index(k)].clone();
        if !referenced.insert(reference.clone()) {
            continue;
        }
        let point = if after {
            ExtensionPoint::new("inventory").after(reference)
        } else {
            ExtensionPoint::new("inventory").before(reference)
        };
        push(&mut constraints, name, point);
    }
    constraints
}

fn all_satisfied(sorted: &[Entry], constraints: &Constraints) -> bool {
    constraints.iter().all(|(name, points)| {
        points.iter().all(|point| {
            let x = position(sorted, name);
            match (&point.after, &point.before) {
                (Some(after), _) => x == position(sorted, after).map(|y| y + 1),
                (_, Some(before)) => x.map(|x| x + 1) == position(sorted, before),
                _ => true,
            }
        })
    })
}

proptest! {
    #[test]
    fn test_satisfied_constraints_keep_order(
        (order, after, before) in shuffled_names().prop_flat_map(|order| {
            let n = order.len();
            (Just(order), prop::collection::vec(any::<bool>(), n), prop::collection::vec(any::<bool>(), n))
        })
    ) {
        let mut constraints = Constraints::new();
        for (i, name) in order.iter().enumerate() {
            let mut point = ExtensionPoint::new("inventory");
            if after[i] && i > 0 {
                point = point.after(order[i - 1].clone());
            }
            if before[i] && i + 1 < order.len() {
                point = point.before(order[i + 1].clone());
            }
            push(&mut constraints, name, point);
        }

        let sorted = ExtensionSorter::new(&constraints).sort(entries(&order));
        prop_assert_eq!(names(&sorted), order);
    }

    #[test]
    fn test_missing_references_keep_order(
        order in shuffled_names(),
        picks in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..6),
    ) {
        let mut constraints = Constraints::new();
        for (i, (pick, is_after)) in picks.iter().enumerate() {
            let name = pick.get(&order);
            let missing = format!("missing-{i}");
            let point = if *is_after {
                ExtensionPoint::new("inventory").after(missing)
            } else {
                ExtensionPoint::new("inventory").before(missing)
            };
            push(&mut constraints, name, point);
        }

        let sorted = ExtensionSorter::new(&constraints).sort(entries(&order));
        prop_assert_eq!(names(&sorted), order);
    }

    #[test]
    fn test_sort_is_a_permutation(
        order in shuffled_names(),
        picks in prop::collection::vec(
            (any::<prop::sample::Index>(), any::<prop::sample::Index>(), any::<bool>(), any::<bool>()),
            0..12,
        ),
    ) {
        let mut constraints = Constraints::new();
        for (item, reference, is_after, dangling) in &picks {
            let reference = if *dangling {
                "missing".to_string()
            } else {
                reference.get(&order).clone()
            };
            let point = if *is_after {
                ExtensionPoint::new("inventory").after(reference)
            } else {
                ExtensionPoint::new("inventory").before(reference)
            };
            push(&mut constraints, item.get::<String>(&order), point);
        }

        let sorted = ExtensionSorter::new(&constraints).sort(entries(&order));
        let mut expected = order.clone();
        let mut actual = names(&sorted);
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_single_constrained_item_lands_next_to_anchor(
        order in shuffled_names(),
        after in any::<prop::sample::Index>(),
        before in proptest::option::of(any::<prop::sample::Index>()),
    ) {
        let mut list = order.clone();
        list.push("contributed".to_string());

        let y = after.get(&order).clone();
        let mut point = ExtensionPoint::new("inventory").after(y.clone());
        if let Some(before) = &before {
            point = point.before(before.get(&order).clone());
        }
        let mut constraints = Constraints::new();
        push(&mut constraints, "contributed", point);

        let sorted = ExtensionSorter::new(&constraints).sort(entries(&list));
        let x = position(&sorted, "contributed").unwrap();
        match before {
            Some(before) => {
                let z = position(&sorted, before.get::<String>(&order)).unwrap();
                prop_assert_eq!(x + 1, z);
            }
            None => {
                let y = position(&sorted, &y).unwrap();
                prop_assert_eq!(x, y + 1);
            }
        }
    }

    #[test]
    fn test_chained_contribution_is_inserted_and_stable(
        order in shuffled_names(),
        anchor in any::<prop::sample::Index>(),
        chain_len in 1usize..5,
    ) {
        let chain: Vec<String> = (0..chain_len).map(|i| format!("new-{i}")).collect();
        let anchor = anchor.index(order.len());

        let mut constraints = Constraints::new();
        let mut predecessor = order[anchor].clone();
        for name in &chain {
            push(&mut constraints, name, ExtensionPoint::new("inventory").after(predecessor.clone()));
            predecessor = name.clone();
        }

        let mut list = order.clone();
        list.extend(chain.iter().cloned());
        let sorter = ExtensionSorter::new(&constraints);
        let once = sorter.sort(entries(&list));

        let mut expected = order[..=anchor].to_vec();
        expected.extend(chain.iter().cloned());
        expected.extend(order[anchor + 1..].iter().cloned());
        prop_assert_eq!(names(&once), expected);

        let twice = sorter.sort(once.clone());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn test_acyclic_after_constraints_are_idempotent((order, rank, anchors) in acyclic_input()) {
        let constraints = acyclic_constraints(&rank, &anchors, true);
        let sorter = ExtensionSorter::new(&constraints);

        let once = sorter.sort(entries(&order));
        prop_assert!(all_satisfied(&once, &constraints));
        let twice = sorter.sort(once.clone());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn test_acyclic_before_constraints_are_idempotent((order, rank, anchors) in acyclic_input()) {
        let constraints = acyclic_constraints(&rank, &anchors, false);
        let sorter = ExtensionSorter::new(&constraints);

        let once = sorter.sort(entries(&order));
        prop_assert!(all_satisfied(&once, &constraints));
        let twice = sorter.sort(once.clone());
        prop_assert_eq!(twice, once);
    }
}
