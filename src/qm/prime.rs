use super::Group;
use crate::{Term, VarCount};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};

/// Append `group` to `list` unless an equal group is already present, keeping first-seen order.
fn push_unique(list: &mut Vec<Group>, seen: &mut HashSet<Group>, group: Group) {
    if seen.insert(group.clone()) {
        list.push(group);
    }
}

/// Generate all prime implicants of `terms` by repeated single-bit merging.
///
/// Each level pairs every two groups of equal size; groups that merge with at least one
/// sibling are dropped, the rest are prime. The result keeps the order in which primes
/// were discovered: by level, then by position within the level.
pub fn prime_implicants(terms: &BTreeSet<Term>, num_vars: VarCount) -> Vec<Group> {
    let mut primes = Vec::new();
    let mut seen_primes = HashSet::new();
    let mut level: Vec<Group> = terms.iter().copied().map(Group::singleton).collect();

    let mut depth = 0;
    while !level.is_empty() {
        debug_assert!(depth <= num_vars.get(), "merge levels exceed variable count");
        let mut used = vec![false; level.len()];
        let mut next = Vec::new();
        let mut seen_next = HashSet::new();

        for ((i, g1), (j, g2)) in level.iter().enumerate().tuple_combinations() {
            if let Some(combined) = g1.combine(g2) {
                trace!("merge {} + {} -> {}", g1, g2, combined);
                used[i] = true;
                used[j] = true;
                push_unique(&mut next, &mut seen_next, combined);
            }
        }

        let before = primes.len();
        for (g, _) in level.into_iter().zip(used).filter(|(_, used)| !used) {
            push_unique(&mut primes, &mut seen_primes, g);
        }
        debug!(
            "level {}: {} merged groups, {} new prime implicants",
            depth,
            next.len(),
            primes.len() - before
        );

        level = next;
        depth += 1;
    }

    primes
}
