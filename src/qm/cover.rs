use super::Group;
use crate::Term;
use bit_set::BitSet;
use std::collections::BTreeSet;

/// Result of the covering stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    /// Essential implicants first, then greedily chosen ones in selection order.
    pub groups: Vec<Group>,
    /// Number of leading entries of `groups` that are essential.
    pub essential_len: usize,
    /// Terms no prime implicant covers. Always empty for well-formed input.
    pub uncovered: BTreeSet<Term>,
}

impl Cover {
    pub fn essentials(&self) -> &[Group] {
        &self.groups[..self.essential_len]
    }
}

fn to_bitset(terms: impl IntoIterator<Item = Term>) -> BitSet {
    terms.into_iter().map(|t| t.0 as usize).collect()
}

fn count_uncovered(group: &Group, uncovered: &BitSet) -> usize {
    group
        .iter()
        .filter(|t| uncovered.contains(t.0 as usize))
        .count()
}

/// Select a covering subset of `primes` for `to_cover`.
///
/// A prime that is the only one containing some term is essential and always selected.
/// The remaining terms are covered greedily: the prime covering the most uncovered terms
/// wins, and on ties the smaller group is preferred. Ties beyond that keep the order of
/// `primes`.
pub fn select_cover(primes: &[Group], to_cover: &BTreeSet<Term>) -> Cover {
    if to_cover.is_empty() {
        return Cover::default();
    }

    // term -> positions of the primes containing it
    let coverage: Vec<(Term, Vec<usize>)> = to_cover
        .iter()
        .map(|&t| {
            let positions = primes
                .iter()
                .enumerate()
                .filter(|(_, g)| g.contains(&t))
                .map(|(i, _)| i)
                .collect();
            (t, positions)
        })
        .collect();

    let mut essential_idx = BitSet::with_capacity(primes.len());
    let mut groups = Vec::new();
    let mut uncovered = to_bitset(to_cover.iter().copied());
    for (term, positions) in &coverage {
        if let [i] = positions.as_slice() {
            let i = *i;
            if essential_idx.insert(i) {
                debug!("term {} makes {} essential", term, primes[i]);
                groups.push(primes[i].clone());
                uncovered.difference_with(&to_bitset(primes[i].iter().copied()));
            }
        }
    }
    let essential_len = groups.len();

    let mut orphans = BTreeSet::new();
    for (term, positions) in &coverage {
        if positions.is_empty() {
            warn!("term {} is not covered by any prime implicant", term);
            uncovered.remove(term.0 as usize);
            orphans.insert(*term);
        }
    }

    let mut remaining: Vec<&Group> = primes
        .iter()
        .enumerate()
        .filter(|(i, _)| !essential_idx.contains(*i))
        .map(|(_, g)| g)
        .collect();
    while !uncovered.is_empty() && !remaining.is_empty() {
        // stable sort, so earlier primes win full ties
        remaining.sort_by(|a, b| {
            count_uncovered(b, &uncovered)
                .cmp(&count_uncovered(a, &uncovered))
                .then_with(|| a.len().cmp(&b.len()))
        });
        let best = remaining.remove(0);
        if count_uncovered(best, &uncovered) == 0 {
            break;
        }
        debug!("greedy pick {}", best);
        uncovered.difference_with(&to_bitset(best.iter().copied()));
        groups.push(best.clone());
    }

    orphans.extend(uncovered.iter().map(|t| Term(t as u32)));
    Cover {
        groups,
        essential_len,
        uncovered: orphans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group;

    fn terms(list: &[u32]) -> BTreeSet<Term> {
        list.iter().copied().map(Term).collect()
    }

    #[test]
    fn test_empty_cover() {
        let primes = vec![group!(0, 1)];
        assert_eq!(Cover::default(), select_cover(&primes, &BTreeSet::new()));
    }

    #[test]
    fn test_all_essential() {
        // f = sum(1, 2, 3) over 2 variables
        let primes = vec![group!(1, 3), group!(2, 3)];
        let cover = select_cover(&primes, &terms(&[1, 2, 3]));
        assert_eq!(vec![group!(1, 3), group!(2, 3)], cover.groups);
        assert_eq!(2, cover.essentials().len());
        assert!(cover.uncovered.is_empty());
    }

    #[test]
    fn test_essential_order_follows_terms() {
        // term 0 only in the second prime, term 7 only in the first
        let primes = vec![group!(5, 7), group!(0, 4)];
        let cover = select_cover(&primes, &terms(&[0, 4, 5, 7]));
        assert_eq!(vec![group!(0, 4), group!(5, 7)], cover.groups);
    }

    #[test]
    fn test_cyclic_cover_is_greedy() {
        // f = sum(0, 1, 2, 5, 6, 7): no essential primes
        let primes = vec![
            group!(0, 1),
            group!(0, 2),
            group!(1, 5),
            group!(2, 6),
            group!(5, 7),
            group!(6, 7),
        ];
        let to_cover = terms(&[0, 1, 2, 5, 6, 7]);
        let cover = select_cover(&primes, &to_cover);
        assert_eq!(0, cover.essential_len);
        assert_eq!(vec![group!(0, 1), group!(2, 6), group!(5, 7)], cover.groups);
        let covered: BTreeSet<Term> = cover.groups.iter().flatten().copied().collect();
        assert_eq!(to_cover, covered);
    }

    #[test]
    fn test_tie_prefers_smaller_group() {
        // term 3 is in both; each covers exactly one uncovered term after the essentials
        let primes = vec![group!(1, 3), group!(0, 1), group!(3)];
        let cover = select_cover(&primes, &terms(&[0, 3]));
        assert_eq!(vec![group!(0, 1), group!(3)], cover.groups);
        assert_eq!(1, cover.essential_len);
    }

    #[test]
    fn test_redundant_prime_not_selected() {
        let primes = vec![group!(0, 1), group!(1, 3), group!(2, 3)];
        let cover = select_cover(&primes, &terms(&[0, 2]));
        assert_eq!(vec![group!(0, 1), group!(2, 3)], cover.groups);
    }

    #[test]
    fn test_orphan_term_does_not_panic() {
        let primes = vec![group!(0, 1)];
        let cover = select_cover(&primes, &terms(&[0, 1, 3]));
        assert_eq!(vec![group!(0, 1)], cover.groups);
        assert_eq!(terms(&[3]), cover.uncovered);
    }
}
