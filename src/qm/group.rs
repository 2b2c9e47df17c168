use crate::Term;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// A candidate implicant: an ascending, deduplicated set of terms.
///
/// Two groups are the same implicant iff they hold the same terms, so the derived
/// `Eq` and `Hash` give canonical identity for deduplication.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::AsRef,
    derive_more::From,
)]
#[as_ref(forward)]
#[from(forward)]
#[serde(transparent)]
pub struct Group(pub BTreeSet<Term>);

impl Group {
    pub fn singleton(term: Term) -> Self {
        Self(BTreeSet::from([term]))
    }

    /// Merge two groups of equal size whose aligned terms all differ in one and the same bit.
    ///
    /// Return `None` if the pair is not combinable.
    pub fn combine(&self, other: &Group) -> Option<Group> {
        if self.len() != other.len() {
            return None;
        }

        let mut diffs = self.iter().zip(other.iter()).map(|(a, b)| a.0 ^ b.0);
        let diff = diffs.next()?;
        if !diff.is_power_of_two() || !diffs.all(|d| d == diff) {
            return None;
        }

        Some(self.0.union(&other.0).copied().collect())
    }

    /// Bitwise AND over all terms, i.e. the bits that are 1 in every term.
    pub(crate) fn common_ones(&self) -> u32 {
        self.iter().fold(u32::MAX, |acc, t| acc & t.0)
    }

    /// Bitwise OR over all terms, i.e. the complement of the bits that are 0 in every term.
    pub(crate) fn any_ones(&self) -> u32 {
        self.iter().fold(0, |acc, t| acc | t.0)
    }

    /// Return whether `other` covers every term of `self` and at least one more.
    pub fn is_strict_subset(&self, other: &Group) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }
}

impl FromIterator<Term> for Group {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl FromIterator<u32> for Group {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().map(Term).collect()
    }
}

impl IntoIterator for Group {
    type Item = <BTreeSet<Term> as IntoIterator>::Item;
    type IntoIter = <BTreeSet<Term> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Term;
    type IntoIter = std::collections::btree_set::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.iter().join(","))
    }
}

#[macro_export]
macro_rules! group {
    () => {
        $crate::qm::Group::default()
    };
    ($($x: literal),+ $(,)?) => {{
        let g: $crate::qm::Group = [$($x as u32),+].into_iter().collect();
        g
    }};
}

#[cfg(test)]
mod tests {
    use crate::group;

    #[test]
    fn test_display() {
        assert_eq!("()", format!("{}", group!()));
        assert_eq!("(3)", format!("{}", group!(3)));
        assert_eq!("(0,2,4,6)", format!("{}", group!(6, 2, 4, 0)));
    }

    #[test]
    fn test_combine() {
        assert_eq!(Some(group!(0, 1)), group!(0).combine(&group!(1)));
        assert_eq!(Some(group!(0, 1)), group!(1).combine(&group!(0)));
        assert_eq!(Some(group!(0, 2, 4, 6)), group!(0, 2).combine(&group!(4, 6)));
        // two bits differ
        assert_eq!(None, group!(0).combine(&group!(3)));
        // identical
        assert_eq!(None, group!(5).combine(&group!(5)));
        // differing bit is not the same across aligned terms
        assert_eq!(None, group!(0, 1).combine(&group!(2, 5)));
        // sizes differ
        assert_eq!(None, group!(0, 1).combine(&group!(2)));
    }

    #[test]
    fn test_common_bits() {
        let g = group!(4, 5, 6, 7);
        assert_eq!(0b100, g.common_ones() & 0b111);
        assert_eq!(0b111, g.any_ones());
    }

    #[test]
    fn test_strict_subset() {
        assert!(group!(1).is_strict_subset(&group!(1, 3)));
        assert!(!group!(1, 3).is_strict_subset(&group!(1, 3)));
        assert!(!group!(2).is_strict_subset(&group!(1, 3)));
    }
}
