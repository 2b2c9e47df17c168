use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A truth-table row index: a minterm or maxterm depending on [`TermType`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Constructor,
    derive_more::Deref,
    derive_more::From,
    derive_more::Into,
)]
#[serde(transparent)]
pub struct Term(pub u32);

/// Number of input variables, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VarCount(u8);

impl VarCount {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 5;

    const NAMES: [char; Self::MAX as usize] = ['A', 'B', 'C', 'D', 'E'];

    pub fn new(n: u32) -> Result<Self, Error> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n as u8))
        } else {
            Err(Error::InvalidVarCount(n))
        }
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    /// Number of rows in the truth table, `2^n`.
    pub fn universe(self) -> u32 {
        1 << self.0
    }

    pub fn max_term(self) -> Term {
        Term(self.universe() - 1)
    }

    /// All terms of the truth table in ascending order.
    pub fn terms(self) -> impl Iterator<Item = Term> {
        (0..self.universe()).map(Term)
    }

    /// Name of the variable at position `i`, counted from the most significant bit.
    pub fn name(self, i: u32) -> char {
        debug_assert!(i < self.get());
        Self::NAMES[i as usize]
    }

    /// Bit mask selecting the variable at position `i`.
    pub fn bit(self, i: u32) -> u32 {
        1 << (self.get() - 1 - i)
    }

    /// Fixed-width binary rendering of `term`, most significant bit first.
    pub fn binary(self, term: Term) -> String {
        format!("{:0width$b}", term.0, width = self.get() as usize)
    }
}

impl TryFrom<u32> for VarCount {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl<'de> Deserialize<'de> for VarCount {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let n = u32::deserialize(d)?;
        Self::new(n).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for VarCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which truth-table rows are grouped and which expression form is produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum TermType {
    /// Group the 1s and don't-cares, emit a sum of products.
    #[default]
    #[serde(rename = "min", alias = "sop")]
    SumOfProducts,
    /// Group the 0s and don't-cares, emit a product of sums.
    #[serde(rename = "max", alias = "pos")]
    ProductOfSums,
}

impl TermType {
    /// The expression of a function with no selected groups.
    pub fn empty_expression(self) -> &'static str {
        match self {
            TermType::SumOfProducts => "0",
            TermType::ProductOfSums => "1",
        }
    }

    /// The term of a group spanning the whole truth table.
    pub fn full_term(self) -> &'static str {
        match self {
            TermType::SumOfProducts => "1",
            TermType::ProductOfSums => "0",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermType::SumOfProducts => write!(f, "SoP"),
            TermType::ProductOfSums => write!(f, "PoS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_count_bounds() {
        assert!(VarCount::new(1).is_err());
        assert!(VarCount::new(6).is_err());
        for n in 2..=5 {
            let v = VarCount::new(n).unwrap();
            assert_eq!(v.universe(), 1 << n);
            assert_eq!(v.max_term(), Term((1 << n) - 1));
        }
        assert!(matches!(VarCount::try_from(0), Err(Error::InvalidVarCount(0))));
    }

    #[test]
    fn test_names_and_bits() {
        let v = VarCount::new(3).unwrap();
        assert_eq!('A', v.name(0));
        assert_eq!('C', v.name(2));
        assert_eq!(0b100, v.bit(0));
        assert_eq!(0b001, v.bit(2));

        let v = VarCount::new(5).unwrap();
        assert_eq!('E', v.name(4));
        assert_eq!(16, v.bit(0));
        assert_eq!(32, v.terms().count());
    }

    #[test]
    fn test_binary() {
        let v = VarCount::new(2).unwrap();
        assert_eq!("00", v.binary(Term(0)));
        assert_eq!("10", v.binary(Term(2)));

        let v = VarCount::new(5).unwrap();
        assert_eq!("00101", v.binary(Term(5)));
        assert_eq!("11111", v.binary(v.max_term()));
    }

    #[test]
    fn test_term_type_serde() {
        let t: TermType = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(TermType::ProductOfSums, t);
        let t: TermType = serde_json::from_str("\"sop\"").unwrap();
        assert_eq!(TermType::SumOfProducts, t);
        assert_eq!("\"min\"", serde_json::to_string(&TermType::default()).unwrap());
    }

    #[test]
    fn test_var_count_deserialize() {
        let v: VarCount = serde_json::from_str("4").unwrap();
        assert_eq!(4, v.get());
        assert!(serde_json::from_str::<VarCount>("7").is_err());
    }
}
