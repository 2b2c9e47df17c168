use super::Group;
use crate::{Term, TermType, VarCount};
use itertools::Itertools;

/// The fixed bits shared by every term of a group.
///
/// `mask` has a 1 at each variable position on which all terms agree; `value` holds the
/// agreed bits. Positions outside `mask` are free in the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cube {
    pub mask: u32,
    pub value: u32,
}

impl Cube {
    pub fn of(group: &Group, num_vars: VarCount) -> Self {
        let width = num_vars.universe() - 1;
        let ones = group.common_ones() & width;
        let zeros = !group.any_ones() & width;
        Self {
            mask: ones | zeros,
            value: ones,
        }
    }

    /// Return whether `term` lies inside the cube.
    pub fn contains(&self, term: Term) -> bool {
        term.0 & self.mask == self.value
    }

    /// Fixed-width pattern, most significant bit first, with `-` at free positions.
    pub fn pattern(&self, num_vars: VarCount) -> String {
        (0..num_vars.get())
            .map(|i| {
                let bit = num_vars.bit(i);
                match (self.mask & bit != 0, self.value & bit != 0) {
                    (false, _) => '-',
                    (true, false) => '0',
                    (true, true) => '1',
                }
            })
            .collect()
    }

    /// Literals of the cube as `(variable position, complemented)`, most significant first.
    ///
    /// In SoP a literal is complemented when its shared bit is 0; in PoS when it is 1.
    pub fn literals(
        &self,
        num_vars: VarCount,
        term_type: TermType,
    ) -> impl Iterator<Item = (u32, bool)> + '_ {
        (0..num_vars.get())
            .filter(move |&i| self.mask & num_vars.bit(i) != 0)
            .map(move |i| {
                let bit_is_one = self.value & num_vars.bit(i) != 0;
                let complemented = match term_type {
                    TermType::SumOfProducts => !bit_is_one,
                    TermType::ProductOfSums => bit_is_one,
                };
                (i, complemented)
            })
    }
}

fn literal(num_vars: VarCount, (i, complemented): (u32, bool)) -> String {
    let name = num_vars.name(i);
    if complemented {
        format!("{name}'")
    } else {
        name.to_string()
    }
}

/// Convert a group into its product term (SoP) or parenthesized sum term (PoS).
pub fn synthesize(group: &Group, num_vars: VarCount, term_type: TermType) -> String {
    if group.is_empty() {
        return String::new();
    }
    if group.len() == num_vars.universe() as usize {
        return term_type.full_term().to_string();
    }

    let cube = Cube::of(group, num_vars);
    let mut literals = cube
        .literals(num_vars, term_type)
        .map(|l| literal(num_vars, l));
    match term_type {
        TermType::SumOfProducts => literals.collect(),
        TermType::ProductOfSums => format!("({})", literals.join(" + ")),
    }
}

/// Compose the final expression from the synthesized terms.
///
/// Products are joined by `" + "`; sums are juxtaposed. With no terms the function
/// is the constant 0 (SoP) or 1 (PoS).
pub fn compose<S: AsRef<str>>(terms: &[S], term_type: TermType) -> String {
    if terms.is_empty() {
        return term_type.empty_expression().to_string();
    }

    let sep = match term_type {
        TermType::SumOfProducts => " + ",
        TermType::ProductOfSums => "",
    };
    terms.iter().map(|s| s.as_ref()).join(sep)
}
