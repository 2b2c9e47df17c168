//! Boolean function minimization over 2 to 5 variables using the Quine–McCluskey method.
//!
//! ```
//! use kmap_solver::{solve, Config, TermType};
//!
//! let problem = Config::new(3, TermType::SumOfProducts, "0 2 4 6", "").validate()?;
//! let solution = solve(&problem)?;
//! assert_eq!("C'", solution.expression);
//! # Ok::<(), kmap_solver::Error>(())
//! ```

#[macro_use]
extern crate tracing;

use rayon::prelude::*;
use serde::Serialize;
use std::{collections::BTreeSet, fmt};

pub mod config;
pub mod error;
pub mod qm;
pub mod term;
pub mod truth_table;
pub mod utils;


pub use config::{Config, TermList};
pub use error::Error;
pub use qm::{Cube, Group};
pub use term::{Term, TermType, VarCount};
pub use truth_table::{Output, TruthTable};

/// A validated minimization problem.
///
/// `required` are minterms (rows where the function is 1) for SoP and maxterms (rows where
/// it is 0) for PoS; `dont_cares` are rows where it is free. Both are within range and
/// disjoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub num_vars: VarCount,
    pub term_type: TermType,
    pub required: BTreeSet<Term>,
    pub dont_cares: BTreeSet<Term>,
}

impl Problem {
    pub fn new(
        num_vars: VarCount,
        term_type: TermType,
        required: impl IntoIterator<Item = u32>,
        dont_cares: impl IntoIterator<Item = u32>,
    ) -> Result<Self, Error> {
        let max = num_vars.max_term().0;
        let check = |term: u32| {
            if term > max {
                Err(Error::TermOutOfRange {
                    term,
                    max,
                    num_vars: num_vars.get(),
                })
            } else {
                Ok(Term(term))
            }
        };
        let required = required.into_iter().map(check).collect::<Result<BTreeSet<_>, _>>()?;
        let dont_cares = dont_cares
            .into_iter()
            .map(check)
            .collect::<Result<BTreeSet<_>, _>>()?;
        if let Some(&term) = required.intersection(&dont_cares).next() {
            return Err(Error::Overlap(term));
        }

        Ok(Self {
            num_vars,
            term_type,
            required,
            dont_cares,
        })
    }

    /// Terms fed to prime implicant generation: the required rows plus the don't-cares.
    pub fn terms_to_group(&self) -> BTreeSet<Term> {
        self.required.union(&self.dont_cares).copied().collect()
    }

    /// Terms the selected implicants must cover: the 1s for SoP, the 0s for PoS.
    pub fn terms_to_cover(&self) -> &BTreeSet<Term> {
        &self.required
    }

    /// Value of the function at a row that is neither required nor a don't-care.
    pub fn default_output(&self) -> Output {
        match self.term_type {
            TermType::SumOfProducts => Output::Zero,
            TermType::ProductOfSums => Output::One,
        }
    }
}

/// The minimized function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub num_vars: VarCount,
    pub term_type: TermType,
    pub prime_implicants: Vec<Group>,
    /// Number of leading entries of `groups` that are essential prime implicants.
    pub essentials: usize,
    pub groups: Vec<Group>,
    /// One synthesized term per entry of `groups`.
    pub terms: Vec<String>,
    pub expression: String,
}

impl Solution {
    /// Evaluate the minimized expression at truth-table row `term`.
    pub fn eval(&self, term: Term) -> bool {
        let hit = self
            .groups
            .iter()
            .any(|g| Cube::of(g, self.num_vars).contains(term));
        match self.term_type {
            TermType::SumOfProducts => hit,
            TermType::ProductOfSums => !hit,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F = {}", self.expression)
    }
}

/// Minimize `problem` into a sum of products or a product of sums.
pub fn solve(problem: &Problem) -> Result<Solution, Error> {
    let Problem {
        num_vars,
        term_type,
        ..
    } = *problem;
    let to_group = problem.terms_to_group();
    let to_cover = problem.terms_to_cover();
    debug!(
        "{} {} variables: grouping {} terms, covering {}",
        term_type,
        num_vars,
        to_group.len(),
        to_cover.len()
    );

    let prime_implicants = qm::prime_implicants(&to_group, num_vars);
    let cover = qm::select_cover(&prime_implicants, to_cover);
    if !cover.uncovered.is_empty() {
        error!("uncovered terms after selection: {:?}", cover.uncovered);
        return Err(Error::Uncovered(cover.uncovered.into_iter().collect()));
    }

    let terms: Vec<String> = cover
        .groups
        .iter()
        .map(|g| qm::synthesize(g, num_vars, term_type))
        .collect();
    let expression = qm::compose(terms.as_slice(), term_type);

    Ok(Solution {
        num_vars,
        term_type,
        prime_implicants,
        essentials: cover.essential_len,
        groups: cover.groups,
        terms,
        expression,
    })
}

/// Solve independent problems in parallel, keeping input order.
pub fn solve_batch(problems: &[Problem]) -> Vec<Result<Solution, Error>> {
    problems.par_iter().map(solve).collect()
}
