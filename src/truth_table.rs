use crate::{Problem, Solution, Term, VarCount};
use serde::Serialize;

/// Value of the function at one truth-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Output {
    #[display(fmt = "0")]
    Zero,
    #[display(fmt = "1")]
    One,
    #[display(fmt = "X")]
    DontCare,
}

/// Full truth table of a problem, indexed by term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub num_vars: VarCount,
    pub rows: Vec<Output>,
}

impl TruthTable {
    pub fn new(problem: &Problem) -> Self {
        let default = problem.default_output();
        let required = match default {
            Output::Zero => Output::One,
            _ => Output::Zero,
        };
        let rows = problem
            .num_vars
            .terms()
            .map(|t| {
                if problem.required.contains(&t) {
                    required
                } else if problem.dont_cares.contains(&t) {
                    Output::DontCare
                } else {
                    default
                }
            })
            .collect();
        Self {
            num_vars: problem.num_vars,
            rows,
        }
    }

    /// Value at `term`, or `None` if the term is outside the table.
    pub fn get(&self, term: Term) -> Option<Output> {
        self.rows.get(term.0 as usize).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Term, Output)> + '_ {
        self.num_vars.terms().zip(self.rows.iter().copied())
    }

    /// Rows where `solution` disagrees with the table. Don't-care rows never disagree.
    pub fn check(&self, solution: &Solution) -> Vec<Term> {
        self.iter()
            .filter(|&(t, out)| match out {
                Output::DontCare => false,
                Output::One => !solution.eval(t),
                Output::Zero => solution.eval(t),
            })
            .map(|(t, _)| t)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solve, tests::problem, TermType};

    #[test]
    fn test_rows() {
        let p = problem(2, TermType::SumOfProducts, &[1, 2], &[3]);
        let table = TruthTable::new(&p);
        assert_eq!(
            vec![Output::Zero, Output::One, Output::One, Output::DontCare],
            table.rows
        );
        assert_eq!(Some(Output::DontCare), table.get(Term(3)));
        assert_eq!(None, table.get(Term(4)));
        assert_eq!("011X", table.iter().map(|(_, o)| o.to_string()).collect::<String>());

        // maxterms mark the 0 rows
        let p = problem(2, TermType::ProductOfSums, &[1, 2], &[3]);
        let table = TruthTable::new(&p);
        assert_eq!("100X", table.iter().map(|(_, o)| o.to_string()).collect::<String>());
    }

    #[test]
    fn test_check() {
        let p = problem(3, TermType::ProductOfSums, &[0, 3, 5], &[6]);
        let table = TruthTable::new(&p);
        let mut s = solve(&p).unwrap();
        assert!(table.check(&s).is_empty());

        // drop a group and the rows it was responsible for must show up
        s.groups.pop();
        assert!(!table.check(&s).is_empty());
    }
}
