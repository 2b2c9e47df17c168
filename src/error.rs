use crate::Term;

/// Errors reported by the input layer and by the minimizer's invariant checks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input contains a non-numeric value: {0:?}")]
    InvalidTerm(String),

    #[error("number of variables must be between 2 and 5, got {0}")]
    InvalidVarCount(u32),

    #[error("terms cannot be greater than {max} for {num_vars} variables, got {term}")]
    TermOutOfRange { term: u32, max: u32, num_vars: u32 },

    #[error("term {0} cannot be in both required and don't care lists")]
    Overlap(Term),

    /// A term to cover is not contained in any prime implicant.
    ///
    /// Cannot happen for validated input since every term forms at least a singleton implicant.
    #[error("internal error: terms left uncovered: {0:?}")]
    Uncovered(Vec<Term>),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
