use crate::{Error, Problem, TermType, VarCount};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::Read;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,]+").expect("valid regex"));

/// A list of terms, either as free text (`"1, 3 5"`) or as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermList {
    Text(String),
    List(Vec<i64>),
}

impl Default for TermList {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for TermList {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<i64>> for TermList {
    fn from(v: Vec<i64>) -> Self {
        Self::List(v)
    }
}

impl TermList {
    /// Parse into raw integers. Duplicates are kept; range checks happen in [`Problem::new`].
    pub fn parse(&self) -> Result<Vec<u32>, Error> {
        match self {
            TermList::Text(s) => SEPARATOR
                .split(s.trim())
                .filter(|tok| !tok.is_empty())
                .map(|tok| tok.parse().map_err(|_| Error::InvalidTerm(tok.to_string())))
                .collect(),
            TermList::List(v) => v
                .iter()
                .map(|&n| u32::try_from(n).map_err(|_| Error::InvalidTerm(n.to_string())))
                .collect(),
        }
    }
}

/// User-facing description of one minimization problem, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub num_vars: u32,
    #[serde(default)]
    pub term_type: TermType,
    #[serde(default)]
    pub terms: TermList,
    #[serde(default)]
    pub dont_cares: TermList,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(Config),
    Many(Vec<Config>),
}

impl Config {
    pub fn new(
        num_vars: u32,
        term_type: TermType,
        terms: impl Into<TermList>,
        dont_cares: impl Into<TermList>,
    ) -> Self {
        Self {
            num_vars,
            term_type,
            terms: terms.into(),
            dont_cares: dont_cares.into(),
        }
    }

    /// Parse and range-check the input, producing a problem ready for [`crate::solve`].
    pub fn validate(&self) -> Result<Problem, Error> {
        let num_vars = VarCount::new(self.num_vars)?;
        let terms = self.terms.parse()?;
        let dont_cares = self.dont_cares.parse()?;
        Problem::new(num_vars, self.term_type, terms, dont_cares)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read either a single config object or an array of them.
    pub fn load_batch(reader: impl Read) -> Result<Vec<Self>, Error> {
        let batch = match serde_json::from_reader(reader)? {
            OneOrMany::One(config) => vec![config],
            OneOrMany::Many(configs) => configs,
        };
        Ok(batch)
    }
}
