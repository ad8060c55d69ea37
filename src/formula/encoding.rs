//! Boundary adapters between textual or integer literal encodings and [`Literal`].
//!
//! Two encodings are supported: signed integers, where the magnitude names the variable and a
//! negative sign negates it, and named variables, where a leading [`NEGATION_SYMBOL`] negates.

use crate::formula::{Clause, Literal};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Prefix used when rendering (and reading) a negative literal. Display only.
pub const NEGATION_SYMBOL: &str = "~";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// `0` has no sign and so names no literal.
    Zero,
    /// A named literal with nothing after the negation symbol.
    EmptyName,
    Format(String),
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            EncodingError::Zero => f.write_str("0 is not a literal"),
            EncodingError::EmptyName => f.write_str("missing variable name"),
            EncodingError::Format(s) => write!(f, "invalid literal '{}'", s),
        }
    }
}

impl std::error::Error for EncodingError {}

impl TryFrom<i32> for Literal<u32> {
    type Error = EncodingError;

    fn try_from(l: i32) -> Result<Self, Self::Error> {
        if l > 0 {
            Ok(Literal::Positive(l.unsigned_abs()))
        } else if l < 0 {
            Ok(Literal::Negative(l.unsigned_abs()))
        } else {
            Err(EncodingError::Zero)
        }
    }
}

impl Literal<u32> {
    pub fn to_signed(&self) -> i64 {
        match self {
            Literal::Positive(x) => i64::from(*x),
            Literal::Negative(x) => -i64::from(*x),
        }
    }
}

impl FromStr for Literal<String> {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, positive) = match s.strip_prefix(NEGATION_SYMBOL) {
            Some(rest) => (rest, false),
            None => (s, true),
        };
        if name.is_empty() {
            return Err(EncodingError::EmptyName);
        }
        if name.starts_with(NEGATION_SYMBOL) || name.chars().any(char::is_whitespace) {
            return Err(EncodingError::Format(s.into()));
        }
        let name = name.to_string();
        Ok(if positive {
            Literal::Positive(name)
        } else {
            Literal::Negative(name)
        })
    }
}

/// Parses one clause written as comma-separated signed integers, e.g. `1,-2,3`.
pub fn parse_signed_clause(s: &str) -> Result<Clause<u32>, EncodingError> {
    let mut literals: Vec<Literal<u32>> = vec![];
    for x in s.split(',').map(str::trim).filter(|x| !x.is_empty()) {
        let l = x.parse::<i32>().map_err(|_| EncodingError::Format(x.into()))?;
        literals.push(Literal::<u32>::try_from(l)?);
    }
    Ok(Clause::new(literals))
}
