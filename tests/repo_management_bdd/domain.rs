//! Domain wrapper types for the repository management BDD tests.

use std::str::FromStr;

/// Number of repositories served or reported by the mock console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RepoCount(u64);

impl RepoCount {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn as_usize(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl FromStr for RepoCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// HTTP status returned by the mock console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusCode(u16);

impl StatusCode {
    pub(crate) const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u16>().map_err(|error| error.to_string())?;
        if !(100..600).contains(&value) {
            return Err(format!("{value} is not an HTTP status"));
        }
        Ok(Self(value))
    }
}
