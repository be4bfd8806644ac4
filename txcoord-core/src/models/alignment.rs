use std::fmt::{self, Display};
use std::slice::Iter;
use std::str::FromStr;

use crate::errors::{CigarError, Result};
use crate::models::Run;
use crate::projection::project;
use crate::tokenize::tokenize;

///
/// Alignment struct, the ordered runs of one CIGAR string.
///
/// Run order is preserved exactly as it appeared in the source string.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Default)]
pub struct Alignment {
    runs: Vec<Run>,
}

impl Alignment {
    ///
    /// Build an alignment from runs that are already known to be valid.
    ///
    pub fn new(runs: Vec<Run>) -> Self {
        Alignment { runs }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn iter(&self) -> Iter<'_, Run> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    ///
    /// Total number of transcript bases: the sum of all `M` and `I` runs.
    ///
    pub fn transcript_length(&self) -> u64 {
        self.runs.iter().map(Run::transcript_span).sum()
    }

    ///
    /// Total number of genomic bases spanned: the sum of all `M` and `D` runs.
    ///
    pub fn genome_length(&self) -> u64 {
        self.runs.iter().map(Run::genome_span).sum()
    }

    ///
    /// Project a transcript coordinate onto the genome.
    ///
    /// See [crate::project].
    pub fn project(&self, anchor: i64, target: u64) -> Result<i64> {
        project(anchor, target, self)
    }
}

impl FromStr for Alignment {
    type Err = CigarError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Alignment { runs: tokenize(s)? })
    }
}

impl TryFrom<&str> for Alignment {
    type Error = CigarError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a Run;
    type IntoIter = Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            write!(f, "{}", run)?;
        }
        Ok(())
    }
}
