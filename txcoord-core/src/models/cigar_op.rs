use std::fmt::{self, Display};

///
/// One alignment operation. Only the three operations that move along the
/// transcript and/or the genome are supported.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum CigarOp {
    /// Transcript base aligned to a genomic base.
    Match,
    /// Transcript base with no genomic counterpart.
    Insertion,
    /// Genomic base with no transcript counterpart.
    Deletion,
}

impl CigarOp {
    pub fn as_char(&self) -> char {
        match self {
            CigarOp::Match => 'M',
            CigarOp::Insertion => 'I',
            CigarOp::Deletion => 'D',
        }
    }

    pub fn consumes_transcript(&self) -> bool {
        matches!(self, CigarOp::Match | CigarOp::Insertion)
    }

    pub fn consumes_genome(&self) -> bool {
        matches!(self, CigarOp::Match | CigarOp::Deletion)
    }
}

impl TryFrom<char> for CigarOp {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'M' => Ok(CigarOp::Match),
            'I' => Ok(CigarOp::Insertion),
            'D' => Ok(CigarOp::Deletion),
            other => Err(other),
        }
    }
}

impl Display for CigarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

///
/// A single length-run of an alignment, e.g. `8M`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Run {
    pub len: u32,
    pub op: CigarOp,
}

impl Run {
    pub fn new(len: u32, op: CigarOp) -> Self {
        Run { len, op }
    }

    /// Number of transcript bases this run covers.
    pub fn transcript_span(&self) -> u64 {
        if self.op.consumes_transcript() {
            u64::from(self.len)
        } else {
            0
        }
    }

    /// Number of genomic bases this run covers.
    pub fn genome_span(&self) -> u64 {
        if self.op.consumes_genome() {
            u64::from(self.len)
        } else {
            0
        }
    }
}

impl Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case('M', CigarOp::Match)]
    #[case('I', CigarOp::Insertion)]
    #[case('D', CigarOp::Deletion)]
    fn test_op_from_char(#[case] letter: char, #[case] expected: CigarOp) {
        assert_eq!(CigarOp::try_from(letter), Ok(expected));
        assert_eq!(expected.as_char(), letter);
    }

    #[rstest]
    #[case('X')]
    #[case('N')]
    #[case('S')]
    #[case('m')]
    fn test_op_rejects_other_letters(#[case] letter: char) {
        assert_eq!(CigarOp::try_from(letter), Err(letter));
    }

    #[rstest]
    fn test_run_spans() {
        assert_eq!(Run::new(8, CigarOp::Match).transcript_span(), 8);
        assert_eq!(Run::new(8, CigarOp::Match).genome_span(), 8);

        assert_eq!(Run::new(2, CigarOp::Insertion).transcript_span(), 2);
        assert_eq!(Run::new(2, CigarOp::Insertion).genome_span(), 0);

        assert_eq!(Run::new(7, CigarOp::Deletion).transcript_span(), 0);
        assert_eq!(Run::new(7, CigarOp::Deletion).genome_span(), 7);
    }

    #[rstest]
    fn test_run_display() {
        assert_eq!(Run::new(11, CigarOp::Deletion).to_string(), "11D");
    }
}
