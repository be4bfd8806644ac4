use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CigarError {
    #[error("Found non-canonical values in CIGAR string {cigar}")]
    InvalidAlignmentAlphabet { cigar: String },

    #[error(
        "Coordinate {coordinate} is greater than the total transcript length ({transcript_length}). Genome coordinate cannot be calculated"
    )]
    CoordinateOutOfRange {
        coordinate: u64,
        transcript_length: u64,
    },

    #[error("Genome coordinate overflows a 64-bit integer when projecting from anchor {anchor}")]
    GenomeCoordinateOverflow { anchor: i64 },

    #[error("Malformed CIGAR string {cigar}: {reason}")]
    MalformedAlignment { cigar: String, reason: String },

    #[error("Zero-length run in CIGAR string {cigar}")]
    ZeroLengthRun { cigar: String },
}

pub type Result<T> = std::result::Result<T, CigarError>;
