use std::io;
use std::path::PathBuf;

use thiserror::Error;
use txcoord_core::CigarError;

/// Error type for txcoord-io operations.
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A row could not be split into the expected fields.
    #[error("Invalid row at {}:{line}: {reason}", .path.display())]
    InvalidRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The CIGAR string of a mapping row could not be parsed.
    #[error("Invalid alignment for transcript {tx_name} (line {line})")]
    InvalidAlignment {
        tx_name: String,
        line: usize,
        source: CigarError,
    },

    /// The same transcript name appears more than once in the mapping file.
    #[error("Found duplicate transcript ID in mapping file: {0}")]
    DuplicateTranscript(String),

    /// A query names a transcript that is not in the mapping file.
    #[error("Transcript {0} not found in mapping file")]
    UnknownTranscript(String),

    /// A query coordinate could not be projected onto the genome.
    #[error("Can't convert coordinate {coordinate} for transcript {tx_name}")]
    Projection {
        tx_name: String,
        coordinate: u64,
        source: CigarError,
    },
}

/// Result type alias for txcoord-io operations.
pub type Result<T> = std::result::Result<T, TableError>;
