//! # Transcript-to-genome coordinate projection.
//!
//! This crate parses CIGAR-style alignment strings (`M`, `I` and `D` runs only) and walks them
//! to find the genome coordinate that corresponds to a position on an aligned transcript.
//!
//! ```rust
//! use txcoord_core::{Alignment, project};
//!
//! let alignment: Alignment = "8M7D6M2I2M11D7M".parse().unwrap();
//! assert_eq!(alignment.transcript_length(), 25);
//!
//! // the transcript starts at genome position 3
//! assert_eq!(project(3, 4, &alignment).unwrap(), 7);
//!
//! // coordinates past the end of the transcript are rejected
//! assert!(project(3, 50, &alignment).is_err());
//! ```
pub mod errors;
pub mod models;
pub mod projection;
pub mod tokenize;

pub use errors::{CigarError, Result};
pub use models::{Alignment, CigarOp, Run};
pub use projection::{project, project_str, transcript_length};
pub use tokenize::tokenize;
