pub mod alignment;
pub mod cigar_op;

// re-export for cleaner imports
pub use self::alignment::Alignment;
pub use self::cigar_op::{CigarOp, Run};
