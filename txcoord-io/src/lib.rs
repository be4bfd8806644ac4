//! # Table input/output for txcoord.
//!
//! Reads the tab-separated mapping file (`tx_name  chrom  start  cigar`) and query file
//! (`tx_name  tx_coordinate`), converts each query to a genome coordinate, and writes the
//! results back out next to the query file. Gzipped inputs and outputs are handled
//! transparently based on the `.gz` extension.
//!
pub mod consts;
pub mod convert;
pub mod error;
pub mod mapping;
pub mod query;
pub mod utils;
pub mod write;

// re-expose core functions
pub use consts::*;
pub use convert::*;
pub use error::*;
pub use mapping::*;
pub use query::*;
pub use utils::{get_dynamic_reader, output_path_for};
pub use write::*;
