/// Appended to the query file stem to name the output file.
pub const OUTPUT_SUFFIX: &str = "_genome_coordinates";

pub const FIELD_DELIMITER: char = '\t';

pub const MAPPING_FIELDS: usize = 4;
pub const QUERY_FIELDS: usize = 2;

/// First line of every output file.
pub const OUTPUT_HEADER: &str = "tx_name\ttx_coordinate\tchrom\tgenome_coordinate";
