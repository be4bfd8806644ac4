use std::io::BufRead;
use std::path::Path;

use log::info;

use crate::consts::QUERY_FIELDS;
use crate::error::{Result, TableError};
use crate::utils::{get_dynamic_reader, split_fields};

///
/// One row of a query file: a position on a named transcript.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub tx_name: String,
    pub tx_coordinate: u64,
}

pub fn read_queries(path: &Path) -> Result<Vec<Query>> {
    let reader = get_dynamic_reader(path)?;
    let queries = read_queries_from_reader(reader, path)?;

    info!("Loaded {} queries from {}", queries.len(), path.display());

    Ok(queries)
}

///
/// Read `tx_name  tx_coordinate` rows, keeping their order.
///
/// # Arguments
/// - reader: the tab-separated rows
/// - source: path reported in error messages
pub fn read_queries_from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Vec<Query>> {
    let mut queries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let invalid_row = |reason: String| TableError::InvalidRow {
            path: source.to_path_buf(),
            line: index + 1,
            reason,
        };

        let fields = split_fields(line, QUERY_FIELDS).ok_or_else(|| {
            invalid_row(format!(
                "Expected {} tab-separated values, found: {:?}",
                QUERY_FIELDS, line
            ))
        })?;

        let tx_coordinate = fields[1].parse::<u64>().map_err(|_| {
            invalid_row(format!(
                "Error parsing transcript coordinate: {:?}. It must be a non-negative integer.",
                fields[1]
            ))
        })?;

        queries.push(Query {
            tx_name: fields[0].to_string(),
            tx_coordinate,
        });
    }

    Ok(queries)
}
