use std::fmt::{self, Display};

use log::debug;

use crate::error::{Result, TableError};
use crate::mapping::TranscriptLookup;
use crate::query::Query;

///
/// A query with its genome position filled in.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedQuery {
    pub tx_name: String,
    pub tx_coordinate: u64,
    pub chrom: String,
    pub genome_coordinate: i64,
}

impl ProjectedQuery {
    ///
    /// Get the output row for this query
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.tx_name, self.tx_coordinate, self.chrom, self.genome_coordinate
        )
    }
}

impl Display for ProjectedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Look up the transcript of a query and project its coordinate onto the genome.
///
pub fn convert_query<L: TranscriptLookup>(mappings: &L, query: &Query) -> Result<ProjectedQuery> {
    let mapping = mappings
        .get_mapping(&query.tx_name)
        .ok_or_else(|| TableError::UnknownTranscript(query.tx_name.clone()))?;

    let genome_coordinate =
        mapping
            .project(query.tx_coordinate)
            .map_err(|source| TableError::Projection {
                tx_name: query.tx_name.clone(),
                coordinate: query.tx_coordinate,
                source,
            })?;

    debug!(
        "{}:{} -> {}:{}",
        query.tx_name, query.tx_coordinate, mapping.chrom, genome_coordinate
    );

    Ok(ProjectedQuery {
        tx_name: query.tx_name.clone(),
        tx_coordinate: query.tx_coordinate,
        chrom: mapping.chrom.clone(),
        genome_coordinate,
    })
}

///
/// Convert every query in order. The first failure aborts the whole batch.
///
pub fn convert_queries<L: TranscriptLookup>(
    mappings: &L,
    queries: &[Query],
) -> Result<Vec<ProjectedQuery>> {
    queries
        .iter()
        .map(|query| convert_query(mappings, query))
        .collect()
}
