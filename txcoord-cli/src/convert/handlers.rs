use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use txcoord_io::{
    MappingTable, ProjectedQuery, Query, TranscriptLookup, convert_query, output_path_for,
    read_queries, write_projections,
};

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let mapping_file = matches
        .get_one::<String>("mapping_file")
        .expect("A path to a mapping file is required.");

    let query_file = matches
        .get_one::<String>("queries")
        .expect("A path to a query file is required.");

    let mapping_path = Path::new(mapping_file);
    let query_path = Path::new(query_file);

    let output = match matches.get_one::<String>("output") {
        Some(output) => PathBuf::from(output),
        None => output_path_for(query_path),
    };

    let mappings = MappingTable::from_file(mapping_path)
        .with_context(|| format!("Failed to load mapping file: {:?}", mapping_path))?;

    let queries = read_queries(query_path)
        .with_context(|| format!("Failed to load query file: {:?}", query_path))?;

    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?,
    );
    pb.set_message("Converting queries");

    let results = convert_with_progress(&mappings, &queries, &pb)?;

    write_projections(&results, &output)
        .with_context(|| format!("Failed to write output file: {:?}", output))?;

    info!("Genome coordinates written to {}", output.display());

    Ok(())
}

///
/// Convert queries in order, ticking the progress bar once per query. The bar
/// is cleared on success and abandoned on the first failure.
///
fn convert_with_progress<L: TranscriptLookup>(
    mappings: &L,
    queries: &[Query],
    pb: &ProgressBar,
) -> txcoord_io::Result<Vec<ProjectedQuery>> {
    let mut results = Vec::with_capacity(queries.len());
    for query in queries {
        match convert_query(mappings, query) {
            Ok(result) => results.push(result),
            Err(e) => {
                pb.abandon_with_message(format!("Failed on transcript {}", query.tx_name));
                return Err(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(results)
}
