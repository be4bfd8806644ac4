use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;

use txcoord_core::Alignment;

pub fn run_project(matches: &ArgMatches) -> Result<()> {
    let cigar = matches
        .get_one::<String>("cigar")
        .expect("A CIGAR string is required.");

    let start = *matches
        .get_one::<i64>("start")
        .expect("A genome start coordinate is required.");

    let coordinate = *matches
        .get_one::<u64>("coordinate")
        .expect("A transcript coordinate is required.");

    let alignment: Alignment = cigar.parse()?;
    debug!(
        "Alignment {} has {} runs and transcript length {}",
        alignment,
        alignment.len(),
        alignment.transcript_length()
    );

    let genome_coordinate = alignment
        .project(start, coordinate)
        .with_context(|| format!("Failed to project coordinate {} on {}", coordinate, cigar))?;

    println!("{}", genome_coordinate);

    Ok(())
}
