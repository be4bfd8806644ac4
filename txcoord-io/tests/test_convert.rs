use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use rstest::*;

use txcoord_io::{
    MappingTable, TableError, convert_queries, get_dynamic_reader, output_path_for, read_queries,
    write_projections,
};

#[fixture]
fn path_to_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("data")
}

#[rstest]
fn test_convert_files(path_to_data: PathBuf) {
    let mappings = MappingTable::from_file(&path_to_data.join("mapping.tsv")).unwrap();
    let queries = read_queries(&path_to_data.join("queries.tsv")).unwrap();

    assert_eq!(mappings.len(), 3);
    assert_eq!(queries.len(), 6);

    let results = convert_queries(&mappings, &queries).unwrap();

    let tempdir = tempfile::tempdir().unwrap();
    let query_copy = tempdir.path().join("queries.tsv");
    std::fs::copy(path_to_data.join("queries.tsv"), &query_copy).unwrap();

    let output = output_path_for(&query_copy);
    assert_eq!(output, tempdir.path().join("queries_genome_coordinates.tsv"));

    write_projections(&results, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "tx_name\ttx_coordinate\tchrom\tgenome_coordinate\n\
         TX1\t4\tCHR1\t7\n\
         TX2\t0\tCHR2\t10\n\
         TX1\t13\tCHR1\t23\n\
         TX2\t10\tCHR2\t20\n\
         TX3\t8\tCHR1\t1005\n\
         TX3\t12\tCHR1\t1009\n"
    );
}

#[rstest]
fn test_gzipped_inputs(path_to_data: PathBuf) {
    let tempdir = tempfile::tempdir().unwrap();

    let gz_path = tempdir.path().join("mapping.tsv.gz");
    let mut plain = String::new();
    File::open(path_to_data.join("mapping.tsv"))
        .unwrap()
        .read_to_string(&mut plain)
        .unwrap();

    let mut encoder = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
    encoder.write_all(plain.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let from_gz = MappingTable::from_file(&gz_path).unwrap();
    let from_plain = MappingTable::from_file(&path_to_data.join("mapping.tsv")).unwrap();

    assert_eq!(from_gz.len(), from_plain.len());
    assert_eq!(from_gz.get("TX3"), from_plain.get("TX3"));

    // sanity check that the reader decompresses rather than passing bytes through
    let mut decoded = String::new();
    get_dynamic_reader(&gz_path)
        .unwrap()
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(decoded, plain);
}

#[rstest]
fn test_duplicate_transcripts_rejected(path_to_data: PathBuf) {
    let result = MappingTable::from_file(&path_to_data.join("mapping_duplicate.tsv"));
    assert!(matches!(result, Err(TableError::DuplicateTranscript(name)) if name == "TX1"));
}

#[rstest]
fn test_out_of_range_query_reports_transcript(path_to_data: PathBuf) {
    let mappings = MappingTable::from_file(&path_to_data.join("mapping.tsv")).unwrap();
    let queries = read_queries(&path_to_data.join("queries_out_of_range.tsv")).unwrap();

    let err = convert_queries(&mappings, &queries).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Can't convert coordinate 50 for transcript TX1"
    );

    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(
        source.to_string(),
        "Coordinate 50 is greater than the total transcript length (25). Genome coordinate cannot be calculated"
    );
}

#[rstest]
fn test_missing_file(path_to_data: PathBuf) {
    let result = MappingTable::from_file(&path_to_data.join("does_not_exist.tsv"));
    assert!(matches!(result, Err(TableError::Io(_))));
}
