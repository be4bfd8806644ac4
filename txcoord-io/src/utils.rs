use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::consts::OUTPUT_SUFFIX;

///
/// Open a file for buffered reading, decompressing it if it ends in `.gz`.
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Name of the output file written next to a query file:
/// `queries.tsv` becomes `queries_genome_coordinates.tsv`.
///
pub fn output_path_for(query_path: &Path) -> PathBuf {
    let stem = query_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let file_name = match query_path.extension() {
        Some(ext) => format!("{}{}.{}", stem, OUTPUT_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, OUTPUT_SUFFIX),
    };

    query_path.with_file_name(file_name)
}

///
/// Split a line into exactly `n` tab-separated fields, ignoring any extras.
///
pub(crate) fn split_fields(line: &str, n: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = line.split(crate::consts::FIELD_DELIMITER).take(n).collect();
    if fields.len() < n {
        return None;
    }
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("queries.tsv", "queries_genome_coordinates.tsv")]
    #[case("data/queries.txt", "data/queries_genome_coordinates.txt")]
    #[case("queries", "queries_genome_coordinates")]
    #[case("queries.tsv.gz", "queries.tsv_genome_coordinates.gz")]
    fn test_output_path_for(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(output_path_for(Path::new(input)), PathBuf::from(expected));
    }

    #[rstest]
    fn test_split_fields() {
        assert_eq!(split_fields("a\tb\tc", 2), Some(vec!["a", "b"]));
        assert_eq!(split_fields("a\tb", 2), Some(vec!["a", "b"]));
        assert_eq!(split_fields("a", 2), None);
        assert_eq!(split_fields("a b", 2), None);
    }
}
