use std::io::BufRead;
use std::path::Path;

use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
use log::info;

use txcoord_core::Alignment;

use crate::consts::MAPPING_FIELDS;
use crate::error::{Result, TableError};
use crate::utils::{get_dynamic_reader, split_fields};

///
/// Where one transcript sits on the genome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptMapping {
    pub chrom: String,
    /// Genome coordinate of the first base of the alignment.
    pub start: i64,
    pub alignment: Alignment,
}

impl TranscriptMapping {
    pub fn project(&self, tx_coordinate: u64) -> txcoord_core::Result<i64> {
        self.alignment.project(self.start, tx_coordinate)
    }
}

pub trait TranscriptLookup {
    fn get_mapping(&self, tx_name: &str) -> Option<&TranscriptMapping>;
}

///
/// Transcript mappings keyed by transcript name, loaded from a
/// `tx_name  chrom  start  cigar` tab-separated file.
///
#[derive(Debug, Default)]
pub struct MappingTable {
    mappings: HashMap<String, TranscriptMapping>,
}

impl TranscriptLookup for MappingTable {
    fn get_mapping(&self, tx_name: &str) -> Option<&TranscriptMapping> {
        self.mappings.get(tx_name)
    }
}

impl MappingTable {
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        let table = Self::from_reader(reader, path)?;

        info!(
            "Loaded {} transcript mappings from {}",
            table.len(),
            path.display()
        );

        Ok(table)
    }

    ///
    /// Read a mapping table from any buffered reader.
    ///
    /// # Arguments
    /// - reader: the tab-separated rows
    /// - source: path reported in error messages
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        // (line number, tx_name, chrom, start, cigar)
        let mut rows: Vec<(usize, String, String, i64, String)> = Vec::new();
        let mut seen: HashSet<String> = HashSet::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let invalid_row = |reason: String| TableError::InvalidRow {
                path: source.to_path_buf(),
                line: line_number,
                reason,
            };

            let fields = split_fields(line, MAPPING_FIELDS).ok_or_else(|| {
                invalid_row(format!(
                    "Expected {} tab-separated values, found: {:?}",
                    MAPPING_FIELDS, line
                ))
            })?;

            let (tx_name, chrom, start, cigar) = (fields[0], fields[1], fields[2], fields[3]);

            let start = start.parse::<i64>().map_err(|_| {
                invalid_row(format!(
                    "Error parsing mapping start position: {:?}. It must be an integer.",
                    start
                ))
            })?;

            if !seen.insert(tx_name.to_string()) {
                return Err(TableError::DuplicateTranscript(tx_name.to_string()));
            }

            rows.push((
                line_number,
                tx_name.to_string(),
                chrom.to_string(),
                start,
                cigar.to_string(),
            ));
        }

        // alignments are only parsed once every transcript name is known to be unique
        let mut mappings: HashMap<String, TranscriptMapping> = HashMap::default();
        mappings.reserve(rows.len());

        for (line_number, tx_name, chrom, start, cigar) in rows {
            let alignment = match cigar.parse::<Alignment>() {
                Ok(alignment) => alignment,
                Err(source) => {
                    return Err(TableError::InvalidAlignment {
                        tx_name,
                        line: line_number,
                        source,
                    });
                }
            };

            mappings.insert(
                tx_name,
                TranscriptMapping {
                    chrom,
                    start,
                    alignment,
                },
            );
        }

        Ok(MappingTable { mappings })
    }

    pub fn get(&self, tx_name: &str) -> Option<&TranscriptMapping> {
        self.mappings.get(tx_name)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
