use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::info;

use crate::consts::OUTPUT_HEADER;
use crate::convert::ProjectedQuery;

pub trait ProjectionWrite {
    ///
    /// Write projected queries to disk as a tab-separated file with a header line
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write projected queries to disk as a gzipped tab-separated file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

fn create_parent_dirs(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

impl ProjectionWrite for [ProjectedQuery] {
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{}", OUTPUT_HEADER)?;
        for row in self {
            writeln!(writer, "{}", row.as_string())?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_tsv_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        writeln!(encoder, "{}", OUTPUT_HEADER)?;
        for row in self {
            writeln!(encoder, "{}", row.as_string())?;
        }

        encoder.finish()?.flush()?;
        Ok(())
    }
}

///
/// Write projected queries, gzipping the output when the path ends in `.gz`.
///
pub fn write_projections<T: AsRef<Path>>(rows: &[ProjectedQuery], path: T) -> std::io::Result<()> {
    let path = path.as_ref();

    match path.extension() == Some(OsStr::new("gz")) {
        true => rows.write_tsv_gz(path)?,
        false => rows.write_tsv(path)?,
    }

    info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
