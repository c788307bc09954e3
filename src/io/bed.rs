//! Isoform list export and output file naming

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Suffix of the significant-isoform list
pub const BED_SUFFIX: &str = "csv_to_bed.bed";
/// Suffix of the volcano plot image
pub const PLOT_SUFFIX: &str = "volcano_grouped.png";

/// Locations of the two report artifacts: `<dir>/<prefix><suffix>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub dir: PathBuf,
    pub prefix: String,
}

impl OutputPaths {
    pub fn new<P: Into<PathBuf>>(dir: P, prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.to_string(),
        }
    }

    /// Path of the isoform list
    pub fn bed(&self) -> PathBuf {
        self.dir.join(format!("{}{}", self.prefix, BED_SUFFIX))
    }

    /// Path of the volcano plot
    pub fn plot(&self) -> PathBuf {
        self.dir.join(format!("{}{}", self.prefix, PLOT_SUFFIX))
    }
}

/// Write one identifier per line, replacing any existing file.
///
/// The file is written in place; an interrupted write leaves a partial file.
pub fn write_isoform_list<P, S>(path: P, ids: &[S]) -> Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    for id in ids {
        writeln!(w, "{}", id.as_ref())?;
    }
    w.flush()?;
    Ok(())
}
