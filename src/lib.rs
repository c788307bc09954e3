//! rust_volcano: volcano reports for differential-expression results
//!
//! Reads a delimited table of per-isoform statistics (`logFC`, `P.Value`,
//! `FDR`, `isoform_name`), classifies each row as up-regulated,
//! down-regulated or non-significant, writes the significant isoform names
//! to a list file and draws a volcano plot colored by category.
//!
//! # Example
//!
//! ```ignore
//! use rust_volcano::prelude::*;
//!
//! let mut config = ReportConfig::new("de_results.tsv", OutputPaths::new("out", "run1_"));
//! config.classifier = ClassifierConfig::new(ClassificationPolicy::FdrGated, 7.0);
//!
//! let outcome = run_report(&config)?;
//! println!("{}", outcome.summary);
//! ```

pub mod classify;
pub mod cli;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
pub mod transform;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classify::{
        classify, classify_row, is_significant, significant_indices, Category,
        ClassificationPolicy, ClassificationSummary, ClassifierConfig,
    };
    pub use crate::error::{Result, VolcanoError};
    pub use crate::io::{
        read_de_table, sniff_delimiter, write_isoform_list, ColumnNames, DeTable, Delimiter,
        DelimiterChoice, OutputPaths,
    };
    pub use crate::plot::{group_points, plot_volcano, PlotConfig, SeriesPoints};
    pub use crate::report::{run_report, ReportConfig, ReportOutcome};
    pub use crate::transform::{neg_log10, SignificanceAxis};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_pipeline() {
        let mut input = NamedTempFile::new().unwrap();
        writeln!(input, "isoform_name\tlogFC\tP.Value\tFDR").unwrap();
        writeln!(input, "iso_up\t9.2\t1e-6\t0.001").unwrap(); // Up-regulated
        writeln!(input, "iso_down\t-10.4\t1e-5\t0.01").unwrap(); // Down-regulated
        writeln!(input, "iso_nc\t0.3\t0.7\t0.95").unwrap(); // No change
        writeln!(input, "iso_gated\t11.0\t0.2\t0.45").unwrap(); // Large FC, FDR too high
        writeln!(input, "iso_edge\t-7\t1e-4\t0.02").unwrap(); // On the threshold
        input.flush().unwrap();

        let out = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(input.path(), OutputPaths::new(out.path(), "test_"));

        let outcome = run_report(&config).unwrap();

        assert_eq!(outcome.delimiter, Delimiter::Tab);
        assert_eq!(outcome.summary.total_rows, 5);
        assert_eq!(outcome.summary.upregulated, 1);
        assert_eq!(outcome.summary.downregulated, 1);
        assert_eq!(outcome.summary.non_significant, 3);

        let exported = std::fs::read_to_string(out.path().join("test_csv_to_bed.bed")).unwrap();
        assert_eq!(exported, "iso_up\niso_down\n");
        assert!(out.path().join("test_volcano_grouped.png").exists());

        println!("{}", outcome.summary);
    }
}
