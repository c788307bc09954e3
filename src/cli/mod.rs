//! Command-line interface for rust_volcano

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::classify::{ClassificationPolicy, ClassifierConfig, DEFAULT_FC_THRESHOLD, DEFAULT_FDR_CEILING};
use crate::io::{ColumnNames, Delimiter, DelimiterChoice, OutputPaths};
use crate::report::ReportConfig;
use crate::transform::SignificanceAxis;

#[derive(Parser, Debug)]
#[command(name = "rust_volcano")]
#[command(version)]
#[command(about = "Classify differential-expression results and draw a volcano plot")]
#[command(
    after_long_help = "\
Examples:
  # FDR-gated classification, |logFC| > 7 and FDR <= 0.3
  rust_volcano -f de_results.csv -o reports -p sampleA_

  # Fold change only, whitespace-aligned limma output
  rust_volcano -f toptable.txt -t 2 --policy pvalue-only --delimiter whitespace"
)]
pub struct Cli {
    /// Path to the CSV file
    #[arg(short = 'f', long = "file_path", alias = "file-path", value_name = "PATH",
        long_help = "Path to the differential-expression table.\n\
            Needs a header with logFC, P.Value and isoform_name columns,\n\
            plus FDR for the fdr-gated policy.")]
    pub file_path: Option<PathBuf>,

    /// Threshold value for significant Fold Change points
    #[arg(short = 't', long, default_value_t = DEFAULT_FC_THRESHOLD)]
    pub threshold: f64,

    /// Path to save the chart and names file
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Prefix for output file names
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Classification policy
    #[arg(long, value_enum, default_value_t = PolicyArg::FdrGated,
        long_help = "Classification policy.\n\
            fdr-gated:   FDR above --fdr-ceiling is never significant\n\
            pvalue-only: fold change alone decides, no significance gate")]
    pub policy: PolicyArg,

    /// Highest FDR still significant under fdr-gated
    #[arg(long, default_value_t = DEFAULT_FDR_CEILING)]
    pub fdr_ceiling: f64,

    /// Field separator
    #[arg(long, value_enum, default_value_t = DelimiterArg::Auto,
        long_help = "Field separator.\n\
            auto: sniff the header line (comma, then tab, then space)\n\
            whitespace: runs of spaces/tabs count as one separator")]
    pub delimiter: DelimiterArg,

    /// Significance column on the y axis [default: follows --policy]
    #[arg(long, value_enum)]
    pub y_axis: Option<AxisArg>,

    /// Value substituted for significance values <= 0 before -log10
    #[arg(long, value_name = "VALUE",
        long_help = "Value substituted for significance values <= 0 before -log10.\n\
            Defaults to the smallest positive value in the plotted column.")]
    pub floor: Option<f64>,

    /// Identifier column
    #[arg(long, default_value = "isoform_name")]
    pub id_column: String,

    /// Fold-change column
    #[arg(long, default_value = "logFC")]
    pub fc_column: String,

    /// P-value column
    #[arg(long, default_value = "P.Value")]
    pub pvalue_column: String,

    /// FDR column
    #[arg(long, default_value = "FDR")]
    pub fdr_column: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    FdrGated,
    PvalueOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    Auto,
    Comma,
    Tab,
    Whitespace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Fdr,
    Pvalue,
}

impl From<PolicyArg> for ClassificationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FdrGated => ClassificationPolicy::FdrGated,
            PolicyArg::PvalueOnly => ClassificationPolicy::PValueOnly,
        }
    }
}

impl From<DelimiterArg> for DelimiterChoice {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Auto => DelimiterChoice::Auto,
            DelimiterArg::Comma => DelimiterChoice::Fixed(Delimiter::Comma),
            DelimiterArg::Tab => DelimiterChoice::Fixed(Delimiter::Tab),
            DelimiterArg::Whitespace => DelimiterChoice::Fixed(Delimiter::Whitespace),
        }
    }
}

impl From<AxisArg> for SignificanceAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Fdr => SignificanceAxis::Fdr,
            AxisArg::Pvalue => SignificanceAxis::PValue,
        }
    }
}

impl Cli {
    /// Build the run configuration for `input`
    pub fn report_config(&self, input: PathBuf) -> ReportConfig {
        let mut config = ReportConfig::new(input, OutputPaths::new(&self.output, &self.prefix));
        config.delimiter = self.delimiter.into();
        config.columns = ColumnNames {
            log_fc: self.fc_column.clone(),
            pvalue: self.pvalue_column.clone(),
            fdr: self.fdr_column.clone(),
            isoform: self.id_column.clone(),
        };
        config.classifier = ClassifierConfig {
            policy: self.policy.into(),
            fold_change_threshold: self.threshold,
            fdr_ceiling: self.fdr_ceiling,
        };
        config.axis = self.y_axis.map(Into::into);
        config.floor = self.floor;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rust_volcano", "-f", "de.csv"]).unwrap();
        assert_eq!(cli.threshold, 7.0);
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.prefix, "");

        let config = cli.report_config(PathBuf::from("de.csv"));
        assert_eq!(config.classifier, ClassifierConfig::default());
        assert_eq!(config.delimiter, DelimiterChoice::Auto);
        assert_eq!(config.columns, ColumnNames::default());
        assert_eq!(config.output.bed(), PathBuf::from(".").join("csv_to_bed.bed"));
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "rust_volcano",
            "--file_path",
            "de.txt",
            "-t",
            "2.5",
            "-o",
            "out",
            "-p",
            "a_",
            "--policy",
            "pvalue-only",
            "--delimiter",
            "whitespace",
            "--y-axis",
            "fdr",
            "--floor",
            "1e-12",
            "--id-column",
            "gene",
        ])
        .unwrap();

        let config = cli.report_config(cli.file_path.clone().unwrap());
        assert_eq!(config.classifier.policy, ClassificationPolicy::PValueOnly);
        assert_eq!(config.classifier.fold_change_threshold, 2.5);
        assert_eq!(config.delimiter, DelimiterChoice::Fixed(Delimiter::Whitespace));
        assert_eq!(config.axis(), SignificanceAxis::Fdr);
        assert_eq!(config.floor, Some(1e-12));
        assert_eq!(config.columns.isoform, "gene");
        assert_eq!(config.output.plot(), PathBuf::from("out").join("a_volcano_grouped.png"));
    }

    #[test]
    fn test_file_path_optional_at_parse() {
        let cli = Cli::try_parse_from(["rust_volcano"]).unwrap();
        assert!(cli.file_path.is_none());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["rust_volcano", "--policy", "magic"]).is_err());
    }
}
