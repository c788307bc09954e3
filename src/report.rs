//! End-to-end report: load, classify, export, plot

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::classify::{classify, significant_indices, ClassificationSummary, ClassifierConfig};
use crate::error::{Result, VolcanoError};
use crate::io::{
    read_de_table, sniff_delimiter, write_isoform_list, ColumnNames, Delimiter, DelimiterChoice,
    OutputPaths,
};
use crate::plot::{group_points, plot_volcano, PlotConfig};
use crate::transform::{neg_log10, SignificanceAxis};

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Input table
    pub input: PathBuf,
    pub delimiter: DelimiterChoice,
    pub columns: ColumnNames,
    pub classifier: ClassifierConfig,
    /// Plotted significance column; `None` follows the policy
    pub axis: Option<SignificanceAxis>,
    /// Substitute for non-positive significance values; `None` picks the
    /// smallest positive value in the column
    pub floor: Option<f64>,
    pub output: OutputPaths,
    pub plot: PlotConfig,
}

impl ReportConfig {
    /// Defaults: auto-detected delimiter, FDR-gated at |logFC| > 7
    pub fn new<P: Into<PathBuf>>(input: P, output: OutputPaths) -> Self {
        Self {
            input: input.into(),
            delimiter: DelimiterChoice::Auto,
            columns: ColumnNames::default(),
            classifier: ClassifierConfig::default(),
            axis: None,
            floor: None,
            output,
            plot: PlotConfig::default(),
        }
    }

    pub fn axis(&self) -> SignificanceAxis {
        self.axis
            .unwrap_or_else(|| SignificanceAxis::for_policy(self.classifier.policy))
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub summary: ClassificationSummary,
    pub delimiter: Delimiter,
    pub bed_path: PathBuf,
    pub plot_path: PathBuf,
    /// Scatter series in the plot, one per non-empty category
    pub series_drawn: usize,
    /// Significance values replaced by the log floor
    pub floored: usize,
}

/// Pick the field separator, sniffing the header when asked to
pub fn resolve_delimiter(path: &Path, choice: DelimiterChoice) -> Result<Delimiter> {
    match choice {
        DelimiterChoice::Fixed(d) => Ok(d),
        DelimiterChoice::Auto => {
            sniff_delimiter(path)?.ok_or_else(|| VolcanoError::UndetectableDelimiter {
                path: path.display().to_string(),
            })
        }
    }
}

/// Run the whole report.
///
/// All inputs are validated and the plot data prepared before anything is
/// written. The plot is rendered first; the isoform list is only written
/// once the plot succeeded, and the plot is removed if that write fails.
pub fn run_report(config: &ReportConfig) -> Result<ReportOutcome> {
    config.classifier.validate()?;

    if !config.input.is_file() {
        return Err(VolcanoError::InvalidInput {
            reason: format!("File '{}' does not exist", config.input.display()),
        });
    }

    let delimiter = resolve_delimiter(&config.input, config.delimiter)?;
    info!("Using {} delimiter", delimiter.name());

    let axis = config.axis();
    let require_fdr = config.classifier.policy.uses_fdr() || axis.requires_fdr();

    info!("Loading table from: {}", config.input.display());
    let table = read_de_table(&config.input, delimiter, &config.columns, require_fdr)?;
    info!("  {} rows", table.n_rows());
    if table.is_empty() {
        warn!("Input table has no data rows");
    }

    info!(
        "Classifying with policy {} (|logFC| > {})",
        config.classifier.policy, config.classifier.fold_change_threshold
    );
    let categories = classify(&table, &config.classifier)?;
    let significant = significant_indices(&table, &config.classifier)?;

    let neg_log = neg_log10(axis.values(&table)?, config.floor)?;
    let groups = group_points(&table.log_fold_changes, &neg_log.values, &categories)?;

    std::fs::create_dir_all(&config.output.dir)?;

    let plot_path = config.output.plot();
    let plot_config = PlotConfig {
        y_label: axis.label().to_string(),
        ..config.plot.clone()
    };
    info!("Drawing volcano plot to: {}", plot_path.display());
    let series_drawn = plot_volcano(&plot_path, &groups, &plot_config)?;

    let bed_path = config.output.bed();
    let ids: Vec<&str> = significant
        .iter()
        .map(|&i| {
            debug!(
                "{}\tlogFC={}\tP.Value={}\tFDR={}",
                table.isoform_names[i],
                table.log_fold_changes[i],
                table.pvalues[i],
                table.fdr_at(i).unwrap_or(f64::NAN)
            );
            table.isoform_names[i].as_str()
        })
        .collect();
    info!("Writing {} isoforms to: {}", ids.len(), bed_path.display());
    if let Err(e) = write_isoform_list(&bed_path, &ids) {
        // Both artifacts or neither
        if let Err(rm) = std::fs::remove_file(&plot_path) {
            warn!("Could not remove {}: {}", plot_path.display(), rm);
        }
        return Err(e);
    }

    Ok(ReportOutcome {
        summary: ClassificationSummary::new(&categories, ids.len(), config.classifier),
        delimiter,
        bed_path,
        plot_path,
        series_drawn,
        floored: neg_log.substituted,
    })
}
