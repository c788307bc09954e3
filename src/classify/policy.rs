//! Per-row classification rules

use std::fmt;

use crate::error::{Result, VolcanoError};

/// Default fold-change magnitude a row must exceed
pub const DEFAULT_FC_THRESHOLD: f64 = 7.0;
/// Default FDR ceiling of the FDR-gated policy
pub const DEFAULT_FDR_CEILING: f64 = 0.3;

/// Regulation category of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Up,
    Down,
    NonSignificant,
}

impl Category {
    /// Plot order: blue, gray, red
    pub const PLOT_ORDER: [Category; 3] = [Category::Down, Category::NonSignificant, Category::Up];

    /// Legend label
    pub fn label(self) -> &'static str {
        match self {
            Category::Up => "Positive FC",
            Category::Down => "Negative FC",
            Category::NonSignificant => "Non-Significant",
        }
    }

    /// Color name used for the scatter series
    pub fn color_name(self) -> &'static str {
        match self {
            Category::Up => "red",
            Category::Down => "blue",
            Category::NonSignificant => "gray",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which rule set decides significance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassificationPolicy {
    /// Rows above the FDR ceiling are never significant
    #[default]
    FdrGated,
    /// Fold change alone decides; no significance gate
    PValueOnly,
}

impl ClassificationPolicy {
    pub fn uses_fdr(self) -> bool {
        matches!(self, ClassificationPolicy::FdrGated)
    }
}

impl fmt::Display for ClassificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationPolicy::FdrGated => f.write_str("fdr-gated"),
            ClassificationPolicy::PValueOnly => f.write_str("pvalue-only"),
        }
    }
}

/// Run-wide classification parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    pub policy: ClassificationPolicy,
    /// Fold-change magnitude; comparisons are strict
    pub fold_change_threshold: f64,
    /// Highest FDR still considered significant (FDR-gated only)
    pub fdr_ceiling: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            policy: ClassificationPolicy::default(),
            fold_change_threshold: DEFAULT_FC_THRESHOLD,
            fdr_ceiling: DEFAULT_FDR_CEILING,
        }
    }
}

impl ClassifierConfig {
    pub fn new(policy: ClassificationPolicy, fold_change_threshold: f64) -> Self {
        Self {
            policy,
            fold_change_threshold,
            ..Self::default()
        }
    }

    /// Reject thresholds that make the comparisons meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.fold_change_threshold.is_finite() || self.fold_change_threshold < 0.0 {
            return Err(VolcanoError::InvalidInput {
                reason: format!(
                    "Fold-change threshold must be a non-negative number, got {}",
                    self.fold_change_threshold
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.fdr_ceiling) {
            return Err(VolcanoError::InvalidInput {
                reason: format!("FDR ceiling must be within [0, 1], got {}", self.fdr_ceiling),
            });
        }
        Ok(())
    }
}

/// Passes the FDR gate. Missing FDR never passes.
fn passes_fdr_gate(fdr: Option<f64>, ceiling: f64) -> bool {
    matches!(fdr, Some(q) if q <= ceiling)
}

/// Classify a single row
pub fn classify_row(log_fc: f64, fdr: Option<f64>, config: &ClassifierConfig) -> Category {
    if config.policy.uses_fdr() && !passes_fdr_gate(fdr, config.fdr_ceiling) {
        return Category::NonSignificant;
    }

    let t = config.fold_change_threshold;
    if log_fc > t {
        Category::Up
    } else if log_fc < -t {
        Category::Down
    } else {
        // NaN lands here too
        Category::NonSignificant
    }
}

/// Export predicate: `|logFC| > threshold`, plus `FDR <= ceiling` when gated
pub fn is_significant(log_fc: f64, fdr: Option<f64>, config: &ClassifierConfig) -> bool {
    let magnitude = log_fc.abs() > config.fold_change_threshold;
    match config.policy {
        ClassificationPolicy::FdrGated => magnitude && passes_fdr_gate(fdr, config.fdr_ceiling),
        ClassificationPolicy::PValueOnly => magnitude,
    }
}
