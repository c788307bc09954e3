//! Differential-expression results table

use crate::error::{Result, VolcanoError};

/// Header names of the columns the report reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    /// Signed log fold change
    pub log_fc: String,
    /// Raw p-value
    pub pvalue: String,
    /// Multiple-testing adjusted p-value
    pub fdr: String,
    /// Identifier written to the isoform list
    pub isoform: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            log_fc: "logFC".to_string(),
            pvalue: "P.Value".to_string(),
            fdr: "FDR".to_string(),
            isoform: "isoform_name".to_string(),
        }
    }
}

/// Per-isoform statistics loaded from the input file.
///
/// Stored column-wise; every vector has one entry per row. Missing numeric
/// cells are `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeTable {
    /// Isoform identifiers
    pub isoform_names: Vec<String>,
    /// Log fold changes
    pub log_fold_changes: Vec<f64>,
    /// Raw p-values
    pub pvalues: Vec<f64>,
    /// FDR values, absent when the file has no FDR column and none was required
    pub fdr: Option<Vec<f64>>,
}

impl DeTable {
    /// Create a table, checking that all columns have the same length
    pub fn new(
        isoform_names: Vec<String>,
        log_fold_changes: Vec<f64>,
        pvalues: Vec<f64>,
        fdr: Option<Vec<f64>>,
    ) -> Result<Self> {
        let n = isoform_names.len();
        let lengths = [
            ("log fold changes", Some(log_fold_changes.len())),
            ("p-values", Some(pvalues.len())),
            ("FDR values", fdr.as_ref().map(|v| v.len())),
        ];
        for (what, len) in lengths {
            if let Some(len) = len {
                if len != n {
                    return Err(VolcanoError::DimensionMismatch {
                        expected: format!("{} {}", n, what),
                        got: format!("{} {}", len, what),
                    });
                }
            }
        }

        Ok(Self {
            isoform_names,
            log_fold_changes,
            pvalues,
            fdr,
        })
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.isoform_names.len()
    }

    /// True when the file had a header but no data rows
    pub fn is_empty(&self) -> bool {
        self.isoform_names.is_empty()
    }

    /// FDR column, if loaded
    pub fn fdr(&self) -> Option<&[f64]> {
        self.fdr.as_deref()
    }

    /// FDR of row `i`, `None` when the table carries no FDR column
    pub fn fdr_at(&self, i: usize) -> Option<f64> {
        self.fdr.as_ref().and_then(|v| v.get(i).copied())
    }
}
