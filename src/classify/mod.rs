//! Significance classification of differential-expression rows

mod policy;
mod summary;

pub use policy::{
    classify_row, is_significant, Category, ClassificationPolicy, ClassifierConfig,
    DEFAULT_FC_THRESHOLD, DEFAULT_FDR_CEILING,
};
pub use summary::ClassificationSummary;

use crate::error::{Result, VolcanoError};
use crate::io::DeTable;

/// FDR-gated classification needs an FDR column
fn check_fdr(table: &DeTable, config: &ClassifierConfig) -> Result<()> {
    if config.policy.uses_fdr() && table.fdr().is_none() {
        return Err(VolcanoError::MissingColumn {
            column: "FDR".to_string(),
            available: "table loaded without an FDR column".to_string(),
        });
    }
    Ok(())
}

/// Classify every row of the table, in row order
pub fn classify(table: &DeTable, config: &ClassifierConfig) -> Result<Vec<Category>> {
    check_fdr(table, config)?;

    Ok(table
        .log_fold_changes
        .iter()
        .enumerate()
        .map(|(i, &lfc)| classify_row(lfc, table.fdr_at(i), config))
        .collect())
}

/// Indices of rows passing the export predicate, in row order
pub fn significant_indices(table: &DeTable, config: &ClassifierConfig) -> Result<Vec<usize>> {
    check_fdr(table, config)?;

    Ok(table
        .log_fold_changes
        .iter()
        .enumerate()
        .filter(|&(i, &lfc)| is_significant(lfc, table.fdr_at(i), config))
        .map(|(i, _)| i)
        .collect())
}
