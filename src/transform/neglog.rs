//! Negative log10 transform with a floor for non-positive values

use std::fmt;

use crate::classify::ClassificationPolicy;
use crate::error::{Result, VolcanoError};
use crate::io::DeTable;

/// Significance column on the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceAxis {
    Fdr,
    PValue,
}

impl SignificanceAxis {
    /// FDR-gated runs plot FDR, p-value-only runs plot the raw p-value
    pub fn for_policy(policy: ClassificationPolicy) -> Self {
        match policy {
            ClassificationPolicy::FdrGated => SignificanceAxis::Fdr,
            ClassificationPolicy::PValueOnly => SignificanceAxis::PValue,
        }
    }

    /// Y axis label
    pub fn label(self) -> &'static str {
        match self {
            SignificanceAxis::Fdr => "-log10 FDR",
            SignificanceAxis::PValue => "-log10(P.Value)",
        }
    }

    /// Column of `table` this axis reads
    pub fn values(self, table: &DeTable) -> Result<&[f64]> {
        match self {
            SignificanceAxis::PValue => Ok(&table.pvalues),
            SignificanceAxis::Fdr => table.fdr().ok_or_else(|| VolcanoError::MissingColumn {
                column: "FDR".to_string(),
                available: "table loaded without an FDR column".to_string(),
            }),
        }
    }

    pub fn requires_fdr(self) -> bool {
        matches!(self, SignificanceAxis::Fdr)
    }
}

impl fmt::Display for SignificanceAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignificanceAxis::Fdr => f.write_str("fdr"),
            SignificanceAxis::PValue => f.write_str("pvalue"),
        }
    }
}

/// Transformed column plus how the log-of-zero guard was applied
#[derive(Debug, Clone, PartialEq)]
pub struct NegLog10 {
    /// `-log10(max(v, floor))` per row; NaN stays NaN
    pub values: Vec<f64>,
    /// Value substituted for non-positive inputs
    pub floor: f64,
    /// Number of non-positive inputs replaced by `floor`
    pub substituted: usize,
}

/// Apply `-log10` to a significance column.
///
/// Values `<= 0` are replaced by `floor` before the transform. Without an
/// explicit floor the smallest positive finite value in `values` is used,
/// or `f64::MIN_POSITIVE` if there is none.
pub fn neg_log10(values: &[f64], floor: Option<f64>) -> Result<NegLog10> {
    let floor = match floor {
        Some(f) if f.is_finite() && f > 0.0 => f,
        Some(f) => {
            return Err(VolcanoError::InvalidInput {
                reason: format!("Significance floor must be a positive number, got {}", f),
            })
        }
        None => values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))
            .unwrap_or(f64::MIN_POSITIVE),
    };

    let mut substituted = 0;
    let transformed = values
        .iter()
        .map(|&v| {
            if v.is_nan() {
                f64::NAN
            } else if v <= 0.0 {
                substituted += 1;
                -floor.log10()
            } else {
                -v.log10()
            }
        })
        .collect();

    if substituted > 0 {
        log::warn!(
            "{} non-positive significance values floored to {:e} before -log10",
            substituted,
            floor
        );
    }

    Ok(NegLog10 {
        values: transformed,
        floor,
        substituted,
    })
}
