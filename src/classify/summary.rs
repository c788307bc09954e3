//! Run summary of a classification

use std::fmt;

use super::{Category, ClassifierConfig};

/// Row counts per category plus the number of exported isoforms
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationSummary {
    pub total_rows: usize,
    pub upregulated: usize,
    pub downregulated: usize,
    pub non_significant: usize,
    pub exported: usize,
    pub config: ClassifierConfig,
}

impl ClassificationSummary {
    pub fn new(categories: &[Category], exported: usize, config: ClassifierConfig) -> Self {
        let count = |c: Category| categories.iter().filter(|&&x| x == c).count();
        Self {
            total_rows: categories.len(),
            upregulated: count(Category::Up),
            downregulated: count(Category::Down),
            non_significant: count(Category::NonSignificant),
            exported,
            config,
        }
    }
}

impl fmt::Display for ClassificationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Volcano Report Summary")?;
        writeln!(f, "======================")?;
        writeln!(f, "Policy: {}", self.config.policy)?;
        write!(f, "Threshold: |logFC| > {}", self.config.fold_change_threshold)?;
        if self.config.policy.uses_fdr() {
            write!(f, ", FDR <= {}", self.config.fdr_ceiling)?;
        }
        writeln!(f)?;
        writeln!(f, "Total rows: {}", self.total_rows)?;
        writeln!(f, "  Positive FC: {}", self.upregulated)?;
        writeln!(f, "  Negative FC: {}", self.downregulated)?;
        writeln!(f, "  Non-Significant: {}", self.non_significant)?;
        writeln!(f, "Number of extracted isoforms: {}", self.exported)?;
        Ok(())
    }
}
