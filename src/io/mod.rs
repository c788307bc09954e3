//! Input/Output operations for volcano reports

mod bed;
mod csv;
mod delimiter;
mod results;

pub use self::csv::read_de_table;
pub use bed::{write_isoform_list, OutputPaths, BED_SUFFIX, PLOT_SUFFIX};
pub use delimiter::{sniff_delimiter, Delimiter, DelimiterChoice};
pub use results::{ColumnNames, DeTable};
