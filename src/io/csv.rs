//! Loading of delimited differential-expression tables

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::delimiter::Delimiter;
use super::results::{ColumnNames, DeTable};
use crate::error::{Result, VolcanoError};

/// Header fields plus data rows tagged with their 1-based line number
type RawTable = (Vec<String>, Vec<(u64, Vec<String>)>);

/// Strip surrounding quotes from a string
fn strip_quotes(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Read a differential-expression table
///
/// Columns are looked up by header name. The FDR column is only mandatory
/// when `require_fdr` is set; otherwise it is loaded if present.
/// Whitespace-delimited files treat any run of spaces/tabs as one separator.
/// Rows with one field more than the header (R `write.table` output) have
/// their leading row label dropped.
pub fn read_de_table<P: AsRef<Path>>(
    path: P,
    delimiter: Delimiter,
    columns: &ColumnNames,
    require_fdr: bool,
) -> Result<DeTable> {
    let path = path.as_ref();
    let (header, rows) = match delimiter {
        Delimiter::Whitespace => read_whitespace_records(path)?,
        Delimiter::Comma | Delimiter::Tab => read_delimited_records(path, delimiter.as_char() as u8)?,
    };

    if header.is_empty() {
        return Err(VolcanoError::EmptyData {
            reason: format!("No header line in {}", path.display()),
        });
    }

    let id_idx = column_index(&header, &columns.isoform)?;
    let fc_idx = column_index(&header, &columns.log_fc)?;
    let p_idx = column_index(&header, &columns.pvalue)?;
    let fdr_idx = if require_fdr {
        Some(column_index(&header, &columns.fdr)?)
    } else {
        header.iter().position(|h| h == &columns.fdr)
    };

    let mut isoform_names = Vec::with_capacity(rows.len());
    let mut log_fold_changes = Vec::with_capacity(rows.len());
    let mut pvalues = Vec::with_capacity(rows.len());
    let mut fdr = fdr_idx.map(|_| Vec::with_capacity(rows.len()));

    for (line, fields) in rows {
        let fields: &[String] = if fields.len() == header.len() + 1 {
            &fields[1..]
        } else if fields.len() == header.len() {
            &fields
        } else {
            return Err(VolcanoError::InvalidTable {
                reason: format!(
                    "Line {} has {} fields, expected {}",
                    line,
                    fields.len(),
                    header.len()
                ),
            });
        };

        isoform_names.push(fields[id_idx].clone());
        log_fold_changes.push(parse_value(&fields[fc_idx], &columns.log_fc, line)?);
        pvalues.push(parse_value(&fields[p_idx], &columns.pvalue, line)?);
        if let (Some(idx), Some(values)) = (fdr_idx, fdr.as_mut()) {
            values.push(parse_value(&fields[idx], &columns.fdr, line)?);
        }
    }

    log::debug!(
        "Loaded {} rows, {} columns from {}",
        isoform_names.len(),
        header.len(),
        path.display()
    );

    DeTable::new(isoform_names, log_fold_changes, pvalues, fdr)
}

fn read_delimited_records(path: &Path, delimiter: u8) -> Result<RawTable> {
    let file = File::open(path)?;
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(file);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.iter().all(|h| h.is_empty()) {
        return Ok((Vec::new(), Vec::new()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());
        rows.push((line, record.iter().map(str::to_string).collect()));
    }

    Ok((header, rows))
}

fn read_whitespace_records(path: &Path) -> Result<RawTable> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Ok((Vec::new(), Vec::new())),
    };
    let header: Vec<String> = header_line.split_whitespace().map(strip_quotes).collect();

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Header is line 1
        rows.push(((i + 2) as u64, line.split_whitespace().map(strip_quotes).collect()));
    }

    Ok((header, rows))
}

fn column_index(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| VolcanoError::MissingColumn {
            column: name.to_string(),
            available: header.join(", "),
        })
}

/// Parse a numeric cell; empty and `NA` cells are missing values
fn parse_value(raw: &str, column: &str, line: u64) -> Result<f64> {
    let val = raw.trim();
    if val.is_empty() || val == "NA" {
        return Ok(f64::NAN);
    }
    val.parse::<f64>().map_err(|_| VolcanoError::InvalidTable {
        reason: format!("Invalid {} value '{}' on line {}", column, val, line),
    })
}
