//! Field separator detection from the header line

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Field separator of an input table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
    /// Runs of spaces and tabs, collapsed into one separator
    Whitespace,
}

impl Delimiter {
    /// Character the sniffer looks for in the header line
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Whitespace => ' ',
        }
    }

    /// Name used in log messages
    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Whitespace => "whitespace",
        }
    }
}

/// How the loader picks the separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterChoice {
    /// Sniff the header line
    #[default]
    Auto,
    Fixed(Delimiter),
}

/// Guess the delimiter from the first line of `path`.
///
/// Only the header line is read. Comma wins over tab, tab wins over space.
/// Returns `Ok(None)` when the line contains none of the three.
pub fn sniff_delimiter<P: AsRef<Path>>(path: P) -> std::io::Result<Option<Delimiter>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = String::new();
    reader.read_line(&mut header)?;

    Ok(detect_in_line(&header))
}

fn detect_in_line(line: &str) -> Option<Delimiter> {
    if line.contains(',') {
        Some(Delimiter::Comma)
    } else if line.contains('\t') {
        Some(Delimiter::Tab)
    } else if line.contains(' ') {
        Some(Delimiter::Whitespace)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sniff(content: &str) -> Option<Delimiter> {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        sniff_delimiter(file.path()).unwrap()
    }

    #[test]
    fn test_sniff_single_delimiters() {
        assert_eq!(sniff("logFC,P.Value,FDR\n1,2,3\n"), Some(Delimiter::Comma));
        assert_eq!(sniff("logFC\tP.Value\tFDR\n1\t2\t3\n"), Some(Delimiter::Tab));
        assert_eq!(sniff("logFC P.Value FDR\n1 2 3\n"), Some(Delimiter::Whitespace));
    }

    #[test]
    fn test_sniff_priority() {
        // Comma beats tab and space, tab beats space
        assert_eq!(sniff("a b\tc,d\n"), Some(Delimiter::Comma));
        assert_eq!(sniff("a b\tc\n"), Some(Delimiter::Tab));
    }

    #[test]
    fn test_sniff_none() {
        assert_eq!(sniff("logFC\n1\n"), None);
        assert_eq!(sniff(""), None);
    }

    #[test]
    fn test_sniff_reads_only_header() {
        // Delimiters below the header are ignored
        assert_eq!(sniff("logFC\n1,2\n3\t4\n"), None);
    }

    #[test]
    fn test_sniff_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = sniff_delimiter(dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
