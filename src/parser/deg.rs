//! Parses the DEG table

use std::io::BufRead;
use std::path::Path;

use crate::parser::{open, parse_f64, parse_table};
use crate::{Deg, DegpathResult};

/// Reads the DEG table from a tab-separated file
///
/// # Examples
///
/// ```
/// use degpath::parser::read_degs;
///
/// let degs = read_degs("tests/data/degs.tsv").unwrap();
///
/// assert_eq!(degs.len(), 8);
/// assert_eq!(degs[0].symbol(), "CFTR");
/// ```
///
/// # Errors
///
/// - [`DegpathError::Io`] if the file cannot be read
/// - [`DegpathError::MalformedRow`] if a row has fewer than 3 columns
/// - [`DegpathError::MalformedField`] if a numeric field does not parse
///
/// [`DegpathError::Io`]: crate::DegpathError::Io
/// [`DegpathError::MalformedRow`]: crate::DegpathError::MalformedRow
/// [`DegpathError::MalformedField`]: crate::DegpathError::MalformedField
pub fn read_degs<P: AsRef<Path>>(path: P) -> DegpathResult<Vec<Deg>> {
    read_degs_from(open(path.as_ref())?)
}

/// Reads the DEG table from any buffered reader
pub fn read_degs_from<R: BufRead>(reader: R) -> DegpathResult<Vec<Deg>> {
    parse_table(reader, "DEG", 3, |fields, line| {
        let log_fold_change = parse_f64(fields[1], "log fold change", line)?;
        let adjusted_p_value = parse_f64(fields[2], "adjusted p-value", line)?;
        Ok(Deg::new(fields[0], log_fold_change, adjusted_p_value))
    })
}
