//! Parses the pathway list

use std::io::BufRead;
use std::path::Path;

use crate::parser::{open, parse_table};
use crate::{DegpathResult, Pathway};

/// Reads the pathway list from a tab-separated file
///
/// # Examples
///
/// ```
/// use degpath::parser::read_pathways;
///
/// let pathways = read_pathways("tests/data/pathways.tsv").unwrap();
///
/// assert_eq!(pathways.len(), 4);
/// assert_eq!(pathways[0].id(), "hsa04110");
/// assert_eq!(pathways[0].description(), "Cell cycle");
/// ```
///
/// # Errors
///
/// - [`DegpathError::Io`] if the file cannot be read
/// - [`DegpathError::MalformedRow`] if a row has fewer than 2 columns
///
/// [`DegpathError::Io`]: crate::DegpathError::Io
/// [`DegpathError::MalformedRow`]: crate::DegpathError::MalformedRow
pub fn read_pathways<P: AsRef<Path>>(path: P) -> DegpathResult<Vec<Pathway>> {
    read_pathways_from(open(path.as_ref())?)
}

/// Reads the pathway list from any buffered reader
pub fn read_pathways_from<R: BufRead>(reader: R) -> DegpathResult<Vec<Pathway>> {
    parse_table(reader, "pathway", 2, |fields, _| {
        Ok(Pathway::new(fields[0], fields[1]))
    })
}
