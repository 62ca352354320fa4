//! Parses the pathway-gene association table

use std::convert::TryFrom;
use std::io::BufRead;
use std::path::Path;

use crate::parser::{open, parse_table};
use crate::{DegpathError, DegpathResult, GeneId, PathwayGene};

/// Reads the pathway-gene association table from a tab-separated file
///
/// # Examples
///
/// ```
/// use degpath::parser::read_pathway_genes;
///
/// let associations = read_pathway_genes("tests/data/pathway_genes.tsv").unwrap();
///
/// assert_eq!(associations.len(), 12);
/// assert_eq!(associations[0].pathway_id(), "hsa04110");
/// assert_eq!(associations[0].symbol(), "TP53");
/// ```
///
/// # Errors
///
/// - [`DegpathError::Io`] if the file cannot be read
/// - [`DegpathError::MalformedRow`] if a row has fewer than 4 columns
/// - [`DegpathError::MalformedField`] if the Entrez gene ID does not parse
///
/// [`DegpathError::Io`]: crate::DegpathError::Io
/// [`DegpathError::MalformedRow`]: crate::DegpathError::MalformedRow
/// [`DegpathError::MalformedField`]: crate::DegpathError::MalformedField
pub fn read_pathway_genes<P: AsRef<Path>>(path: P) -> DegpathResult<Vec<PathwayGene>> {
    read_pathway_genes_from(open(path.as_ref())?)
}

/// Reads the pathway-gene association table from any buffered reader
pub fn read_pathway_genes_from<R: BufRead>(reader: R) -> DegpathResult<Vec<PathwayGene>> {
    parse_table(reader, "pathway-gene", 4, |fields, line| {
        let entrez_id =
            GeneId::try_from(fields[1]).map_err(|_| DegpathError::MalformedField {
                field: "Entrez gene ID",
                line,
                value: fields[1].to_string(),
            })?;
        Ok(PathwayGene::new(fields[0], entrez_id, fields[2], fields[3]))
    })
}
