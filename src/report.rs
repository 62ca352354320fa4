//! Writing enrichment results as a delimited summary
//!
//! The summary is a tab-separated table with one line per pathway,
//! preceded by a header line. It is meant for downstream spreadsheet or
//! notebook consumption, not for re-parsing by this crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::stats::EnrichmentResult;
use crate::DegpathResult;

const HEADER: &str = "pathway\tobserved\texpected\tenrichment_score\tp_value\tadjusted_p_value";

/// Writes the enrichment summary to the given sink
///
/// # Examples
///
/// ```
/// use degpath::{Deg, Pathway, PathwayGene};
/// use degpath::report::write_enrichment;
/// use degpath::stats::{pathway_enrichment, EnrichmentConfig};
///
/// let degs = vec![Deg::new("TP53", -2.1, 0.001)];
/// let pathways = vec![Pathway::new("hsa04115", "p53 signaling pathway")];
/// let associations = vec![
///     PathwayGene::new("hsa04115", 7157.into(), "TP53", "ENSG00000141510"),
/// ];
/// let results = pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());
///
/// let mut summary = Vec::new();
/// write_enrichment(&mut summary, &results).unwrap();
///
/// let summary = String::from_utf8(summary).unwrap();
/// assert!(summary.starts_with("pathway\tobserved"));
/// assert!(summary.contains("hsa04115\t1\t"));
/// ```
///
/// # Errors
///
/// Returns [`DegpathError::Io`](crate::DegpathError::Io) if the sink
/// rejects a write
pub fn write_enrichment<W: Write>(sink: &mut W, results: &[EnrichmentResult]) -> DegpathResult<()> {
    writeln!(sink, "{HEADER}")?;
    for result in results {
        writeln!(
            sink,
            "{}\t{}\t{}\t{}\t{}\t{}",
            result.pathway_id(),
            result.observed(),
            result.expected(),
            result.enrichment_score(),
            result.p_value(),
            result.adjusted_p_value()
        )?;
    }
    Ok(())
}

/// Writes the enrichment summary to a file, replacing existing content
///
/// # Errors
///
/// Returns [`DegpathError::Io`](crate::DegpathError::Io) if the file
/// cannot be created or written
pub fn write_enrichment_file<P: AsRef<Path>>(
    path: P,
    results: &[EnrichmentResult],
) -> DegpathResult<()> {
    let mut sink = BufWriter::new(File::create(path)?);
    write_enrichment(&mut sink, results)?;
    sink.flush()?;
    Ok(())
}
