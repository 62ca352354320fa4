//! Parsers for the three tab-separated input tables
//!
//! All tables share the same shape: one record per line, fields split by
//! tabs and trimmed, blank lines and lines starting with `#` skipped.
//! They differ only in their columns:
//!
//! | Table | Columns |
//! | --- | --- |
//! | DEG table | gene symbol, log2 fold change, adjusted p-value |
//! | pathway list | pathway ID, description |
//! | association table | pathway ID, Entrez gene ID, gene symbol, Ensembl gene ID |
//!
//! Extra columns are ignored, missing columns abort the parse with a
//! [`DegpathError::MalformedRow`] naming the line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{DegpathError, DegpathResult};

mod deg;
mod pathway;
mod pathway_gene;

pub use deg::{read_degs, read_degs_from};
pub use pathway::{read_pathways, read_pathways_from};
pub use pathway_gene::{read_pathway_genes, read_pathway_genes_from};

fn open(path: &Path) -> DegpathResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

/// Walks a table line by line and hands every data row to `parse_row`
///
/// Fields are already split and trimmed when the callback runs. The
/// line number is 1-based and counts every line of the file, comments
/// and blanks included.
fn parse_table<R, T, F>(
    reader: R,
    table: &'static str,
    columns: usize,
    mut parse_row: F,
) -> DegpathResult<Vec<T>>
where
    R: BufRead,
    F: FnMut(&[&str], usize) -> DegpathResult<T>,
{
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split('\t').map(str::trim).collect();
        if fields.len() < columns {
            return Err(DegpathError::MalformedRow {
                table,
                line: line_number,
                expected: columns,
                found: fields.len(),
            });
        }

        rows.push(parse_row(&fields, line_number)?);
    }
    Ok(rows)
}

/// Parses one float field, naming the column and line on failure
fn parse_f64(value: &str, field: &'static str, line: usize) -> DegpathResult<f64> {
    value
        .parse::<f64>()
        .map_err(|_| DegpathError::MalformedField {
            field,
            line,
            value: value.to_string(),
        })
}
