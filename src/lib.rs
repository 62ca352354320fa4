//! `degpath` identifies biological pathways that are over-represented among
//! differentially expressed genes (DEGs).
//!
//! The crate works on the three tables produced by a typical differential
//! expression workflow:
//!
//! - the **DEG table**: gene symbol, log2 fold change, adjusted p-value
//! - the **pathway list**: pathway ID and description
//! - the **association table**: one row per (pathway, gene) membership
//!
//! From these it derives three independent statistics:
//!
//! - [`stats::pathway_enrichment`]: observed vs expected DEG counts per
//!   pathway with an upper-tail hypergeometric p-value and multiple-testing
//!   correction
//! - [`stats::contingency_table`]: a 2x2 cross-tabulation of DEG significance
//!   against pathway membership
//! - [`stats::FoldChangeShares`]: the share of total differential expression
//!   that each pathway carries, as percentages
//!
//! # Examples
//!
//! ```
//! use degpath::{Deg, Pathway, PathwayGene};
//! use degpath::stats::{pathway_enrichment, EnrichmentConfig};
//!
//! let degs = vec![
//!     Deg::new("TP53", -2.1, 0.001),
//!     Deg::new("EGFR", 1.7, 0.004),
//! ];
//! let pathways = vec![Pathway::new("hsa04115", "p53 signaling pathway")];
//! let associations = vec![
//!     PathwayGene::new("hsa04115", 7157.into(), "TP53", "ENSG00000141510"),
//!     PathwayGene::new("hsa04115", 1026.into(), "CDKN1A", "ENSG00000124762"),
//! ];
//!
//! let results = pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].observed(), 1);
//! ```
//!
//! Input tables are plain tab-separated files and can be loaded through the
//! [`parser`] module. The [`report`] module writes enrichment results back
//! out as a delimited summary.

use std::num::ParseIntError;
use thiserror::Error;

pub mod index;
pub mod parser;
pub mod report;
pub mod stats;
mod deg;
mod pathway;

pub use deg::Deg;
pub use index::DatasetIndex;
pub use pathway::{GeneId, Pathway, PathwayGene};

/// Error variants of all fallible operations in this crate
#[derive(Error, Debug)]
pub enum DegpathError {
    /// A required input collection contained no elements
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
    /// A pathway ID was requested that has no association rows
    #[error("unknown pathway id: {0}")]
    UnknownPathway(String),
    /// An argument was outside its valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A data row did not have enough columns
    #[error("malformed {table} row in line {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        /// Which input table the row belongs to
        table: &'static str,
        /// 1-based line number within the file
        line: usize,
        /// Minimum number of columns the table requires
        expected: usize,
        /// Number of columns actually present
        found: usize,
    },
    /// A field could not be parsed into its numeric type
    #[error("unable to parse {field} in line {line}: \"{value}\"")]
    MalformedField {
        /// Name of the offending column
        field: &'static str,
        /// 1-based line number within the file
        line: usize,
        /// The raw field content
        value: String,
    },
    /// A value could not be parsed into an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseIntError> for DegpathError {
    fn from(_: ParseIntError) -> Self {
        DegpathError::ParseIntError
    }
}

/// Crate-wide `Result` alias
pub type DegpathResult<T> = Result<T, DegpathError>;
