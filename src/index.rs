//! Lookup structures shared by all statistics of one dataset
//!
//! The raw input tables are plain row lists. [`DatasetIndex`] turns them
//! into the two maps every downstream computation needs: gene symbol to
//! DEG record and pathway ID to association rows. The index borrows the
//! rows instead of copying them, so it is cheap to build once per dataset
//! and hand out to each analysis.

use std::collections::HashMap;

use crate::{Deg, PathwayGene};

/// Index over the DEG table and the pathway-gene association table
///
/// # Examples
///
/// ```
/// use degpath::{DatasetIndex, Deg, PathwayGene};
///
/// let degs = vec![Deg::new("TP53", -2.1, 0.001)];
/// let associations = vec![
///     PathwayGene::new("hsa04115", 7157.into(), "TP53", "ENSG00000141510"),
///     PathwayGene::new("hsa04115", 1026.into(), "CDKN1A", "ENSG00000124762"),
/// ];
///
/// let index = DatasetIndex::new(&degs, &associations);
///
/// assert!(index.deg("TP53").is_some());
/// assert!(index.deg("CDKN1A").is_none());
/// assert_eq!(index.pathway_genes("hsa04115").len(), 2);
/// assert!(index.pathway_genes("hsa00000").is_empty());
/// ```
#[derive(Debug)]
pub struct DatasetIndex<'a> {
    /// DEG records by gene symbol. Duplicate symbols keep the last record
    gene_to_deg: HashMap<&'a str, &'a Deg>,
    /// Association rows by pathway ID, in input order
    pathway_to_genes: HashMap<&'a str, Vec<&'a PathwayGene>>,
    /// Number of rows in the DEG table, duplicates included
    deg_count: usize,
    /// Number of rows in the association table
    association_count: usize,
}

impl<'a> DatasetIndex<'a> {
    /// Builds the index for one dataset
    pub fn new(degs: &'a [Deg], pathway_genes: &'a [PathwayGene]) -> Self {
        let mut gene_to_deg = HashMap::with_capacity(degs.len());
        for deg in degs {
            gene_to_deg.insert(deg.symbol(), deg);
        }

        let mut pathway_to_genes: HashMap<&str, Vec<&PathwayGene>> = HashMap::new();
        for row in pathway_genes {
            pathway_to_genes.entry(row.pathway_id()).or_default().push(row);
        }

        Self {
            gene_to_deg,
            pathway_to_genes,
            deg_count: degs.len(),
            association_count: pathway_genes.len(),
        }
    }

    /// Returns the DEG record of the given gene symbol
    ///
    /// Returns `None` if the gene is not differentially expressed
    pub fn deg(&self, symbol: &str) -> Option<&'a Deg> {
        self.gene_to_deg.get(symbol).copied()
    }

    /// Whether the given gene symbol appears in the DEG table
    pub fn is_deg(&self, symbol: &str) -> bool {
        self.gene_to_deg.contains_key(symbol)
    }

    /// Returns the association rows of the given pathway, in input order
    ///
    /// Returns an empty slice if the pathway has no association rows
    pub fn pathway_genes(&self, pathway_id: &str) -> &[&'a PathwayGene] {
        self.pathway_to_genes
            .get(pathway_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of rows in the DEG table
    ///
    /// Duplicate gene symbols are counted once per row, matching the
    /// totals the enrichment statistics are defined on.
    pub fn deg_count(&self) -> usize {
        self.deg_count
    }

    /// Number of rows in the pathway-gene association table
    pub fn association_count(&self) -> usize {
        self.association_count
    }
}
