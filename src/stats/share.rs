//! Distribution of fold-change weight across pathways
//!
//! Every requested pathway is weighted by the average absolute log2 fold
//! change of its matched DEGs. The averages are then normalized into
//! percentages of their combined total, so the result expresses how much
//! of the overall differential expression each pathway carries.
//!
//! The absolute value is used so that up- and down-regulated genes do
//! not cancel each other out.

use tracing::debug;

use crate::index::DatasetIndex;
use crate::stats::f64_from_usize;
use crate::{Deg, DegpathError, DegpathResult, PathwayGene};

/// A pathway's normalized share of the total differential expression
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayShare {
    pathway_id: String,
    percentage: f64,
}

impl PathwayShare {
    /// The ID of the pathway
    pub fn pathway_id(&self) -> &str {
        &self.pathway_id
    }

    /// The pathway's percentage of the summed fold-change averages
    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

/// Distributes the absolute log2 fold changes of the DEG table across
/// pathways
///
/// # Examples
///
/// ```
/// use degpath::{Deg, PathwayGene};
/// use degpath::stats::FoldChangeShares;
///
/// let degs = vec![Deg::new("AAA", 1.0, 0.01), Deg::new("BBB", -3.0, 0.02)];
/// let associations = vec![
///     PathwayGene::new("hsa10", 1.into(), "AAA", "ENSG1"),
///     PathwayGene::new("hsa11", 2.into(), "BBB", "ENSG2"),
/// ];
///
/// let shares = FoldChangeShares::new(&degs, &associations)?;
/// let percentages = shares.percentages(&["hsa10", "hsa11"])?;
///
/// assert!((percentages[0] - 25.0).abs() < 1e-10);
/// assert!((percentages[1] - 75.0).abs() < 1e-10);
/// # Ok::<(), degpath::DegpathError>(())
/// ```
#[derive(Debug)]
pub struct FoldChangeShares<'a> {
    index: DatasetIndex<'a>,
}

impl<'a> FoldChangeShares<'a> {
    /// Builds the distributor for one dataset
    ///
    /// # Errors
    ///
    /// Returns [`DegpathError::EmptyInput`] if `degs` or `pathway_genes`
    /// contains no rows
    pub fn new(degs: &'a [Deg], pathway_genes: &'a [PathwayGene]) -> DegpathResult<Self> {
        if degs.is_empty() {
            return Err(DegpathError::EmptyInput("DEG table"));
        }
        if pathway_genes.is_empty() {
            return Err(DegpathError::EmptyInput("pathway-gene association table"));
        }
        Ok(Self {
            index: DatasetIndex::new(degs, pathway_genes),
        })
    }

    /// Calculates the percentage share of every requested pathway
    ///
    /// Returns one percentage per requested ID, in request order. The
    /// percentages sum up to `100.0` unless every average is `0.0`, in
    /// which case all of them are `0.0`.
    ///
    /// # Errors
    ///
    /// - [`DegpathError::EmptyInput`] if `pathway_ids` is empty
    /// - [`DegpathError::UnknownPathway`] if an ID has no association
    ///   rows. A pathway whose rows simply match no DEG is not an error,
    ///   its share is `0.0`.
    pub fn percentages<S: AsRef<str>>(&self, pathway_ids: &[S]) -> DegpathResult<Vec<f64>> {
        if pathway_ids.is_empty() {
            return Err(DegpathError::EmptyInput("pathway id list"));
        }

        let averages = pathway_ids
            .iter()
            .map(|id| self.average_fold_change(id.as_ref()))
            .collect::<DegpathResult<Vec<f64>>>()?;

        let total: f64 = averages.iter().sum();
        Ok(averages
            .iter()
            .map(|&average| {
                if average == 0.0 {
                    // keeps an all-zero dataset at 0.0 instead of 0/0
                    0.0
                } else {
                    average / total * 100.0
                }
            })
            .collect())
    }

    /// The average absolute log2 fold change of the pathway's matched DEGs
    ///
    /// Averages over the matched rows only. A pathway whose genes match
    /// no DEG averages to `0.0`.
    fn average_fold_change(&self, pathway_id: &str) -> DegpathResult<f64> {
        let rows = self.index.pathway_genes(pathway_id);
        if rows.is_empty() {
            return Err(DegpathError::UnknownPathway(pathway_id.to_string()));
        }

        let mut sum = 0.0;
        let mut matched = 0usize;
        for row in rows {
            if let Some(deg) = self.index.deg(row.symbol()) {
                sum += deg.abs_log_fold_change();
                matched += 1;
            }
        }

        if matched == 0 {
            Ok(0.0)
        } else {
            let average = sum / f64_from_usize(matched);
            debug!(
                "Pathway:{}\tMatched: {}, Average |log2FC|: {}",
                pathway_id, matched, average
            );
            Ok(average)
        }
    }
}

/// Keeps the `max_count` pathways with the highest percentage
///
/// The returned shares are sorted by percentage in descending order.
/// Ties keep the order of the input lists. Fewer than `max_count` entries
/// are returned only if fewer IDs were supplied.
///
/// # Errors
///
/// - [`DegpathError::InvalidArgument`] if `max_count` is `0` or if
///   `percentages` and `pathway_ids` differ in length
///
/// # Examples
///
/// ```
/// use degpath::stats::top_influential;
///
/// let shares = top_influential(2, &[10.0, 40.0, 50.0], &["hsa10", "hsa11", "hsa12"])?;
///
/// assert_eq!(shares.len(), 2);
/// assert_eq!(shares[0].pathway_id(), "hsa12");
/// assert_eq!(shares[1].pathway_id(), "hsa11");
/// # Ok::<(), degpath::DegpathError>(())
/// ```
pub fn top_influential<S: AsRef<str>>(
    max_count: usize,
    percentages: &[f64],
    pathway_ids: &[S],
) -> DegpathResult<Vec<PathwayShare>> {
    if max_count == 0 {
        return Err(DegpathError::InvalidArgument(
            "max_count must be at least 1".to_string(),
        ));
    }
    if percentages.len() != pathway_ids.len() {
        return Err(DegpathError::InvalidArgument(format!(
            "{} percentages cannot be matched to {} pathway ids",
            percentages.len(),
            pathway_ids.len()
        )));
    }

    let mut shares: Vec<PathwayShare> = pathway_ids
        .iter()
        .zip(percentages)
        .map(|(id, &percentage)| PathwayShare {
            pathway_id: id.as_ref().to_string(),
            percentage,
        })
        .collect();

    // stable sort, ties keep input order
    shares.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    shares.truncate(max_count);
    Ok(shares)
}
