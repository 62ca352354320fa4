//! Hypergeometric over-representation of DEGs within pathways
//!
//! For every pathway the engine compares the number of DEGs observed
//! among its member genes against the number expected under a uniform
//! distribution of DEGs across the whole association table. The
//! probability of seeing at least the observed count by chance is taken
//! from the upper tail of the hypergeometric distribution:
//!
//! - population: all rows of the association table
//! - successes: all rows of the DEG table
//! - draws: the rows of the tested pathway
//!
//! Since every pathway is a separate test, the raw p-values are adjusted
//! with the configured multiple-testing [`Correction`].

use tracing::debug;

use crate::index::DatasetIndex;
use crate::stats::correction::Correction;
use crate::stats::{f64_from_u64, f64_from_usize, hypergeom};
use crate::{Deg, Pathway, PathwayGene};

/// Configuration for [`pathway_enrichment`]
///
/// # Examples
///
/// ```
/// use degpath::stats::{Correction, EnrichmentConfig};
///
/// let config = EnrichmentConfig::default();
/// assert_eq!(config.correction, Correction::Bonferroni);
///
/// let config = EnrichmentConfig {
///     correction: Correction::BenjaminiHochberg,
/// };
/// assert_eq!(config.correction, Correction::BenjaminiHochberg);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EnrichmentConfig {
    /// Multiple-testing correction applied to the raw p-values
    pub correction: Correction,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            correction: Correction::Bonferroni,
        }
    }
}

/// The enrichment of DEGs within one pathway
///
/// [`EnrichmentResult`]s are returned from [`pathway_enrichment`], one
/// per input pathway and in input order.
#[derive(Debug, Clone)]
pub struct EnrichmentResult {
    pathway_id: String,
    observed: u64,
    pathway_size: u64,
    expected: f64,
    enrichment_score: f64,
    p_value: f64,
    adjusted_p_value: f64,
}

impl EnrichmentResult {
    /// The ID of the tested pathway
    pub fn pathway_id(&self) -> &str {
        &self.pathway_id
    }

    /// Number of association rows of the pathway whose gene is a DEG
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Total number of association rows of the pathway
    pub fn pathway_size(&self) -> u64 {
        self.pathway_size
    }

    /// Number of DEG rows expected in the pathway under a uniform
    /// distribution of DEGs across the association table
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// Standardized residual of the observed count
    ///
    /// `(observed - expected) / sqrt(expected)`. Positive scores mean
    /// over-representation. A pathway without observed DEGs or without
    /// association rows scores `0.0`.
    pub fn enrichment_score(&self) -> f64 {
        self.enrichment_score
    }

    /// The raw upper-tail hypergeometric p-value
    ///
    /// The p-value indicates the probability that at least `observed`
    /// DEG rows ended up in the pathway by chance
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// The multiple-testing corrected p-value
    pub fn adjusted_p_value(&self) -> f64 {
        self.adjusted_p_value
    }
}

/// Calculates the hypergeometric enrichment of DEGs in every pathway
///
/// Every pathway of `pathways` yields exactly one result, in input order.
/// Pathways without association rows and pathways without any DEG overlap
/// degrade to an enrichment score of `0.0` and a p-value of `1.0` instead
/// of being skipped.
///
/// # Examples
///
/// ```
/// use degpath::{Deg, Pathway, PathwayGene};
/// use degpath::stats::{pathway_enrichment, EnrichmentConfig};
///
/// let degs = vec![Deg::new("TP53", -2.1, 0.001), Deg::new("MDM2", 1.3, 0.009)];
/// let pathways = vec![
///     Pathway::new("hsa04115", "p53 signaling pathway"),
///     Pathway::new("hsa00010", "Glycolysis"),
/// ];
/// let associations = vec![
///     PathwayGene::new("hsa04115", 7157.into(), "TP53", "ENSG00000141510"),
///     PathwayGene::new("hsa04115", 4193.into(), "MDM2", "ENSG00000135679"),
///     PathwayGene::new("hsa00010", 3101.into(), "HK3", "ENSG00000160883"),
/// ];
///
/// let results = pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].pathway_id(), "hsa04115");
/// assert_eq!(results[0].observed(), 2);
/// assert!(results[0].p_value() < results[1].p_value());
/// ```
pub fn pathway_enrichment(
    pathways: &[Pathway],
    degs: &[Deg],
    pathway_genes: &[PathwayGene],
    config: EnrichmentConfig,
) -> Vec<EnrichmentResult> {
    let index = DatasetIndex::new(degs, pathway_genes);

    let total_degs = index.deg_count();
    let total_rows = index.association_count();

    let mut raw_p_values = Vec::with_capacity(pathways.len());
    let mut results = Vec::with_capacity(pathways.len());
    for pathway in pathways {
        let rows = index.pathway_genes(pathway.id());
        let pathway_size = rows.len() as u64;
        let observed = rows.iter().filter(|row| index.is_deg(row.symbol())).count() as u64;

        let expected = if total_rows == 0 {
            0.0
        } else {
            f64_from_usize(total_degs) / f64_from_usize(total_rows) * f64_from_u64(pathway_size)
        };

        let enrichment_score = if observed == 0 || expected <= 0.0 {
            0.0
        } else {
            (f64_from_u64(observed) - expected) / expected.sqrt()
        };

        let p_value = hypergeom::upper_tail(
            observed,
            // Number of association rows of this pathway
            // ==> draws
            pathway_size,
            // Number of rows in the DEG table
            // ==> successes
            total_degs as u64,
            // Number of rows in the association table
            // ==> population
            total_rows as u64,
        );

        debug!(
            "Pathway:{}\tPopulation: {}, Successes: {}, Draws: {}, Observed: {}",
            pathway.id(),
            total_rows,
            total_degs,
            pathway_size,
            observed
        );

        raw_p_values.push(p_value);
        results.push(EnrichmentResult {
            pathway_id: pathway.id().to_string(),
            observed,
            pathway_size,
            expected,
            enrichment_score,
            p_value,
            adjusted_p_value: 1.0, // filled in below
        });
    }

    let adjusted = config.correction.adjust(&raw_p_values);
    for (result, adjusted_p_value) in results.iter_mut().zip(adjusted) {
        result.adjusted_p_value = adjusted_p_value;
    }

    results
}

#[cfg(test)]
mod test {
    use super::*;

    fn deg(symbol: &str) -> Deg {
        Deg::new(symbol, 1.0, 0.001)
    }

    fn association(pathway_id: &str, symbol: &str) -> PathwayGene {
        PathwayGene::new(pathway_id, 0.into(), symbol, "ENSG0")
    }

    /// 10 association rows, 4 DEGs, tested pathway has 3 rows with 2 DEGs
    fn small_dataset() -> (Vec<Pathway>, Vec<Deg>, Vec<PathwayGene>) {
        let pathways = vec![Pathway::new("hsa1", "first"), Pathway::new("hsa2", "second")];
        let degs = vec![deg("AAA"), deg("BBB"), deg("CCC"), deg("DDD")];
        let associations = vec![
            association("hsa1", "AAA"),
            association("hsa1", "BBB"),
            association("hsa1", "XXX"),
            association("hsa2", "CCC"),
            association("hsa2", "YYY"),
            association("hsa3", "ZZZ"),
            association("hsa3", "QQQ"),
            association("hsa3", "RRR"),
            association("hsa3", "SSS"),
            association("hsa3", "TTT"),
        ];
        (pathways, degs, associations)
    }

    #[test]
    fn observed_and_expected_counts() {
        let (pathways, degs, associations) = small_dataset();
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].pathway_id(), "hsa1");
        assert_eq!(results[0].observed(), 2);
        assert_eq!(results[0].pathway_size(), 3);
        // 4 DEGs / 10 rows * 3 rows
        assert!((results[0].expected() - 1.2).abs() < 1e-10);
    }

    #[test]
    fn enrichment_score_is_the_standardized_residual() {
        let (pathways, degs, associations) = small_dataset();
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        // (2 - 1.2) / sqrt(1.2)
        assert!((results[0].enrichment_score() - 0.7302967433402214).abs() < 1e-9);
    }

    #[test]
    fn upper_tail_p_value() {
        let (pathways, degs, associations) = small_dataset();
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        // P(X >= 2) for population 10, successes 4, draws 3:
        // (C(4,2)*C(6,1) + C(4,3)*C(6,0)) / C(10,3) = 40/120
        assert!((results[0].p_value() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn bonferroni_scales_with_the_number_of_pathways() {
        let (pathways, degs, associations) = small_dataset();
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        assert!((results[0].adjusted_p_value() - results[0].p_value() * 2.0).abs() < 1e-12);
        assert!(results[1].adjusted_p_value() <= 1.0);
    }

    #[test]
    fn results_keep_pathway_input_order() {
        let (mut pathways, degs, associations) = small_dataset();
        pathways.reverse();
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        assert_eq!(results[0].pathway_id(), "hsa2");
        assert_eq!(results[1].pathway_id(), "hsa1");
    }

    #[test]
    fn pathway_without_rows_degrades_to_the_null_result() {
        let pathways = vec![Pathway::new("hsa9", "unknown")];
        let degs = vec![deg("AAA")];
        let associations = vec![association("hsa1", "AAA")];
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].observed(), 0);
        assert_eq!(results[0].pathway_size(), 0);
        assert!(results[0].expected() == 0.0);
        assert!(results[0].enrichment_score() == 0.0);
        assert!((results[0].p_value() - 1.0).abs() < f64::EPSILON);
        assert!((results[0].adjusted_p_value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pathway_without_overlap_is_not_enriched() {
        let pathways = vec![Pathway::new("hsa1", "first")];
        let degs = vec![deg("AAA")];
        let associations = vec![association("hsa1", "XXX"), association("hsa2", "AAA")];
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        assert_eq!(results[0].observed(), 0);
        assert!(results[0].enrichment_score() == 0.0);
        assert!((results[0].p_value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_association_table_degrades_to_the_null_result() {
        let pathways = vec![Pathway::new("hsa1", "first")];
        let degs = vec![deg("AAA")];
        let results = pathway_enrichment(&pathways, &degs, &[], EnrichmentConfig::default());

        assert!(results[0].expected() == 0.0);
        assert!(results[0].enrichment_score() == 0.0);
        assert!((results[0].p_value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_rows_count_once_per_row() {
        let pathways = vec![Pathway::new("hsa1", "first")];
        let degs = vec![deg("AAA")];
        let associations = vec![
            association("hsa1", "AAA"),
            association("hsa1", "AAA"),
            association("hsa2", "XXX"),
        ];
        let results =
            pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

        assert_eq!(results[0].observed(), 2);
        assert_eq!(results[0].pathway_size(), 2);
    }

    #[test]
    fn benjamini_hochberg_correction() {
        let (pathways, degs, associations) = small_dataset();
        let config = EnrichmentConfig {
            correction: Correction::BenjaminiHochberg,
        };
        let results = pathway_enrichment(&pathways, &degs, &associations, config);

        for result in &results {
            assert!(result.adjusted_p_value() >= result.p_value());
            assert!(result.adjusted_p_value() <= 1.0);
        }
    }
}
