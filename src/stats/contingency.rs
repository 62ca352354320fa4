//! Cross-tabulation of DEG significance and pathway membership
//!
//! For every pathway the DEG table is split along two axes: whether the
//! gene is significant at the given threshold and whether its symbol
//! appears among the pathway's association rows. The resulting 2x2
//! counts are the basis for independence tests in downstream tools.

use std::collections::HashSet;

use tracing::debug;

use crate::index::DatasetIndex;
use crate::{Deg, Pathway, PathwayGene};

/// The 2x2 contingency counts of one pathway
///
/// Only the four cells are stored. Row, column and grand totals are
/// derived from them, so the marginal sums always match the cells.
///
/// # Examples
///
/// ```
/// use degpath::{Deg, Pathway, PathwayGene};
/// use degpath::stats::contingency_table;
///
/// let degs = vec![Deg::new("TP53", -2.1, 0.001), Deg::new("HK3", 0.4, 0.8)];
/// let pathways = vec![Pathway::new("hsa04115", "p53 signaling pathway")];
/// let associations = vec![
///     PathwayGene::new("hsa04115", 7157.into(), "TP53", "ENSG00000141510"),
/// ];
///
/// let rows = contingency_table(&pathways, &degs, &associations, 0.05);
///
/// assert_eq!(rows[0].in_pathway_significant(), 1);
/// assert_eq!(rows[0].not_in_pathway_not_significant(), 1);
/// assert_eq!(rows[0].grand_total(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyRow {
    pathway_id: String,
    in_pathway_significant: u64,
    in_pathway_not_significant: u64,
    not_in_pathway_significant: u64,
    not_in_pathway_not_significant: u64,
}

impl ContingencyRow {
    /// The ID of the pathway the counts belong to
    pub fn pathway_id(&self) -> &str {
        &self.pathway_id
    }

    /// DEGs in the pathway that are significant
    pub fn in_pathway_significant(&self) -> u64 {
        self.in_pathway_significant
    }

    /// DEGs in the pathway that are not significant
    pub fn in_pathway_not_significant(&self) -> u64 {
        self.in_pathway_not_significant
    }

    /// Significant DEGs outside the pathway
    pub fn not_in_pathway_significant(&self) -> u64 {
        self.not_in_pathway_significant
    }

    /// Non-significant DEGs outside the pathway
    pub fn not_in_pathway_not_significant(&self) -> u64 {
        self.not_in_pathway_not_significant
    }

    /// All DEGs in the pathway
    pub fn in_pathway_total(&self) -> u64 {
        self.in_pathway_significant + self.in_pathway_not_significant
    }

    /// All DEGs outside the pathway
    pub fn not_in_pathway_total(&self) -> u64 {
        self.not_in_pathway_significant + self.not_in_pathway_not_significant
    }

    /// All significant DEGs
    pub fn significant_total(&self) -> u64 {
        self.in_pathway_significant + self.not_in_pathway_significant
    }

    /// All non-significant DEGs
    pub fn not_significant_total(&self) -> u64 {
        self.in_pathway_not_significant + self.not_in_pathway_not_significant
    }

    /// All DEGs of the dataset
    pub fn grand_total(&self) -> u64 {
        self.in_pathway_total() + self.not_in_pathway_total()
    }
}

/// Cross-tabulates DEG significance against pathway membership
///
/// Every pathway of `pathways` yields exactly one [`ContingencyRow`], in
/// input order. A DEG is significant if its adjusted p-value is at most
/// `significance_threshold`, where `NaN` p-values count as `1.0`. A DEG
/// is in the pathway if its symbol appears in any of the pathway's
/// association rows.
///
/// Every row of the DEG table is counted exactly once per pathway, so
/// the four cells of each row always sum up to the size of the DEG table.
pub fn contingency_table(
    pathways: &[Pathway],
    degs: &[Deg],
    pathway_genes: &[PathwayGene],
    significance_threshold: f64,
) -> Vec<ContingencyRow> {
    let index = DatasetIndex::new(degs, pathway_genes);

    let total = degs.len() as u64;
    let total_significant = degs
        .iter()
        .filter(|deg| deg.is_significant(significance_threshold))
        .count() as u64;

    pathways
        .iter()
        .map(|pathway| {
            let members: HashSet<&str> = index
                .pathway_genes(pathway.id())
                .iter()
                .map(|row| row.symbol())
                .collect();

            let mut in_significant = 0u64;
            let mut in_total = 0u64;
            for deg in degs {
                if members.contains(deg.symbol()) {
                    in_total += 1;
                    if deg.is_significant(significance_threshold) {
                        in_significant += 1;
                    }
                }
            }

            debug!(
                "Pathway:{}\tTotal: {}, Significant: {}, In pathway: {}, In significant: {}",
                pathway.id(),
                total,
                total_significant,
                in_total,
                in_significant
            );

            // every significant DEG is either in the pathway or outside,
            // so these subtractions cannot underflow
            ContingencyRow {
                pathway_id: pathway.id().to_string(),
                in_pathway_significant: in_significant,
                in_pathway_not_significant: in_total - in_significant,
                not_in_pathway_significant: total_significant - in_significant,
                not_in_pathway_not_significant: (total - in_total)
                    - (total_significant - in_significant),
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn association(pathway_id: &str, symbol: &str) -> PathwayGene {
        PathwayGene::new(pathway_id, 0.into(), symbol, "ENSG0")
    }

    #[test]
    fn counts_at_a_strict_threshold() {
        // all three DEGs belong to the pathway, two are significant at
        // 0.01; the fourth pathway member has no DEG record and must not
        // appear in any cell
        let degs = vec![
            Deg::new("AAA", 1.0, 0.001),
            Deg::new("BBB", -2.0, 0.01),
            Deg::new("CCC", 0.5, 0.2),
        ];
        let pathways = vec![Pathway::new("hsa1", "first")];
        let associations = vec![
            association("hsa1", "AAA"),
            association("hsa1", "BBB"),
            association("hsa1", "CCC"),
            association("hsa1", "DDD"),
        ];

        let rows = contingency_table(&pathways, &degs, &associations, 0.01);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].in_pathway_significant(), 2);
        assert_eq!(rows[0].in_pathway_not_significant(), 1);
        assert_eq!(rows[0].in_pathway_total(), 3);
        assert_eq!(rows[0].not_in_pathway_significant(), 0);
        assert_eq!(rows[0].not_in_pathway_not_significant(), 0);
        assert_eq!(rows[0].not_in_pathway_total(), 0);
        assert_eq!(rows[0].grand_total(), 3);
    }

    #[test]
    fn marginal_sums_match_the_cells() {
        let degs = vec![
            Deg::new("AAA", 1.0, 0.001),
            Deg::new("BBB", -2.0, 0.04),
            Deg::new("CCC", 0.5, 0.2),
            Deg::new("DDD", 0.1, 0.9),
            Deg::new("EEE", -1.1, 0.01),
        ];
        let pathways = vec![Pathway::new("hsa1", "first"), Pathway::new("hsa2", "second")];
        let associations = vec![
            association("hsa1", "AAA"),
            association("hsa1", "CCC"),
            association("hsa2", "BBB"),
            association("hsa2", "DDD"),
            association("hsa2", "EEE"),
        ];

        for row in contingency_table(&pathways, &degs, &associations, 0.05) {
            assert_eq!(
                row.in_pathway_total() + row.not_in_pathway_total(),
                row.grand_total()
            );
            assert_eq!(
                row.significant_total() + row.not_significant_total(),
                row.grand_total()
            );
            assert_eq!(row.grand_total(), degs.len() as u64);
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let degs = vec![Deg::new("AAA", 1.0, 0.05)];
        let pathways = vec![Pathway::new("hsa1", "first")];
        let associations = vec![association("hsa1", "AAA")];

        let rows = contingency_table(&pathways, &degs, &associations, 0.05);
        assert_eq!(rows[0].in_pathway_significant(), 1);

        let rows = contingency_table(&pathways, &degs, &associations, 0.049);
        assert_eq!(rows[0].in_pathway_significant(), 0);
        assert_eq!(rows[0].in_pathway_not_significant(), 1);
    }

    #[test]
    fn nan_p_values_are_not_significant() {
        let degs = vec![Deg::new("AAA", 1.0, f64::NAN)];
        let pathways = vec![Pathway::new("hsa1", "first")];
        let associations = vec![association("hsa1", "AAA")];

        let rows = contingency_table(&pathways, &degs, &associations, 0.05);
        assert_eq!(rows[0].in_pathway_significant(), 0);
        assert_eq!(rows[0].in_pathway_not_significant(), 1);
    }

    #[test]
    fn degs_outside_the_pathway_land_in_the_second_row() {
        let degs = vec![Deg::new("AAA", 1.0, 0.001), Deg::new("BBB", 1.0, 0.5)];
        let pathways = vec![Pathway::new("hsa9", "no rows at all")];
        let associations = vec![association("hsa1", "AAA")];

        let rows = contingency_table(&pathways, &degs, &associations, 0.05);
        assert_eq!(rows[0].in_pathway_total(), 0);
        assert_eq!(rows[0].not_in_pathway_significant(), 1);
        assert_eq!(rows[0].not_in_pathway_not_significant(), 1);
        assert_eq!(rows[0].grand_total(), 2);
    }

    #[test]
    fn membership_is_deduplicated_per_pathway() {
        // the same gene twice in one pathway still counts one DEG row
        let degs = vec![Deg::new("AAA", 1.0, 0.001)];
        let pathways = vec![Pathway::new("hsa1", "first")];
        let associations = vec![association("hsa1", "AAA"), association("hsa1", "AAA")];

        let rows = contingency_table(&pathways, &degs, &associations, 0.05);
        assert_eq!(rows[0].in_pathway_significant(), 1);
        assert_eq!(rows[0].grand_total(), 1);
    }

    #[test]
    fn rows_keep_pathway_input_order() {
        let degs = vec![Deg::new("AAA", 1.0, 0.001)];
        let pathways = vec![Pathway::new("hsa2", "second"), Pathway::new("hsa1", "first")];
        let associations = vec![association("hsa1", "AAA")];

        let rows = contingency_table(&pathways, &degs, &associations, 0.05);
        assert_eq!(rows[0].pathway_id(), "hsa2");
        assert_eq!(rows[1].pathway_id(), "hsa1");
    }
}
