//! Statistical analyses of DEGs across pathways
//!
//! This module contains the three computations of the crate. All of them
//! work on the same raw tables and build a [`DatasetIndex`] internally,
//! so they can be called independently and in any order:
//!
//! - [`pathway_enrichment`] tests each pathway for an over-representation
//!   of DEGs using the upper tail of the hypergeometric distribution
//! - [`contingency_table`] cross-tabulates DEG significance against
//!   pathway membership
//! - [`FoldChangeShares`] distributes the total differential expression
//!   across pathways as percentages
//!
//! [`DatasetIndex`]: crate::DatasetIndex

pub mod contingency;
pub mod correction;
pub mod enrichment;
mod hypergeom;
pub mod share;

pub use contingency::{contingency_table, ContingencyRow};
pub use correction::Correction;
pub use enrichment::{pathway_enrichment, EnrichmentConfig, EnrichmentResult};
pub use share::{top_influential, FoldChangeShares, PathwayShare};

/// We have to frequently do divisions starting with usize values
/// and need to return f64 values. To ensure some kind of safety
/// we use this method to panic in case of overflows.
fn f64_from_usize(n: usize) -> f64 {
    let intermediate: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large usize");
    intermediate.into()
}

/// Same conversion for u64 counts
fn f64_from_u64(n: u64) -> f64 {
    let intermediate: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large u64");
    intermediate.into()
}
