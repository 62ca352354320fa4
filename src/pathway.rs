use std::cmp::PartialEq;
use std::convert::TryFrom;
use std::fmt::Display;

use crate::DegpathError;

/// A unique numerical identifier for a gene
///
/// This value can - in theory - represent any numerical unique value.
/// When using KEGG-derived association tables, it represents the
/// NCBI (Entrez) Gene ID.
#[derive(Clone, Copy, Default, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct GeneId {
    inner: u32,
}

impl GeneId {
    /// Convert `self` to `u32`
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for GeneId {
    type Error = DegpathError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(GeneId {
            inner: value.parse::<u32>()?,
        })
    }
}

impl From<u32> for GeneId {
    fn from(inner: u32) -> Self {
        GeneId { inner }
    }
}

impl Display for GeneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// A single biological pathway
///
/// One row of the pathway list: the pathway ID and a human readable
/// description. The ID is the key under which association rows are grouped.
///
/// # Examples
///
/// ```
/// use degpath::Pathway;
///
/// let pathway = Pathway::new("hsa04115", "p53 signaling pathway");
///
/// assert_eq!(pathway.id(), "hsa04115");
/// assert_eq!(pathway.description(), "p53 signaling pathway");
/// ```
#[derive(Debug, Clone)]
pub struct Pathway {
    id: String,
    description: String,
}

impl Pathway {
    /// Initializes a new pathway
    pub fn new(id: &str, description: &str) -> Pathway {
        Pathway {
            id: id.to_string(),
            description: description.to_string(),
        }
    }

    /// The unique pathway ID, e.g. `hsa04115`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human readable description of the pathway
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Pathway {
    fn eq(&self, other: &Pathway) -> bool {
        self.id == other.id
    }
}

/// One row of the pathway-gene association table
///
/// Every row records the membership of one gene in one pathway. A gene that
/// belongs to several pathways appears in several rows and every duplicate
/// row is counted on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayGene {
    pathway_id: String,
    entrez_id: GeneId,
    symbol: String,
    ensembl_id: String,
}

impl PathwayGene {
    /// Initializes a new pathway-gene association
    pub fn new(pathway_id: &str, entrez_id: GeneId, symbol: &str, ensembl_id: &str) -> PathwayGene {
        PathwayGene {
            pathway_id: pathway_id.to_string(),
            entrez_id,
            symbol: symbol.to_string(),
            ensembl_id: ensembl_id.to_string(),
        }
    }

    /// The ID of the pathway the gene belongs to
    pub fn pathway_id(&self) -> &str {
        &self.pathway_id
    }

    /// The numerical NCBI (Entrez) Gene ID
    pub fn entrez_id(&self) -> &GeneId {
        &self.entrez_id
    }

    /// The gene symbol, used to match the gene against the DEG table
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The Ensembl gene ID
    pub fn ensembl_id(&self) -> &str {
        &self.ensembl_id
    }
}
