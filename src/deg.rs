use std::cmp::PartialEq;

/// A single differentially expressed gene
///
/// One row of the DEG table: the gene symbol together with the log2 fold
/// change and the adjusted p-value assigned by the upstream differential
/// expression analysis.
///
/// # Examples
///
/// ```
/// use degpath::Deg;
///
/// let deg = Deg::new("TP53", -2.1, 0.003);
///
/// assert_eq!(deg.symbol(), "TP53");
/// assert!(deg.is_significant(0.01));
/// assert!(!deg.is_significant(0.001));
/// ```
#[derive(Debug, Clone)]
pub struct Deg {
    symbol: String,
    log_fold_change: f64,
    adjusted_p_value: f64,
}

impl Deg {
    /// Initializes a new differentially expressed gene
    pub fn new(symbol: &str, log_fold_change: f64, adjusted_p_value: f64) -> Deg {
        Deg {
            symbol: symbol.to_string(),
            log_fold_change,
            adjusted_p_value,
        }
    }

    /// The gene symbol, the key under which the gene is indexed
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The log2 fold change between the compared conditions
    pub fn log_fold_change(&self) -> f64 {
        self.log_fold_change
    }

    /// The multiple-testing adjusted p-value of the differential expression
    pub fn adjusted_p_value(&self) -> f64 {
        self.adjusted_p_value
    }

    /// Whether the gene is significant at the given threshold
    ///
    /// An adjusted p-value of `NaN` is treated as `1.0` and can never
    /// be significant.
    pub fn is_significant(&self, threshold: f64) -> bool {
        let padj = if self.adjusted_p_value.is_nan() {
            1.0
        } else {
            self.adjusted_p_value
        };
        padj <= threshold
    }

    /// The absolute log2 fold change, used for aggregation
    ///
    /// Non-finite fold changes contribute `0.0`.
    pub(crate) fn abs_log_fold_change(&self) -> f64 {
        if self.log_fold_change.is_finite() {
            self.log_fold_change.abs()
        } else {
            0.0
        }
    }
}

impl PartialEq for Deg {
    fn eq(&self, other: &Deg) -> bool {
        self.symbol == other.symbol
    }
}
