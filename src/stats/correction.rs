//! Multiple-testing correction of per-pathway p-values
//!
//! Each pathway is one hypothesis test, so the raw p-values of a whole
//! dataset must be adjusted before they can be compared against a
//! significance threshold.

use crate::stats::f64_from_usize;

/// The correction procedure applied across all tested pathways
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Bonferroni correction, controls the family-wise error rate
    Bonferroni,
    /// Benjamini-Hochberg procedure, controls the false discovery rate
    BenjaminiHochberg,
}

impl Correction {
    /// Adjusts raw p-values, returning them in input order
    ///
    /// `NaN` p-values are treated as `1.0` before the correction is
    /// applied. All adjusted values are clamped to `[0.0, 1.0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use degpath::stats::Correction;
    ///
    /// let adjusted = Correction::Bonferroni.adjust(&[0.01, 0.04, 0.03, 0.005]);
    ///
    /// assert!((adjusted[0] - 0.04).abs() < 1e-10);
    /// assert!((adjusted[3] - 0.02).abs() < 1e-10);
    /// ```
    pub fn adjust(&self, p_values: &[f64]) -> Vec<f64> {
        match self {
            Correction::Bonferroni => bonferroni(p_values),
            Correction::BenjaminiHochberg => benjamini_hochberg(p_values),
        }
    }
}

/// Bonferroni correction: `p_adj = min(p * n, 1.0)`
fn bonferroni(p_values: &[f64]) -> Vec<f64> {
    let n = f64_from_usize(p_values.len());
    p_values.iter().map(|&p| (sanitize(p) * n).min(1.0)).collect()
}

/// Benjamini-Hochberg procedure
///
/// Sorts the p-values, adjusts each as `p * n / rank` and enforces
/// monotonicity from the largest p-value down.
fn benjamini_hochberg(p_values: &[f64]) -> Vec<f64> {
    let n = p_values.len();
    if n == 0 {
        return Vec::new();
    }

    let sanitized: Vec<f64> = p_values.iter().map(|&p| sanitize(p)).collect();

    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| sanitized[a].total_cmp(&sanitized[b]));

    let n_f = f64_from_usize(n);
    let mut adjusted = vec![0.0; n];

    let mut prev = f64::INFINITY;
    for i in (0..n).rev() {
        let rank = f64_from_usize(i + 1);
        let adj = (sanitized[indices[i]] * n_f / rank).min(1.0).min(prev);
        adjusted[indices[i]] = adj;
        prev = adj;
    }

    adjusted
}

fn sanitize(p: f64) -> f64 {
    if p.is_nan() {
        1.0
    } else {
        p
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn bonferroni_scales_by_test_count() {
        let adj = Correction::Bonferroni.adjust(&[0.01, 0.04, 0.03, 0.005]);
        assert!((adj[0] - 0.04).abs() < TOL);
        assert!((adj[1] - 0.16).abs() < TOL);
        assert!((adj[2] - 0.12).abs() < TOL);
        assert!((adj[3] - 0.02).abs() < TOL);
    }

    #[test]
    fn bonferroni_clamps_to_one() {
        let adj = Correction::Bonferroni.adjust(&[0.5, 0.8]);
        assert!((adj[0] - 1.0).abs() < TOL);
        assert!((adj[1] - 1.0).abs() < TOL);
    }

    #[test]
    fn benjamini_hochberg_known_values() {
        let adj = Correction::BenjaminiHochberg.adjust(&[0.01, 0.04, 0.03, 0.005]);
        // sorted: 0.005 (idx 3), 0.01 (idx 0), 0.03 (idx 2), 0.04 (idx 1)
        // raw:    0.02,           0.02,         0.04,         0.04
        assert!((adj[3] - 0.02).abs() < TOL);
        assert!((adj[0] - 0.02).abs() < TOL);
        assert!((adj[2] - 0.04).abs() < TOL);
        assert!((adj[1] - 0.04).abs() < TOL);
    }

    #[test]
    fn benjamini_hochberg_is_monotonic() {
        let p = [0.1, 0.001, 0.05, 0.01, 0.5];
        let adj = Correction::BenjaminiHochberg.adjust(&p);

        let mut pairs: Vec<(f64, f64)> = p.iter().copied().zip(adj.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        for w in pairs.windows(2) {
            assert!(w[1].1 >= w[0].1 - TOL);
        }
    }

    #[test]
    fn nan_collapses_to_one() {
        let adj = Correction::Bonferroni.adjust(&[f64::NAN, 0.1]);
        assert!((adj[0] - 1.0).abs() < TOL);

        let adj = Correction::BenjaminiHochberg.adjust(&[f64::NAN, 0.1]);
        assert!((adj[0] - 1.0).abs() < TOL);
        assert!(adj.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(Correction::Bonferroni.adjust(&[]).is_empty());
        assert!(Correction::BenjaminiHochberg.adjust(&[]).is_empty());
    }

    #[test]
    fn single_p_value_is_unchanged() {
        assert!((Correction::Bonferroni.adjust(&[0.05])[0] - 0.05).abs() < TOL);
        assert!((Correction::BenjaminiHochberg.adjust(&[0.05])[0] - 0.05).abs() < TOL);
    }
}
