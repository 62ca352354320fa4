//! Upper tail of the hypergeometric distribution
//!
//! All probabilities are accumulated in log space through
//! [`statrs::function::factorial::ln_binomial`] so that the binomial
//! coefficients of gene-scale populations never overflow `f64`.

use std::cmp;

use statrs::function::factorial::ln_binomial;

/// Calculates `P(X >= observed)` for a hypergeometric distribution
///
/// The distribution draws `draws` items out of a population of
/// `population` items that contains `successes` marked items.
///
/// The sum runs over the support of the distribution only. Terms outside
/// the support have a binomial coefficient of zero and are skipped, so
/// impossible parameter combinations (more successes than population
/// members) simply yield a probability of `0.0`. A result that degrades
/// to `NaN` is reported as `1.0`, the most conservative value.
pub(crate) fn upper_tail(observed: u64, draws: u64, successes: u64, population: u64) -> f64 {
    // no observation carries no signal
    if observed == 0 {
        return 1.0;
    }

    let max = cmp::min(draws, successes);
    if observed > max {
        return 0.0;
    }

    let failures = match population.checked_sub(successes) {
        Some(failures) => failures,
        None => return 0.0,
    };

    let ln_denom = ln_binomial(population, draws);
    let tail = (observed..=max).fold(0.0, |acc, k| {
        // `k <= draws` holds for every k in the range
        let missed = draws - k;
        if missed > failures {
            return acc;
        }
        acc + (ln_binomial(successes, k) + ln_binomial(failures, missed) - ln_denom).exp()
    });

    if tail.is_nan() {
        1.0
    } else {
        tail.min(1.0)
    }
}
