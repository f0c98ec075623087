//! Monte Carlo summarization of the Beta posterior.
//!
//! Point estimates (mean, MAP) come from closed forms; the credible interval
//! and tail probabilities are empirical, computed from a sorted batch of
//! posterior draws.

use cf_math::{quantile_sorted, BetaParams};
use rand::Rng;
use rand_distr::{Beta, Distribution};

/// Derived posterior statistics, consumed directly by the reporter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorSummary {
    /// Closed-form posterior mean.
    pub mean: f64,
    /// Posterior mode estimate; falls back to the mean when the density has
    /// no interior mode.
    pub map: f64,
    /// Lower bound of the 95% credible interval (2.5th percentile of draws).
    pub ci_low: f64,
    /// Upper bound of the 95% credible interval (97.5th percentile of draws).
    pub ci_high: f64,
    /// Fraction of draws strictly above 0.5.
    pub prob_greater_half: f64,
    /// Fraction of draws within the fairness band |x - 0.5| < epsilon.
    pub prob_near_fair: f64,
}

/// Summarize `posterior` from `sample_count` Monte Carlo draws.
///
/// Draws are taken from the shared generator after all flip draws, keeping
/// the whole run reproducible for a fixed seed. `sample_count` is validated
/// upstream (>= 5000), so the draw batch is never empty here.
pub fn summarize<R: Rng>(
    posterior: &BetaParams,
    epsilon: f64,
    sample_count: usize,
    rng: &mut R,
) -> PosteriorSummary {
    // BetaParams keeps both shapes strictly positive, so construction of the
    // sampler cannot fail.
    let dist = Beta::new(posterior.alpha, posterior.beta)
        .expect("Beta sampler requires strictly positive shape parameters");

    let mut draws: Vec<f64> = (0..sample_count).map(|_| dist.sample(rng)).collect();
    draws.sort_by(f64::total_cmp);

    let ci_low = quantile_sorted(&draws, 0.025).expect("draw batch is non-empty");
    let ci_high = quantile_sorted(&draws, 0.975).expect("draw batch is non-empty");

    // Sorting only matters for the quantiles; one linear scan covers both
    // tail counts.
    let mut greater_half = 0usize;
    let mut near_fair = 0usize;
    for &x in &draws {
        if x > 0.5 {
            greater_half += 1;
        }
        if (x - 0.5).abs() < epsilon {
            near_fair += 1;
        }
    }

    PosteriorSummary {
        mean: posterior.mean(),
        map: posterior.map(),
        ci_low,
        ci_high,
        prob_greater_half: greater_half as f64 / sample_count as f64,
        prob_near_fair: near_fair as f64 / sample_count as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_math::{beta_cdf, beta_inv_cdf};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLES: usize = 20_000;

    fn summarize_seeded(posterior: &BetaParams, epsilon: f64, seed: u64) -> PosteriorSummary {
        let mut rng = StdRng::seed_from_u64(seed);
        summarize(posterior, epsilon, SAMPLES, &mut rng)
    }

    #[test]
    fn fixed_seed_is_bit_identical() {
        let posterior = BetaParams::new(32.0, 20.0).unwrap();
        let a = summarize_seeded(&posterior, 0.05, 42);
        let b = summarize_seeded(&posterior, 0.05, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn symmetric_posterior_beta_50_50() {
        let posterior = BetaParams::new(50.0, 50.0).unwrap();
        let summary = summarize_seeded(&posterior, 0.05, 42);

        // Closed form, exact.
        assert_eq!(summary.mean, 0.5);
        assert_eq!(summary.map, 0.5);

        // The interval straddles the mean and stays inside (0, 1).
        assert!(summary.ci_low > 0.0 && summary.ci_low < 0.5);
        assert!(summary.ci_high > 0.5 && summary.ci_high < 1.0);

        // Symmetry puts about half the mass above 0.5.
        assert!((summary.prob_greater_half - 0.5).abs() < 0.02);
    }

    #[test]
    fn credible_interval_matches_exact_quantiles() {
        let posterior = BetaParams::new(50.0, 50.0).unwrap();
        let summary = summarize_seeded(&posterior, 0.05, 7);

        let exact_low = beta_inv_cdf(0.025, posterior.alpha, posterior.beta);
        let exact_high = beta_inv_cdf(0.975, posterior.alpha, posterior.beta);

        assert!((summary.ci_low - exact_low).abs() < 0.01);
        assert!((summary.ci_high - exact_high).abs() < 0.01);
    }

    #[test]
    fn tail_probabilities_match_closed_forms() {
        let posterior = BetaParams::new(8.0, 4.0).unwrap();
        let epsilon = 0.1;
        let summary = summarize_seeded(&posterior, epsilon, 11);

        let exact_gt_half = 1.0 - beta_cdf(0.5, posterior.alpha, posterior.beta);
        let exact_near_fair = beta_cdf(0.5 + epsilon, posterior.alpha, posterior.beta)
            - beta_cdf(0.5 - epsilon, posterior.alpha, posterior.beta);

        assert!((summary.prob_greater_half - exact_gt_half).abs() < 0.02);
        assert!((summary.prob_near_fair - exact_near_fair).abs() < 0.02);
    }

    #[test]
    fn map_falls_back_to_mean_for_flat_posterior() {
        let posterior = BetaParams::uniform();
        let summary = summarize_seeded(&posterior, 0.05, 3);
        assert_eq!(summary.map, summary.mean);
        assert_eq!(summary.map, 0.5);
    }

    #[test]
    fn zero_epsilon_empties_the_fairness_band() {
        // The band test is strict, so epsilon = 0 matches no draw.
        let posterior = BetaParams::new(50.0, 50.0).unwrap();
        let summary = summarize_seeded(&posterior, 0.0, 42);
        assert_eq!(summary.prob_near_fair, 0.0);
    }

    #[test]
    fn all_statistics_stay_in_unit_interval() {
        let posterior = BetaParams::new(0.5, 3.0).unwrap();
        let summary = summarize_seeded(&posterior, 0.2, 5);

        for value in [
            summary.mean,
            summary.map,
            summary.ci_low,
            summary.ci_high,
            summary.prob_greater_half,
            summary.prob_near_fair,
        ] {
            assert!((0.0..=1.0).contains(&value), "out of range: {value}");
        }
        assert!(summary.ci_low <= summary.ci_high);
    }

    #[test]
    fn minimum_sample_count_is_enough_for_a_sane_interval() {
        let posterior = BetaParams::new(32.0, 20.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let summary = summarize(&posterior, 0.05, 5000, &mut rng);
        assert!(summary.ci_low < summary.mean && summary.mean < summary.ci_high);
    }
}
