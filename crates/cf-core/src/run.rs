//! Single-pass run driver: seed, simulate, update, summarize.

use cf_math::BetaParams;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::RunConfig;
use crate::simulate::{simulate_flips, FlipSequence};
use crate::summary::{summarize, PosteriorSummary};

/// Everything the reporter needs from one completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// The simulated flip sequence with derived counts.
    pub flips: FlipSequence,
    /// Prior Beta parameters, from configuration.
    pub prior: BetaParams,
    /// Posterior Beta parameters after the conjugate update.
    pub posterior: BetaParams,
    /// Monte Carlo posterior summary.
    pub summary: PosteriorSummary,
}

/// Build the generator for this run.
///
/// A supplied seed gives end-to-end reproducibility; otherwise the generator
/// is seeded from OS entropy.
fn build_rng(seed: Option<i64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed as u64),
        None => StdRng::from_os_rng(),
    }
}

/// Execute the full estimation pipeline for a validated configuration.
///
/// One generator is threaded through simulation first and posterior sampling
/// second; all flip draws complete before any posterior draw begins, so a
/// fixed seed reproduces the entire run.
pub fn execute(config: &RunConfig) -> RunOutcome {
    let mut rng = build_rng(config.random_seed);

    let flips = simulate_flips(config.num_flips, config.true_prob_heads, &mut rng);
    debug!(heads = flips.heads, tails = flips.tails, "simulated flips");

    let prior = config.prior();
    let posterior = prior.update(flips.heads, flips.tails);
    debug!(
        alpha = posterior.alpha,
        beta = posterior.beta,
        "posterior updated"
    );

    let summary = summarize(
        &posterior,
        config.fairness_epsilon,
        config.sample_count,
        &mut rng,
    );
    debug!(
        mean = summary.mean,
        ci_low = summary.ci_low,
        ci_high = summary.ci_high,
        "posterior summarized"
    );

    RunOutcome {
        flips,
        prior,
        posterior,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config() -> RunConfig {
        RunConfig {
            random_seed: Some(42),
            ..RunConfig::default()
        }
    }

    #[test]
    fn same_seed_gives_identical_outcome() {
        let config = seeded_config();
        let a = execute(&config);
        let b = execute(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn counts_and_posterior_are_consistent() {
        let config = seeded_config();
        let outcome = execute(&config);

        assert_eq!(
            outcome.flips.heads + outcome.flips.tails,
            config.num_flips as u64
        );
        assert_eq!(
            outcome.posterior.alpha,
            config.prior_alpha + outcome.flips.heads as f64
        );
        assert_eq!(
            outcome.posterior.beta,
            config.prior_beta + outcome.flips.tails as f64
        );
    }

    #[test]
    fn negative_seed_is_accepted_and_deterministic() {
        let config = RunConfig {
            random_seed: Some(-42),
            ..RunConfig::default()
        };
        let a = execute(&config);
        let b = execute(&config);
        assert_eq!(a, b);
    }

    #[test]
    fn prior_is_carried_through_unchanged() {
        let config = RunConfig {
            prior_alpha: 2.5,
            prior_beta: 1.5,
            random_seed: Some(9),
            ..RunConfig::default()
        };
        let outcome = execute(&config);
        assert_eq!(outcome.prior.alpha, 2.5);
        assert_eq!(outcome.prior.beta, 1.5);
    }
}
