//! Run configuration and boundary validation.
//!
//! All constraint checking happens here, before any simulation work begins.
//! A `RunConfig` that has passed [`RunConfig::validate`] is safe for the
//! whole pipeline: the simulator and summarizer have no error paths of
//! their own.

use cf_math::BetaParams;
use thiserror::Error;

/// Minimum Monte Carlo sample count for stable interval estimates.
pub const MIN_SAMPLE_COUNT: usize = 5000;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Immutable configuration for one estimation run.
///
/// Constructed once from command-line input and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Number of flips to simulate (> 0).
    pub num_flips: usize,
    /// True P(Heads) driving the simulation, in (0, 1) exclusive.
    pub true_prob_heads: f64,
    /// Prior Beta alpha (> 0).
    pub prior_alpha: f64,
    /// Prior Beta beta (> 0).
    pub prior_beta: f64,
    /// Half-width of the fairness band around 0.5 (>= 0).
    pub fairness_epsilon: f64,
    /// Monte Carlo draws from the posterior (>= MIN_SAMPLE_COUNT).
    pub sample_count: usize,
    /// Seed for reproducible runs; absent means OS entropy.
    pub random_seed: Option<i64>,
    /// Delay between printed flip characters, in seconds (>= 0).
    pub display_delay_seconds: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_flips: 50,
            true_prob_heads: 0.6,
            prior_alpha: 1.0,
            prior_beta: 1.0,
            fairness_epsilon: 0.05,
            sample_count: 20_000,
            random_seed: None,
            display_delay_seconds: 0.0,
        }
    }
}

impl RunConfig {
    /// Check every boundary constraint.
    ///
    /// Always fatal on failure: the caller reports the error and exits
    /// without starting the run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_flips == 0 {
            return Err(ConfigError::invalid("flips", "must be positive"));
        }

        if self.true_prob_heads.is_nan()
            || self.true_prob_heads <= 0.0
            || self.true_prob_heads >= 1.0
        {
            return Err(ConfigError::invalid(
                "true-p",
                format!(
                    "must be between 0 and 1 (exclusive), got {}",
                    self.true_prob_heads
                ),
            ));
        }

        if self.prior_alpha.is_nan() || self.prior_alpha <= 0.0 {
            return Err(ConfigError::invalid(
                "alpha",
                format!("must be positive, got {}", self.prior_alpha),
            ));
        }

        if self.prior_beta.is_nan() || self.prior_beta <= 0.0 {
            return Err(ConfigError::invalid(
                "beta",
                format!("must be positive, got {}", self.prior_beta),
            ));
        }

        if self.fairness_epsilon.is_nan() || self.fairness_epsilon < 0.0 {
            return Err(ConfigError::invalid(
                "epsilon",
                format!("must be >= 0, got {}", self.fairness_epsilon),
            ));
        }

        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(ConfigError::invalid(
                "samples",
                format!(
                    "must be at least {MIN_SAMPLE_COUNT} for stable estimates, got {}",
                    self.sample_count
                ),
            ));
        }

        if self.display_delay_seconds.is_nan() || self.display_delay_seconds < 0.0 {
            return Err(ConfigError::invalid(
                "delay",
                format!("must be >= 0, got {}", self.display_delay_seconds),
            ));
        }

        Ok(())
    }

    /// Prior Beta parameters.
    ///
    /// Strictly positive once [`RunConfig::validate`] has passed.
    pub fn prior(&self) -> BetaParams {
        BetaParams {
            alpha: self.prior_alpha,
            beta: self.prior_beta,
        }
    }
}
