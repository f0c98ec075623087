//! Beta distribution utilities for the Beta-Binomial conjugate model.
//!
//! Provides the `BetaParams` value type used for priors and posteriors,
//! closed-form mean/variance/MAP, the conjugate update for observed flip
//! counts, and PDF/CDF/inverse-CDF helpers. The CDF uses the regularized
//! incomplete beta function with a continued-fraction approximation
//! (Numerical Recipes).

use super::stable::log_beta;

const BETACF_MAX_ITERS: usize = 200;
const BETACF_EPS: f64 = 3.0e-7;
const BETACF_FPMIN: f64 = 1.0e-30;

/// Shape parameters of a Beta distribution over the coin bias.
///
/// Both fields are strictly positive by construction; the prior comes from
/// validated configuration and the posterior adds non-negative counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaParams {
    /// Shape parameter alpha (heads side).
    pub alpha: f64,
    /// Shape parameter beta (tails side).
    pub beta: f64,
}

impl BetaParams {
    /// Create new Beta parameters with validation.
    ///
    /// Returns None if either parameter is non-positive or NaN.
    pub fn new(alpha: f64, beta: f64) -> Option<Self> {
        if alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0 {
            return None;
        }
        Some(Self { alpha, beta })
    }

    /// Create Beta(1, 1), the uniform prior.
    pub fn uniform() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    /// Create the Jeffreys prior Beta(0.5, 0.5).
    pub fn jeffreys() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
        }
    }

    /// Mean E[p] = alpha / (alpha + beta).
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Variance Var[p] = alpha*beta / ((alpha+beta)^2 (alpha+beta+1)).
    pub fn variance(&self) -> f64 {
        let sum = self.alpha + self.beta;
        (self.alpha * self.beta) / (sum * sum * (sum + 1.0))
    }

    /// Mode estimate (MAP).
    ///
    /// The density has an interior mode (alpha-1)/(alpha+beta-2) only when
    /// both shapes exceed 1. Outside that region the reported MAP falls back
    /// to the mean rather than a boundary mode; downstream output depends on
    /// this exact behavior for flat and Jeffreys priors.
    pub fn map(&self) -> f64 {
        if self.alpha > 1.0 && self.beta > 1.0 {
            (self.alpha - 1.0) / (self.alpha + self.beta - 2.0)
        } else {
            self.mean()
        }
    }

    /// Conjugate posterior after observing `heads` and `tails` flips.
    ///
    /// Beta is conjugate to the Binomial likelihood, so the posterior stays
    /// in the family: Beta(alpha + heads, beta + tails). Counts are
    /// non-negative integers, which keeps both shapes strictly positive.
    pub fn update(&self, heads: u64, tails: u64) -> Self {
        Self {
            alpha: self.alpha + heads as f64,
            beta: self.beta + tails as f64,
        }
    }
}

/// Mean of Beta(alpha, beta) = alpha / (alpha + beta).
pub fn beta_mean(alpha: f64, beta: f64) -> f64 {
    if alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    alpha / (alpha + beta)
}

/// MAP of Beta(alpha, beta), with the fallback-to-mean behavior of
/// [`BetaParams::map`].
pub fn beta_map(alpha: f64, beta: f64) -> f64 {
    if alpha.is_nan() || beta.is_nan() || alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    if alpha > 1.0 && beta > 1.0 {
        (alpha - 1.0) / (alpha + beta - 2.0)
    } else {
        beta_mean(alpha, beta)
    }
}

/// Log of the Beta PDF at x.
pub fn log_beta_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&x) {
        return f64::NEG_INFINITY;
    }
    if x == 0.0 {
        if alpha < 1.0 {
            return f64::INFINITY;
        }
        if alpha > 1.0 {
            return f64::NEG_INFINITY;
        }
        return -log_beta(1.0, beta);
    }
    if x == 1.0 {
        if beta < 1.0 {
            return f64::INFINITY;
        }
        if beta > 1.0 {
            return f64::NEG_INFINITY;
        }
        return -log_beta(alpha, 1.0);
    }
    let log_x = x.ln();
    let log_one_minus = (-x).ln_1p();
    (alpha - 1.0) * log_x + (beta - 1.0) * log_one_minus - log_beta(alpha, beta)
}

/// Beta PDF at x.
pub fn beta_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    let log_pdf = log_beta_pdf(x, alpha, beta);
    if log_pdf.is_nan() {
        return f64::NAN;
    }
    if log_pdf == f64::INFINITY {
        return f64::INFINITY;
    }
    if log_pdf == f64::NEG_INFINITY {
        return 0.0;
    }
    log_pdf.exp()
}

/// Regularized incomplete beta function I_x(a,b), the Beta CDF.
pub fn beta_cdf(x: f64, alpha: f64, beta: f64) -> f64 {
    if x.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_beta = log_beta(alpha, beta);
    let bt = (alpha * x.ln() + beta * (1.0 - x).ln() - ln_beta).exp();
    let threshold = (alpha + 1.0) / (alpha + beta + 2.0);
    if x < threshold {
        bt * betacf(alpha, beta, x) / alpha
    } else {
        1.0 - bt * betacf(beta, alpha, 1.0 - x) / beta
    }
}

/// Inverse CDF (quantile) for Beta(alpha, beta), by bisection on the CDF.
pub fn beta_inv_cdf(p: f64, alpha: f64, beta: f64) -> f64 {
    if p.is_nan() || alpha.is_nan() || beta.is_nan() {
        return f64::NAN;
    }
    if alpha <= 0.0 || beta <= 0.0 {
        return f64::NAN;
    }
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    let mut low = 0.0;
    let mut high = 1.0;
    let mut mid = 0.5;
    let tol = 1e-10;
    for _ in 0..200 {
        mid = 0.5 * (low + high);
        let cdf = beta_cdf(mid, alpha, beta);
        if cdf.is_nan() {
            return f64::NAN;
        }
        let delta = cdf - p;
        if delta.abs() < tol {
            return mid;
        }
        if delta < 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    mid
}

fn betacf(alpha: f64, beta: f64, x: f64) -> f64 {
    let qab = alpha + beta;
    let qap = alpha + 1.0;
    let qam = alpha - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < BETACF_FPMIN {
        d = BETACF_FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=BETACF_MAX_ITERS {
        let m_f = m as f64;
        let m2 = 2.0 * m_f;
        let aa = m_f * (beta - m_f) * x / ((qam + m2) * (alpha + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETACF_FPMIN {
            d = BETACF_FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETACF_FPMIN {
            c = BETACF_FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        let aa = -(alpha + m_f) * (qab + m_f) * x / ((alpha + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETACF_FPMIN {
            d = BETACF_FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETACF_FPMIN {
            c = BETACF_FPMIN;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;
        if (del - 1.0).abs() < BETACF_EPS {
            break;
        }
    }

    h
}
