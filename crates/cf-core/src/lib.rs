//! Coinflip Core Library
//!
//! Bayesian coin-bias estimation with a Beta prior and Binomial likelihood:
//! - Configuration validation and exit codes
//! - Bernoulli flip simulation against a known true bias
//! - Closed-form conjugate posterior update
//! - Monte Carlo posterior summarization
//! - Plain-text report rendering
//!
//! The binary entry point is in `main.rs`.

pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod report;
pub mod run;
pub mod simulate;
pub mod summary;
