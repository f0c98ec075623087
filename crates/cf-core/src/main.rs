//! Coinflip - Bayesian coin-bias estimation from simulated flips.
//!
//! Parses and validates options, runs the estimation pipeline once, prints
//! the report to stdout, and exits with a stable code.

use clap::Parser;
use std::process;

use cf_core::config::RunConfig;
use cf_core::exit_codes::ExitCode;
use cf_core::logging::init_logging;
use cf_core::report;
use cf_core::run;

/// Estimate a coin's bias from simulated flips with a Beta-Binomial model
#[derive(Parser)]
#[command(name = "coinflip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of flips to simulate
    #[arg(short = 'n', long = "flips", default_value_t = 50)]
    flips: usize,

    /// True P(Heads), used for simulation only
    #[arg(long = "true-p", default_value_t = 0.6, allow_hyphen_values = true)]
    true_p: f64,

    /// Prior Beta alpha
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    alpha: f64,

    /// Prior Beta beta
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    beta: f64,

    /// Fairness band for P(|p - 0.5| < epsilon)
    #[arg(long, default_value_t = 0.05, allow_hyphen_values = true)]
    epsilon: f64,

    /// Monte Carlo samples drawn from the posterior
    #[arg(long, default_value_t = 20_000)]
    samples: usize,

    /// Seed for reproducible runs (omit for OS entropy)
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Delay between printed flips, in seconds
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    delay: f64,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode: errors only
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            num_flips: self.flips,
            true_prob_heads: self.true_p,
            prior_alpha: self.alpha,
            prior_beta: self.beta,
            fairness_epsilon: self.epsilon,
            sample_count: self.samples,
            random_seed: self.seed,
            display_delay_seconds: self.delay,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = cli.into_config();
    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        process::exit(ExitCode::ConfigError.code());
    }

    let outcome = run::execute(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let printed = report::show_flips(&mut out, &outcome.flips.flips, config.display_delay_seconds)
        .and_then(|()| report::print_report(&mut out, &config, &outcome));
    if let Err(err) = printed {
        eprintln!("error: failed to write report: {err}");
        process::exit(ExitCode::ReportError.code());
    }

    process::exit(ExitCode::Success.code());
}
