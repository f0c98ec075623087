//! Plain-text rendering of the flip sequence and the posterior report.
//!
//! Stdout carries only this payload; all log output goes to stderr.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::RunConfig;
use crate::run::RunOutcome;

/// Characters of flip output per line.
const WRAP_COLUMNS: usize = 80;

/// Print the observed sequence as one H/T character per flip.
///
/// Wraps at 80 columns. A positive `delay_seconds` sleeps after each
/// character, with a flush per character for a ticker-style display.
pub fn show_flips(out: &mut impl Write, flips: &[bool], delay_seconds: f64) -> io::Result<()> {
    writeln!(out, "Flips (real sequence):")?;

    let mut line_len = 0usize;
    for &is_head in flips {
        let ch = if is_head { 'H' } else { 'T' };
        write!(out, "{ch}")?;
        out.flush()?;
        line_len += 1;

        if line_len >= WRAP_COLUMNS {
            writeln!(out)?;
            line_len = 0;
        }

        if delay_seconds > 0.0 {
            thread::sleep(Duration::from_secs_f64(delay_seconds));
        }
    }

    if line_len != 0 {
        writeln!(out)?;
    }
    writeln!(out)
}

/// Print the labeled estimation report.
pub fn print_report(
    out: &mut impl Write,
    config: &RunConfig,
    outcome: &RunOutcome,
) -> io::Result<()> {
    let flips = &outcome.flips;
    let summary = &outcome.summary;

    writeln!(out, "=== Coin Bias Estimate ===")?;
    writeln!(out, "Flips:  {}", config.num_flips)?;
    writeln!(out, "Heads:  {}", flips.heads)?;
    writeln!(out, "Tails:  {}\n", flips.tails)?;

    writeln!(out, "Plain English:")?;
    writeln!(
        out,
        "- Best estimate of P(Heads): {:.3}  (~{:.1}%)",
        summary.mean,
        summary.mean * 100.0
    )?;
    writeln!(
        out,
        "- 95% uncertainty range:     {:.3} to {:.3}",
        summary.ci_low, summary.ci_high
    )?;
    writeln!(
        out,
        "- Chance coin favors heads:  {:.3}   (P(Heads) > 0.5)",
        summary.prob_greater_half
    )?;
    writeln!(
        out,
        "- Chance roughly fair:       {:.3}   (within ±{} of 0.5)\n",
        summary.prob_near_fair, config.fairness_epsilon
    )?;

    writeln!(out, "Technical:")?;
    writeln!(
        out,
        "- Prior Beta({}, {}) -> Posterior Beta({}, {})",
        outcome.prior.alpha, outcome.prior.beta, outcome.posterior.alpha, outcome.posterior.beta
    )?;
    writeln!(out, "- Posterior MAP: {:.3}", summary.map)?;
    match config.random_seed {
        Some(seed) => writeln!(out, "- Seed: {seed}"),
        None => writeln!(out, "- Seed: (none)"),
    }
}
