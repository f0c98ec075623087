//! Bernoulli flip simulation against a known true bias.

use rand::Rng;

/// An observed sequence of coin flips with derived counts.
///
/// Produced once by [`simulate_flips`] and read-only afterward; the counts
/// always satisfy `heads + tails == flips.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSequence {
    /// Outcome per trial, true = heads, in draw order.
    pub flips: Vec<bool>,
    /// Number of heads.
    pub heads: u64,
    /// Number of tails.
    pub tails: u64,
}

/// Simulate `n` independent flips of a coin with P(Heads) = `true_prob`.
///
/// Each trial consumes exactly one uniform draw in [0,1) from `rng`, in
/// order; the outcome is heads when the draw is strictly below `true_prob`.
/// A fixed seed therefore reproduces the sequence bit-for-bit.
pub fn simulate_flips<R: Rng>(n: usize, true_prob: f64, rng: &mut R) -> FlipSequence {
    let mut flips = Vec::with_capacity(n);
    let mut heads = 0u64;
    for _ in 0..n {
        let is_head = rng.random::<f64>() < true_prob;
        flips.push(is_head);
        if is_head {
            heads += 1;
        }
    }
    let tails = n as u64 - heads;
    FlipSequence { flips, heads, tails }
}
