//! Seedable random values for test fixtures.
//!
//! A [`RandomValueProvider`] owns its generator and the sets backing the
//! `unique_*` draws, so each test can build one with its own seed. The
//! [`global`] module keeps a shared instance for code that wants a single
//! generator per process.

pub mod global;

use crate::config::ProviderConfig;
use crate::error::{RandomError, Result};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::f64::consts::TAU;

/// Letters A-Z, a-z and a space.
pub const TEXT_ALPHABET: &[u8; 53] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz ";

/// `random_int()` draws from `[0, INT_SPAN)` and adds one.
pub const INT_SPAN: i32 = 1 << 20;

#[derive(Debug)]
pub struct RandomValueProvider {
    rng: StdRng,
    seed: u64,
    max_attempts: usize,
    issued_longs: HashSet<i64>,
    issued_integers: HashSet<i32>,
}

impl RandomValueProvider {
    /// A seed of `0` seeds from the clock instead.
    pub fn new(seed: u64) -> Self {
        Self::from_config(&ProviderConfig::default().with_seed(seed))
    }

    pub fn from_time() -> Self {
        Self::from_config(&ProviderConfig::default())
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        let seed = effective_seed(config.seed.unwrap_or(0));
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            max_attempts: config.max_attempts.max(1),
            issued_longs: HashSet::new(),
            issued_integers: HashSet::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_config(&ProviderConfig::from_env())
    }

    /// The seed currently driving the generator. Log it to replay a failing test.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Replaces the generator with one seeded by exactly `seed`, zero included.
    /// The uniqueness sets are kept.
    pub fn reseed(&mut self, seed: u64) {
        tracing::debug!("reseeding random provider with {}", seed);
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn random_text(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| TEXT_ALPHABET[self.rng.gen_range(0..TEXT_ALPHABET.len())] as char)
            .collect()
    }

    /// Uniform in `[1, 2^20]`.
    pub fn random_int(&mut self) -> i32 {
        self.rng.gen_range(0..INT_SPAN) + 1
    }

    /// Uniform in `[0, max)`.
    pub fn random_int_below(&mut self, max: i32) -> Result<i32> {
        if max <= 0 {
            return Err(RandomError::invalid_bound(max));
        }
        Ok(self.rng.gen_range(0..max))
    }

    /// Strictly positive: the magnitude of a signed 64-bit draw.
    pub fn random_long(&mut self) -> i64 {
        positive_magnitude(self.rng.gen::<i64>())
    }

    /// Rejection-samples [`random_long`](Self::random_long) until a draw falls in
    /// `[0, max)`.
    ///
    /// Draws are spread over `[1, i64::MAX]`, so a small `max` is rarely hit and
    /// the loop will usually run into the attempt cap.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidBound`] when `max <= 0`. [`RandomError::Exhausted`]
    /// when no draw lands below `max` within the attempt cap, which is the usual
    /// outcome for bounds like `1000` (after the default ten million draws).
    pub fn random_long_below(&mut self, max: i64) -> Result<i64> {
        if max <= 0 {
            return Err(RandomError::invalid_bound(max));
        }
        self.sample_until("random_long_below", Self::random_long, |_, v| *v < max)
    }

    /// Uniform in `[0, max)`.
    pub fn random_double(&mut self, max: f64) -> f64 {
        self.rng.gen::<f64>() * max
    }

    pub fn random_boolean(&mut self) -> bool {
        self.rng.gen()
    }

    pub fn unique_random_long(&mut self) -> Result<i64> {
        let value = self.sample_until("unique_random_long", Self::random_long, |p, v| {
            !p.issued_longs.contains(v)
        })?;
        self.issued_longs.insert(value);
        Ok(value)
    }

    /// Only `2^20` distinct values exist, after which this returns
    /// [`RandomError::Exhausted`].
    pub fn unique_random_integer(&mut self) -> Result<i32> {
        let value = self.sample_until("unique_random_integer", Self::random_int, |p, v| {
            !p.issued_integers.contains(v)
        })?;
        self.issued_integers.insert(value);
        Ok(value)
    }

    /// `|gaussian| * scale_factor`, rounded half-up to two fractional digits.
    pub fn random_big_decimal(&mut self, scale_factor: u32) -> BigDecimal {
        let magnitude = self.next_gaussian().abs() * f64::from(scale_factor);
        round_half_up(magnitude, 2)
    }

    pub fn random_choice<'a, T>(&mut self, choices: &'a [T]) -> Option<&'a T> {
        if choices.is_empty() {
            None
        } else {
            Some(&choices[self.rng.gen_range(0..choices.len())])
        }
    }

    pub fn unique_longs_issued(&self) -> usize {
        self.issued_longs.len()
    }

    pub fn unique_integers_issued(&self) -> usize {
        self.issued_integers.len()
    }

    // Box-Muller; the second variate is discarded.
    fn next_gaussian(&mut self) -> f64 {
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }

    fn sample_until<T, A>(&mut self, op: &str, draw: fn(&mut Self) -> T, accept: A) -> Result<T>
    where
        A: Fn(&Self, &T) -> bool,
    {
        for attempt in 1..=self.max_attempts {
            let value = draw(self);
            if accept(self, &value) {
                if attempt > 1 {
                    tracing::trace!("{} accepted after {} draws", op, attempt);
                }
                return Ok(value);
            }
        }

        tracing::warn!(
            "{} gave up after {} draws (seed {})",
            op,
            self.max_attempts,
            self.seed
        );
        Err(RandomError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for RandomValueProvider {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Absolute value that never yields zero and has an answer for `i64::MIN`.
pub fn positive_magnitude(raw: i64) -> i64 {
    match raw.checked_abs() {
        Some(0) => 1,
        Some(v) => v,
        None => i64::MAX,
    }
}

/// Rounds the exact binary value of `value` (not its shortest decimal form) to
/// `scale` fractional digits. Non-finite input yields zero.
pub fn round_half_up(value: f64, scale: i64) -> BigDecimal {
    exact_decimal(value).with_scale_round(scale, RoundingMode::HalfUp)
}

// mantissa * 2^exp, with 2^-k written as 5^k / 10^k.
fn exact_decimal(value: f64) -> BigDecimal {
    if !value.is_finite() || value == 0.0 {
        return BigDecimal::from(0);
    }

    let (mantissa, exponent, sign) = Float::integer_decode(value);
    let mut digits = BigInt::from(mantissa);
    if sign < 0 {
        digits = -digits;
    }

    if exponent >= 0 {
        BigDecimal::new(digits * BigInt::from(2u8).pow(exponent as u32), 0)
    } else {
        let k = u32::from(exponent.unsigned_abs());
        BigDecimal::new(digits * BigInt::from(5u8).pow(k), i64::from(k))
    }
}

fn effective_seed(seed: u64) -> u64 {
    if seed != 0 {
        tracing::debug!("seeding random provider with {}", seed);
        return seed;
    }

    let now = chrono::Utc::now();
    let seed = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64;
    let seed = seed.max(1);
    tracing::debug!("seeding random provider from clock with {}", seed);
    seed
}
