//! Process-wide provider, configured from the environment on first use.
//!
//! Each free function locks the shared provider for a single draw. Use
//! [`with_provider`] to hold the lock across a sequence, e.g. when replaying a
//! seed while other tests run in parallel.

use super::RandomValueProvider;
use crate::error::Result;
use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

static PROVIDER: Lazy<Mutex<RandomValueProvider>> =
    Lazy::new(|| Mutex::new(RandomValueProvider::from_env()));

pub fn with_provider<R, F>(f: F) -> R
where
    F: FnOnce(&mut RandomValueProvider) -> R,
{
    let mut provider = PROVIDER.lock();
    f(&mut *provider)
}

pub fn seed() -> u64 {
    PROVIDER.lock().seed()
}

pub fn reseed(seed: u64) {
    PROVIDER.lock().reseed(seed)
}

pub fn random_text(length: usize) -> String {
    PROVIDER.lock().random_text(length)
}

pub fn random_int() -> i32 {
    PROVIDER.lock().random_int()
}

pub fn random_int_below(max: i32) -> Result<i32> {
    PROVIDER.lock().random_int_below(max)
}

pub fn random_long() -> i64 {
    PROVIDER.lock().random_long()
}

pub fn random_long_below(max: i64) -> Result<i64> {
    PROVIDER.lock().random_long_below(max)
}

pub fn random_double(max: f64) -> f64 {
    PROVIDER.lock().random_double(max)
}

pub fn random_boolean() -> bool {
    PROVIDER.lock().random_boolean()
}

pub fn unique_random_long() -> Result<i64> {
    PROVIDER.lock().unique_random_long()
}

pub fn unique_random_integer() -> Result<i32> {
    PROVIDER.lock().unique_random_integer()
}

pub fn random_big_decimal(scale_factor: u32) -> BigDecimal {
    PROVIDER.lock().random_big_decimal(scale_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shared_reseed_replays() {
        let draw = |p: &mut RandomValueProvider| {
            p.reseed(99);
            (p.random_text(8), p.random_long(), p.random_int())
        };
        let first = with_provider(draw);
        let second = with_provider(draw);
        assert_eq!(first, second);
    }

    #[test]
    fn test_shared_unique_values() {
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(unique_random_long().unwrap()));
        }
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(unique_random_integer().unwrap()));
        }
    }

    #[test]
    fn test_shared_draws_in_range() {
        assert_ne!(seed(), 0);
        assert!(random_int() >= 1);
        assert!(random_long() > 0);
        assert!((0..5).contains(&random_int_below(5).unwrap()));
        assert!(random_long_below(0).is_err());
        assert!(random_long_below(i64::MAX).unwrap() < i64::MAX);
        assert!((0.0..1.0).contains(&random_double(1.0)));
        assert_eq!(random_text(4).len(), 4);
        assert!(random_big_decimal(10) >= BigDecimal::from(0));
        let _ = random_boolean();
    }
}
