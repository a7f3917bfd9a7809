use std::env;

pub const SEED_ENV: &str = "FIXTURE_RAND_SEED";
pub const MAX_ATTEMPTS_ENV: &str = "FIXTURE_RAND_MAX_ATTEMPTS";

/// Upper limit on draws made by a single rejection loop.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// `None` (or `Some(0)`) means seed from the clock.
    pub seed: Option<u64>,
    pub max_attempts: usize,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, mainly so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() {
                match raw.parse::<u64>() {
                    Ok(0) => {}
                    Ok(seed) => config.seed = Some(seed),
                    Err(e) => {
                        tracing::warn!("ignoring {}={:?}: {}", SEED_ENV, raw, e);
                    }
                }
            }
        }

        if let Some(raw) = lookup(MAX_ATTEMPTS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(0) => {}
                Ok(attempts) => config.max_attempts = attempts,
                Err(e) => {
                    tracing::warn!("ignoring {}={:?}: {}", MAX_ATTEMPTS_ENV, raw, e);
                }
            }
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = if seed == 0 { None } else { Some(seed) };
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
