// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded exponential backoff for the store's transient-fault layer (§5, §4.9).
//!
//! Only [`StoreError::Transient`](crate::StoreError) is retried; every other
//! error is a structural rejection and is returned to the caller immediately.

use std::thread;
use std::time::Duration;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self { max_retries, base_delay }
    }

    /// Run `op`, retrying transient faults with exponential backoff
    /// (`base * 2^attempt`) up to `max_retries` times.
    pub fn run<T>(&self, mut op: impl FnMut() -> Result<T, StoreError>) -> Result<T, StoreError> {
        let mut attempt = 0;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    let delay = self.base_delay * 2u32.pow(attempt);
                    tracing::warn!(attempt, ?delay, error = %err, "retrying transient store fault");
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(20))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn succeeds_without_retry_when_op_succeeds_first_try() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let result = policy.run(|| Ok::<_, StoreError>(42));
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn retries_transient_faults_up_to_the_limit() {
        let policy = RetryPolicy::new(2, Duration::from_millis(1));
        let attempts = Cell::new(0);
        let result = policy.run(|| {
            attempts.set(attempts.get() + 1);
            Err::<u32, _>(StoreError::Transient("blip".into()))
        });
        assert!(result.is_err());
        assert_eq!(attempts.get(), 3); // initial + 2 retries
    }

    #[test]
    fn never_retries_non_transient_errors() {
        let policy = RetryPolicy::new(5, Duration::from_millis(1));
        let attempts = Cell::new(0);
        let result = policy.run(|| {
            attempts.set(attempts.get() + 1);
            Err::<u32, _>(StoreError::NotClaimed)
        });
        assert!(result.is_err());
        assert_eq!(attempts.get(), 1);
    }
}
