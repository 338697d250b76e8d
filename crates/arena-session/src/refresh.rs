//! Single-flight session refresh.
//!
//! Every request records the refresh generation before it is sent. When it
//! comes back 401, the caller hands that generation to [`RefreshGate::run`]:
//! if another caller has attempted a refresh since, the refresh is skipped
//! and the caller shares that attempt's outcome. A success means the request
//! retries with the cookies that refresh installed; a failure means the
//! session is gone for everyone who was waiting on it.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::AuthError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Outcome {
    #[default]
    Refreshed,
    Expired,
}

#[derive(Debug, Default)]
pub struct RefreshGate {
    last: Mutex<Outcome>,
    generation: AtomicU64,
}

impl RefreshGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of refresh attempts so far, successful or not.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Run `refresh` unless an attempt newer than `seen` already finished.
    ///
    /// Concurrent callers holding the same `seen` serialize on the gate; the
    /// first one refreshes and the rest reuse its outcome.
    ///
    /// # Errors
    ///
    /// The caller that ran the refresh gets whatever `refresh` returned.
    /// Callers that reused a failed attempt get `AuthError::SessionExpired`.
    pub async fn run<F, Fut>(&self, seen: u64, refresh: F) -> Result<(), AuthError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), AuthError>>,
    {
        let mut last = self.last.lock().await;
        if self.generation() != seen {
            tracing::debug!(
                seen,
                current = self.generation(),
                outcome = ?*last,
                "reusing concurrent refresh"
            );
            return match *last {
                Outcome::Refreshed => Ok(()),
                Outcome::Expired => Err(AuthError::SessionExpired),
            };
        }

        let result = refresh().await;
        *last = if result.is_ok() {
            Outcome::Refreshed
        } else {
            Outcome::Expired
        };
        self.generation.fetch_add(1, Ordering::AcqRel);
        result
    }
}
