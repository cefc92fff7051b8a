//! Error context
//!
//! Carries the failure state of a sequence of adapted calls. The caller
//! creates it before the first call and drops it after the last one; the
//! adapters only ever borrow it mutably, so a context can never be shared
//! between two in-flight calls.

use crate::config::GuardConfig;
use crate::error::{Failure, FailureKind, GuardResult};

#[derive(Debug, Default)]
pub struct ErrorContext {
    /// Most recent absorbed failure
    last_failure: Option<Failure>,
    /// Failures absorbed since creation or the last reset
    failures: usize,
    config: GuardConfig,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GuardConfig) -> Self {
        Self {
            last_failure: None,
            failures: 0,
            config,
        }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// The most recent failure, if any.
    ///
    /// Successful calls do not clear it; check the sentinel first.
    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }

    /// Message of the most recent failure
    pub fn last_message(&self) -> Option<&str> {
        self.last_failure.as_ref().map(|f| f.message.as_str())
    }

    pub fn has_failed(&self) -> bool {
        self.last_failure.is_some()
    }

    pub fn failure_count(&self) -> usize {
        self.failures
    }

    /// Take the stored failure, leaving the context clear
    pub fn take_failure(&mut self) -> Option<Failure> {
        self.last_failure.take()
    }

    /// Forget the stored failure and reset the counter
    pub fn clear(&mut self) {
        self.last_failure = None;
        self.failures = 0;
    }

    /// Turn a handle-or-sentinel value into a `Result`.
    ///
    /// `None` maps to the stored failure. A sentinel produced without a
    /// recorded failure (an empty outline) maps to a "no result" failure
    /// attributed to `operation`.
    pub fn check<T>(&mut self, operation: &'static str, value: Option<T>) -> GuardResult<T> {
        match value {
            Some(v) => Ok(v),
            None => Err(self.take_failure().unwrap_or(Failure {
                operation,
                kind: FailureKind::Library,
                message: "no result".to_string(),
            })),
        }
    }

    pub(crate) fn record(&mut self, failure: Failure) {
        self.failures += 1;
        self.last_failure = Some(failure);
    }
}
