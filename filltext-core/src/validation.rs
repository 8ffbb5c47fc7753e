//! Bounded validation of generated lists.
//!
//! ```text
//!            new list                 within tolerance
//!   Idle ──────────────▶ Validating ─────────────────▶ Idle
//!                          │    ▲
//!             mismatch     │    │ regenerated list
//!     (attempts < max)     ▼    │
//!                        Regenerating
//!
//!   Validating ── mismatch, attempts == max ──▶ GivenUp (one notice, counter reset)
//! ```
//!
//! Only lists are validated. Headings and paragraphs are exact by
//! construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::count::count_list_items;
use crate::{GeneratedContent, Notice, Shape};

/// Validator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    /// Nothing in flight.
    Idle,
    /// Counting a freshly generated list.
    Validating,
    /// Waiting for a regeneration.
    Regenerating,
    /// Gave up and kept the last list.
    GivenUp,
}

/// What the caller should do after a validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The content is acceptable.
    Accepted {
        /// Counted items (or the measured size for non-list shapes).
        measured: usize,
    },
    /// Regenerate after `delay`.
    Retry {
        /// Failed validations so far for this request.
        attempt: u32,
        /// Delay before regenerating.
        delay: Duration,
    },
    /// Keep the content as is and show the notice.
    GaveUp {
        /// The single notice for this request.
        notice: Notice,
    },
}

/// Counts list items and decides between accepting, retrying and giving up.
#[derive(Debug, Clone)]
pub struct ListValidator {
    config: ValidationConfig,
    state: ValidationState,
    attempts: u32,
}

impl Default for ListValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl ListValidator {
    /// Create a validator.
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            state: ValidationState::Idle,
            attempts: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ValidationState {
        self.state
    }

    /// Failed validations for the current request.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Forget the current request.
    pub fn reset(&mut self) {
        self.state = ValidationState::Idle;
        self.attempts = 0;
    }

    /// Check freshly generated content.
    pub fn validate(&mut self, content: &GeneratedContent) -> ValidationOutcome {
        if content.shape != Shape::List {
            self.reset();
            return ValidationOutcome::Accepted {
                measured: content.measured_size,
            };
        }

        self.state = ValidationState::Validating;
        let measured = count_list_items(&content.text);
        let tolerance = self.config.tolerance(content.target_size);

        if measured.abs_diff(content.target_size) <= tolerance {
            tracing::debug!(
                expected = content.target_size,
                measured,
                tolerance,
                "List validated"
            );
            self.reset();
            return ValidationOutcome::Accepted { measured };
        }

        self.attempts += 1;
        if self.attempts >= self.config.max_attempts {
            tracing::warn!(
                expected = content.target_size,
                measured,
                attempts = self.attempts,
                "Giving up on exact list item count"
            );
            self.state = ValidationState::GivenUp;
            self.attempts = 0;
            return ValidationOutcome::GaveUp {
                notice: Notice::ListBestEffort {
                    expected: content.target_size,
                    found: measured,
                },
            };
        }

        tracing::debug!(
            expected = content.target_size,
            measured,
            attempt = self.attempts,
            "List item count mismatch, regenerating"
        );
        self.state = ValidationState::Regenerating;
        ValidationOutcome::Retry {
            attempt: self.attempts,
            delay: self.config.retry_delay(),
        }
    }
}
