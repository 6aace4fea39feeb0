// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Exponential backoff for reconnection scheduling.

use std::time::Duration;

use crate::config::FeedClientConfig;

/// Computes reconnection delays as `min(base * factor^attempt, cap)`.
///
/// The attempt counter starts at zero, increments on every scheduled retry,
/// and resets only on a successful open. Delays are deterministic (no jitter)
/// and non-decreasing in the attempt number.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    base: Duration,
    cap: Duration,
    factor: f64,
    max_attempts: Option<u32>,
    attempts: u32,
}

impl ExponentialBackoff {
    /// Creates a new [`ExponentialBackoff`] instance.
    #[must_use]
    pub const fn new(
        base: Duration,
        cap: Duration,
        factor: f64,
        max_attempts: Option<u32>,
    ) -> Self {
        Self {
            base,
            cap,
            factor,
            max_attempts,
            attempts: 0,
        }
    }

    /// Creates a backoff from the reconnect section of a client config.
    #[must_use]
    pub const fn from_config(config: &FeedClientConfig) -> Self {
        Self::new(
            Duration::from_millis(config.reconnect_delay_initial_ms),
            Duration::from_millis(config.reconnect_delay_max_ms),
            config.reconnect_backoff_factor,
            config.reconnect_max_attempts,
        )
    }

    /// Returns the number of retries scheduled since the last reset.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns `true` once the maximum number of attempts has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        match self.max_attempts {
            Some(max) => self.attempts >= max,
            None => false,
        }
    }

    /// Returns the delay for the given attempt number.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.factor.powi(attempt.min(i32::MAX as u32) as i32);
        let delay_ms = (self.base.as_millis() as f64 * factor) as u64;
        Duration::from_millis(delay_ms).min(self.cap)
    }

    /// Consumes one attempt and returns the delay to wait before retrying.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.delay_for(self.attempts);
        self.attempts = self.attempts.saturating_add(1);
        delay
    }

    /// Resets the attempt counter (called on every successful open).
    pub fn reset(&mut self) {
        self.attempts = 0;
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
