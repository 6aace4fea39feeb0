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

//! Configuration for feed client connections.
//!
//! # Reconnection Strategy
//!
//! The default configuration uses unlimited reconnection attempts
//! (`reconnect_max_attempts: None`). This is intentional for trading systems
//! because:
//! - Venues may be down for extended periods but eventually recover.
//! - Exponential backoff already prevents resource waste.
//! - Automatic recovery can be useful when manual intervention is not desirable.
//!
//! Use `Some(n)` primarily for testing, development, or non-critical connections.

use std::time::Duration;

/// Configuration for a feed client connection.
///
/// Captured immutably at construction; the client never re-reads it.
#[derive(Clone, Debug)]
pub struct FeedClientConfig {
    /// Whether to reconnect automatically after an unexpected close.
    pub reconnect: bool,
    /// The initial reconnection delay (milliseconds).
    pub reconnect_delay_initial_ms: u64,
    /// The maximum reconnection delay (milliseconds) for exponential backoff.
    pub reconnect_delay_max_ms: u64,
    /// The exponential backoff factor for reconnection delays.
    pub reconnect_backoff_factor: f64,
    /// The maximum number of reconnection attempts before giving up.
    /// - `None`: Unlimited reconnection attempts (default, recommended for production).
    /// - `Some(n)`: After n failed attempts, remain closed until a manual reconnect.
    pub reconnect_max_attempts: Option<u32>,
    /// The heartbeat probe interval (milliseconds). Zero disables heartbeats.
    pub heartbeat_interval_ms: u64,
    /// The maximum number of outbound payloads retained while disconnected.
    pub queue_capacity: usize,
    /// Whether to queue outbound payloads while disconnected.
    pub queue_enabled: bool,
}

impl Default for FeedClientConfig {
    fn default() -> Self {
        Self {
            reconnect: true,
            reconnect_delay_initial_ms: 1_000,
            reconnect_delay_max_ms: 30_000,
            reconnect_backoff_factor: 2.0,
            reconnect_max_attempts: None,
            heartbeat_interval_ms: 5_000,
            queue_capacity: 100,
            queue_enabled: true,
        }
    }
}

impl FeedClientConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the heartbeat interval as a [`Duration`].
    #[must_use]
    pub const fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval_ms)
    }

    /// Returns the window after which an unacknowledged connection is stale.
    #[must_use]
    pub const fn stale_after(&self) -> Duration {
        Duration::from_millis(2 * self.heartbeat_interval_ms)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_defaults() {
        let config = FeedClientConfig::default();
        assert!(config.reconnect);
        assert_eq!(config.reconnect_delay_initial_ms, 1_000);
        assert_eq!(config.reconnect_delay_max_ms, 30_000);
        assert_eq!(config.reconnect_backoff_factor, 2.0);
        assert!(config.reconnect_max_attempts.is_none());
        assert_eq!(config.heartbeat_interval_ms, 5_000);
        assert_eq!(config.queue_capacity, 100);
        assert!(config.queue_enabled);
    }

    #[rstest]
    fn test_stale_window_is_twice_the_heartbeat_interval() {
        let config = FeedClientConfig {
            heartbeat_interval_ms: 1_000,
            ..Default::default()
        };
        assert_eq!(config.heartbeat_interval(), Duration::from_secs(1));
        assert_eq!(config.stale_after(), Duration::from_secs(2));
    }
}
