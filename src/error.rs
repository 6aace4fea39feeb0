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

//! Feed client error types.

use std::fmt;

/// Feed client error type.
///
/// Transport and staleness failures are recovered locally through the
/// reconnection path; exhaustion is surfaced to the caller once via the
/// `Error` event and requires a manual reconnect to resume.
#[derive(Clone, Debug)]
pub enum FeedClientError {
    /// Transport open or send failure.
    Transport(String),
    /// No heartbeat acknowledgement within the expected window.
    StaleConnection(String),
    /// The maximum number of reconnection attempts was reached.
    ExhaustedRetries {
        /// Consecutive attempts consumed before giving up.
        attempts: u32,
    },
    /// A subscriber callback panicked.
    Listener(String),
    /// Failed to serialize an outbound control frame.
    Parse(String),
}

impl fmt::Display for FeedClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Transport error: {msg}"),
            Self::StaleConnection(msg) => write!(f, "Stale connection: {msg}"),
            Self::ExhaustedRetries { attempts } => {
                write!(f, "Exhausted retries: gave up after {attempts} attempts")
            }
            Self::Listener(msg) => write!(f, "Listener error: {msg}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for FeedClientError {}

/// Result type for feed client operations.
pub type FeedClientResult<T> = Result<T, FeedClientError>;

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
