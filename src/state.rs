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

//! Connection lifecycle states for the feed client.

use strum::{AsRefStr, Display};

/// The lifecycle state of a feed connection.
///
/// Exactly one state is live per client. It is mutated only by the client's
/// internal actor and mirrored into an atomic for lock-free reads, so the
/// legal transition graph is enforced in a single place.
#[repr(u8)]
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ConnectionState {
    /// No transport is active (initial state, and terminal for manual shutdown).
    Closed = 0,
    /// A transport open is in flight.
    Connecting = 1,
    /// The transport is established and frames are flowing.
    Open = 2,
    /// A close has been requested and is in flight.
    Closing = 3,
}

impl ConnectionState {
    pub(crate) const fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Connecting,
            2 => Self::Open,
            3 => Self::Closing,
            _ => Self::Closed,
        }
    }

    /// Returns `true` if the connection is established.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns `true` if no transport is active.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
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
    #[case(ConnectionState::Closed)]
    #[case(ConnectionState::Connecting)]
    #[case(ConnectionState::Open)]
    #[case(ConnectionState::Closing)]
    fn test_atomic_repr_round_trip(#[case] state: ConnectionState) {
        assert_eq!(ConnectionState::from_u8(state.as_u8()), state);
    }

    #[rstest]
    fn test_unknown_repr_maps_to_closed() {
        assert_eq!(ConnectionState::from_u8(42), ConnectionState::Closed);
    }

    #[rstest]
    fn test_predicates() {
        assert!(ConnectionState::Open.is_open());
        assert!(!ConnectionState::Connecting.is_open());
        assert!(ConnectionState::Closed.is_closed());
        assert!(!ConnectionState::Closing.is_closed());
    }
}
