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

//! Bounded FIFO buffer for outbound payloads while disconnected.

use std::collections::VecDeque;

/// A capacity-bounded FIFO of pending outbound payloads.
///
/// Overflow policy: drop-newest. A push onto a full queue rejects the incoming
/// payload; retained entries are never evicted. The queue is drained exactly
/// once per transition into the open state, in insertion order.
#[derive(Debug)]
pub struct MessageQueue {
    inner: VecDeque<String>,
    capacity: usize,
}

impl MessageQueue {
    /// Creates a new [`MessageQueue`] with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of retained payloads.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of payloads currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no payloads are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends a payload, returning `false` if the queue is full (the payload
    /// is dropped).
    pub fn push(&mut self, payload: String) -> bool {
        if self.inner.len() >= self.capacity {
            return false;
        }
        self.inner.push_back(payload);
        true
    }

    /// Empties the queue, returning the retained payloads in insertion order.
    pub fn drain(&mut self) -> Vec<String> {
        self.inner.drain(..).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
