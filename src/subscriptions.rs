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

//! Subscription state tracking for topic replay across reconnects.

use std::sync::Arc;

use dashmap::DashMap;
use ustr::Ustr;

/// The set of topics the caller currently wants active.
///
/// A set, not a log: duplicate subscribes are membership no-ops (the control
/// frame is still sent so the remote side must tolerate duplicates). The set
/// persists across reconnects and is only mutated through the client's
/// state machine; cheap clones share the same underlying state.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionState {
    topics: Arc<DashMap<Ustr, ()>>,
}

impl SubscriptionState {
    /// Creates a new empty [`SubscriptionState`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a topic, returning `true` if it was not already present.
    pub fn subscribe(&self, topic: &str) -> bool {
        self.topics.insert(Ustr::from(topic), ()).is_none()
    }

    /// Removes a topic, returning `true` if it was present.
    pub fn unsubscribe(&self, topic: &str) -> bool {
        self.topics.remove(&Ustr::from(topic)).is_some()
    }

    /// Returns `true` if the topic is currently desired.
    #[must_use]
    pub fn contains(&self, topic: &str) -> bool {
        self.topics.contains_key(&Ustr::from(topic))
    }

    /// Returns the number of desired topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns `true` if no topics are desired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Returns the full current set, sorted, for the combined resubscribe
    /// frame sent on every transition into the open state.
    #[must_use]
    pub fn replay_topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self
            .topics
            .iter()
            .map(|entry| entry.key().to_string())
            .collect();
        topics.sort();
        topics
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
