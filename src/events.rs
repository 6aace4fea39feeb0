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

//! Typed event bus for caller-facing client events.
//!
//! Listeners are invoked synchronously, in registration order per event kind,
//! with each invocation isolated: a panicking listener is reported and never
//! blocks subsequent listeners or feeds back into the state machine.

use std::{
    fmt,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use dashmap::DashMap;
use strum::{AsRefStr, Display};

use crate::{error::FeedClientError, messages::FeedMessage, state::ConnectionState};

/// A caller-facing event emitted by the feed client.
#[derive(Clone, Debug)]
pub enum FeedEvent {
    /// The connection is established and ready.
    Connect,
    /// The connection closed.
    Disconnect {
        code: u16,
        reason: String,
        was_clean: bool,
    },
    /// The connection was re-established after a failure.
    Reconnect {
        /// The 1-based count of retries consumed when the open succeeded.
        attempt: u32,
    },
    /// An inbound data frame.
    Message(FeedMessage),
    /// A recoverable or fatal client error.
    Error(FeedClientError),
    /// The connection state changed.
    StateChange {
        old: ConnectionState,
        new: ConnectionState,
    },
}

impl FeedEvent {
    /// Returns the kind used to route this event to listeners.
    #[must_use]
    pub const fn kind(&self) -> FeedEventKind {
        match self {
            Self::Connect => FeedEventKind::Connect,
            Self::Disconnect { .. } => FeedEventKind::Disconnect,
            Self::Reconnect { .. } => FeedEventKind::Reconnect,
            Self::Message(_) => FeedEventKind::Message,
            Self::Error(_) => FeedEventKind::Error,
            Self::StateChange { .. } => FeedEventKind::StateChange,
        }
    }
}

/// The kind of a [`FeedEvent`], used as the listener registry key.
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum FeedEventKind {
    Connect,
    Disconnect,
    Reconnect,
    Message,
    Error,
    StateChange,
}

/// A registered event listener callback.
pub type EventHandler = Arc<dyn Fn(&FeedEvent) + Send + Sync>;

/// Handle identifying a registered listener, passed to [`EventBus::off`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListenerId {
    kind: FeedEventKind,
    seq: u64,
}

impl ListenerId {
    /// Returns the event kind this listener was registered for.
    #[must_use]
    pub const fn kind(&self) -> FeedEventKind {
        self.kind
    }
}

/// Mapping from event kind to an ordered list of subscriber callbacks.
pub struct EventBus {
    handlers: DashMap<FeedEventKind, Vec<(u64, EventHandler)>>,
    next_seq: AtomicU64,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("kinds", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new empty [`EventBus`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: DashMap::new(),
            next_seq: AtomicU64::new(1),
        }
    }

    /// Registers a listener for the given event kind.
    pub fn on(&self, kind: FeedEventKind, handler: EventHandler) -> ListenerId {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.handlers.entry(kind).or_default().push((seq, handler));
        ListenerId { kind, seq }
    }

    /// Removes a listener, returning `true` if it was registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let Some(mut entry) = self.handlers.get_mut(&id.kind) else {
            return false;
        };
        let before = entry.len();
        entry.retain(|(seq, _)| *seq != id.seq);
        before != entry.len()
    }

    /// Returns the number of listeners registered for the given kind.
    #[must_use]
    pub fn listener_count(&self, kind: FeedEventKind) -> usize {
        self.handlers.get(&kind).map_or(0, |entry| entry.len())
    }

    /// Emits an event to all listeners of its kind, in registration order.
    ///
    /// Each invocation is wrapped so a panicking listener cannot block the
    /// remaining listeners.
    pub fn emit(&self, event: &FeedEvent) {
        // Snapshot the handlers so a listener registering or removing
        // listeners reentrantly cannot deadlock the registry.
        let handlers: Vec<(u64, EventHandler)> = match self.handlers.get(&event.kind()) {
            Some(entry) => entry.value().clone(),
            None => return,
        };

        for (seq, handler) in handlers {
            if catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                let error = FeedClientError::Listener(format!(
                    "listener {seq} panicked handling {} event",
                    event.kind(),
                ));
                tracing::error!(%error, "Event listener failure isolated");
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
