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

//! Resilient WebSocket feed client for live market data and execution updates.
//!
//! `feedlink` maintains a long-lived, subscription-based feed over an
//! unreliable transport. It provides the failure-recovery machinery a live
//! dashboard or trading node needs and nothing else:
//!
//! - A connection state machine (`Closed` / `Connecting` / `Open` / `Closing`)
//!   serialized through a single actor task.
//! - Automatic reconnection with deterministic exponential backoff and an
//!   optional attempt limit.
//! - Heartbeat probes with staleness detection: a connection that misses its
//!   liveness window is force-closed and re-established.
//! - A bounded FIFO queue for outbound payloads while disconnected, flushed in
//!   order on every reconnect.
//! - A subscription registry replayed as one combined subscribe frame after
//!   every reconnect.
//! - A typed event bus (`connect`, `disconnect`, `reconnect`, `message`,
//!   `error`, `state change`) with per-listener panic isolation.
//!
//! Topic payload schemas, endpoint authentication, and presentation are out of
//! scope; callers consume [`FeedEvent`]s and drive the client through its
//! public operations.

pub mod backoff;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod messages;
pub mod queue;
pub mod state;
pub mod subscriptions;
pub mod transport;

pub use crate::{
    backoff::ExponentialBackoff,
    client::FeedClient,
    config::FeedClientConfig,
    error::{FeedClientError, FeedClientResult},
    events::{EventBus, EventHandler, FeedEvent, FeedEventKind, ListenerId},
    messages::{ControlFrame, FeedMessage, WsOperation, close_code},
    queue::MessageQueue,
    state::ConnectionState,
    subscriptions::SubscriptionState,
    transport::{Connector, FrameReceiver, FrameSink, TungsteniteConnector, WsFrame},
};
