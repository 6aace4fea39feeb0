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

//! Resilient feed client with automatic reconnection, heartbeats, offline
//! queuing, and subscription replay.
//!
//! Two-layer architecture:
//! - Outer client: a thin, cloneable handle forwarding public operations as
//!   commands to the actor.
//! - Inner actor: a dedicated Tokio task owning the transport, timers, queue,
//!   and subscription registry; every state transition is serialized through
//!   its select loop, so no locking of core state is required.

use std::{
    future::Future,
    pin::Pin,
    sync::{
        Arc,
        atomic::{AtomicU8, AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::{mpsc, oneshot},
    time::{Instant, Interval, MissedTickBehavior},
};

use crate::{
    backoff::ExponentialBackoff,
    config::FeedClientConfig,
    error::{FeedClientError, FeedClientResult},
    events::{EventBus, FeedEvent, FeedEventKind, ListenerId},
    messages::{ControlFrame, FeedMessage, InboundKind, classify_text, close_code},
    queue::MessageQueue,
    state::ConnectionState,
    subscriptions::SubscriptionState,
    transport::{Connector, FrameReceiver, FrameSink, TungsteniteConnector, WsFrame},
};

/// Commands sent from the outer client to the inner actor.
#[derive(Debug)]
enum ClientCommand {
    Connect {
        ack: oneshot::Sender<()>,
    },
    Disconnect {
        code: u16,
        reason: String,
        ack: oneshot::Sender<()>,
    },
    Send {
        payload: String,
        ack: oneshot::Sender<bool>,
    },
    Subscribe {
        topics: Vec<String>,
        ack: oneshot::Sender<()>,
    },
    Unsubscribe {
        topics: Vec<String>,
        ack: oneshot::Sender<()>,
    },
}

/// Provides a resilient subscription-based feed over an unreliable transport.
///
/// The client maintains a single logical connection: it reconnects with
/// exponential backoff, detects stale connections through heartbeats, queues
/// outbound payloads while disconnected, and replays the full subscription
/// set after every reconnect. Callers observe connectivity exclusively
/// through events and the return value of [`send`](Self::send); asynchronous
/// completions never surface as errors from the public operations.
#[derive(Clone, Debug)]
pub struct FeedClient {
    url: String,
    config: FeedClientConfig,
    events: Arc<EventBus>,
    state: Arc<AtomicU8>,
    subscriptions: SubscriptionState,
    queued_len: Arc<AtomicUsize>,
    cmd_tx: mpsc::UnboundedSender<ClientCommand>,
}

impl FeedClient {
    /// Creates a new [`FeedClient`] instance over the production WebSocket
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn new(url: impl Into<String>, config: FeedClientConfig) -> anyhow::Result<Self> {
        Self::with_connector(url, config, Arc::new(TungsteniteConnector))
    }

    /// Creates a new [`FeedClient`] instance over the given connector.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn with_connector(
        url: impl Into<String>,
        config: FeedClientConfig,
        connector: Arc<dyn Connector>,
    ) -> anyhow::Result<Self> {
        if config.reconnect_backoff_factor < 1.0 {
            anyhow::bail!("`reconnect_backoff_factor` must be >= 1.0");
        }
        if config.reconnect && config.reconnect_delay_initial_ms == 0 {
            anyhow::bail!("`reconnect_delay_initial_ms` must be non-zero when reconnect is enabled");
        }

        let url = url.into();
        let events = Arc::new(EventBus::new());
        let state = Arc::new(AtomicU8::new(ConnectionState::Closed.as_u8()));
        let subscriptions = SubscriptionState::new();
        let queued_len = Arc::new(AtomicUsize::new(0));
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let actor = ClientActor::new(
            url.clone(),
            config.clone(),
            connector,
            events.clone(),
            state.clone(),
            subscriptions.clone(),
            queued_len.clone(),
            cmd_rx,
        );
        tokio::spawn(actor.run());

        Ok(Self {
            url,
            config,
            events,
            state,
            subscriptions,
            queued_len,
            cmd_tx,
        })
    }

    /// Returns the URL being used by the client.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns the configuration captured at construction.
    #[must_use]
    pub const fn config(&self) -> &FeedClientConfig {
        &self.config
    }

    /// Returns the current connection state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Relaxed))
    }

    /// Returns `true` if the connection is established.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state().is_open()
    }

    /// Returns the number of currently desired topics.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns the currently desired topics, sorted.
    #[must_use]
    pub fn subscriptions(&self) -> Vec<String> {
        self.subscriptions.replay_topics()
    }

    /// Returns the number of payloads queued while disconnected.
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queued_len.load(Ordering::Relaxed)
    }

    /// Asks the transport to open a connection.
    ///
    /// Idempotent: a no-op while already connecting or open. The call returns
    /// once the attempt is initiated; completion is observed through the
    /// `Connect` and `Error` events.
    pub async fn connect(&self) {
        let (ack, rx) = oneshot::channel();
        self.command(ClientCommand::Connect { ack });
        let _ = rx.await;
    }

    /// Closes the connection and suppresses automatic reconnection.
    ///
    /// Cancels the heartbeat and any pending reconnection timer as part of the
    /// same operation: no timer fires after this call returns. The retry
    /// counter is reset so a later manual [`connect`](Self::connect) starts
    /// fresh.
    pub async fn disconnect(&self, code: u16, reason: &str) {
        let (ack, rx) = oneshot::channel();
        self.command(ClientCommand::Disconnect {
            code,
            reason: reason.to_string(),
            ack,
        });
        let _ = rx.await;
    }

    /// Sends a payload, returning `true` if it was transmitted immediately.
    ///
    /// While not open the payload is queued when queueing is enabled and
    /// capacity remains (returning `false`), otherwise dropped (also `false`).
    pub async fn send(&self, payload: impl Into<String>) -> bool {
        let (ack, rx) = oneshot::channel();
        self.command(ClientCommand::Send {
            payload: payload.into(),
            ack,
        });
        rx.await.unwrap_or(false)
    }

    /// Adds the given topics to the subscription registry and sends a
    /// subscribe control frame (queued if offline).
    pub async fn subscribe(&self, topics: Vec<String>) {
        let (ack, rx) = oneshot::channel();
        self.command(ClientCommand::Subscribe { topics, ack });
        let _ = rx.await;
    }

    /// Removes the given topics from the subscription registry and sends an
    /// unsubscribe control frame (queued if offline).
    pub async fn unsubscribe(&self, topics: Vec<String>) {
        let (ack, rx) = oneshot::channel();
        self.command(ClientCommand::Unsubscribe { topics, ack });
        let _ = rx.await;
    }

    /// Registers a listener for the given event kind.
    ///
    /// Listeners are invoked synchronously in registration order; a panicking
    /// listener is isolated from the others.
    pub fn on<F>(&self, kind: FeedEventKind, handler: F) -> ListenerId
    where
        F: Fn(&FeedEvent) + Send + Sync + 'static,
    {
        self.events.on(kind, Arc::new(handler))
    }

    /// Removes a listener, returning `true` if it was registered.
    pub fn off(&self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    fn command(&self, cmd: ClientCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            tracing::warn!("Client actor not running, command dropped");
        }
    }
}

type ConnectFuture =
    Pin<Box<dyn Future<Output = FeedClientResult<(Box<dyn FrameSink>, FrameReceiver)>> + Send>>;

/// The actor event selected on each loop iteration.
enum ActorEvent {
    Command(Option<ClientCommand>),
    Connected(FeedClientResult<(Box<dyn FrameSink>, FrameReceiver)>),
    Frame(Option<WsFrame>),
    HeartbeatTick,
    ReconnectTimer,
}

struct ClientActor {
    url: String,
    config: FeedClientConfig,
    connector: Arc<dyn Connector>,
    events: Arc<EventBus>,
    state: ConnectionState,
    shared_state: Arc<AtomicU8>,
    subscriptions: SubscriptionState,
    queue: MessageQueue,
    queued_len: Arc<AtomicUsize>,
    backoff: ExponentialBackoff,
    cmd_rx: mpsc::UnboundedReceiver<ClientCommand>,
    sink: Option<Box<dyn FrameSink>>,
    frames: Option<FrameReceiver>,
    connect_fut: Option<ConnectFuture>,
    reconnect_sleep: Option<Pin<Box<tokio::time::Sleep>>>,
    heartbeat: Option<Interval>,
    last_ack: Instant,
    manual_close: bool,
}

impl ClientActor {
    #[allow(clippy::too_many_arguments)]
    fn new(
        url: String,
        config: FeedClientConfig,
        connector: Arc<dyn Connector>,
        events: Arc<EventBus>,
        shared_state: Arc<AtomicU8>,
        subscriptions: SubscriptionState,
        queued_len: Arc<AtomicUsize>,
        cmd_rx: mpsc::UnboundedReceiver<ClientCommand>,
    ) -> Self {
        let backoff = ExponentialBackoff::from_config(&config);
        let queue = MessageQueue::new(config.queue_capacity);

        Self {
            url,
            config,
            connector,
            events,
            state: ConnectionState::Closed,
            shared_state,
            subscriptions,
            queue,
            queued_len,
            backoff,
            cmd_rx,
            sink: None,
            frames: None,
            connect_fut: None,
            reconnect_sleep: None,
            heartbeat: None,
            last_ack: Instant::now(),
            manual_close: false,
        }
    }

    async fn run(mut self) {
        loop {
            let event = {
                let Self {
                    cmd_rx,
                    connect_fut,
                    frames,
                    heartbeat,
                    reconnect_sleep,
                    ..
                } = &mut self;

                tokio::select! {
                    biased;
                    cmd = cmd_rx.recv() => ActorEvent::Command(cmd),
                    result = async { connect_fut.as_mut().unwrap().await }, if connect_fut.is_some() => {
                        ActorEvent::Connected(result)
                    }
                    frame = async { frames.as_mut().unwrap().recv().await }, if frames.is_some() => {
                        ActorEvent::Frame(frame)
                    }
                    _ = async { heartbeat.as_mut().unwrap().tick().await }, if heartbeat.is_some() => {
                        ActorEvent::HeartbeatTick
                    }
                    () = async { reconnect_sleep.as_mut().unwrap().await }, if reconnect_sleep.is_some() => {
                        ActorEvent::ReconnectTimer
                    }
                }
            };

            match event {
                ActorEvent::Command(Some(cmd)) => self.handle_command(cmd).await,
                ActorEvent::Command(None) => {
                    self.shutdown().await;
                    break;
                }
                ActorEvent::Connected(result) => {
                    self.connect_fut = None;
                    self.handle_connect_result(result).await;
                }
                ActorEvent::Frame(Some(frame)) => self.handle_frame(frame).await,
                ActorEvent::Frame(None) => {
                    self.frames = None;
                    self.handle_transport_closed(close_code::ABNORMAL, "stream ended", false)
                        .await;
                }
                ActorEvent::HeartbeatTick => self.handle_heartbeat_tick().await,
                ActorEvent::ReconnectTimer => {
                    self.reconnect_sleep = None;
                    if self.state.is_closed() {
                        tracing::info!(
                            attempt = self.backoff.attempts(),
                            "Attempting reconnect",
                        );
                        self.begin_connect();
                    }
                }
            }
        }
    }

    async fn handle_command(&mut self, cmd: ClientCommand) {
        match cmd {
            ClientCommand::Connect { ack } => {
                self.handle_connect();
                let _ = ack.send(());
            }
            ClientCommand::Disconnect { code, reason, ack } => {
                self.handle_disconnect(code, &reason).await;
                let _ = ack.send(());
            }
            ClientCommand::Send { payload, ack } => {
                let sent = self.handle_send(payload).await;
                let _ = ack.send(sent);
            }
            ClientCommand::Subscribe { topics, ack } => {
                self.handle_subscribe(topics).await;
                let _ = ack.send(());
            }
            ClientCommand::Unsubscribe { topics, ack } => {
                self.handle_unsubscribe(topics).await;
                let _ = ack.send(());
            }
        }
    }

    fn handle_connect(&mut self) {
        if matches!(
            self.state,
            ConnectionState::Connecting | ConnectionState::Open
        ) {
            tracing::debug!(state = %self.state, "Already connecting or connected, skipping");
            return;
        }

        self.manual_close = false;
        self.reconnect_sleep = None;
        self.begin_connect();
    }

    fn begin_connect(&mut self) {
        self.transition(ConnectionState::Connecting);

        let connector = self.connector.clone();
        let url = self.url.clone();
        self.connect_fut = Some(Box::pin(async move { connector.connect(&url).await }));
    }

    async fn handle_connect_result(
        &mut self,
        result: FeedClientResult<(Box<dyn FrameSink>, FrameReceiver)>,
    ) {
        match result {
            Ok((sink, frames)) => {
                self.sink = Some(sink);
                self.frames = Some(frames);
                self.on_open().await;
            }
            Err(e) => {
                tracing::warn!(url = %self.url, "Connection failed: {e}");
                self.events.emit(&FeedEvent::Error(e));
                self.transition(ConnectionState::Closed);
                self.maybe_schedule_reconnect();
            }
        }
    }

    /// Side effects on every transition into open, in order: cancel the
    /// pending reconnect timer and reset the retry counter, start the
    /// heartbeat, flush the queue FIFO, send one combined resubscribe frame,
    /// then emit `Connect` (and `Reconnect` if this open followed a failure).
    async fn on_open(&mut self) {
        self.reconnect_sleep = None;
        let retries = self.backoff.attempts();
        self.backoff.reset();

        self.transition(ConnectionState::Open);
        tracing::info!(url = %self.url, "Connected");

        self.start_heartbeat();

        let pending = self.queue.drain();
        self.queued_len.store(0, Ordering::Relaxed);
        if !pending.is_empty() {
            tracing::debug!(count = pending.len(), "Flushing queued payloads");
        }
        for payload in pending {
            self.transport_send(&payload).await;
            if !self.state.is_open() {
                return;
            }
        }

        if !self.subscriptions.is_empty() {
            let frame = ControlFrame::subscribe(self.subscriptions.replay_topics());
            self.send_control(frame).await;
            if !self.state.is_open() {
                return;
            }
        }

        self.events.emit(&FeedEvent::Connect);
        if retries > 0 {
            tracing::info!(attempt = retries, "Reconnected");
            self.events.emit(&FeedEvent::Reconnect { attempt: retries });
        }
    }

    async fn handle_disconnect(&mut self, code: u16, reason: &str) {
        self.manual_close = true;
        self.reconnect_sleep = None;
        self.connect_fut = None;
        self.heartbeat = None;
        self.backoff.reset();

        let was_open = self.state.is_open();
        if was_open {
            self.transition(ConnectionState::Closing);
        }

        if let Some(mut sink) = self.sink.take() {
            sink.close(code, reason).await;
        }
        self.frames = None;

        self.transition(ConnectionState::Closed);

        if was_open {
            self.events.emit(&FeedEvent::Disconnect {
                code,
                reason: reason.to_string(),
                was_clean: true,
            });
        }
    }

    async fn handle_send(&mut self, payload: String) -> bool {
        if self.state.is_open() {
            return self.transport_send(&payload).await;
        }

        if self.config.queue_enabled {
            if self.queue.push(payload) {
                self.queued_len.store(self.queue.len(), Ordering::Relaxed);
            } else {
                tracing::warn!(
                    capacity = self.queue.capacity(),
                    "Message queue full, dropping payload",
                );
            }
        } else {
            tracing::debug!("Not connected and queueing disabled, dropping payload");
        }
        false
    }

    async fn handle_subscribe(&mut self, topics: Vec<String>) {
        for topic in &topics {
            self.subscriptions.subscribe(topic);
        }
        tracing::debug!(?topics, "Subscribing to topics");
        self.send_queued_control(ControlFrame::subscribe(topics)).await;
    }

    async fn handle_unsubscribe(&mut self, topics: Vec<String>) {
        for topic in &topics {
            self.subscriptions.unsubscribe(topic);
        }
        tracing::debug!(?topics, "Unsubscribing from topics");
        self.send_queued_control(ControlFrame::unsubscribe(topics))
            .await;
    }

    /// Sends a control frame through the regular send path, so it is queued
    /// while offline exactly like a caller payload.
    async fn send_queued_control(&mut self, frame: ControlFrame) {
        match frame.to_json() {
            Ok(json) => {
                self.handle_send(json).await;
            }
            Err(e) => {
                tracing::error!(op = %frame.op, "Failed to serialize control frame: {e}");
                self.events
                    .emit(&FeedEvent::Error(FeedClientError::Parse(e.to_string())));
            }
        }
    }

    /// Sends a control frame directly over the open transport.
    async fn send_control(&mut self, frame: ControlFrame) {
        match frame.to_json() {
            Ok(json) => {
                self.transport_send(&json).await;
            }
            Err(e) => {
                tracing::error!(op = %frame.op, "Failed to serialize control frame: {e}");
                self.events
                    .emit(&FeedEvent::Error(FeedClientError::Parse(e.to_string())));
            }
        }
    }

    async fn transport_send(&mut self, text: &str) -> bool {
        let Some(sink) = self.sink.as_mut() else {
            return false;
        };

        match sink.send_text(text).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Send failed: {e}");
                self.events.emit(&FeedEvent::Error(e));
                self.handle_transport_closed(close_code::ABNORMAL, "send failure", false)
                    .await;
                false
            }
        }
    }

    async fn handle_frame(&mut self, frame: WsFrame) {
        match frame {
            WsFrame::Text(text) => match classify_text(&text) {
                InboundKind::HeartbeatAck => {
                    self.last_ack = Instant::now();
                    tracing::trace!("Heartbeat acknowledged");
                }
                InboundKind::SubscriptionAck => {
                    tracing::debug!("Subscription acknowledged");
                }
                InboundKind::Message(message) => {
                    self.events.emit(&FeedEvent::Message(message));
                }
            },
            WsFrame::Binary(data) => {
                self.events
                    .emit(&FeedEvent::Message(FeedMessage::Binary(data)));
            }
            WsFrame::Pong => {
                self.last_ack = Instant::now();
            }
            WsFrame::Close { code, reason } => {
                self.handle_transport_closed(code, &reason, code == close_code::NORMAL)
                    .await;
            }
        }
    }

    async fn handle_heartbeat_tick(&mut self) {
        if !self.state.is_open() {
            return;
        }

        if self.last_ack.elapsed() > self.config.stale_after() {
            tracing::warn!(
                elapsed_ms = self.last_ack.elapsed().as_millis() as u64,
                "No heartbeat acknowledgement within the expected window, force-closing",
            );
            self.events
                .emit(&FeedEvent::Error(FeedClientError::StaleConnection(format!(
                    "no acknowledgement within {}ms",
                    self.config.stale_after().as_millis(),
                ))));

            if let Some(mut sink) = self.sink.take() {
                sink.close(close_code::STALE_CONNECTION, "stale connection")
                    .await;
            }
            self.handle_transport_closed(
                close_code::STALE_CONNECTION,
                "no heartbeat acknowledgement",
                false,
            )
            .await;
            return;
        }

        self.send_control(ControlFrame::ping()).await;
    }

    /// The unexpected-close path: stop the heartbeat, emit `Disconnect`, and
    /// schedule a reconnect unless the shutdown was manual or reconnection is
    /// disabled.
    async fn handle_transport_closed(&mut self, code: u16, reason: &str, was_clean: bool) {
        if !matches!(
            self.state,
            ConnectionState::Open | ConnectionState::Closing
        ) {
            return;
        }

        self.heartbeat = None;
        self.sink = None;
        self.frames = None;

        if self.state.is_open() {
            self.transition(ConnectionState::Closing);
        }
        self.transition(ConnectionState::Closed);

        tracing::info!(code, reason, was_clean, "Disconnected");
        self.events.emit(&FeedEvent::Disconnect {
            code,
            reason: reason.to_string(),
            was_clean,
        });

        if !self.manual_close {
            self.maybe_schedule_reconnect();
        }
    }

    fn maybe_schedule_reconnect(&mut self) {
        if !self.config.reconnect || self.manual_close {
            return;
        }

        if self.backoff.is_exhausted() {
            let attempts = self.backoff.attempts();
            tracing::error!(attempts, "Exhausted reconnection attempts, giving up");
            self.events
                .emit(&FeedEvent::Error(FeedClientError::ExhaustedRetries {
                    attempts,
                }));
            return;
        }

        let delay = self.backoff.next_delay();
        tracing::info!(
            delay_ms = delay.as_millis() as u64,
            attempt = self.backoff.attempts(),
            "Scheduling reconnect",
        );
        self.reconnect_sleep = Some(Box::pin(tokio::time::sleep(delay)));
    }

    fn start_heartbeat(&mut self) {
        self.last_ack = Instant::now();

        if self.config.heartbeat_interval_ms == 0 {
            return;
        }

        let period = Duration::from_millis(self.config.heartbeat_interval_ms);
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.heartbeat = Some(interval);
    }

    fn transition(&mut self, new: ConnectionState) {
        if self.state == new {
            return;
        }
        let old = self.state;
        self.state = new;
        self.shared_state.store(new.as_u8(), Ordering::Relaxed);
        tracing::debug!(%old, %new, "Connection state changed");
        self.events.emit(&FeedEvent::StateChange { old, new });
    }

    /// All client handles dropped: close the transport and stop.
    async fn shutdown(&mut self) {
        tracing::debug!("Client dropped, shutting down actor");
        self.reconnect_sleep = None;
        self.connect_fut = None;
        self.heartbeat = None;
        if let Some(mut sink) = self.sink.take() {
            sink.close(close_code::NORMAL, "client dropped").await;
        }
        self.frames = None;
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
    #[tokio::test]
    async fn test_initial_state_is_closed() {
        let client = FeedClient::new("ws://localhost:9999/feed", FeedClientConfig::default())
            .unwrap();

        assert_eq!(client.state(), ConnectionState::Closed);
        assert!(!client.is_connected());
        assert_eq!(client.subscription_count(), 0);
        assert_eq!(client.queue_len(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_url_and_config_accessors() {
        let config = FeedClientConfig {
            queue_capacity: 7,
            ..Default::default()
        };
        let client = FeedClient::new("ws://localhost:9999/feed", config).unwrap();

        assert_eq!(client.url(), "ws://localhost:9999/feed");
        assert_eq!(client.config().queue_capacity, 7);
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_backoff_factor_is_rejected() {
        let config = FeedClientConfig {
            reconnect_backoff_factor: 0.5,
            ..Default::default()
        };

        assert!(FeedClient::new("ws://localhost:9999/feed", config).is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn test_zero_initial_delay_is_rejected_when_reconnect_enabled() {
        let config = FeedClientConfig {
            reconnect_delay_initial_ms: 0,
            ..Default::default()
        };

        assert!(FeedClient::new("ws://localhost:9999/feed", config).is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn test_client_debug() {
        let client = FeedClient::new("ws://localhost:9999/feed", FeedClientConfig::default())
            .unwrap();

        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("FeedClient"));
        assert!(debug_str.contains("ws://localhost:9999/feed"));
    }
}
