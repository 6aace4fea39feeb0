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

//! Transport seam between the state machine and the wire.
//!
//! The client is written against the [`Connector`] and [`FrameSink`] traits so
//! the state machine can be exercised against an in-memory transport in tests.
//! The production implementation is [`TungsteniteConnector`]: it opens a
//! `tokio-tungstenite` stream, splits it, and pumps inbound frames from the
//! read half into a channel owned by the client actor.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{
        Message, Utf8Bytes,
        protocol::frame::{CloseFrame, coding::CloseCode},
    },
};

use crate::{
    error::{FeedClientError, FeedClientResult},
    messages::close_code,
};

/// A transport-level frame delivered to the client actor.
#[derive(Clone, Debug)]
pub enum WsFrame {
    /// A text frame.
    Text(String),
    /// A binary frame.
    Binary(Vec<u8>),
    /// A transport-level pong; counts as a liveness acknowledgement.
    Pong,
    /// The connection closed; the reader task terminates after this frame.
    Close { code: u16, reason: String },
}

/// Receiver side of the inbound frame channel for one connection.
pub type FrameReceiver = mpsc::UnboundedReceiver<WsFrame>;

/// The write half of an established connection.
#[async_trait]
pub trait FrameSink: Send {
    /// Sends a text frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport write fails.
    async fn send_text(&mut self, text: &str) -> FeedClientResult<()>;

    /// Initiates a close handshake with the given code and reason.
    async fn close(&mut self, code: u16, reason: &str);
}

/// Opens connections; one call per connection attempt.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Attempts to open a connection to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails to open.
    async fn connect(&self, url: &str) -> FeedClientResult<(Box<dyn FrameSink>, FrameReceiver)>;
}

/// Production connector over `tokio-tungstenite`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TungsteniteConnector;

#[async_trait]
impl Connector for TungsteniteConnector {
    async fn connect(&self, url: &str) -> FeedClientResult<(Box<dyn FrameSink>, FrameReceiver)> {
        let (stream, _response) = connect_async(url)
            .await
            .map_err(|e| FeedClientError::Transport(e.to_string()))?;

        let (write, mut read) = stream.split();
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(item) = read.next().await {
                let frame = match item {
                    Ok(Message::Text(text)) => WsFrame::Text(text.to_string()),
                    Ok(Message::Binary(data)) => WsFrame::Binary(data.to_vec()),
                    Ok(Message::Pong(_)) => WsFrame::Pong,
                    Ok(Message::Ping(payload)) => {
                        // tungstenite queues the protocol-level pong reply itself
                        tracing::trace!("Received ping frame ({} bytes)", payload.len());
                        continue;
                    }
                    Ok(Message::Close(frame)) => {
                        let (code, reason) = frame
                            .map(|f| (u16::from(f.code), f.reason.to_string()))
                            .unwrap_or((close_code::ABNORMAL, String::new()));
                        let _ = frame_tx.send(WsFrame::Close { code, reason });
                        break;
                    }
                    Ok(Message::Frame(_)) => continue,
                    Err(e) => {
                        tracing::warn!("WebSocket read error: {e}");
                        let _ = frame_tx.send(WsFrame::Close {
                            code: close_code::ABNORMAL,
                            reason: e.to_string(),
                        });
                        break;
                    }
                };

                if frame_tx.send(frame).is_err() {
                    tracing::debug!("Frame receiver dropped, stopping reader");
                    break;
                }
            }
            tracing::debug!("WebSocket reader finished");
        });

        Ok((Box::new(TungsteniteSink { write }), frame_rx))
    }
}

type WriteHalf = futures_util::stream::SplitSink<
    tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    Message,
>;

struct TungsteniteSink {
    write: WriteHalf,
}

#[async_trait]
impl FrameSink for TungsteniteSink {
    async fn send_text(&mut self, text: &str) -> FeedClientResult<()> {
        self.write
            .send(Message::Text(Utf8Bytes::from(text)))
            .await
            .map_err(|e| FeedClientError::Transport(e.to_string()))
    }

    async fn close(&mut self, code: u16, reason: &str) {
        let frame = CloseFrame {
            code: CloseCode::from(code),
            reason: Utf8Bytes::from(reason),
        };
        if let Err(e) = self.write.send(Message::Close(Some(frame))).await {
            tracing::debug!("Error sending close frame: {e}");
        }
    }
}
