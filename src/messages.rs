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

//! Wire-level control frames and inbound frame classification.
//!
//! Outbound control frames are `{"op": ...}` objects: heartbeat probes
//! (`op=ping`) and subscription management (`op=subscribe` / `op=unsubscribe`
//! with an `args` topic list). Inbound frames are classified so that liveness
//! acknowledgements and subscription acknowledgements are consumed internally
//! and never surface as `Message` events.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};

/// Close codes used by the client.
pub mod close_code {
    /// Normal closure (RFC 6455).
    pub const NORMAL: u16 = 1000;
    /// Abnormal closure: the transport dropped without a close frame (RFC 6455).
    pub const ABNORMAL: u16 = 1006;
    /// The client force-closed a connection that missed its liveness window.
    pub const STALE_CONNECTION: u16 = 4000;
}

/// Operation tag for outbound control frames.
#[derive(
    AsRefStr, Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WsOperation {
    Ping,
    Subscribe,
    Unsubscribe,
}

/// An outbound control frame.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ControlFrame {
    pub op: WsOperation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl ControlFrame {
    /// Creates a heartbeat probe frame.
    #[must_use]
    pub const fn ping() -> Self {
        Self {
            op: WsOperation::Ping,
            args: Vec::new(),
        }
    }

    /// Creates a subscribe frame for the given topics.
    #[must_use]
    pub const fn subscribe(topics: Vec<String>) -> Self {
        Self {
            op: WsOperation::Subscribe,
            args: topics,
        }
    }

    /// Creates an unsubscribe frame for the given topics.
    #[must_use]
    pub const fn unsubscribe(topics: Vec<String>) -> Self {
        Self {
            op: WsOperation::Unsubscribe,
            args: topics,
        }
    }

    /// Serializes the frame to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// An inbound payload delivered to `Message` listeners.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedMessage {
    /// A frame that parsed as structured data.
    Json(Value),
    /// A text frame that did not parse as structured data.
    Text(String),
    /// A binary frame, delivered verbatim.
    Binary(Vec<u8>),
}

/// Classification of an inbound text frame.
#[derive(Clone, Debug, PartialEq)]
pub enum InboundKind {
    /// A heartbeat acknowledgement; updates liveness only.
    HeartbeatAck,
    /// A subscription acknowledgement; consumed internally.
    SubscriptionAck,
    /// Any other frame; forwarded verbatim as a `Message` event.
    Message(FeedMessage),
}

/// Classifies an inbound text frame.
///
/// Heartbeat acknowledgements are recognized by reserved markers: the bare
/// text `pong`, or an object carrying `"op": "pong"` or `"event": "pong"`.
/// Subscription acknowledgements carry `"op": "subscribe"` (or
/// `"unsubscribe"`) together with `"success": true`; unsuccessful responses
/// are forwarded so the caller can observe them.
#[must_use]
pub fn classify_text(text: &str) -> InboundKind {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("pong") {
        return InboundKind::HeartbeatAck;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => {
            if let Some(obj) = value.as_object() {
                let op = obj.get("op").and_then(Value::as_str);
                let event = obj.get("event").and_then(Value::as_str);

                if op == Some("pong") || event == Some("pong") {
                    return InboundKind::HeartbeatAck;
                }

                if matches!(op, Some("subscribe" | "unsubscribe"))
                    && obj.get("success").and_then(Value::as_bool) == Some(true)
                {
                    return InboundKind::SubscriptionAck;
                }
            }
            InboundKind::Message(FeedMessage::Json(value))
        }
        Err(_) => InboundKind::Message(FeedMessage::Text(text.to_string())),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_ping_frame_wire_form() {
        assert_eq!(ControlFrame::ping().to_json().unwrap(), r#"{"op":"ping"}"#);
    }

    #[rstest]
    fn test_subscribe_frame_wire_form() {
        let frame = ControlFrame::subscribe(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            frame.to_json().unwrap(),
            r#"{"op":"subscribe","args":["a","b"]}"#
        );
    }

    #[rstest]
    fn test_unsubscribe_frame_wire_form() {
        let frame = ControlFrame::unsubscribe(vec!["a".to_string()]);
        assert_eq!(
            frame.to_json().unwrap(),
            r#"{"op":"unsubscribe","args":["a"]}"#
        );
    }

    #[rstest]
    #[case("pong")]
    #[case("  PONG  ")]
    #[case(r#"{"op":"pong"}"#)]
    #[case(r#"{"event":"pong","ts":123}"#)]
    fn test_heartbeat_acks_are_consumed(#[case] text: &str) {
        assert_eq!(classify_text(text), InboundKind::HeartbeatAck);
    }

    #[rstest]
    #[case(r#"{"op":"subscribe","success":true}"#)]
    #[case(r#"{"op":"unsubscribe","success":true,"args":["a"]}"#)]
    fn test_subscription_acks_are_consumed(#[case] text: &str) {
        assert_eq!(classify_text(text), InboundKind::SubscriptionAck);
    }

    #[rstest]
    fn test_failed_subscription_response_is_forwarded() {
        let classified = classify_text(r#"{"op":"subscribe","success":false}"#);
        assert!(matches!(
            classified,
            InboundKind::Message(FeedMessage::Json(_))
        ));
    }

    #[rstest]
    fn test_data_frames_are_forwarded_as_structured_data() {
        let classified = classify_text(r#"{"topic":"trades:XBTUSD","price":"50000"}"#);
        let expected = json!({"topic": "trades:XBTUSD", "price": "50000"});
        assert_eq!(
            classified,
            InboundKind::Message(FeedMessage::Json(expected))
        );
    }

    #[rstest]
    fn test_unparsable_frames_are_forwarded_raw() {
        let classified = classify_text("not json at all");
        assert_eq!(
            classified,
            InboundKind::Message(FeedMessage::Text("not json at all".to_string()))
        );
    }
}
