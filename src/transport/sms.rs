use serde::{Deserialize, Serialize};

use crate::domain::{MessageInformation, SendMessage, SendMessageResponse};
use crate::transport::response::{TransportError, parse_json};
use crate::transport::text::TransportText;

#[derive(Debug, Serialize)]
struct SendMessageJsonRequest<'a> {
    to: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_callback: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
struct SendMessageJsonResponse {
    #[serde(default)]
    id: String,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    charged_amount: Option<TransportText>,
    #[serde(default)]
    created: Option<TransportText>,
    #[serde(default)]
    updated: Option<TransportText>,
}

pub fn encode_send_message_json(message: &SendMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendMessageJsonRequest {
        to: &message.to,
        text: &message.text,
        platform: message.platform.as_deref(),
        notification_callback: message.notification_callback.as_deref(),
    })
}

pub fn decode_send_message_json_response(
    json: &str,
) -> Result<SendMessageResponse, TransportError> {
    let Some(parsed) = parse_json::<SendMessageJsonResponse>(json)? else {
        return Ok(SendMessageResponse::default());
    };
    Ok(SendMessageResponse { id: parsed.id })
}

pub fn decode_message_information_json_response(
    json: &str,
) -> Result<MessageInformation, TransportError> {
    let Some(parsed) = parse_json::<MessageJsonResponse>(json)? else {
        return Ok(MessageInformation::default());
    };
    Ok(MessageInformation {
        id: parsed.id,
        to: parsed.to,
        text: parsed.text,
        status: parsed.status,
        charged_amount: parsed.charged_amount.map(TransportText::into_string),
        created: parsed.created.map(TransportText::into_string),
        updated: parsed.updated.map(TransportText::into_string),
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::Platform;

    use super::*;

    #[test]
    fn encode_minimal_message_omits_optional_fields() {
        let message = SendMessage::new("+40700000000", "hello");
        assert_eq!(
            encode_send_message_json(&message).unwrap(),
            r#"{"to":"+40700000000","text":"hello"}"#
        );
    }

    #[test]
    fn encode_full_message() {
        let message = SendMessage::new("+40700000000", "hello")
            .with_platform(Platform::Android)
            .with_notification_callback("https://example.invalid/hook");
        assert_eq!(
            encode_send_message_json(&message).unwrap(),
            r#"{"to":"+40700000000","text":"hello","platform":"android","notification_callback":"https://example.invalid/hook"}"#
        );
    }

    #[test]
    fn decode_send_response_reads_id() {
        let response = decode_send_message_json_response(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(response.id, "abc");
    }

    #[test]
    fn decode_send_response_with_empty_body_defaults() {
        assert_eq!(
            decode_send_message_json_response("").unwrap(),
            SendMessageResponse::default()
        );
    }

    #[test]
    fn decode_message_information_normalizes_scalars() {
        let json = r#"
        {
          "id": "SMS-1",
          "to": "+40700000000",
          "text": "hello",
          "status": "delivered",
          "charged_amount": 0.0050,
          "created": 1508933471000,
          "unexpected": {"ignored": true}
        }
        "#;

        let info = decode_message_information_json_response(json).unwrap();
        assert_eq!(info.id.as_deref(), Some("SMS-1"));
        assert_eq!(info.status.as_deref(), Some("delivered"));
        assert_eq!(info.charged_amount.as_deref(), Some("0.0050"));
        assert_eq!(info.created.as_deref(), Some("1508933471000"));
        assert_eq!(info.updated, None);
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(matches!(
            decode_message_information_json_response("{ nope"),
            Err(TransportError::Json(_))
        ));
    }
}
