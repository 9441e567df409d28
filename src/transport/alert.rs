use serde::{Deserialize, Serialize};

use super::TransportError;
use crate::domain::{AlertRequest, AlertResponse, Channel};

#[derive(Debug, Serialize)]
struct AlertJsonRequest<'a> {
    audience: &'a str,
    alert: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'static str>,
}

#[derive(Debug, Clone, Deserialize)]
struct AlertJsonResponse {
    message_id: String,
    parts: u32,
    cost: f64,
    currency: String,
    encoding: String,
    characters: u32,
}

pub fn encode_alert_request(request: &AlertRequest) -> Result<String, TransportError> {
    let wire = AlertJsonRequest {
        audience: request.audience().as_str(),
        alert: request.alert().as_str(),
        channel: request.channel().map(Channel::as_str),
    };
    Ok(serde_json::to_string(&wire)?)
}

pub fn decode_alert_response(body: &str) -> Result<AlertResponse, TransportError> {
    let wire: AlertJsonResponse = serde_json::from_str(body)?;
    Ok(AlertResponse {
        message_id: wire.message_id,
        parts: wire.parts,
        cost: wire.cost,
        currency: wire.currency,
        encoding: wire.encoding,
        characters: wire.characters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Audience, MessageText};

    fn request() -> AlertRequest {
        AlertRequest::new(
            Audience::new("ops").unwrap(),
            MessageText::new("disk almost full").unwrap(),
        )
    }

    #[test]
    fn encode_omits_unset_channel() {
        let encoded = encode_alert_request(&request()).unwrap();
        assert_eq!(encoded, r#"{"audience":"ops","alert":"disk almost full"}"#);
    }

    #[test]
    fn encode_includes_channel_when_set() {
        let encoded = encode_alert_request(&request().with_channel(Channel::Sms)).unwrap();
        assert_eq!(
            encoded,
            r#"{"audience":"ops","alert":"disk almost full","channel":"sms"}"#
        );
    }

    #[test]
    fn decode_maps_all_fields() {
        let body = r#"
        {
          "message_id": "msg_01",
          "parts": 2,
          "cost": 0.15,
          "currency": "USD",
          "encoding": "GSM-7",
          "characters": 243
        }
        "#;
        let response = decode_alert_response(body).unwrap();
        assert_eq!(response.message_id, "msg_01");
        assert_eq!(response.parts, 2);
        assert_eq!(response.cost, 0.15);
        assert_eq!(response.currency, "USD");
        assert_eq!(response.encoding, "GSM-7");
        assert_eq!(response.characters, 243);
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(matches!(
            decode_alert_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
    }
}
