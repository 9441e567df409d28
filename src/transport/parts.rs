use serde::{Deserialize, Serialize};

use super::TransportError;
use crate::domain::{MessageText, PartsResponse};

#[derive(Debug, Serialize)]
struct PartsJsonRequest<'a> {
    alert: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct PartsJsonResponse {
    parts: u32,
    cost: f64,
    currency: String,
    encoding: String,
    characters: u32,
    message: String,
}

pub fn encode_parts_request(alert: &MessageText) -> Result<String, TransportError> {
    let wire = PartsJsonRequest {
        alert: alert.as_str(),
    };
    Ok(serde_json::to_string(&wire)?)
}

pub fn decode_parts_response(body: &str) -> Result<PartsResponse, TransportError> {
    let wire: PartsJsonResponse = serde_json::from_str(body)?;
    Ok(PartsResponse {
        parts: wire.parts,
        cost: wire.cost,
        currency: wire.currency,
        encoding: wire.encoding,
        characters: wire.characters,
        message: wire.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_carries_only_the_alert_text() {
        let encoded = encode_parts_request(&MessageText::new("hello").unwrap()).unwrap();
        assert_eq!(encoded, r#"{"alert":"hello"}"#);
    }

    #[test]
    fn decode_maps_all_fields() {
        let body = r#"
        {
          "parts": 1,
          "cost": 0.05,
          "currency": "USD",
          "encoding": "GSM-7",
          "characters": 5,
          "message": "hello"
        }
        "#;
        let response = decode_parts_response(body).unwrap();
        assert_eq!(response.parts, 1);
        assert_eq!(response.cost, 0.05);
        assert_eq!(response.message, "hello");
    }

    #[test]
    fn decode_rejects_missing_fields() {
        assert!(matches!(
            decode_parts_response(r#"{"parts": 1}"#),
            Err(TransportError::Json(_))
        ));
    }
}
