use std::str::FromStr;

use crate::domain::validation::ValidationError;
use crate::domain::value::{Audience, MessageText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery medium for an alert.
///
/// Leaving the channel unset (`Option::None` on [`AlertRequest`]) lets the
/// service pick its default.
pub enum Channel {
    Sms,
    Email,
}

impl Channel {
    /// JSON field name used by Notifox (`channel`).
    pub const FIELD: &'static str = "channel";

    /// Wire name of the channel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
        }
    }
}

impl FromStr for Channel {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sms" => Ok(Self::Sms),
            "email" => Ok(Self::Email),
            other => Err(ValidationError::InvalidChannel {
                input: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A request to deliver an alert to an audience.
///
/// Built from already-validated domain values, so an [`AlertRequest`] can
/// never carry an empty audience, an empty message, or an unknown channel.
pub struct AlertRequest {
    audience: Audience,
    alert: MessageText,
    channel: Option<Channel>,
}

impl AlertRequest {
    /// Create a request with the service-default channel.
    pub fn new(audience: Audience, alert: MessageText) -> Self {
        Self {
            audience,
            alert,
            channel: None,
        }
    }

    /// Pin the delivery channel instead of letting the service choose.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn audience(&self) -> &Audience {
        &self.audience
    }

    pub fn alert(&self) -> &MessageText {
        &self.alert
    }

    pub fn channel(&self) -> Option<Channel> {
        self.channel
    }
}
