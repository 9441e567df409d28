//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{AlertRequest, Channel};
pub use response::{AlertResponse, PartsResponse};
pub use validation::ValidationError;
pub use value::{ApiKey, Audience, BaseUrl, MessageText};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn audience_rejects_empty_and_trims() {
        assert!(matches!(
            Audience::new(""),
            Err(ValidationError::Empty {
                field: Audience::FIELD
            })
        ));
        let audience = Audience::new("  ops-oncall  ").unwrap();
        assert_eq!(audience.as_str(), "ops-oncall");
    }

    #[test]
    fn message_text_rejects_whitespace_only_but_preserves_content() {
        assert!(matches!(
            MessageText::new(" \n "),
            Err(ValidationError::Empty {
                field: MessageText::FIELD
            })
        ));
        let text = MessageText::new(" disk at 95% ").unwrap();
        assert_eq!(text.as_str(), " disk at 95% ");
    }

    #[test]
    fn channel_parses_wire_names_only() {
        assert_eq!("sms".parse::<Channel>().unwrap(), Channel::Sms);
        assert_eq!("email".parse::<Channel>().unwrap(), Channel::Email);
        assert!(matches!(
            "pigeon".parse::<Channel>(),
            Err(ValidationError::InvalidChannel { .. })
        ));
        assert!(matches!(
            "".parse::<Channel>(),
            Err(ValidationError::InvalidChannel { .. })
        ));
        assert!(matches!(
            "SMS".parse::<Channel>(),
            Err(ValidationError::InvalidChannel { .. })
        ));
    }

    #[test]
    fn alert_request_defaults_to_unset_channel() {
        let request = AlertRequest::new(
            Audience::new("ops").unwrap(),
            MessageText::new("hello").unwrap(),
        );
        assert_eq!(request.channel(), None);

        let request = request.with_channel(Channel::Email);
        assert_eq!(request.channel(), Some(Channel::Email));
        assert_eq!(request.audience().as_str(), "ops");
        assert_eq!(request.alert().as_str(), "hello");
    }

    #[test]
    fn base_url_validates_and_trims_trailing_slash() {
        let base = BaseUrl::new("https://api.example.com/").unwrap();
        assert_eq!(base.as_str(), "https://api.example.com");

        assert!(matches!(
            BaseUrl::new("not a url"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("ftp://api.example.com"),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("   "),
            Err(ValidationError::Empty {
                field: BaseUrl::FIELD
            })
        ));
    }
}
