use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidChannel { input: String },
    InvalidBaseUrl { input: String },
    MissingApiKey { env: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidChannel { input } => {
                write!(f, "invalid channel: {input} (expected 'sms' or 'email')")
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
            Self::MissingApiKey { env } => {
                write!(
                    f,
                    "api key is required (provide it explicitly or set the {env} environment variable)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
