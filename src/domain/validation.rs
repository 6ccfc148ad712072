use std::fmt;

use crate::domain::request::{Platform, VerificationType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NullObject,
    RequiredPropertyMissing,
    InvalidPlatform { platform: String },
    InvalidPayload,
    InvalidVerificationType { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NullObject => f.write_str("Invalid Request"),
            Self::RequiredPropertyMissing => f.write_str("Required options are missing"),
            Self::InvalidPlatform { .. } => write!(
                f,
                "Invalid platform. Only {} is supported",
                Platform::NAMES.join(", ")
            ),
            Self::InvalidPayload => f.write_str("Invalid request payload"),
            Self::InvalidVerificationType { .. } => write!(
                f,
                "Invalid validation type. Allowed ({})",
                VerificationType::NAMES.join(", ")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_match_api_wording() {
        assert_eq!(ValidationError::NullObject.to_string(), "Invalid Request");
        assert_eq!(
            ValidationError::RequiredPropertyMissing.to_string(),
            "Required options are missing"
        );
        assert_eq!(
            ValidationError::InvalidPlatform {
                platform: "tv".to_owned()
            }
            .to_string(),
            "Invalid platform. Only ios, android, web, desktop is supported"
        );
        assert_eq!(
            ValidationError::InvalidPayload.to_string(),
            "Invalid request payload"
        );
        assert_eq!(
            ValidationError::InvalidVerificationType {
                input: "email".to_owned()
            }
            .to_string(),
            "Invalid validation type. Allowed (sms, ivr, cli, reverse_cli)"
        );
    }

    #[test]
    fn empty_field_message_names_the_field() {
        let err = ValidationError::Empty { field: "id" };
        assert_eq!(err.to_string(), "id must not be empty");
    }
}
