//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CallOptions, Platform, SendMessage, ValidatePhone, VerificationType, validate_message,
};
pub use response::{
    CountryPrefix, MessageInformation, NumberInformation, RemoteConfig, SendMessageResponse,
    ValidationRequestResponse, ValidationStatus, VerifyPinResponse,
};
pub use validation::ValidationError;
pub use value::{ApiSecret, MessageId, ValidationId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_names_follow_variants() {
        let variants = [
            Platform::Ios,
            Platform::Android,
            Platform::Web,
            Platform::Desktop,
        ];
        for (variant, name) in variants.into_iter().zip(Platform::NAMES) {
            assert_eq!(variant.as_str(), name);
        }
    }

    #[test]
    fn verification_type_names_follow_variants() {
        for (variant, name) in VerificationType::ALL.into_iter().zip(VerificationType::NAMES) {
            assert_eq!(variant.to_string(), name);
        }
    }

    #[test]
    fn call_options_default_has_no_client_ip() {
        assert_eq!(CallOptions::default().client_ip, None);
        let ip = std::net::IpAddr::from([10, 0, 0, 1]);
        assert_eq!(CallOptions::with_client_ip(ip).client_ip, Some(ip));
    }
}
