use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

/// Options that apply to a single API call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// End-user IP forwarded as `X-Client-IP` for this call only.
    pub client_ip: Option<IpAddr>,
}

impl CallOptions {
    pub fn with_client_ip(ip: IpAddr) -> Self {
        Self {
            client_ip: Some(ip),
        }
    }
}

/// How CheckMobi should verify a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationType {
    Sms,
    Ivr,
    Cli,
    ReverseCli,
}

impl VerificationType {
    pub const ALL: [Self; 4] = [Self::Sms, Self::Ivr, Self::Cli, Self::ReverseCli];
    pub const NAMES: [&'static str; 4] = ["sms", "ivr", "cli", "reverse_cli"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Ivr => "ivr",
            Self::Cli => "cli",
            Self::ReverseCli => "reverse_cli",
        }
    }
}

impl FromStr for VerificationType {
    type Err = ValidationError;

    /// Case-insensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ValidationError::InvalidVerificationType {
                input: value.to_owned(),
            })
    }
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client platform accepted by `sms/send`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
    Web,
    Desktop,
}

impl Platform {
    pub const NAMES: [&'static str; 4] = ["ios", "android", "web", "desktop"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated `validation/request` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatePhone {
    number: String,
    verification_type: VerificationType,
    language: Option<String>,
    platform: Option<String>,
}

impl ValidatePhone {
    /// Both `number` and `verify_as` must be present (non-empty), and `verify_as` must
    /// name a [`VerificationType`] (case-insensitive). Whitespace is not trimmed: a
    /// whitespace-only number is left for the server to judge.
    pub fn new(number: &str, verify_as: &str) -> Result<Self, ValidationError> {
        if number.is_empty() || verify_as.is_empty() {
            return Err(ValidationError::InvalidPayload);
        }
        let verification_type = verify_as.parse()?;
        Ok(Self {
            number: number.to_owned(),
            verification_type,
            language: None,
            platform: None,
        })
    }

    pub fn language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(str::to_owned);
        self
    }

    pub fn platform(mut self, platform: Option<&str>) -> Self {
        self.platform = platform.map(str::to_owned);
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn verification_type(&self) -> VerificationType {
        self.verification_type
    }

    pub fn language_tag(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn platform_name(&self) -> Option<&str> {
        self.platform.as_deref()
    }
}

/// Message object for `sms/send`.
///
/// Fields are public so that any shape can be expressed; [`validate_message`] decides
/// whether it is sendable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendMessage {
    /// Recipient in E.164 format. Required.
    pub to: String,
    /// Message body. Required.
    pub text: String,
    /// One of [`Platform::NAMES`].
    pub platform: Option<String>,
    /// URL notified on delivery status changes.
    pub notification_callback: Option<String>,
}

impl SendMessage {
    pub fn new(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform.as_str().to_owned());
        self
    }

    pub fn with_notification_callback(mut self, url: impl Into<String>) -> Self {
        self.notification_callback = Some(url.into());
        self
    }
}

/// Check the shape of a message object before it is sent.
///
/// Platform membership is case-sensitive.
pub fn validate_message(
    message: Option<&SendMessage>,
    allowed_platforms: &[&str],
) -> Result<(), ValidationError> {
    let Some(message) = message else {
        return Err(ValidationError::NullObject);
    };

    if message.to.trim().is_empty() || message.text.trim().is_empty() {
        return Err(ValidationError::RequiredPropertyMissing);
    }

    if let Some(platform) = message.platform.as_deref() {
        if !allowed_platforms.contains(&platform) {
            return Err(ValidationError::InvalidPlatform {
                platform: platform.to_owned(),
            });
        }
    }

    Ok(())
}
