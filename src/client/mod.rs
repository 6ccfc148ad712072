//! Client layer: validates arguments, orchestrates transport calls and maps
//! transport ↔ domain.

mod http;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    ApiSecret, CallOptions, CountryPrefix, MessageId, MessageInformation, NumberInformation,
    Platform, RemoteConfig, SendMessage, SendMessageResponse, ValidatePhone, ValidationError,
    ValidationId, ValidationRequestResponse, ValidationStatus, VerifyPinResponse,
    validate_message,
};
use url::Url;

use crate::transport::{
    DEFAULT_BASE_URL, Endpoint, EndpointError, StatusFailure, TransportError, default_base_url,
    parse_base_url,
};

use self::http::{BoxError, HttpTransport, ReqwestTransport};

/// Environment variable holding the secret key read by [`CheckMobiClientBuilder::from_env`].
pub const SECRET_KEY_ENV: &str = "CHECKMOBI_SECRET_KEY";
/// Optional environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "CHECKMOBI_BASE_URL";

type Decoder<T> = fn(&str) -> Result<T, TransportError>;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`CheckMobiClient`].
///
/// Local validation failures never reach the network. Every other variant
/// describes the single HTTP exchange the call made.
pub enum CheckMobiError {
    /// Arguments were rejected before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `400` / `401`: the server rejected the request and said why.
    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: Option<String>,
    },

    /// `403` / `404` / `500`: reported with a fixed message, the body is discarded.
    #[error("{message}")]
    Status { status: u16, message: &'static str },

    /// Any other non-success HTTP status.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// HTTP client / transport failure (DNS, TLS, connection refused, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// A success response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request URL could not be built.
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// A required environment variable is missing.
    #[error("environment variable {name} is not set")]
    MissingEnv { name: &'static str },
}

impl CheckMobiError {
    /// HTTP status of the response that caused this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. }
            | Self::Status { status, .. }
            | Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<StatusFailure> for CheckMobiError {
    fn from(value: StatusFailure) -> Self {
        match value {
            StatusFailure::Rejected {
                status,
                code,
                message,
            } => Self::Rejected {
                status,
                code,
                message,
            },
            StatusFailure::Fixed { status, message } => Self::Status { status, message },
            StatusFailure::Unexpected { status, body } => Self::HttpStatus { status, body },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`CheckMobiClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct CheckMobiClientBuilder {
    secret: ApiSecret,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CheckMobiClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(secret: ApiSecret) -> Self {
        Self {
            secret,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Read the secret key from `CHECKMOBI_SECRET_KEY` and, when set, the base URL from
    /// `CHECKMOBI_BASE_URL`.
    pub fn from_env() -> Result<Self, CheckMobiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CheckMobiError> {
        let secret = lookup(SECRET_KEY_ENV).ok_or(CheckMobiError::MissingEnv {
            name: SECRET_KEY_ENV,
        })?;
        let mut builder = Self::new(ApiSecret::new(secret)?);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            builder = builder.base_url(base_url.trim());
        }
        Ok(builder)
    }

    /// Override the API base URL (default `https://api.checkmobi.com/v1/`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`CheckMobiClient`]. Fails if the base URL does not parse.
    pub fn build(self) -> Result<CheckMobiClient, CheckMobiError> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| CheckMobiError::Transport(Box::new(err)))?;

        Ok(CheckMobiClient {
            secret: self.secret,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level CheckMobi client.
///
/// Every method validates its arguments, sends exactly one request and returns the
/// decoded body. Nothing is retried. The client holds no per-call state, so it can be
/// cloned and shared between tasks freely.
pub struct CheckMobiClient {
    secret: ApiSecret,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl CheckMobiClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`CheckMobiClient::builder`].
    pub fn new(secret: ApiSecret) -> Self {
        Self {
            secret,
            base_url: default_base_url(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(secret: ApiSecret) -> CheckMobiClientBuilder {
        CheckMobiClientBuilder::new(secret)
    }

    /// Fetch the account's remote validation configuration for a number.
    pub async fn remote_config(
        &self,
        number: &str,
        platform: &str,
        language: &str,
        options: CallOptions,
    ) -> Result<RemoteConfig, CheckMobiError> {
        let body = crate::transport::encode_remote_config_json(number, platform, language)
            .map_err(CheckMobiError::Encode)?;
        self.call(
            Endpoint::RemoteConfig,
            None,
            Some(body),
            options,
            crate::transport::decode_remote_config_json_response,
        )
        .await
    }

    /// Start validating a phone number.
    ///
    /// `verify_as` is one of `sms`, `ivr`, `cli`, `reverse_cli` (any case).
    ///
    /// Errors:
    /// - [`ValidationError::InvalidPayload`] when `number` or `verify_as` is blank,
    /// - [`ValidationError::InvalidVerificationType`] for any other `verify_as`.
    pub async fn validate_phone(
        &self,
        number: &str,
        verify_as: &str,
        language: Option<&str>,
        platform: Option<&str>,
        options: CallOptions,
    ) -> Result<ValidationRequestResponse, CheckMobiError> {
        let request = ValidatePhone::new(number, verify_as)
            .inspect_err(|err| debug!(%err, "validation request rejected locally"))?
            .language(language)
            .platform(platform);

        let body =
            crate::transport::encode_validate_phone_json(&request).map_err(CheckMobiError::Encode)?;
        self.call(
            Endpoint::ValidationRequest,
            None,
            Some(body),
            options,
            crate::transport::decode_validation_request_json_response,
        )
        .await
    }

    /// Submit the PIN the user received for a validation request.
    pub async fn validate_pin(
        &self,
        validation_id: &ValidationId,
        pin: &str,
        options: CallOptions,
    ) -> Result<VerifyPinResponse, CheckMobiError> {
        let body = crate::transport::encode_verify_pin_json(validation_id, pin)
            .map_err(CheckMobiError::Encode)?;
        self.call(
            Endpoint::ValidationVerify,
            None,
            Some(body),
            options,
            crate::transport::decode_verify_pin_json_response,
        )
        .await
    }

    /// Look up carrier and formatting details for a number.
    pub async fn phone_information(
        &self,
        number: &str,
        options: CallOptions,
    ) -> Result<NumberInformation, CheckMobiError> {
        let body =
            crate::transport::encode_check_number_json(number).map_err(CheckMobiError::Encode)?;
        self.call(
            Endpoint::CheckNumber,
            None,
            Some(body),
            options,
            crate::transport::decode_number_information_json_response,
        )
        .await
    }

    /// Send an SMS.
    ///
    /// The message is checked with [`validate_message`] against [`Platform::NAMES`]
    /// before anything is sent.
    pub async fn send_message(
        &self,
        message: &SendMessage,
        options: CallOptions,
    ) -> Result<SendMessageResponse, CheckMobiError> {
        validate_message(Some(message), &Platform::NAMES)
            .inspect_err(|err| debug!(%err, "message rejected locally"))?;

        let body =
            crate::transport::encode_send_message_json(message).map_err(CheckMobiError::Encode)?;
        self.call(
            Endpoint::SendSms,
            None,
            Some(body),
            options,
            crate::transport::decode_send_message_json_response,
        )
        .await
    }

    /// List countries with their calling prefixes.
    pub async fn get_prefixes(
        &self,
        options: CallOptions,
    ) -> Result<Vec<CountryPrefix>, CheckMobiError> {
        self.call(
            Endpoint::Prefixes,
            None,
            None,
            options,
            crate::transport::decode_prefixes_json_response,
        )
        .await
    }

    /// List countries. Same request and response as [`CheckMobiClient::get_prefixes`].
    pub async fn get_countries(
        &self,
        options: CallOptions,
    ) -> Result<Vec<CountryPrefix>, CheckMobiError> {
        self.get_prefixes(options).await
    }

    /// Delivery status of a message sent with [`CheckMobiClient::send_message`].
    pub async fn get_message_information(
        &self,
        message_id: &MessageId,
        options: CallOptions,
    ) -> Result<MessageInformation, CheckMobiError> {
        self.call(
            Endpoint::SmsStatus,
            Some(message_id.as_str()),
            None,
            options,
            crate::transport::decode_message_information_json_response,
        )
        .await
    }

    /// Status of a validation started with [`CheckMobiClient::validate_phone`].
    pub async fn get_validate_status(
        &self,
        validation_id: &ValidationId,
        options: CallOptions,
    ) -> Result<ValidationStatus, CheckMobiError> {
        self.call(
            Endpoint::ValidationStatus,
            Some(validation_id.as_str()),
            None,
            options,
            crate::transport::decode_validation_status_json_response,
        )
        .await
    }

    async fn call<T>(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        body: Option<String>,
        options: CallOptions,
        decode: Decoder<T>,
    ) -> Result<T, CheckMobiError> {
        let request = crate::transport::build_request(
            &self.secret,
            &self.base_url,
            endpoint,
            id,
            body,
            options.client_ip,
        )?;

        debug!(
            method = request.method.as_str(),
            url = %request.url,
            client_ip = ?options.client_ip,
            "sending CheckMobi request"
        );

        let response = self
            .http
            .execute(request)
            .await
            .inspect_err(|err| debug!(%err, ?endpoint, "CheckMobi request failed"))
            .map_err(CheckMobiError::Transport)?;

        debug!(status = response.status, ?endpoint, "CheckMobi response received");

        let body = crate::transport::classify_response(response.status, &response.body)
            .map_err(|failure| {
                if let StatusFailure::Unexpected { status, .. } = &failure {
                    warn!(status, ?endpoint, "unexpected HTTP status from CheckMobi");
                }
                CheckMobiError::from(failure)
            })?;

        decode(body).map_err(|err| CheckMobiError::Parse(Box::new(err)))
    }
}
