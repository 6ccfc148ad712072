use serde::{Deserialize, Serialize};

use crate::domain::{
    NumberInformation, RemoteConfig, ValidatePhone, ValidationId, ValidationRequestResponse,
    ValidationStatus, VerifyPinResponse,
};
use crate::transport::number::NumberJsonResponse;
use crate::transport::response::{TransportError, parse_json};
use crate::transport::text::TransportText;

#[derive(Debug, Serialize)]
struct ValidationJsonRequest<'a> {
    number: &'a str,
    #[serde(rename = "type")]
    validation_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct VerifyPinJsonRequest<'a> {
    id: &'a str,
    pin: &'a str,
    use_server_hangup: bool,
}

#[derive(Debug, Serialize)]
struct RemoteConfigJsonRequest<'a> {
    number: &'a str,
    platform: &'a str,
    language: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct ValidationJsonResponse {
    #[serde(default)]
    id: String,
    #[serde(default, rename = "type")]
    validation_type: Option<String>,
    #[serde(default)]
    dial_number: Option<String>,
    #[serde(default)]
    validation_info: Option<NumberJsonResponse>,
}

/// Shared by `validation/verify` and `validation/status/{id}`.
#[derive(Debug, Clone, Deserialize)]
struct ValidatedJsonResponse {
    #[serde(default)]
    validated: bool,
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    validation_date: Option<i64>,
    #[serde(default)]
    charged_amount: Option<TransportText>,
}

pub fn encode_validate_phone_json(request: &ValidatePhone) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ValidationJsonRequest {
        number: request.number(),
        validation_type: request.verification_type().as_str(),
        language: request.language_tag(),
        platform: request.platform_name(),
    })
}

/// The server is always asked to hang up the verification call itself.
pub fn encode_verify_pin_json(id: &ValidationId, pin: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&VerifyPinJsonRequest {
        id: id.as_str(),
        pin,
        use_server_hangup: true,
    })
}

pub fn encode_remote_config_json(
    number: &str,
    platform: &str,
    language: &str,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&RemoteConfigJsonRequest {
        number,
        platform,
        language,
    })
}

pub fn decode_validation_request_json_response(
    json: &str,
) -> Result<ValidationRequestResponse, TransportError> {
    let Some(parsed) = parse_json::<ValidationJsonResponse>(json)? else {
        return Ok(ValidationRequestResponse::default());
    };
    Ok(ValidationRequestResponse {
        id: parsed.id,
        validation_type: parsed.validation_type,
        dial_number: parsed.dial_number,
        validation_info: parsed.validation_info.map(NumberInformation::from),
    })
}

pub fn decode_verify_pin_json_response(json: &str) -> Result<VerifyPinResponse, TransportError> {
    let Some(parsed) = parse_json::<ValidatedJsonResponse>(json)? else {
        return Ok(VerifyPinResponse::default());
    };
    Ok(VerifyPinResponse {
        validated: parsed.validated,
        number: parsed.number,
        validation_date: parsed.validation_date,
        charged_amount: parsed.charged_amount.map(TransportText::into_string),
    })
}

pub fn decode_validation_status_json_response(
    json: &str,
) -> Result<ValidationStatus, TransportError> {
    let Some(parsed) = parse_json::<ValidatedJsonResponse>(json)? else {
        return Ok(ValidationStatus::default());
    };
    Ok(ValidationStatus {
        validated: parsed.validated,
        number: parsed.number,
        validation_date: parsed.validation_date,
        charged_amount: parsed.charged_amount.map(TransportText::into_string),
    })
}

pub fn decode_remote_config_json_response(json: &str) -> Result<RemoteConfig, TransportError> {
    Ok(parse_json::<RemoteConfig>(json)?.unwrap_or_default())
}
