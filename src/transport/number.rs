use serde::{Deserialize, Serialize};

use crate::domain::{CountryPrefix, NumberInformation};
use crate::transport::response::{TransportError, parse_json};
use crate::transport::text::TransportText;

#[derive(Debug, Serialize)]
struct CheckNumberJsonRequest<'a> {
    number: &'a str,
}

/// Number details, returned by `checknumber` and nested in validation responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NumberJsonResponse {
    #[serde(default)]
    country_code: Option<TransportText>,
    #[serde(default)]
    country_iso_code: Option<String>,
    #[serde(default)]
    carrier: Option<String>,
    #[serde(default)]
    is_mobile: Option<bool>,
    #[serde(default)]
    e164_format: Option<String>,
    #[serde(default)]
    formatting: Option<String>,
}

impl From<NumberJsonResponse> for NumberInformation {
    fn from(value: NumberJsonResponse) -> Self {
        Self {
            country_code: value
                .country_code
                .and_then(|code| code.into_string().trim().parse::<u32>().ok()),
            country_iso_code: value.country_iso_code,
            carrier: value.carrier,
            is_mobile: value.is_mobile,
            e164_format: value.e164_format,
            formatting: value.formatting,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PrefixJsonEntry {
    #[serde(default)]
    iso: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    prefix: Option<TransportText>,
}

pub fn encode_check_number_json(number: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&CheckNumberJsonRequest { number })
}

pub fn decode_number_information_json_response(
    json: &str,
) -> Result<NumberInformation, TransportError> {
    Ok(parse_json::<NumberJsonResponse>(json)?
        .map(NumberInformation::from)
        .unwrap_or_default())
}

pub fn decode_prefixes_json_response(json: &str) -> Result<Vec<CountryPrefix>, TransportError> {
    let entries = parse_json::<Vec<PrefixJsonEntry>>(json)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .map(|entry| CountryPrefix {
            iso: entry.iso,
            name: entry.name,
            prefix: entry.prefix.map(TransportText::into_string),
        })
        .collect())
}
