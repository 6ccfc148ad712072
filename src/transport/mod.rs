//! Transport layer: endpoint table, request building, status classification and
//! JSON (de)serialization.

mod endpoint;
mod number;
mod request;
mod response;
mod sms;
mod text;
mod validation;

pub use endpoint::{
    DEFAULT_BASE_URL, Endpoint, EndpointError, Method, default_base_url, parse_base_url,
};
pub use number::{
    decode_number_information_json_response, decode_prefixes_json_response,
    encode_check_number_json,
};
pub use request::{RequestDescriptor, build_request};
#[cfg(test)]
pub use request::{AUTHORIZATION, CLIENT_IP, CONTENT_TYPE};
pub use response::{StatusFailure, TransportError, classify_response};
#[cfg(test)]
pub use response::fixed_error_message;
pub use sms::{
    decode_message_information_json_response, decode_send_message_json_response,
    encode_send_message_json,
};
pub use validation::{
    decode_remote_config_json_response, decode_validation_request_json_response,
    decode_validation_status_json_response, decode_verify_pin_json_response,
    encode_remote_config_json, encode_validate_phone_json, encode_verify_pin_json,
};
