use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A response whose status code is not a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFailure {
    /// `400` / `401`: the server explains what was wrong with the request.
    Rejected {
        status: u16,
        code: Option<i64>,
        message: Option<String>,
    },
    /// `403` / `404` / `500`: body is ignored and a fixed message is used.
    Fixed { status: u16, message: &'static str },
    /// Anything else.
    Unexpected { status: u16, body: Option<String> },
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorJsonBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    error: Option<String>,
}

/// Messages for statuses whose body is not authoritative.
pub fn fixed_error_message(status: u16) -> Option<&'static str> {
    match status {
        403 => Some("Forbidden: the credential is not allowed to access this resource"),
        404 => Some("Not found: the requested resource does not exist"),
        500 => Some("Internal server error: the remote service failed to process the request"),
        _ => None,
    }
}

/// Split a response into its success body or a [`StatusFailure`].
///
/// Only `200` and `204` count as success.
pub fn classify_response(status: u16, body: &str) -> Result<&str, StatusFailure> {
    match status {
        200 | 204 => Ok(body),
        400 | 401 => {
            let (code, message) = match serde_json::from_str::<ErrorJsonBody>(body) {
                Ok(parsed) => (parsed.code, parsed.error),
                Err(_) => (None, non_blank(body)),
            };
            Err(StatusFailure::Rejected {
                status,
                code,
                message,
            })
        }
        _ => match fixed_error_message(status) {
            Some(message) => Err(StatusFailure::Fixed { status, message }),
            None => Err(StatusFailure::Unexpected {
                status,
                body: non_blank(body),
            }),
        },
    }
}

/// Parse a JSON body. A blank body yields `None`.
pub fn parse_json<T: DeserializeOwned>(json: &str) -> Result<Option<T>, TransportError> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(json)?))
}

fn non_blank(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
