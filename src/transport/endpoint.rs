use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.checkmobi.com/v1/";

const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// CheckMobi operations and where they live, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Countries and their calling prefixes. Also serves the "countries" listing.
    Prefixes,
    CheckNumber,
    ValidationRequest,
    ValidationVerify,
    ValidationStatus,
    RemoteConfig,
    SendSms,
    SmsStatus,
}

#[derive(Debug, thiserror::Error)]
/// A request URL could not be built.
pub enum EndpointError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("URL cannot be used as a base: {url}")]
    CannotBeABase { url: String },

    #[error("endpoint `{template}` requires an id")]
    MissingId { template: &'static str },
}

impl Endpoint {
    pub const ALL: [Self; 8] = [
        Self::Prefixes,
        Self::CheckNumber,
        Self::ValidationRequest,
        Self::ValidationVerify,
        Self::ValidationStatus,
        Self::RemoteConfig,
        Self::SendSms,
        Self::SmsStatus,
    ];

    pub fn method(self) -> Method {
        match self {
            Self::Prefixes | Self::ValidationStatus | Self::SmsStatus => Method::Get,
            Self::CheckNumber
            | Self::ValidationRequest
            | Self::ValidationVerify
            | Self::RemoteConfig
            | Self::SendSms => Method::Post,
        }
    }

    pub fn path_template(self) -> &'static str {
        match self {
            Self::Prefixes => "prefixes",
            Self::CheckNumber => "checknumber",
            Self::ValidationRequest => "validation/request",
            Self::ValidationVerify => "validation/verify",
            Self::ValidationStatus => "validation/status/{id}",
            Self::RemoteConfig => "validation/remote-config",
            Self::SendSms => "sms/send",
            Self::SmsStatus => "sms/{id}",
        }
    }

    pub fn takes_id(self) -> bool {
        self.path_template().ends_with(ID_PLACEHOLDER)
    }

    /// Join the path template onto `base`, substituting `id` as one percent-encoded
    /// path segment. `id` is ignored for templates without a placeholder.
    pub fn resolve(self, base: &Url, id: Option<&str>) -> Result<Url, EndpointError> {
        let template = self.path_template();
        let Some(prefix) = template.strip_suffix(ID_PLACEHOLDER) else {
            return Ok(base.join(template)?);
        };

        let id = id.ok_or(EndpointError::MissingId { template })?;
        let mut url = base.join(prefix)?;
        url.path_segments_mut()
            .map_err(|()| EndpointError::CannotBeABase {
                url: base.to_string(),
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

/// Parse a base URL and make sure its path ends with `/` so relative joins append
/// instead of replacing the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, EndpointError> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(EndpointError::CannotBeABase {
            url: raw.to_owned(),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// [`DEFAULT_BASE_URL`] as a parsed [`Url`].
pub fn default_base_url() -> Url {
    // DEFAULT_BASE_URL is an absolute https URL ending in `/`.
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
}
