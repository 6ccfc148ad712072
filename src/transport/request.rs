use std::fmt;
use std::net::IpAddr;

use url::Url;

use crate::domain::ApiSecret;
use crate::transport::endpoint::{Endpoint, EndpointError, Method};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CLIENT_IP: &str = "X-Client-IP";

const JSON_CONTENT_TYPE: &str = "application/json";

/// One outbound HTTP request, built fresh for every call.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(key, value)| {
                if *key == AUTHORIZATION {
                    (*key, "***")
                } else {
                    (*key, value.as_str())
                }
            })
            .collect::<Vec<_>>();
        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Build the request for `endpoint`. The body is only attached to POST requests and
/// `id` is only used by templated GET paths.
pub fn build_request(
    secret: &ApiSecret,
    base_url: &Url,
    endpoint: Endpoint,
    id: Option<&str>,
    body: Option<String>,
    client_ip: Option<IpAddr>,
) -> Result<RequestDescriptor, EndpointError> {
    let method = endpoint.method();
    let url = endpoint.resolve(base_url, id)?;

    let mut headers = vec![
        (AUTHORIZATION, secret.expose().to_owned()),
        (CONTENT_TYPE, JSON_CONTENT_TYPE.to_owned()),
    ];
    if let Some(ip) = client_ip {
        headers.push((CLIENT_IP, ip.to_string()));
    }

    let body = match method {
        Method::Post => body,
        Method::Get => None,
    };

    Ok(RequestDescriptor {
        method,
        url,
        headers,
        body,
    })
}
