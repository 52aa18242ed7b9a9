//! Request construction: turns method, URL, headers and params into a
//! transport-ready [`PendingRequest`].
//!
//! Encoding rules depend on the method:
//!
//! | Method | Params go to |
//! |--------|--------------|
//! | `GET` | URL query string |
//! | `POST` | structured form body ([`Body::Form`], sent as multipart) |
//! | `PUT` / `PATCH` / `DELETE` | URL-encoded raw body ([`Body::Encoded`]) |
//!
//! Building never performs I/O and never fails.

use crate::{Error, ErrorContext};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// HTTP method supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => Err(Error::validation_with_context(
                "unsupported HTTP method",
                ErrorContext::new()
                    .with_field_path("method")
                    .with_details(s.to_string()),
            )),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Structured form fields; the transport picks the wire encoding (multipart).
    Form(Vec<(String, String)>),
    /// Pre-encoded `application/x-www-form-urlencoded` string.
    Encoded(String),
}

/// An immutable, fully-constructed request that has not been sent yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Body>,
}

impl PendingRequest {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// True if the caller supplied a header with this name (ASCII case-insensitive).
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

/// Builds [`PendingRequest`] values.
pub struct RequestBuilder;

impl RequestBuilder {
    /// Build a request for `url` (host and path already concatenated).
    pub fn build(
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        params: &[(&str, &str)],
    ) -> PendingRequest {
        let headers = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let (url, body) = match method {
            Method::Get => (append_query(url, params), None),
            Method::Post => {
                let body = (!params.is_empty()).then(|| {
                    Body::Form(
                        params
                            .iter()
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .collect(),
                    )
                });
                (url.to_string(), body)
            }
            Method::Put | Method::Patch | Method::Delete => {
                let body = (!params.is_empty()).then(|| Body::Encoded(encode_params(params)));
                (url.to_string(), body)
            }
        };

        PendingRequest {
            method,
            url,
            headers,
            body,
        }
    }
}

/// Form-urlencode `params` in order (`a=1&b=x+y`).
pub fn encode_params(params: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Append `params` as a query string, before any `#fragment`.
fn append_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let (base, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };

    let separator = match base.find('?') {
        None => "?",
        Some(_) if base.ends_with('?') || base.ends_with('&') => "",
        Some(_) => "&",
    };

    format!("{}{}{}{}", base, separator, encode_params(params), fragment)
}
