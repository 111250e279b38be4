use std::fmt;

use crate::endpoint::EndpointConfig;
use crate::error::Error;
use crate::param::{self, EncodedParameter, ParameterSpec};

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read query.
    Get,
    /// Write command.
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A fully formed request, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Escaped path, starting with `/`.
    pub path: String,
    /// Query parameters in declaration order. Always empty for `POST`.
    pub query: Vec<EncodedParameter>,
    /// Form body for `POST` requests.
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Path plus query string, e.g. `/outages/host1?start_time=...`.
    pub fn request_uri(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, join(&self.query))
        }
    }

    /// Absolute URI against the given endpoint.
    pub fn uri(&self, endpoint: &EndpointConfig) -> String {
        format!("{endpoint}{}", self.request_uri())
    }
}

fn join(params: &[EncodedParameter]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("&")
}

/// Validate the given specs and assemble a request.
///
/// Path specs become `/`-separated segments after the action, in order;
/// absent optional segments are dropped. Query specs become the query string
/// for `GET` and the form body for `POST`. Every spec is validated before
/// anything is assembled.
pub fn assemble(
    method: Method,
    action: &str,
    path_params: &[ParameterSpec],
    query_params: &[ParameterSpec],
) -> Result<RequestDescriptor, Error> {
    let segments = param::prepare(path_params)?;
    let params = param::prepare(query_params)?;

    let mut path = format!("/{action}");
    for segment in &segments {
        path.push('/');
        path.push_str(&segment.encoded);
    }

    let (query, body) = match method {
        Method::Get => (params, None),
        Method::Post => (Vec::new(), Some(join(&params))),
    };

    Ok(RequestDescriptor {
        method,
        path,
        query,
        body,
    })
}
