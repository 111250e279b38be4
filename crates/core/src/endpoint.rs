use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::Error;

/// URI scheme of the API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Plain HTTP.
    #[default]
    Http,
    /// HTTP over TLS.
    Https,
}

impl Scheme {
    /// Port used when the endpoint string does not name one.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    /// Lowercase scheme name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheme, host, and port every request is sent to.
///
/// Parsed once from a base endpoint string of the form
/// `[scheme://]host[:port]`. Anything after the authority is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// URI scheme.
    pub scheme: Scheme,
    /// Host name or address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl EndpointConfig {
    /// Parse a base endpoint string.
    ///
    /// The scheme defaults to `http`; the port defaults to 443 for `https`
    /// and 80 otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use diner_core::{EndpointConfig, Scheme};
    ///
    /// let endpoint = EndpointConfig::parse("https://flapjack.example.com:8443").unwrap();
    /// assert_eq!(endpoint.scheme, Scheme::Https);
    /// assert_eq!(endpoint.host, "flapjack.example.com");
    /// assert_eq!(endpoint.port, 8443);
    /// ```
    pub fn parse(base: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidEndpoint(base.to_owned());

        let trimmed = base.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let candidate = if has_scheme(trimmed) {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(format!("http://{trimmed}"))
        };
        let url = Url::parse(&candidate).map_err(|_| invalid())?;

        let scheme = match url.scheme() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            _ => return Err(invalid()),
        };
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(invalid)?
            .to_owned();
        let port = url.port().unwrap_or_else(|| scheme.default_port());

        Ok(Self { scheme, host, port })
    }

    /// The endpoint rendered as `scheme://host:port`.
    pub fn base_url(&self) -> String {
        self.to_string()
    }
}

/// A `://` only separates a scheme when it precedes any path, query, or
/// fragment delimiter.
fn has_scheme(input: &str) -> bool {
    input
        .find("://")
        .is_some_and(|at| !input[..at].contains(['/', '?', '#']))
}

impl FromStr for EndpointConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_defaults_to_http_80() {
        let endpoint = EndpointConfig::parse("example.com").unwrap();
        assert_eq!(
            endpoint,
            EndpointConfig {
                scheme: Scheme::Http,
                host: "example.com".into(),
                port: 80,
            }
        );
    }

    #[test]
    fn https_with_port() {
        let endpoint = EndpointConfig::parse("https://example.com:8443").unwrap();
        assert_eq!(endpoint.scheme, Scheme::Https);
        assert_eq!(endpoint.host, "example.com");
        assert_eq!(endpoint.port, 8443);
    }

    #[test]
    fn https_defaults_to_443() {
        let endpoint = EndpointConfig::parse("https://example.com").unwrap();
        assert_eq!(endpoint.port, 443);

        let endpoint = EndpointConfig::parse("https://example.com:443").unwrap();
        assert_eq!(endpoint.port, 443);
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let endpoint = EndpointConfig::parse("HTTPS://Example.COM").unwrap();
        assert_eq!(endpoint.scheme, Scheme::Https);
        assert_eq!(endpoint.host, "example.com");
    }

    #[test]
    fn bare_host_with_port() {
        let endpoint = EndpointConfig::parse("localhost:3081").unwrap();
        assert_eq!(endpoint.scheme, Scheme::Http);
        assert_eq!(endpoint.host, "localhost");
        assert_eq!(endpoint.port, 3081);
    }

    #[test]
    fn trailing_path_is_ignored() {
        let endpoint = EndpointConfig::parse("http://127.0.0.1:8080/api/").unwrap();
        assert_eq!(endpoint.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn bare_host_with_url_in_query() {
        let endpoint = EndpointConfig::parse("flapjack.example.com/api?next=http://x").unwrap();
        assert_eq!(endpoint.scheme, Scheme::Http);
        assert_eq!(endpoint.host, "flapjack.example.com");
        assert_eq!(endpoint.port, 80);

        let endpoint = EndpointConfig::parse("localhost:3081#https://elsewhere").unwrap();
        assert_eq!(endpoint.base_url(), "http://localhost:3081");
    }

    #[test]
    fn scheme_detection() {
        assert!(has_scheme("https://example.com/?next=http://x"));
        assert!(!has_scheme("example.com/?next=http://x"));
        assert!(!has_scheme("example.com"));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            EndpointConfig::parse(""),
            Err(Error::InvalidEndpoint(_))
        ));
        assert!(matches!(
            EndpointConfig::parse("   "),
            Err(Error::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn missing_host_fails() {
        assert!(EndpointConfig::parse("http://").is_err());
        assert!(EndpointConfig::parse("https://:8443").is_err());
    }

    #[test]
    fn unsupported_scheme_fails() {
        assert!(matches!(
            EndpointConfig::parse("ftp://example.com"),
            Err(Error::InvalidEndpoint(ref s)) if s == "ftp://example.com"
        ));
    }

    #[test]
    fn bad_port_fails() {
        assert!(EndpointConfig::parse("example.com:http").is_err());
        assert!(EndpointConfig::parse("example.com:99999").is_err());
    }

    #[test]
    fn from_str_and_display() {
        let endpoint: EndpointConfig = "flapjack.local".parse().unwrap();
        assert_eq!(endpoint.to_string(), "http://flapjack.local:80");
    }
}
