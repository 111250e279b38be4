use std::time::Duration;

use serde::Deserialize;

use crate::DinerClientBuilder;

/// Client settings that can be embedded in a consumer's configuration file.
///
/// # Example
///
/// ```toml
/// [flapjack]
/// base_uri = "https://flapjack.example.com:3081"
/// timeout_seconds = 10
/// user_agent = "ops-dashboard/1.4"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base endpoint, `[scheme://]host[:port]`.
    pub base_uri: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Overrides the default `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl ClientConfig {
    /// Settings for the given endpoint with every other field defaulted.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: None,
        }
    }

    /// A builder pre-populated from these settings.
    pub fn into_builder(self) -> DinerClientBuilder {
        let builder = DinerClientBuilder::new(self.base_uri)
            .timeout(Duration::from_secs(self.timeout_seconds));
        match self.user_agent {
            Some(agent) => builder.user_agent(agent),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct ConsumerConfig {
        flapjack: ClientConfig,
    }

    #[test]
    fn defaults_applied() {
        let config: ConsumerConfig = toml::from_str(
            r#"
            [flapjack]
            base_uri = "flapjack.local"
            "#,
        )
        .unwrap();
        assert_eq!(config.flapjack.base_uri, "flapjack.local");
        assert_eq!(config.flapjack.timeout_seconds, 30);
        assert!(config.flapjack.user_agent.is_none());
    }

    #[test]
    fn all_fields() {
        let config: ConsumerConfig = toml::from_str(
            r#"
            [flapjack]
            base_uri = "https://flapjack.example.com:3081"
            timeout_seconds = 5
            user_agent = "ops-dashboard/1.4"
            "#,
        )
        .unwrap();
        assert_eq!(config.flapjack.timeout_seconds, 5);
        assert_eq!(
            config.flapjack.user_agent.as_deref(),
            Some("ops-dashboard/1.4")
        );
    }

    #[test]
    fn missing_base_uri_rejected() {
        let result: Result<ConsumerConfig, _> =
            toml::from_str("[flapjack]\ntimeout_seconds = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn into_builder_carries_settings() {
        let mut config = ClientConfig::new("https://flapjack.example.com");
        config.timeout_seconds = 7;
        config.user_agent = Some("probe/0.1".into());
        let client = config.into_builder().build().unwrap();
        assert_eq!(client.endpoint().port, 443);
        assert_eq!(client.endpoint().host, "flapjack.example.com");
    }
}
