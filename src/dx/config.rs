//! # Gateway configuration
//!
//! This module contains the [`GatewayConfig`] struct and the accessors the
//! gateway uses to read it.

use derive_builder::Builder;

use crate::core::{
    utils::headers::{ACCEPT, APPLICATION_JSON, CONTENT_TYPE, DATA_TYPE},
    GatewayError, HeaderValue, Headers,
};

/// Gateway configuration.
///
/// Supplies the base URL relative request addresses are resolved against and
/// the headers added to every request. The configuration is read-only once
/// the gateway has been built.
///
/// # Examples
/// ```
/// use http_gateway::dx::GatewayConfigBuilder;
///
/// # fn main() -> Result<(), http_gateway::core::GatewayError> {
/// let config = GatewayConfigBuilder::default()
///     .with_url("https://api.example.com")
///     .with_header("Authorization", "Bearer token")
///     .build()?;
///
/// assert_eq!(config.url.as_deref(), Some("https://api.example.com"));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq)]
#[builder(
    pattern = "owned",
    name = "GatewayConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct GatewayConfig {
    /// Base URL for relative request addresses.
    #[builder(setter(into, strip_option), default = "None")]
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,

    /// Headers added to every request.
    #[builder(setter(custom), default = "Headers::new()")]
    #[cfg_attr(feature = "serde", serde(default))]
    pub headers: Headers,
}

impl GatewayConfigBuilder {
    /// Add header sent with every request.
    ///
    /// Setting the same header name twice replaces the previous value.
    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<HeaderValue>,
    {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replace all headers sent with every request.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Build [`GatewayConfig`].
    pub fn build(self) -> Result<GatewayConfig, GatewayError> {
        self.build_internal()
            .map_err(|err| GatewayError::ClientInitialization {
                details: err.to_string(),
            })
            .and_then(|config| {
                if let Some(url) = &config.url {
                    if url.trim().is_empty() {
                        return Err(GatewayError::ClientInitialization {
                            details: "Base URL can't be empty".into(),
                        });
                    }
                }
                Ok(config)
            })
    }
}

/// Headers used when the gateway has no configuration.
pub fn fallback_headers() -> Headers {
    Headers::from([
        (ACCEPT.to_string(), HeaderValue::from(APPLICATION_JSON)),
        (CONTENT_TYPE.to_string(), HeaderValue::from(APPLICATION_JSON)),
        (DATA_TYPE.to_string(), HeaderValue::from(APPLICATION_JSON)),
    ])
}

/// Base URL from the optional configuration.
pub(crate) fn base_url(config: Option<&GatewayConfig>) -> Option<&str> {
    config.and_then(|config| config.url.as_deref())
}

/// Default headers from the optional configuration.
pub(crate) fn default_headers(config: Option<&GatewayConfig>) -> Headers {
    match config {
        Some(config) => config.headers.clone(),
        None => fallback_headers(),
    }
}

/// Resolve `url` against `base`.
///
/// Absolute addresses (with scheme) are returned untouched. Relative ones are
/// joined with the base using exactly one `/`.
pub(crate) fn resolve_url(base: Option<&str>, url: &str) -> String {
    match base {
        Some(base) if !has_scheme(url) => {
            if url.is_empty() {
                return base.to_string();
            }
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                url.trim_start_matches('/')
            )
        }
        _ => url.to_string(),
    }
}

/// Whether `url` starts with `scheme:`.
///
/// Only the part before the first `/`, `?` or `#` is inspected, so schemes
/// inside the path or query don't count.
fn has_scheme(url: &str) -> bool {
    let end = url.find(&['/', '?', '#'][..]).unwrap_or(url.len());

    match url[..end].find(':') {
        Some(colon) => {
            let scheme = &url[..colon];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test]
    fn fall_back_to_json_headers_without_config() {
        let headers = default_headers(None);

        assert_eq!(
            headers,
            Headers::from([
                ("Accept".to_string(), HeaderValue::from("application/json")),
                (
                    "Content-Type".to_string(),
                    HeaderValue::from("application/json")
                ),
                ("DataType".to_string(), HeaderValue::from("application/json")),
            ])
        );
        assert_eq!(base_url(None), None);
    }

    #[test]
    fn use_configured_values() {
        let config = GatewayConfigBuilder::default()
            .with_url("https://api.example.com")
            .with_header("Accept", vec!["text/html", "application/xml"])
            .build()
            .unwrap();

        assert_eq!(base_url(Some(&config)), Some("https://api.example.com"));
        assert_eq!(
            default_headers(Some(&config)),
            Headers::from([(
                "Accept".to_string(),
                HeaderValue::from(vec!["text/html", "application/xml"])
            )])
        );
    }

    #[test]
    fn keep_empty_headers_of_configuration() {
        let config = GatewayConfigBuilder::default().build().unwrap();

        assert!(default_headers(Some(&config)).is_empty());
        assert_eq!(base_url(Some(&config)), None);
    }

    #[test]
    fn reject_blank_base_url() {
        let result = GatewayConfigBuilder::default().with_url("  ").build();

        assert!(matches!(
            result,
            Err(GatewayError::ClientInitialization { .. })
        ));
    }

    #[test_case(None, "https://a.io/x" => "https://a.io/x"; "no base")]
    #[test_case(Some("https://a.io"), "users" => "https://a.io/users"; "relative")]
    #[test_case(Some("https://a.io/"), "/users" => "https://a.io/users"; "duplicated slash")]
    #[test_case(Some("https://a.io/v1"), "" => "https://a.io/v1"; "empty url")]
    #[test_case(Some("https://a.io"), "http://b.io/users" => "http://b.io/users"; "absolute")]
    #[test_case(Some("https://a.io"), "login?next=https://b.io/home" => "https://a.io/login?next=https://b.io/home"; "scheme in query")]
    #[test_case(Some("https://a.io"), "/go/https://b.io" => "https://a.io/go/https://b.io"; "scheme in path")]
    #[test_case(Some("https://a.io"), "urn:isbn:0451450523" => "urn:isbn:0451450523"; "scheme without authority")]
    fn resolve_request_url(base: Option<&str>, url: &str) -> String {
        resolve_url(base, url)
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_config_with_multi_value_headers() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{"url":"https://a.io","headers":{"Accept":["a","b"],"X-Api-Key":"k"}}"#,
        )
        .unwrap();

        assert_eq!(config.url.as_deref(), Some("https://a.io"));
        assert_eq!(
            config.headers.get("Accept"),
            Some(&HeaderValue::from(vec!["a", "b"]))
        );
        assert_eq!(config.headers.get("X-Api-Key"), Some(&HeaderValue::from("k")));
    }
}
