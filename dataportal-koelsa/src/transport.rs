use dataportal_common::validation::validate_service_key;
use dataportal_common::{
    ApiResponse, ClientConfig, ErrorCode, PortalError, Result, SERVICE_KEY_PARAM,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, RETRY_AFTER};
use reqwest::StatusCode;
use std::error::Error as _;

/// HTTP adapter for portal endpoints.
///
/// Appends the service key to every outgoing query, performs one GET round
/// trip per call and classifies every failure into a taxonomy error.
/// Stateless across calls apart from the immutable configuration snapshot.
#[derive(Debug)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    provider_name: &'static str,
}

impl Transport {
    /// Build the adapter from a configuration snapshot.
    ///
    /// Fails with a configuration error when an extra default header is
    /// unusable or the underlying client cannot be constructed. The service
    /// key is deliberately not checked here; see [`Transport::get`].
    pub fn new(config: &ClientConfig, provider_name: &'static str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                PortalError::configuration(
                    format!("Invalid header name: {}", name),
                    Some(format!("headers.{}", name)),
                )
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                PortalError::configuration(
                    format!("Invalid header value for {}", name),
                    Some(format!("headers.{}", name)),
                )
            })?;
            headers.insert(header_name, header_value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                PortalError::configuration(format!("Failed to build HTTP client: {}", e), None)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
            provider_name,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint path and parse the portal envelope.
    ///
    /// The service key is checked before any I/O, so a client configured
    /// with an empty key fails fast without touching the network.
    pub async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<ApiResponse> {
        validate_service_key(&self.service_key)?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "portal request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[(SERVICE_KEY_PARAM, self.service_key.as_str())])
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status_error(status, self.provider_name, response).await);
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                PortalError::api_with_code(
                    ErrorCode::ApiTimeout,
                    "API request timed out",
                    Some(status.as_u16()),
                    None,
                    None,
                )
            } else {
                PortalError::network(
                    "Network error: failed to read response body",
                    Some(error_chain_text(&e)),
                )
            }
        })?;

        serde_json::from_str::<ApiResponse>(&body).map_err(|e| {
            PortalError::api_with_code(
                ErrorCode::ApiResponseError,
                format!("Invalid API response: {}", e),
                Some(status.as_u16()),
                None,
                Some(body),
            )
        })
    }
}

/// Map a send-phase failure (no HTTP response) onto the taxonomy.
fn classify_request_error(e: reqwest::Error) -> PortalError {
    if e.is_timeout() {
        return PortalError::api_with_code(
            ErrorCode::ApiTimeout,
            "API request timed out",
            None,
            None,
            None,
        );
    }
    if e.is_builder() {
        return PortalError::configuration(format!("Request configuration error: {}", e), None);
    }

    let chain = error_chain_text(&e);
    if e.is_connect() {
        let lower = chain.to_lowercase();
        if lower.contains("dns") || lower.contains("resolve") || lower.contains("lookup") {
            return PortalError::network_with_code(
                ErrorCode::DnsResolutionFailed,
                "DNS resolution failed",
                Some(chain),
            );
        }
        if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
            return PortalError::network_with_code(
                ErrorCode::SslError,
                "SSL connection failed",
                Some(chain),
            );
        }
        return PortalError::network_with_code(
            ErrorCode::ConnectionFailed,
            "Network error: Unable to connect to server",
            Some(chain),
        );
    }

    PortalError::network("Network connection failed", Some(chain))
}

/// Map a non-success HTTP status onto the taxonomy. Consumes the response
/// body so the raw payload travels with the error.
async fn classify_status_error(
    status: StatusCode,
    provider_name: &'static str,
    response: reqwest::Response,
) -> PortalError {
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok());

    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let message = match retry_after {
            Some(secs) => format!("Rate limit exceeded. Retry after {} seconds.", secs),
            None => "Rate limit exceeded".to_string(),
        };
        return PortalError::rate_limit(message, retry_after);
    }

    if status.is_server_error() {
        return PortalError::service_unavailable(
            format!("Service unavailable: HTTP {}", status.as_u16()),
            Some(provider_name.to_string()),
        );
    }

    let (upstream_code, upstream_msg) = envelope_parts(&body);
    let detail = upstream_msg.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    PortalError::api(
        format!("API request failed: {} - {}", status.as_u16(), detail),
        Some(status.as_u16()),
        upstream_code,
        Some(body),
    )
}

// Error bodies sometimes still carry the portal envelope; salvage the header
// result code and message when they do.
fn envelope_parts(body: &str) -> (Option<String>, Option<String>) {
    match serde_json::from_str::<ApiResponse>(body) {
        Ok(parsed) => {
            let header = parsed.response.header;
            let msg = if header.result_msg.is_empty() {
                None
            } else {
                Some(header.result_msg)
            };
            (Some(header.result_code), msg)
        }
        Err(_) => (None, None),
    }
}

/// Render a reqwest error with its full cause chain.
fn error_chain_text(e: &reqwest::Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
