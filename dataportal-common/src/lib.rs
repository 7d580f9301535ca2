use std::fmt;
use std::time::Duration;

pub mod envelope;
pub mod error;
pub mod validation;

pub use envelope::{
    extract_items, ApiResponse, Envelope, EnvelopeBody, EnvelopeHeader, ItemExtraction, Page,
};
pub use error::{
    error_category, error_message, is_agency_code, is_common_code, ErrorCode, ErrorKind,
    PortalError, Result, StructuredError,
};

/// Maximum rows per page accepted by the portal endpoints.
pub const MAX_NUM_OF_ROWS: u32 = 1000;
/// Maximum length of an elevator unique number, in characters.
pub const ELEVATOR_NO_MAX_LEN: usize = 12;
/// Maximum length of a site/elevator management code, in characters.
pub const MANAGEMENT_CODE_MAX_LEN: usize = 100;
/// Bounds of the year field in a `YYYYMMDD` date parameter.
pub const MIN_DATE_YEAR: u32 = 1900;
pub const MAX_DATE_YEAR: u32 = 2100;
/// Envelope header result code signalling success.
pub const RESULT_CODE_SUCCESS: &str = "00";
/// Name of the query parameter carrying the caller's credential.
pub const SERVICE_KEY_PARAM: &str = "serviceKey";
/// Per-request timeout applied when the configuration does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a portal API client.
///
/// A plain value object supplied by the caller; the facade owns its copy and
/// replaces it wholesale on key rotation.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub service_key: String,
    pub timeout: Duration,
    /// Extra default headers, applied on top of the JSON content type.
    pub headers: Vec<(String, String)>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            service_key: service_key.into(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
        }
    }
}

// The service key is a credential; keep it out of Debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("service_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("headers", &self.headers)
            .finish()
    }
}

/// Static facts about the public agency behind an API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub base_url: &'static str,
    pub website_url: &'static str,
    pub documentation_url: &'static str,
}
