use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Stable numeric error codes, namespaced by hundreds.
///
/// 1xx is shared across all agency clients; 2xx belongs to KOELSA. The 3xx
/// (KMA) and 4xx (KOTSA) bands are reserved so future agency clients can add
/// codes without collisions. Category is derivable from `code / 100` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum ErrorCode {
    UnknownError = 100,
    ValidationError = 101,
    InvalidParameter = 102,
    InvalidServiceKey = 103,
    InvalidPageNumber = 104,
    InvalidDateFormat = 105,
    ApiError = 121,
    ApiTimeout = 122,
    ApiResponseError = 123,
    NetworkError = 141,
    DnsResolutionFailed = 142,
    ConnectionFailed = 143,
    SslError = 144,
    ConfigurationError = 161,
    ServiceUnavailable = 181,
    RateLimitExceeded = 191,
    KoelsaServiceError = 200,
    ElevatorNotFound = 201,
    InvalidElevatorNumber = 202,
    InvalidInspectionData = 203,
    InvalidManagementCode = 204,
    KmaServiceError = 300,
    WeatherDataNotFound = 301,
    InvalidLocationCode = 302,
    WeatherStationNotFound = 303,
    KotsaServiceError = 400,
    VehicleNotFound = 401,
    InvalidVehicleNumber = 402,
    TransportDataNotAvailable = 403,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            100 => Some(Self::UnknownError),
            101 => Some(Self::ValidationError),
            102 => Some(Self::InvalidParameter),
            103 => Some(Self::InvalidServiceKey),
            104 => Some(Self::InvalidPageNumber),
            105 => Some(Self::InvalidDateFormat),
            121 => Some(Self::ApiError),
            122 => Some(Self::ApiTimeout),
            123 => Some(Self::ApiResponseError),
            141 => Some(Self::NetworkError),
            142 => Some(Self::DnsResolutionFailed),
            143 => Some(Self::ConnectionFailed),
            144 => Some(Self::SslError),
            161 => Some(Self::ConfigurationError),
            181 => Some(Self::ServiceUnavailable),
            191 => Some(Self::RateLimitExceeded),
            200 => Some(Self::KoelsaServiceError),
            201 => Some(Self::ElevatorNotFound),
            202 => Some(Self::InvalidElevatorNumber),
            203 => Some(Self::InvalidInspectionData),
            204 => Some(Self::InvalidManagementCode),
            300 => Some(Self::KmaServiceError),
            301 => Some(Self::WeatherDataNotFound),
            302 => Some(Self::InvalidLocationCode),
            303 => Some(Self::WeatherStationNotFound),
            400 => Some(Self::KotsaServiceError),
            401 => Some(Self::VehicleNotFound),
            402 => Some(Self::InvalidVehicleNumber),
            403 => Some(Self::TransportDataNotAvailable),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        error_message(self.as_u16())
    }

    pub fn category(self) -> &'static str {
        error_category(self.as_u16())
    }
}

/// Human-readable description for a numeric code. Total over `u16`: unknown
/// codes fall back to `"Unknown error"` rather than panicking.
pub fn error_message(code: u16) -> &'static str {
    match code {
        100 => "Unknown error",
        101 => "Validation failed",
        102 => "Invalid parameter",
        103 => "Invalid service key",
        104 => "Invalid page number",
        105 => "Invalid date format",
        121 => "API request failed",
        122 => "API request timed out",
        123 => "Invalid API response",
        141 => "Network connection failed",
        142 => "DNS resolution failed",
        143 => "Connection failed",
        144 => "SSL connection failed",
        161 => "Invalid configuration",
        181 => "Service unavailable",
        191 => "Rate limit exceeded",
        200 => "KOELSA service error",
        201 => "Elevator not found",
        202 => "Invalid elevator number format",
        203 => "Invalid inspection data",
        204 => "Invalid management code",
        300 => "KMA service error",
        301 => "Weather data not found",
        302 => "Invalid location code",
        303 => "Weather station not found",
        400 => "KOTSA service error",
        401 => "Vehicle not found",
        402 => "Invalid vehicle number format",
        403 => "Transport data not available",
        _ => "Unknown error",
    }
}

/// Category label for a numeric code, derived from its hundreds band.
/// Total over `u16`: codes outside the known bands map to `"Unknown Category"`.
pub fn error_category(code: u16) -> &'static str {
    match code / 100 {
        1 => "Common Error",
        2 => "KOELSA Error",
        3 => "KMA Error",
        4 => "KOTSA Error",
        _ => "Unknown Category",
    }
}

/// `true` for codes in the shared 1xx band.
pub fn is_common_code(code: u16) -> bool {
    (100..200).contains(&code)
}

/// `true` for codes in an agency band (2xx KOELSA, 3xx KMA, 4xx KOTSA).
pub fn is_agency_code(code: u16) -> bool {
    (200..500).contains(&code)
}

/// Kind-specific payload of a [`PortalError`].
///
/// Each variant corresponds to one failure class; all payload fields are
/// optional and omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A request parameter failed a validation rule before any I/O.
    Validation { field: Option<String> },
    /// The upstream API answered, but with an HTTP error status or an
    /// uninterpretable body.
    Api {
        status: Option<u16>,
        upstream_code: Option<String>,
        body: Option<String>,
    },
    /// The request never produced a response (DNS, connect, TLS, ...).
    Network { cause: Option<String> },
    /// The client was configured with something unusable.
    Configuration { config_field: Option<String> },
    /// The upstream service is down or overloaded (HTTP 5xx).
    ServiceUnavailable { service_name: Option<String> },
    /// The upstream service rejected the request for quota reasons (HTTP 429).
    RateLimit { retry_after_secs: Option<u64> },
    /// The queried elevator does not exist upstream.
    ElevatorNotFound { elevator_no: Option<String> },
    /// The supplied elevator unique number violates the format rules.
    InvalidElevatorNumber { elevator_no: Option<String> },
    /// An inspection record was structurally unusable.
    InvalidInspectionData {
        inspection_id: Option<String>,
        data_field: Option<String>,
    },
    /// The site/elevator management code failed its format rules.
    InvalidManagementCode { management_code: Option<String> },
    /// KOELSA reported a service-side fault in the envelope header.
    KoelsaService { endpoint: Option<String> },
}

impl ErrorKind {
    /// Kind name used in the serialized error surface.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "ValidationError",
            Self::Api { .. } => "ApiError",
            Self::Network { .. } => "NetworkError",
            Self::Configuration { .. } => "ConfigurationError",
            Self::ServiceUnavailable { .. } => "ServiceUnavailableError",
            Self::RateLimit { .. } => "RateLimitError",
            Self::ElevatorNotFound { .. } => "ElevatorNotFoundError",
            Self::InvalidElevatorNumber { .. } => "InvalidElevatorNumberError",
            Self::InvalidInspectionData { .. } => "InvalidInspectionDataError",
            Self::InvalidManagementCode { .. } => "InvalidManagementCodeError",
            Self::KoelsaService { .. } => "KOELSAServiceError",
        }
    }

    /// The code used when a constructor does not supply a more specific one.
    pub fn default_code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValidationError,
            Self::Api { .. } => ErrorCode::ApiError,
            Self::Network { .. } => ErrorCode::NetworkError,
            Self::Configuration { .. } => ErrorCode::ConfigurationError,
            Self::ServiceUnavailable { .. } => ErrorCode::ServiceUnavailable,
            Self::RateLimit { .. } => ErrorCode::RateLimitExceeded,
            Self::ElevatorNotFound { .. } => ErrorCode::ElevatorNotFound,
            Self::InvalidElevatorNumber { .. } => ErrorCode::InvalidElevatorNumber,
            Self::InvalidInspectionData { .. } => ErrorCode::InvalidInspectionData,
            Self::InvalidManagementCode { .. } => ErrorCode::InvalidManagementCode,
            Self::KoelsaService { .. } => ErrorCode::KoelsaServiceError,
        }
    }
}

/// Error type shared by every portal client operation.
///
/// Carries the envelope common to all kinds (`code`, `message`, `timestamp`)
/// plus the kind-specific payload in [`ErrorKind`]. Immutable after
/// construction; fields are reachable through the accessors only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PortalError {
    code: ErrorCode,
    kind: ErrorKind,
    message: String,
    timestamp: DateTime<Utc>,
}

impl PortalError {
    /// Build an error with an explicit code. Prefer the per-kind constructors
    /// unless a rule-specific code is needed.
    pub fn new(code: ErrorCode, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code,
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn validation(message: impl Into<String>, field: Option<String>) -> Self {
        Self::validation_with_code(ErrorCode::ValidationError, message, field)
    }

    /// Validation failure with a rule-specific code (e.g. a date rule raising
    /// [`ErrorCode::InvalidDateFormat`]).
    pub fn validation_with_code(
        code: ErrorCode,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::new(code, ErrorKind::Validation { field }, message)
    }

    pub fn api(
        message: impl Into<String>,
        status: Option<u16>,
        upstream_code: Option<String>,
        body: Option<String>,
    ) -> Self {
        Self::api_with_code(ErrorCode::ApiError, message, status, upstream_code, body)
    }

    pub fn api_with_code(
        code: ErrorCode,
        message: impl Into<String>,
        status: Option<u16>,
        upstream_code: Option<String>,
        body: Option<String>,
    ) -> Self {
        Self::new(
            code,
            ErrorKind::Api {
                status,
                upstream_code,
                body,
            },
            message,
        )
    }

    pub fn network(message: impl Into<String>, cause: Option<String>) -> Self {
        Self::network_with_code(ErrorCode::NetworkError, message, cause)
    }

    pub fn network_with_code(
        code: ErrorCode,
        message: impl Into<String>,
        cause: Option<String>,
    ) -> Self {
        Self::new(code, ErrorKind::Network { cause }, message)
    }

    pub fn configuration(message: impl Into<String>, config_field: Option<String>) -> Self {
        Self::new(
            ErrorCode::ConfigurationError,
            ErrorKind::Configuration { config_field },
            message,
        )
    }

    pub fn service_unavailable(message: impl Into<String>, service_name: Option<String>) -> Self {
        Self::new(
            ErrorCode::ServiceUnavailable,
            ErrorKind::ServiceUnavailable { service_name },
            message,
        )
    }

    pub fn rate_limit(message: impl Into<String>, retry_after_secs: Option<u64>) -> Self {
        Self::new(
            ErrorCode::RateLimitExceeded,
            ErrorKind::RateLimit { retry_after_secs },
            message,
        )
    }

    pub fn elevator_not_found(message: impl Into<String>, elevator_no: Option<String>) -> Self {
        Self::new(
            ErrorCode::ElevatorNotFound,
            ErrorKind::ElevatorNotFound { elevator_no },
            message,
        )
    }

    pub fn invalid_elevator_number(
        message: impl Into<String>,
        elevator_no: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::InvalidElevatorNumber,
            ErrorKind::InvalidElevatorNumber { elevator_no },
            message,
        )
    }

    pub fn invalid_inspection_data(
        message: impl Into<String>,
        inspection_id: Option<String>,
        data_field: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::InvalidInspectionData,
            ErrorKind::InvalidInspectionData {
                inspection_id,
                data_field,
            },
            message,
        )
    }

    pub fn invalid_management_code(
        message: impl Into<String>,
        management_code: Option<String>,
    ) -> Self {
        Self::new(
            ErrorCode::InvalidManagementCode,
            ErrorKind::InvalidManagementCode { management_code },
            message,
        )
    }

    pub fn koelsa_service(message: impl Into<String>, endpoint: Option<String>) -> Self {
        Self::new(
            ErrorCode::KoelsaServiceError,
            ErrorKind::KoelsaService { endpoint },
            message,
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn category(&self) -> &'static str {
        error_category(self.code.as_u16())
    }

    pub fn code_message(&self) -> &'static str {
        error_message(self.code.as_u16())
    }

    /// Flatten into the serializable error surface.
    pub fn to_structured(&self) -> StructuredError {
        let mut s = StructuredError {
            name: self.kind.name().to_string(),
            message: self.message.clone(),
            code: self.code.as_u16(),
            category: self.category().to_string(),
            code_message: self.code_message().to_string(),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            field: None,
            status_code: None,
            api_code: None,
            response: None,
            original_error: None,
            config_field: None,
            service_name: None,
            retry_after: None,
            elevator_no: None,
            inspection_id: None,
            data_field: None,
            management_code: None,
            service_endpoint: None,
        };
        match &self.kind {
            ErrorKind::Validation { field } => s.field = field.clone(),
            ErrorKind::Api {
                status,
                upstream_code,
                body,
            } => {
                s.status_code = *status;
                s.api_code = upstream_code.clone();
                s.response = body.clone();
            }
            ErrorKind::Network { cause } => s.original_error = cause.clone(),
            ErrorKind::Configuration { config_field } => s.config_field = config_field.clone(),
            ErrorKind::ServiceUnavailable { service_name } => {
                s.service_name = service_name.clone()
            }
            ErrorKind::RateLimit { retry_after_secs } => s.retry_after = *retry_after_secs,
            ErrorKind::ElevatorNotFound { elevator_no } => s.elevator_no = elevator_no.clone(),
            ErrorKind::InvalidElevatorNumber { elevator_no } => {
                s.elevator_no = elevator_no.clone()
            }
            ErrorKind::InvalidInspectionData {
                inspection_id,
                data_field,
            } => {
                s.inspection_id = inspection_id.clone();
                s.data_field = data_field.clone();
            }
            ErrorKind::InvalidManagementCode { management_code } => {
                s.management_code = management_code.clone()
            }
            ErrorKind::KoelsaService { endpoint } => s.service_endpoint = endpoint.clone(),
        }
        s
    }
}

impl Serialize for PortalError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_structured().serialize(serializer)
    }
}

/// Flat serialized form of a [`PortalError`].
///
/// Kind-specific fields are omitted (not emitted as null) when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredError {
    pub name: String,
    pub message: String,
    pub code: u16,
    pub category: String,
    pub code_message: String,
    /// RFC 3339 instant of construction, millisecond precision, UTC.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevator_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_endpoint: Option<String>,
}

/// Result type for portal client operations
pub type Result<T> = std::result::Result<T, PortalError>;
