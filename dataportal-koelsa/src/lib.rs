use dataportal_common::validation::validate_service_key;
use dataportal_common::{
    ClientConfig, EnvelopeHeader, ErrorCode, ItemExtraction, PortalError, ProviderInfo, Result,
    RESULT_CODE_SUCCESS,
};
use std::sync::Arc;

pub mod transport;
pub mod types;

mod installation;
mod inspection;

pub use installation::InstallationService;
pub use inspection::InspectionService;
pub use types::{
    InspectionListParams, InspectionRecord, InstallationListParams, InstallationRecord,
};

use transport::Transport;

/// Static facts about the Korea Elevator Safety Agency.
pub const PROVIDER_INFO: ProviderInfo = ProviderInfo {
    name: "Korea Elevator Safety Agency",
    description: "Public agency responsible for elevator safety management and inspection",
    base_url: "http://openapi.elevator.go.kr",
    website_url: "https://home.koelsa.or.kr",
    documentation_url: "https://www.data.go.kr",
};

/// Client for the KOELSA open APIs.
///
/// Composes the installation and inspection services over one shared
/// transport. The service key is checked per request, not at construction,
/// so a client built with a bad key still constructs and its
/// [`health_check`](Self::health_check) reports `false`.
pub struct KoelsaClient {
    config: ClientConfig,
    installation: InstallationService,
    inspection: InspectionService,
}

impl KoelsaClient {
    /// Build a client against the provider's public endpoint with default
    /// timeout and headers.
    pub fn new(service_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(PROVIDER_INFO.base_url, service_key))
    }

    /// Build a client over an explicit configuration (custom base URL,
    /// timeout or extra headers).
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(Transport::new(&config, PROVIDER_INFO.name)?);
        Ok(Self {
            config,
            installation: InstallationService::new(Arc::clone(&transport)),
            inspection: InspectionService::new(transport),
        })
    }

    pub fn installation(&self) -> &InstallationService {
        &self.installation
    }

    pub fn inspection(&self) -> &InspectionService {
        &self.inspection
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.config.clone()
    }

    /// Replace the service key, atomically rebuilding the transport and both
    /// services over it.
    ///
    /// The new key is validated first; on any failure the previous
    /// configuration and services stay live. Taking `&mut self` means no
    /// previously borrowed service handle can survive the swap.
    pub fn rotate_service_key(&mut self, service_key: impl Into<String>) -> Result<()> {
        let service_key = service_key.into();
        validate_service_key(&service_key)?;

        let mut config = self.config.clone();
        config.service_key = service_key;

        let transport = Arc::new(Transport::new(&config, PROVIDER_INFO.name)?);
        self.config = config;
        self.installation = InstallationService::new(Arc::clone(&transport));
        self.inspection = InspectionService::new(transport);
        Ok(())
    }

    /// Probe the upstream service with a minimal installation query (one
    /// row, one-day window). Every error kind becomes `false` plus a log
    /// entry; nothing propagates.
    pub async fn health_check(&self) -> bool {
        let params = InstallationListParams::new(1, 1, "20240101", "20240101");
        match self.installation.list(&params).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(code = e.code().as_u16(), error = %e, "health check failed");
                false
            }
        }
    }

    /// Provider identity, service names and configuration of this client.
    pub fn client_info(&self) -> ClientInfo {
        ClientInfo {
            provider: PROVIDER_INFO,
            services: vec![
                self.installation.service_name(),
                self.inspection.service_name(),
            ],
            config: self.config.clone(),
        }
    }
}

/// Snapshot returned by [`KoelsaClient::client_info`].
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub provider: ProviderInfo,
    pub services: Vec<&'static str>,
    pub config: ClientConfig,
}

/// Interpret an envelope header's result code for an endpoint: `"00"` is
/// success, `"03"` a KOELSA service fault, `"04"` a missing elevator, and
/// anything else a generic API response error carrying the upstream code.
pub(crate) fn check_result_code(endpoint: &str, header: &EnvelopeHeader) -> Result<()> {
    match header.result_code.as_str() {
        RESULT_CODE_SUCCESS => Ok(()),
        "03" => Err(PortalError::koelsa_service(
            format!("KOELSA service error: {}", header_detail(header)),
            Some(endpoint.to_string()),
        )),
        "04" => Err(PortalError::elevator_not_found(
            format!("Elevator not found: {}", header_detail(header)),
            None,
        )),
        code => Err(PortalError::api_with_code(
            ErrorCode::ApiResponseError,
            format!("API error: {} - {}", code, header_detail(header)),
            None,
            Some(code.to_string()),
            None,
        )),
    }
}

fn header_detail(header: &EnvelopeHeader) -> &str {
    if header.result_msg.is_empty() {
        "no result message"
    } else {
        &header.result_msg
    }
}

/// Turn an extraction outcome into records, surfacing malformed envelopes as
/// API response errors instead of coercing them to empty lists.
pub(crate) fn items_or_error<T>(extraction: ItemExtraction<T>) -> Result<Vec<T>> {
    match extraction {
        ItemExtraction::Items(items) => Ok(items),
        ItemExtraction::Empty => Ok(Vec::new()),
        ItemExtraction::Malformed(detail) => Err(PortalError::api_with_code(
            ErrorCode::ApiResponseError,
            format!("Invalid API response: {}", detail),
            None,
            None,
            None,
        )),
    }
}
