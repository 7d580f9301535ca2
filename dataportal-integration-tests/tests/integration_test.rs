use dataportal_common::{ClientConfig, ErrorCode, ErrorKind};
use dataportal_emulator::{Emulator, EmulatorConfig};
use dataportal_koelsa::{InspectionListParams, InstallationListParams, KoelsaClient};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::timeout;

const EMULATOR_READY_TIMEOUT: Duration = Duration::from_secs(60);

fn default_emulator_config() -> EmulatorConfig {
    EmulatorConfig::new("127.0.0.1:0".parse().unwrap())
}

async fn start_emulator(config: EmulatorConfig) -> SocketAddr {
    let (ready_tx, ready_rx) = oneshot::channel();

    tokio::spawn(async move {
        Emulator::new(config).run(ready_tx).await.expect("emulator failed");
    });

    timeout(EMULATOR_READY_TIMEOUT, ready_rx)
        .await
        .expect("emulator did not start within 60 seconds")
        .expect("emulator ready signal dropped")
}

fn client_against(addr: SocketAddr) -> KoelsaClient {
    KoelsaClient::with_config(ClientConfig::new(
        format!("http://{}", addr),
        "integration-key",
    ))
    .expect("client construction failed")
}

async fn start_client() -> KoelsaClient {
    client_against(start_emulator(default_emulator_config()).await)
}

fn wide_window() -> InstallationListParams {
    InstallationListParams::new(1, 100, "20230101", "20251231")
}

// --- Installation listing ---

#[tokio::test]
async fn test_installation_list_round_trip() {
    let client = start_client().await;

    let records = client.installation().list(&wide_window()).await.expect("list failed");

    assert_eq!(records.len(), 5);
    let first = &records[0];
    assert_eq!(first.elevator_no, "8088276");
    assert_eq!(first.building_name, "한빛타워");
    assert_eq!(first.sido, "서울특별시");
    assert_eq!(first.installation_date, "20230510");
    assert_eq!(first.manufacturer, "현대엘리베이터(주)");
}

#[tokio::test]
async fn test_installation_date_window_filters_rows() {
    let client = start_client().await;

    let params = InstallationListParams::new(1, 100, "20240101", "20240331");
    let records = client.installation().list(&params).await.expect("list failed");

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.installation_date.as_str() >= "20240101"));
    assert!(records.iter().all(|r| r.installation_date.as_str() <= "20240331"));
}

/// A single matching row arrives from the portal as an `item` object rather
/// than a one-element array; the typed list must come back as one record.
#[tokio::test]
async fn test_installation_single_match_decodes_from_object_shape() {
    let client = start_client().await;

    let params = wide_window().with_elevator_no("7731024");
    let records = client.installation().list(&params).await.expect("list failed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].building_name, "세종오피스텔");
}

#[tokio::test]
async fn test_installation_empty_window_is_an_empty_list() {
    let client = start_client().await;

    let params = InstallationListParams::new(1, 100, "19990101", "19991231");
    let records = client.installation().list(&params).await.expect("list failed");

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_installation_list_paged_reports_the_filtered_total() {
    let client = start_client().await;

    let params = InstallationListParams::new(1, 2, "20230101", "20251231");
    let page = client.installation().list_paged(&params).await.expect("list_paged failed");

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, Some(5));
    assert_eq!(page.page_no, Some(1));
    assert_eq!(page.num_of_rows, Some(2));
}

#[tokio::test]
async fn test_find_by_elevator_no_round_trip() {
    let client = start_client().await;

    let found = client
        .installation()
        .find_by_elevator_no("9120458", "20230101", "20251231")
        .await
        .expect("find failed");
    assert_eq!(found.expect("expected a match").division, "화물용");

    let missing = client
        .installation()
        .find_by_elevator_no("0000000", "20230101", "20251231")
        .await
        .expect("find failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_custom_fixture_rows_flow_through() {
    let mut config = default_emulator_config();
    config.installations.truncate(1);
    let client = client_against(start_emulator(config).await);

    let records = client.installation().list(&wide_window()).await.expect("list failed");
    assert_eq!(records.len(), 1);
}

// --- Inspection listing ---

#[tokio::test]
async fn test_inspection_list_round_trip() {
    let client = start_client().await;

    let params = InspectionListParams::new(1, 100, "M240100123");
    let records = client.inspection().list(&params).await.expect("list failed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].request_building_name, "한빛타워");
    assert_eq!(records[0].inspection_result.as_deref(), Some("합격"));
    assert_eq!(records[1].inspection_result.as_deref(), Some("조건부합격"));
    assert_eq!(records[1].conditional_end_date.as_deref(), Some("20240531"));
}

#[tokio::test]
async fn test_inspection_unscheduled_request_has_no_result_fields() {
    let client = start_client().await;

    let records = client
        .inspection()
        .find_by_management_code("M240200456")
        .await
        .expect("find failed");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.request_inspection_kind, "설치검사");
    assert!(record.scheduled_date.is_none());
    assert!(record.inspection_date.is_none());
    assert!(record.inspection_result.is_none());
}

#[tokio::test]
async fn test_find_by_management_code_accepts_the_elevator_code_form() {
    let client = start_client().await;

    let records = client
        .inspection()
        .find_by_management_code("E240300789-01")
        .await
        .expect("find failed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].inspection_result.as_deref(), Some("불합격"));
    assert_eq!(records[0].fail_code.as_deref(), Some("F-2024-9245"));
}

#[tokio::test]
async fn test_unknown_management_code_is_an_empty_list() {
    let client = start_client().await;

    let records = client
        .inspection()
        .find_by_management_code("M999999999")
        .await
        .expect("find failed");

    assert!(records.is_empty());
}

// --- Upstream failures through the full stack ---

#[tokio::test]
async fn test_unregistered_key_result_maps_to_api_response_error() {
    let mut config = default_emulator_config();
    config.forced_result = Some((
        "30".to_string(),
        "SERVICE_KEY_IS_NOT_REGISTERED_ERROR".to_string(),
    ));
    let client = client_against(start_emulator(config).await);

    let err = client.installation().list(&wide_window()).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::ApiResponseError);
    assert!(matches!(
        err.kind(),
        ErrorKind::Api { upstream_code: Some(code), .. } if code == "30"
    ));
}

#[tokio::test]
async fn test_service_error_result_maps_to_koelsa_service_error() {
    let mut config = default_emulator_config();
    config.forced_result = Some(("03".to_string(), "SERVICE ERROR".to_string()));
    let client = client_against(start_emulator(config).await);

    let err = client.installation().list(&wide_window()).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::KoelsaServiceError);
    assert!(matches!(
        err.kind(),
        ErrorKind::KoelsaService { endpoint: Some(endpoint) }
            if endpoint.ends_with("getInstallationElvtrListV2")
    ));
}

#[tokio::test]
async fn test_not_found_result_maps_to_elevator_not_found() {
    let mut config = default_emulator_config();
    config.forced_result = Some(("04".to_string(), "NO_DATA".to_string()));
    let client = client_against(start_emulator(config).await);

    let err = client.installation().list(&wide_window()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ElevatorNotFound);
}

#[tokio::test]
async fn test_http_503_maps_to_service_unavailable() {
    let mut config = default_emulator_config();
    config.forced_status = Some(503);
    let client = client_against(start_emulator(config).await);

    let err = client.installation().list(&wide_window()).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    assert!(matches!(
        err.kind(),
        ErrorKind::ServiceUnavailable { service_name: Some(name) }
            if name == "Korea Elevator Safety Agency"
    ));
}

#[tokio::test]
async fn test_http_429_maps_to_rate_limit_with_retry_after() {
    let mut config = default_emulator_config();
    config.forced_status = Some(429);
    config.retry_after_secs = Some(30);
    let client = client_against(start_emulator(config).await);

    let err = client.installation().list(&wide_window()).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::RateLimitExceeded);
    assert!(matches!(
        err.kind(),
        ErrorKind::RateLimit { retry_after_secs: Some(30) }
    ));
}

// --- Facade behavior over a live upstream ---

#[tokio::test]
async fn test_health_check_against_a_healthy_emulator() {
    let client = start_client().await;
    assert!(client.health_check().await);
}

#[tokio::test]
async fn test_health_check_against_a_broken_emulator() {
    let mut config = default_emulator_config();
    config.forced_status = Some(503);
    let client = client_against(start_emulator(config).await);

    assert!(!client.health_check().await);
}

#[tokio::test]
async fn test_rotation_keeps_the_client_usable() {
    let addr = start_emulator(default_emulator_config()).await;
    let mut client = client_against(addr);

    assert!(client.health_check().await);

    client.rotate_service_key("rotated-key").expect("rotation failed");

    assert_eq!(client.config().service_key, "rotated-key");
    assert!(client.health_check().await, "rebuilt services must reach the same upstream");
    let records = client.installation().list(&wide_window()).await.expect("list failed");
    assert_eq!(records.len(), 5);
}

#[tokio::test]
async fn test_validation_failures_short_circuit_before_the_wire() {
    let client = start_client().await;

    let params = InstallationListParams::new(1, 100, "2024-01-01", "20241231");
    let err = client.installation().list(&params).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidDateFormat);

    let err = client
        .inspection()
        .list(&InspectionListParams::new(0, 100, "M240100123"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidPageNumber);
}

// --- Wire shape ---

/// The single-row quirk exists on the wire, not only in the typed layer:
/// the emulator must emit `item` as a bare object for one row.
#[tokio::test]
async fn test_raw_envelope_uses_the_single_item_object_shape() {
    let addr = start_emulator(default_emulator_config()).await;

    let url = format!(
        "http://{}/openapi/service/ElevatorInstallationService/getInstallationElvtrListV2\
         ?serviceKey=raw-key&Installation_sdt=20230101&Installation_edt=20251231&elevator_no=8088276",
        addr
    );
    let envelope: serde_json::Value = reqwest::get(&url)
        .await
        .expect("request failed")
        .json()
        .await
        .expect("body was not JSON");

    let items = &envelope["response"]["body"]["items"];
    assert!(items["item"].is_object());
    assert_eq!(items["item"]["elevatorNo"], "8088276");
}
