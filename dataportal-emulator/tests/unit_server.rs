use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use dataportal_emulator::{
    fixtures, handle_inspection_list, handle_installation_list, AppState, Emulator, EmulatorConfig,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

// --- Test helpers ---

fn default_config() -> EmulatorConfig {
    EmulatorConfig::new("127.0.0.1:0".parse().unwrap())
}

fn state_of(config: EmulatorConfig) -> AppState {
    AppState {
        config: Arc::new(config),
    }
}

fn default_state() -> AppState {
    state_of(default_config())
}

fn query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// Query with a valid service key plus the given pairs.
fn keyed_query(pairs: &[(&str, &str)]) -> Query<HashMap<String, String>> {
    let mut map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    map.insert("serviceKey".to_string(), "emulator-key".to_string());
    Query(map)
}

/// Consume a response body as a JSON value.
async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn result_code(envelope: &Value) -> &str {
    envelope["response"]["header"]["resultCode"].as_str().unwrap()
}

fn body_of(envelope: &Value) -> &Value {
    &envelope["response"]["body"]
}

// --- Service key gate ---

#[tokio::test]
async fn test_missing_service_key_is_an_error_envelope() {
    let response = handle_installation_list(State(default_state()), query(&[])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let envelope = response_json(response).await;
    assert_eq!(result_code(&envelope), "30");
}

#[tokio::test]
async fn test_blank_service_key_is_an_error_envelope() {
    let response =
        handle_inspection_list(State(default_state()), query(&[("serviceKey", "  ")])).await;
    let envelope = response_json(response).await;
    assert_eq!(result_code(&envelope), "30");
}

// --- Installation listing ---

#[tokio::test]
async fn test_installation_list_serves_all_rows_in_a_wide_window() {
    let response = handle_installation_list(
        State(default_state()),
        keyed_query(&[
            ("Installation_sdt", "20230101"),
            ("Installation_edt", "20251231"),
            ("numOfRows", "10"),
        ]),
    )
    .await;
    let envelope = response_json(response).await;

    assert_eq!(result_code(&envelope), "00");
    let body = body_of(&envelope);
    assert_eq!(body["totalCount"], 5);
    assert_eq!(body["items"]["item"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_installation_list_filters_by_date_window() {
    // Fixture dates: 20230510 x2, 20240115, 20240220, 20241120.
    let response = handle_installation_list(
        State(default_state()),
        keyed_query(&[
            ("Installation_sdt", "20240101"),
            ("Installation_edt", "20240331"),
        ]),
    )
    .await;
    let envelope = response_json(response).await;

    let body = body_of(&envelope);
    assert_eq!(body["totalCount"], 2);
    let rows = body["items"]["item"].as_array().unwrap();
    assert_eq!(rows[0]["elevatorNo"], "7731024");
    assert_eq!(rows[1]["elevatorNo"], "9120458");
}

#[tokio::test]
async fn test_installation_single_match_is_an_item_object() {
    let response = handle_installation_list(
        State(default_state()),
        keyed_query(&[
            ("Installation_sdt", "20230101"),
            ("Installation_edt", "20251231"),
            ("elevator_no", "8088276"),
        ]),
    )
    .await;
    let envelope = response_json(response).await;

    let body = body_of(&envelope);
    assert_eq!(body["totalCount"], 1);
    assert!(body["items"]["item"].is_object(), "single row must not be wrapped in an array");
    assert_eq!(body["items"]["item"]["elevatorNo"], "8088276");
}

#[tokio::test]
async fn test_installation_no_match_is_empty_string_items() {
    let response = handle_installation_list(
        State(default_state()),
        keyed_query(&[
            ("Installation_sdt", "20230101"),
            ("Installation_edt", "20251231"),
            ("elevator_no", "0000000"),
        ]),
    )
    .await;
    let envelope = response_json(response).await;

    let body = body_of(&envelope);
    assert_eq!(body["totalCount"], 0);
    assert_eq!(body["items"], "");
}

#[tokio::test]
async fn test_installation_pagination_echoes_request_and_windows_rows() {
    let response = handle_installation_list(
        State(default_state()),
        keyed_query(&[
            ("Installation_sdt", "20230101"),
            ("Installation_edt", "20251231"),
            ("pageNo", "3"),
            ("numOfRows", "2"),
        ]),
    )
    .await;
    let envelope = response_json(response).await;

    let body = body_of(&envelope);
    assert_eq!(body["totalCount"], 5, "totalCount is the filtered total, not the page size");
    assert_eq!(body["pageNo"], 3);
    assert_eq!(body["numOfRows"], 2);
    // Page 3 of 5 rows at 2 per page holds exactly one row, so the
    // single-item quirk applies to it.
    assert_eq!(body["items"]["item"]["elevatorNo"], "9120459");
}

// --- Inspection listing ---

#[tokio::test]
async fn test_inspection_list_matches_the_site_code() {
    let response = handle_inspection_list(
        State(default_state()),
        keyed_query(&[("elvtrmngno_mngno", "M240100123")]),
    )
    .await;
    let envelope = response_json(response).await;

    let body = body_of(&envelope);
    assert_eq!(body["totalCount"], 2);
    let rows = body["items"]["item"].as_array().unwrap();
    assert!(rows.iter().all(|row| row["mngNo"] == "M240100123"));
}

#[tokio::test]
async fn test_inspection_list_matches_the_elevator_code() {
    let response = handle_inspection_list(
        State(default_state()),
        keyed_query(&[("elvtrmngno_mngno", "E240300789-01")]),
    )
    .await;
    let envelope = response_json(response).await;

    let body = body_of(&envelope);
    assert_eq!(body["totalCount"], 1);
    assert_eq!(body["items"]["item"]["inspctResult"], "불합격");
}

#[tokio::test]
async fn test_inspection_list_without_code_is_a_parameter_error() {
    let response = handle_inspection_list(State(default_state()), keyed_query(&[])).await;
    let envelope = response_json(response).await;
    assert_eq!(result_code(&envelope), "10");
}

// --- Failure injection ---

#[tokio::test]
async fn test_forced_result_overrides_both_handlers() {
    let mut config = default_config();
    config.forced_result = Some(("03".to_string(), "SERVICE ERROR".to_string()));
    let state = state_of(config);

    let installation =
        handle_installation_list(State(state.clone()), keyed_query(&[])).await;
    assert_eq!(result_code(&response_json(installation).await), "03");

    let inspection = handle_inspection_list(
        State(state),
        keyed_query(&[("elvtrmngno_mngno", "M240100123")]),
    )
    .await;
    assert_eq!(result_code(&response_json(inspection).await), "03");
}

#[tokio::test]
async fn test_forced_status_overrides_the_http_layer() {
    let mut config = default_config();
    config.forced_status = Some(503);
    let state = state_of(config);

    let response = handle_installation_list(State(state), keyed_query(&[])).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_forced_status_carries_retry_after() {
    let mut config = default_config();
    config.forced_status = Some(429);
    config.retry_after_secs = Some(60);
    let state = state_of(config);

    let response = handle_installation_list(State(state), keyed_query(&[])).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        response.headers().get(header::RETRY_AFTER).unwrap().to_str().unwrap(),
        "60"
    );
}

// --- Emulator struct ---

#[test]
fn test_emulator_reports_its_configured_address() {
    let config = EmulatorConfig::new("127.0.0.1:9400".parse().unwrap());
    let emulator = Emulator::new(config);
    assert_eq!(emulator.address().to_string(), "127.0.0.1:9400");
}

#[test]
fn test_router_creation() {
    let router = Emulator::create_router(default_state());
    assert!(std::mem::size_of_val(&router) > 0);
}

// --- Fixture invariants ---

/// The request-side fields are the only ones every inspection row must
/// carry; clients treat them as mandatory.
#[test]
fn test_inspection_fixtures_always_carry_request_fields() {
    for row in fixtures::inspections() {
        for field in ["reqstDe", "reqstBuldNm", "reqstBuldAdress", "reqstInspctKindNm"] {
            assert!(row.get(field).is_some(), "fixture row missing {}", field);
        }
    }
}

#[test]
fn test_installation_fixtures_are_fully_populated() {
    for row in fixtures::installations() {
        let object = row.as_object().unwrap();
        assert_eq!(object.len(), 22, "installation rows carry every portal field");
        assert!(object.values().all(Value::is_string));
    }
}
