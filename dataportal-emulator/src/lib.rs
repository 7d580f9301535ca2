use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dataportal_common::RESULT_CODE_SUCCESS;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

pub mod fixtures;

/// Path served for the installation list endpoint.
pub const INSTALLATION_PATH: &str =
    "/openapi/service/ElevatorInstallationService/getInstallationElvtrListV2";

/// Path served for the inspection result list endpoint.
pub const INSPECTION_PATH: &str =
    "/openapi/service/ElevatorInspectResultService/getInspectResultListV1";

/// Emulator configuration: fixture data plus failure injection.
///
/// A forced HTTP status wins over a forced envelope result, and both are
/// applied before any request inspection, so a single misbehaving instance
/// can stand in for a broken upstream.
#[derive(Debug, Clone)]
pub struct EmulatorConfig {
    pub address: SocketAddr,
    /// Installation rows served, in portal wire shape.
    pub installations: Vec<Value>,
    /// Inspection rows served, in portal wire shape.
    pub inspections: Vec<Value>,
    /// Reply to every request with this envelope result `(code, msg)`.
    pub forced_result: Option<(String, String)>,
    /// Reply to every request with this HTTP status and an empty body.
    pub forced_status: Option<u16>,
    /// `Retry-After` seconds attached to a forced status.
    pub retry_after_secs: Option<u64>,
}

impl EmulatorConfig {
    /// Default fixtures, no failure injection.
    pub fn new(address: SocketAddr) -> Self {
        Self {
            address,
            installations: fixtures::installations(),
            inspections: fixtures::inspections(),
            forced_result: None,
            forced_status: None,
            retry_after_secs: None,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EmulatorConfig>,
}

/// In-process stand-in for the upstream portal.
pub struct Emulator {
    config: EmulatorConfig,
}

impl Emulator {
    /// Create a new emulator with the given configuration
    pub fn new(config: EmulatorConfig) -> Self {
        Self { config }
    }

    /// Get the emulator's configured address
    pub fn address(&self) -> SocketAddr {
        self.config.address
    }

    /// Create the application router with the given state
    pub fn create_router(state: AppState) -> Router {
        Router::new()
            .route(INSTALLATION_PATH, get(handle_installation_list))
            .route(INSPECTION_PATH, get(handle_inspection_list))
            .with_state(state)
    }

    /// Run the emulator, signalling `ready_tx` with the bound address once
    /// accepting connections
    pub async fn run(
        self,
        ready_tx: tokio::sync::oneshot::Sender<SocketAddr>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let address = self.config.address;
        let state = AppState {
            config: Arc::new(self.config),
        };
        let app = Self::create_router(state);
        let listener = tokio::net::TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;
        ready_tx.send(local_addr).ok();
        axum::serve(listener, app).await?;
        Ok(())
    }
}

/// An envelope with only a header, as the portal reports request-level
/// failures (still HTTP 200).
fn envelope_error(code: &str, msg: &str) -> Response {
    Json(json!({
        "response": {"header": {"resultCode": code, "resultMsg": msg}}
    }))
    .into_response()
}

/// A success envelope around one page of rows, reproducing the portal's
/// serialization quirks: a single row is emitted as an `item` object, an
/// empty page as `items: ""`.
fn envelope_page(rows: &[Value], total: usize, page_no: u32, num_of_rows: u32) -> Response {
    let items = match rows {
        [] => json!(""),
        [single] => json!({ "item": single }),
        many => json!({ "item": many }),
    };
    Json(json!({
        "response": {
            "header": {"resultCode": RESULT_CODE_SUCCESS, "resultMsg": "NORMAL SERVICE."},
            "body": {
                "items": items,
                "totalCount": total,
                "pageNo": page_no,
                "numOfRows": num_of_rows
            }
        }
    }))
    .into_response()
}

fn forced_response(config: &EmulatorConfig) -> Option<Response> {
    if let Some(status) = config.forced_status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = status.into_response();
        if let Some(secs) = config.retry_after_secs {
            response.headers_mut().insert(
                header::RETRY_AFTER,
                HeaderValue::from_str(&secs.to_string()).expect("valid Retry-After header value"),
            );
        }
        return Some(response);
    }
    if let Some((code, msg)) = &config.forced_result {
        return Some(envelope_error(code, msg));
    }
    None
}

fn check_service_key(params: &HashMap<String, String>) -> Option<Response> {
    match params.get("serviceKey") {
        Some(key) if !key.trim().is_empty() => None,
        _ => Some(envelope_error("30", "SERVICE_KEY_IS_NOT_REGISTERED_ERROR")),
    }
}

fn page_params(params: &HashMap<String, String>) -> (u32, u32) {
    let page_no = params.get("pageNo").and_then(|v| v.parse().ok()).unwrap_or(1);
    let num_of_rows = params
        .get("numOfRows")
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    (page_no, num_of_rows)
}

fn paginate(rows: Vec<Value>, page_no: u32, num_of_rows: u32) -> (Vec<Value>, usize) {
    let total = rows.len();
    let start = (page_no.saturating_sub(1) as usize).saturating_mul(num_of_rows as usize);
    let page = rows
        .into_iter()
        .skip(start)
        .take(num_of_rows as usize)
        .collect();
    (page, total)
}

fn field_str<'a>(row: &'a Value, name: &str) -> &'a str {
    row.get(name).and_then(Value::as_str).unwrap_or("")
}

/// Handler for the installation list endpoint. Filters fixture rows by the
/// `Installation_sdt..Installation_edt` window (against `installationDe`,
/// inclusive, lexicographic on `YYYYMMDD`) and by `elevator_no` when given,
/// then paginates.
pub async fn handle_installation_list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let config = state.config.as_ref();
    if let Some(response) = forced_response(config) {
        return response;
    }
    if let Some(response) = check_service_key(&params) {
        return response;
    }

    let start = params
        .get("Installation_sdt")
        .map(String::as_str)
        .unwrap_or("00000000");
    let end = params
        .get("Installation_edt")
        .map(String::as_str)
        .unwrap_or("99999999");
    let elevator_no = params.get("elevator_no");

    let rows: Vec<Value> = config
        .installations
        .iter()
        .filter(|row| {
            let date = field_str(row, "installationDe");
            date >= start && date <= end
        })
        .filter(|row| match elevator_no {
            Some(no) => field_str(row, "elevatorNo") == no,
            None => true,
        })
        .cloned()
        .collect();

    let (page_no, num_of_rows) = page_params(&params);
    let (page, total) = paginate(rows, page_no, num_of_rows);
    envelope_page(&page, total, page_no, num_of_rows)
}

/// Handler for the inspection result list endpoint. `elvtrmngno_mngno` is
/// mandatory and matches either the site code (`mngNo`) or the elevator
/// code (`elvtrMngNo`) of a row.
pub async fn handle_inspection_list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let config = state.config.as_ref();
    if let Some(response) = forced_response(config) {
        return response;
    }
    if let Some(response) = check_service_key(&params) {
        return response;
    }

    let code = match params.get("elvtrmngno_mngno") {
        Some(code) if !code.trim().is_empty() => code,
        _ => return envelope_error("10", "INVALID_REQUEST_PARAMETER_ERROR"),
    };

    let rows: Vec<Value> = config
        .inspections
        .iter()
        .filter(|row| field_str(row, "mngNo") == code || field_str(row, "elvtrMngNo") == code)
        .cloned()
        .collect();

    let (page_no, num_of_rows) = page_params(&params);
    let (page, total) = paginate(rows, page_no, num_of_rows);
    envelope_page(&page, total, page_no, num_of_rows)
}
