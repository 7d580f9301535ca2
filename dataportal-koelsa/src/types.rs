use dataportal_common::validation::{
    validate_date_format, validate_date_range, validate_elevator_no, validate_management_code,
    validate_num_of_rows, validate_page_no,
};
use dataportal_common::Result;
use serde::Deserialize;

/// Query parameters for the installation list endpoint.
///
/// Immutable value object; [`validate`](Self::validate) runs the full rule
/// set and the service calls it before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationListParams {
    pub page_no: u32,
    pub num_of_rows: u32,
    /// Start of the installation date window, `YYYYMMDD`.
    pub start_date: String,
    /// End of the installation date window, `YYYYMMDD`.
    pub end_date: String,
    /// Optional elevator unique number filter, at most 12 characters.
    pub elevator_no: Option<String>,
}

impl InstallationListParams {
    pub fn new(
        page_no: u32,
        num_of_rows: u32,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            page_no,
            num_of_rows,
            start_date: start_date.into(),
            end_date: end_date.into(),
            elevator_no: None,
        }
    }

    pub fn with_elevator_no(mut self, elevator_no: impl Into<String>) -> Self {
        self.elevator_no = Some(elevator_no.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_page_no(self.page_no)?;
        validate_num_of_rows(self.num_of_rows)?;
        validate_date_format(&self.start_date, "Installation_sdt")?;
        validate_date_format(&self.end_date, "Installation_edt")?;
        validate_date_range(&self.start_date, &self.end_date, "Installation_sdt")?;
        if let Some(elevator_no) = &self.elevator_no {
            validate_elevator_no(elevator_no)?;
        }
        Ok(())
    }

    /// Wire query pairs, in the portal's parameter names.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("pageNo", self.page_no.to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
            ("Installation_sdt", self.start_date.clone()),
            ("Installation_edt", self.end_date.clone()),
        ];
        if let Some(elevator_no) = &self.elevator_no {
            query.push(("elevator_no", elevator_no.clone()));
        }
        query
    }
}

/// Query parameters for the inspection result list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionListParams {
    pub page_no: u32,
    pub num_of_rows: u32,
    /// Site management code or elevator management code of the requester.
    pub management_code: String,
}

impl InspectionListParams {
    pub fn new(page_no: u32, num_of_rows: u32, management_code: impl Into<String>) -> Self {
        Self {
            page_no,
            num_of_rows,
            management_code: management_code.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_page_no(self.page_no)?;
        validate_num_of_rows(self.num_of_rows)?;
        validate_management_code(&self.management_code)?;
        Ok(())
    }

    /// Wire query pairs. `_type` is pinned to `json`; this client does not
    /// parse the endpoint's XML rendering.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pageNo", self.page_no.to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
            ("elvtrmngno_mngno", self.management_code.clone()),
            ("_type", "json".to_string()),
        ]
    }
}

/// One elevator installation record.
///
/// Field names mirror the portal's wire names (romanized Korean
/// abbreviations); every field is delivered as a string, including counts
/// and dates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstallationRecord {
    /// Elevator unique number.
    #[serde(rename = "elevatorNo")]
    pub elevator_no: String,
    /// Building name.
    #[serde(rename = "buldNm")]
    pub building_name: String,
    #[serde(rename = "address1")]
    pub address1: String,
    #[serde(rename = "address2")]
    pub address2: String,
    /// Province (si/do).
    pub sido: String,
    /// District (si/gun/gu).
    pub sigungu: String,
    /// Unit designation within the building.
    #[serde(rename = "elvtrAsignNo")]
    pub unit_no: String,
    /// Elevator class (passenger, freight, escalator, ...).
    #[serde(rename = "elvtrDiv")]
    pub division: String,
    #[serde(rename = "elvtrForm")]
    pub form: String,
    #[serde(rename = "elvtrDetailForm")]
    pub detail_form: String,
    #[serde(rename = "elvtrKindNm")]
    pub kind_name: String,
    #[serde(rename = "installationPlace")]
    pub installation_place: String,
    /// Number of floors served.
    #[serde(rename = "shuttleFloorCnt")]
    pub floor_count: String,
    /// Rated speed in m/s.
    #[serde(rename = "ratedSpeed")]
    pub rated_speed: String,
    /// Rated load in kg.
    #[serde(rename = "liveLoad")]
    pub live_load: String,
    /// Rated passenger capacity.
    #[serde(rename = "ratedCap")]
    pub rated_capacity: String,
    /// Manufacturer name.
    #[serde(rename = "companyNm")]
    pub manufacturer: String,
    /// First installation date, `YYYYMMDD`.
    #[serde(rename = "frstInstallationDe")]
    pub first_installation_date: String,
    /// Installation date, `YYYYMMDD`.
    #[serde(rename = "installationDe")]
    pub installation_date: String,
    /// National building management number.
    #[serde(rename = "bdmgtSn")]
    pub building_mgmt_no: String,
    /// Building purpose, major class.
    #[serde(rename = "buldPrposLclas")]
    pub building_purpose_major: String,
    /// Building purpose, minor class.
    #[serde(rename = "buldPrposSclas")]
    pub building_purpose_minor: String,
}

/// One inspection request result record.
///
/// The portal only guarantees the request-side fields; everything recorded
/// after scheduling/inspection may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectionRecord {
    /// Requester's site management code.
    #[serde(rename = "mngNo", default)]
    pub management_no: Option<String>,
    /// Requester's elevator management code.
    #[serde(rename = "elvtrMngNo", default)]
    pub elevator_management_no: Option<String>,
    /// Request date, `YYYYMMDD`.
    #[serde(rename = "reqstDe")]
    pub request_date: String,
    /// Building name as submitted with the request.
    #[serde(rename = "reqstBuldNm")]
    pub request_building_name: String,
    /// Building address as submitted with the request.
    #[serde(rename = "reqstBuldAdress")]
    pub request_building_address: String,
    /// Inspection kind as submitted with the request.
    #[serde(rename = "reqstInspctKindNm")]
    pub request_inspection_kind: String,
    /// Number of units in the request.
    #[serde(rename = "reqstCnt", default)]
    pub request_count: Option<String>,
    #[serde(rename = "installationDivNm", default)]
    pub installation_division: Option<String>,
    /// Building name on KOELSA's side.
    #[serde(rename = "buldNm", default)]
    pub building_name: Option<String>,
    /// Building address on KOELSA's side.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "elvtrAsignNo", default)]
    pub unit_no: Option<String>,
    #[serde(rename = "elvtrUniqueNo", default)]
    pub elevator_unique_no: Option<String>,
    #[serde(rename = "elvtrDivNm", default)]
    pub division: Option<String>,
    #[serde(rename = "elvtrForm", default)]
    pub form: Option<String>,
    #[serde(rename = "elvtrDetailForm", default)]
    pub detail_form: Option<String>,
    #[serde(rename = "elvtrKindNm", default)]
    pub kind_name: Option<String>,
    #[serde(rename = "installationPlace", default)]
    pub installation_place: Option<String>,
    #[serde(rename = "elvtrModel", default)]
    pub model: Option<String>,
    /// Manufacturer name.
    #[serde(rename = "mnfcturCpnyNm", default)]
    pub manufacturer: Option<String>,
    /// Maintenance company code.
    #[serde(rename = "mntCpnyCd", default)]
    pub maintenance_company: Option<String>,
    #[serde(rename = "frstInstallationDe", default)]
    pub first_installation_date: Option<String>,
    #[serde(rename = "installationDe", default)]
    pub installation_date: Option<String>,
    /// Receipt date, `YYYYMMDD`.
    #[serde(rename = "recptnDe", default)]
    pub receipt_date: Option<String>,
    /// Customer guidance number.
    #[serde(rename = "cstmrGuidanceNo", default)]
    pub customer_guidance_no: Option<String>,
    #[serde(rename = "inspctKindNm", default)]
    pub inspection_kind: Option<String>,
    /// Number of units accepted for inspection.
    #[serde(rename = "inspctCnt", default)]
    pub inspection_count: Option<String>,
    /// Total inspection fee.
    #[serde(rename = "inspctFee", default)]
    pub inspection_fee: Option<String>,
    /// Inspecting organization.
    #[serde(rename = "inspctCompanyNm", default)]
    pub inspection_company: Option<String>,
    /// Scheduled inspection date, `YYYYMMDD`.
    #[serde(rename = "asignDe", default)]
    pub scheduled_date: Option<String>,
    /// Scheduled arrival time.
    #[serde(rename = "arrivalTime", default)]
    pub arrival_time: Option<String>,
    /// Actual inspection date, `YYYYMMDD`.
    #[serde(rename = "inspctDe", default)]
    pub inspection_date: Option<String>,
    /// Pass/fail verdict.
    #[serde(rename = "inspctResult", default)]
    pub inspection_result: Option<String>,
    #[serde(rename = "mainInspctrNm", default)]
    pub main_inspector: Option<String>,
    #[serde(rename = "subInspctrNm", default)]
    pub sub_inspector: Option<String>,
    /// Follow-up (confirmation) inspection date.
    #[serde(rename = "cnfinspctDe", default)]
    pub confirm_inspection_date: Option<String>,
    #[serde(rename = "cnfinspctResult", default)]
    pub confirm_inspection_result: Option<String>,
    #[serde(rename = "cnfmainInspctrNm", default)]
    pub confirm_main_inspector: Option<String>,
    #[serde(rename = "cnfsubInspctrNm", default)]
    pub confirm_sub_inspector: Option<String>,
    /// Correction window start.
    #[serde(rename = "conditionalBeDt", default)]
    pub conditional_begin_date: Option<String>,
    /// Correction window end.
    #[serde(rename = "conditionalEnDt", default)]
    pub conditional_end_date: Option<String>,
    /// Certificate validity start.
    #[serde(rename = "applcFromDt", default)]
    pub valid_from_date: Option<String>,
    /// Certificate validity end.
    #[serde(rename = "applcToDt", default)]
    pub valid_to_date: Option<String>,
    /// Defect lookup key.
    #[serde(rename = "failCd1", default)]
    pub fail_code: Option<String>,
    /// Defect lookup key of the confirmation inspection.
    #[serde(rename = "cnfinspctFailCd2", default)]
    pub confirm_fail_code: Option<String>,
    /// Receipt number.
    #[serde(rename = "recptnMgtNo", default)]
    pub receipt_no: Option<String>,
}
