use crate::transport::Transport;
use crate::types::{InspectionListParams, InspectionRecord};
use dataportal_common::{extract_items, Page, Result, MAX_NUM_OF_ROWS};
use std::sync::Arc;

/// Endpoint path of the inspection result list operation.
pub(crate) const INSPECTION_LIST_PATH: &str =
    "/openapi/service/ElevatorInspectResultService/getInspectResultListV1";

/// Elevator inspection request result service.
pub struct InspectionService {
    transport: Arc<Transport>,
}

impl InspectionService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn service_name(&self) -> &'static str {
        "ElevatorInspectResultService"
    }

    /// List inspection results for a management code.
    pub async fn list(&self, params: &InspectionListParams) -> Result<Vec<InspectionRecord>> {
        Ok(self.list_paged(params).await?.items)
    }

    /// Like [`list`](Self::list), but keeps the envelope's pagination fields.
    pub async fn list_paged(
        &self,
        params: &InspectionListParams,
    ) -> Result<Page<InspectionRecord>> {
        params.validate()?;

        let parsed = self
            .transport
            .get(INSPECTION_LIST_PATH, &params.to_query())
            .await?;
        crate::check_result_code(INSPECTION_LIST_PATH, &parsed.response.header)?;

        let body = parsed.response.body;
        let items = crate::items_or_error(extract_items(body.as_ref()))?;
        let (total_count, page_no, num_of_rows) = match &body {
            Some(b) => (b.total_count, b.page_no, b.num_of_rows),
            None => (None, None, None),
        };

        Ok(Page {
            items,
            total_count,
            page_no,
            num_of_rows,
        })
    }

    /// Fetch every inspection result for one management code in a single
    /// maximum-size page.
    pub async fn find_by_management_code(
        &self,
        management_code: impl Into<String>,
    ) -> Result<Vec<InspectionRecord>> {
        let params = InspectionListParams::new(1, MAX_NUM_OF_ROWS, management_code);
        self.list(&params).await
    }
}
