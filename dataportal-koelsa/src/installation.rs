use crate::transport::Transport;
use crate::types::{InstallationListParams, InstallationRecord};
use dataportal_common::{extract_items, Page, Result};
use std::sync::Arc;

/// Endpoint path of the installation list operation.
pub(crate) const INSTALLATION_LIST_PATH: &str =
    "/openapi/service/ElevatorInstallationService/getInstallationElvtrListV2";

/// Elevator installation information service.
pub struct InstallationService {
    transport: Arc<Transport>,
}

impl InstallationService {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn service_name(&self) -> &'static str {
        "ElevatorInstallationService"
    }

    /// List installation records matching the parameters.
    pub async fn list(&self, params: &InstallationListParams) -> Result<Vec<InstallationRecord>> {
        Ok(self.list_paged(params).await?.items)
    }

    /// Like [`list`](Self::list), but keeps the envelope's pagination fields
    /// for callers that need total counts.
    pub async fn list_paged(
        &self,
        params: &InstallationListParams,
    ) -> Result<Page<InstallationRecord>> {
        params.validate()?;

        let parsed = self
            .transport
            .get(INSTALLATION_LIST_PATH, &params.to_query())
            .await?;
        crate::check_result_code(INSTALLATION_LIST_PATH, &parsed.response.header)?;

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

    /// Resolve a single elevator by unique number within a date window.
    /// An empty result is `Ok(None)`, not an error.
    pub async fn find_by_elevator_no(
        &self,
        elevator_no: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Option<InstallationRecord>> {
        let params =
            InstallationListParams::new(1, 1, start_date, end_date).with_elevator_no(elevator_no);
        Ok(self.list(&params).await?.into_iter().next())
    }
}
