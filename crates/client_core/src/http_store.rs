use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{AssignmentId, AssignmentStatus, EmployeeId},
    error::ApiException,
    protocol::{Assignment, Employee, NewAssignment, UpdateStatusRequest},
};
use tracing::debug;
use url::Url;

use crate::AssignmentStore;

/// `AssignmentStore` backed by the dashboard REST API.
pub struct HttpAssignmentStore {
    http: Client,
    base_url: Url,
}

impl HttpAssignmentStore {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid API base url '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("API base url '{base_url}' cannot carry request paths");
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("API base url '{}' cannot carry request paths", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiException::from_body(status.as_u16(), &body).into());
    }
    response
        .json()
        .await
        .context("failed to decode response body")
}

#[async_trait]
impl AssignmentStore for HttpAssignmentStore {
    async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        let url = self.endpoint(&["employees"])?;
        debug!(%url, "fetching employees");
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    async fn fetch_employee_assignments(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Assignment>> {
        let url = self.endpoint(&["assignments", "employee", employee_id.as_str()])?;
        debug!(%url, employee_id = %employee_id, "fetching employee assignments");
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    async fn assign_work(&self, request: &NewAssignment) -> Result<Assignment> {
        let url = self.endpoint(&["assignments"])?;
        debug!(%url, employee_name = %request.employee_name, "creating assignment");
        let response = self.http.post(url).json(request).send().await?;
        read_json(response).await
    }

    async fn update_assignment_status(
        &self,
        assignment_id: &AssignmentId,
        status: AssignmentStatus,
    ) -> Result<Assignment> {
        let url = self.endpoint(&["assignments", assignment_id.as_str(), "status"])?;
        debug!(%url, %status, "updating assignment status");
        let response = self
            .http
            .patch(url)
            .json(&UpdateStatusRequest { status })
            .send()
            .await?;
        read_json(response).await
    }
}
