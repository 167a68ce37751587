use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, Response};

use super::{
    errors::GatewayError,
    models::{
        reference_model::ReferenceData,
        schedule_model::{DeleteAck, ImportReport, ImportRequest, NewScheduleEntry, ScheduleEntry},
        Config,
    },
};

/// A trait, necessary for every entity that serves schedule data and accepts changes to it.
#[allow(async_fn_in_trait)]
pub trait ScheduleGateway {
    async fn fetch_all_data(&self) -> Result<ReferenceData, GatewayError>;
    async fn fetch_schedules(
        &self,
        group_id: Option<u32>,
        teacher_id: Option<u32>,
    ) -> Result<Vec<ScheduleEntry>, GatewayError>;
    async fn create_schedule(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry, GatewayError>;
    async fn update_schedule(&self, entry: &ScheduleEntry) -> Result<ScheduleEntry, GatewayError>;
    async fn delete_schedule(&self, id: u32) -> Result<DeleteAck, GatewayError>;
    async fn import_excel_file(&self, file_base64: &str) -> Result<ImportReport, GatewayError>;
}

/// Talks to the deployed schedule API over HTTP.
pub struct HttpGateway {
    client: Client,
    config: Config,
}

impl HttpGateway {
    pub fn new(config: Config) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }
}

/// URL of the schedule list. A filter is only sent when it is set.
pub fn schedules_url(base: &str, group_id: Option<u32>, teacher_id: Option<u32>) -> String {
    let params = [("group_id", group_id), ("teacher_id", teacher_id)]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, v)))
        .collect::<Vec<_>>();
    if params.is_empty() {
        base.to_owned()
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

pub fn delete_url(base: &str, id: u32) -> String {
    format!("{}?id={}", base, id)
}

async fn ensure_success(operation: &'static str, response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("{} rejected with {}: {}", operation, status, body);
    Err(GatewayError::Status {
        operation,
        status,
        body,
    })
}

/// Allows HttpGateway to serve the schedule via requests to the configured endpoints.
impl ScheduleGateway for HttpGateway {
    async fn fetch_all_data(&self) -> Result<ReferenceData, GatewayError> {
        info!("Getting reference data from {}", self.config.data_url);
        let response = self.client.get(&self.config.data_url).send().await?;
        let data: ReferenceData = ensure_success("Failed to fetch data", response)
            .await?
            .json()
            .await?;
        info!(
            "Got {} campuses, {} teachers and {} groups",
            data.campuses.len(),
            data.teachers.len(),
            data.groups.len()
        );
        Ok(data)
    }

    async fn fetch_schedules(
        &self,
        group_id: Option<u32>,
        teacher_id: Option<u32>,
    ) -> Result<Vec<ScheduleEntry>, GatewayError> {
        let request_url = schedules_url(&self.config.schedule_url, group_id, teacher_id);
        info!("Getting schedule from {}", request_url);
        let response = self.client.get(request_url).send().await?;
        let entries: Vec<ScheduleEntry> = ensure_success("Failed to fetch schedules", response)
            .await?
            .json()
            .await?;
        info!("Collected {} schedule entries", entries.len());
        Ok(entries)
    }

    async fn create_schedule(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry, GatewayError> {
        info!("Creating {} for group {}", entry.subject, entry.group_id);
        let response = self
            .client
            .post(&self.config.schedule_url)
            .json(entry)
            .send()
            .await?;
        Ok(ensure_success("Failed to create schedule", response)
            .await?
            .json()
            .await?)
    }

    async fn update_schedule(&self, entry: &ScheduleEntry) -> Result<ScheduleEntry, GatewayError> {
        info!("Updating schedule entry {}", entry.id);
        let response = self
            .client
            .put(&self.config.schedule_url)
            .json(entry)
            .send()
            .await?;
        Ok(ensure_success("Failed to update schedule", response)
            .await?
            .json()
            .await?)
    }

    async fn delete_schedule(&self, id: u32) -> Result<DeleteAck, GatewayError> {
        info!("Deleting schedule entry {}", id);
        let response = self
            .client
            .delete(delete_url(&self.config.schedule_url, id))
            .send()
            .await?;
        Ok(ensure_success("Failed to delete schedule", response)
            .await?
            .json()
            .await?)
    }

    async fn import_excel_file(&self, file_base64: &str) -> Result<ImportReport, GatewayError> {
        info!(
            "Uploading {} bytes of spreadsheet to {}",
            file_base64.len(),
            self.config.import_url
        );
        let response = self
            .client
            .post(&self.config.import_url)
            .json(&ImportRequest { file: file_base64 })
            .send()
            .await?;
        let report: ImportReport = ensure_success("Failed to import Excel file", response)
            .await?
            .json()
            .await?;
        info!(
            "Server imported {} rows, rejected {}",
            report.imported,
            report.errors.len()
        );
        Ok(report)
    }
}
