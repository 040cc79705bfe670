use crate::domain::model::{BackendReply, SubmissionPayload};
use crate::domain::ports::{ConfigProvider, SubmissionBackend};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

/// Posts submissions as `multipart/form-data` to the project endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.backend_endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(payload: SubmissionPayload) -> Result<Form> {
        let mut form = Form::new();
        for (key, value) in payload.fields {
            form = form.text(key, value);
        }

        if let Some(image) = payload.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl SubmissionBackend for HttpBackend {
    async fn submit(&self, payload: SubmissionPayload) -> Result<BackendReply> {
        let form = Self::build_form(payload)?;

        tracing::debug!("Making multipart POST to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        tracing::debug!("Backend response status: {}", status);
        if !status.is_success() {
            tracing::warn!("Backend answered with HTTP {}", status);
        }

        // 以回應內容為準，不論 HTTP 狀態碼
        let body = response.text().await?;
        Ok(BackendReply::from_body(&body))
    }
}
