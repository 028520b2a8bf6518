//! 抽出/保存APIのHTTPクライアント（reqwest）

use crate::error::{NotaFiscalError, Result};
use crate::workflow::InvoiceApi;
use nota_fiscal_common::drop_zone::PDF_MIME_TYPE;
use nota_fiscal_common::{
    ApiConfig, ApiFailure, HealthStatus, SaveRequest, SelectedFile, UPLOAD_FIELD_NAME,
};
use reqwest::multipart::{Form, Part};
use reqwest::{header, Response};
use serde_json::Value;
use tracing::{debug, info, warn};

pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        // タイムアウトは指定しない（reqwestの既定に任せる）
        let http = reqwest::Client::builder()
            .user_agent(concat!("nota-fiscal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NotaFiscalError::Config(format!("HTTPクライアント初期化失敗: {}", e)))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /api/health`
    pub async fn health(&self) -> std::result::Result<HealthStatus, ApiFailure> {
        let url = self.config.health_url();
        debug!(url = %url, "GET health");

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = ensure_success(response).await?;
        let text = response.text().await.map_err(transport)?;
        serde_json::from_str(&text).map_err(|e| ApiFailure::InvalidResponse(e.to_string()))
    }
}

impl InvoiceApi for ApiClient {
    async fn upload_pdf(&self, file: &SelectedFile) -> std::result::Result<Value, ApiFailure> {
        let url = self.config.upload_pdf_url();
        info!(url = %url, file = %file.name, bytes = file.size(), "Uploading PDF");

        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(PDF_MIME_TYPE)
            .map_err(transport)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        let response = ensure_success(response).await?;

        let text = response.text().await.map_err(transport)?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| ApiFailure::InvalidResponse(format!("invalid JSON response: {}", e)))?;
        debug!(response_len = text.len(), "Extraction response received");
        Ok(body)
    }

    async fn save_invoice(&self, request: &SaveRequest) -> std::result::Result<(), ApiFailure> {
        let url = self.config.save_invoice_url();
        info!(url = %url, bytes = request.body.len(), "Saving invoice");

        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(request.body.clone())
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await?;
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> ApiFailure {
    warn!(error = %err, "Transport failure");
    ApiFailure::Transport(err.to_string())
}

/// 2xx以外なら本文の `error` を拾って失敗にする
async fn ensure_success(response: Response) -> std::result::Result<Response, ApiFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), body_len = body.len(), "API returned error status");
    Err(ApiFailure::from_response(status.as_u16(), &body))
}
