//! 抽出/保存APIとの契約
//!
//! HTTP呼び出し自体は各フロントエンド（CLI: reqwest, Web: fetch）が行い、
//! ここではURL組み立てとレスポンス→エラーメッセージの対応付けのみを扱う。

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// multipartでPDFを載せるフィールド名
pub const UPLOAD_FIELD_NAME: &str = "file";

const UPLOAD_PDF_PATH: &str = "/api/upload-pdf";
const SAVE_INVOICE_PATH: &str = "/api/save-invoice";
const HEALTH_PATH: &str = "/api/health";

/// API接続設定（起動時に注入する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("API base URL is empty".into()));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "API base URL must start with http:// or https://: {}",
                trimmed
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_pdf_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PDF_PATH)
    }

    pub fn save_invoice_url(&self) -> String {
        format!("{}{}", self.base_url, SAVE_INVOICE_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// API呼び出しの失敗
///
/// Displayはそのままユーザー向けメッセージの詳細部分になる。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// 2xx以外のレスポンス
    #[error("{}", server_message(.status, .detail))]
    Server { status: u16, detail: Option<String> },

    /// 接続拒否・DNS失敗などの通信エラー
    #[error("{0}")]
    Transport(String),

    /// 2xxだが本文がJSONでない
    #[error("{0}")]
    InvalidResponse(String),
}

fn server_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("Request failed with status code {}", status),
    }
}

impl ApiFailure {
    /// 2xx以外のレスポンスから失敗を組み立てる
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiFailure::Server {
            status,
            detail: error_detail(body),
        }
    }
}

/// エラーレスポンス本文から `error` フィールドを取り出す
///
/// 空文字・false・0 は詳細なしとして扱う（ステータスコードの文言にフォールバック）。
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `GET /api/health` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
