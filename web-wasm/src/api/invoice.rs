//! 抽出/保存APIの呼び出し（fetch）
//!
//! - upload_pdf: multipart (`file`) で `POST /api/upload-pdf`
//! - save_invoice: 抽出データのJSONを `POST /api/save-invoice`
//! - health: `GET /api/health`

use js_sys::{Array, Uint8Array};
use nota_fiscal_common::drop_zone::PDF_MIME_TYPE;
use nota_fiscal_common::{
    ApiConfig, ApiFailure, HealthStatus, SaveRequest, SelectedFile, UPLOAD_FIELD_NAME,
};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// PDFを `file` フィールドに載せたFormDataを作る
pub fn build_upload_form(file: &SelectedFile) -> Result<FormData, JsValue> {
    let bytes = Uint8Array::from(file.content.as_slice());
    let options = BlobPropertyBag::new();
    options.set_type(PDF_MIME_TYPE);
    let blob = Blob::new_with_u8_array_sequence_and_options(&Array::of1(&bytes), &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, &blob, &file.name)?;
    Ok(form)
}

pub async fn upload_pdf(config: &ApiConfig, file: &SelectedFile) -> Result<Value, ApiFailure> {
    let form = build_upload_form(file).map_err(js_failure)?;
    let body: &JsValue = form.as_ref();

    // Content-Typeはブラウザがboundary付きで設定する
    let response = send("POST", &config.upload_pdf_url(), Some(body), None).await?;
    let response = ensure_ok(response).await?;

    let text = response_text(&response).await?;
    serde_json::from_str(&text)
        .map_err(|e| ApiFailure::InvalidResponse(format!("invalid JSON response: {}", e)))
}

pub async fn save_invoice(config: &ApiConfig, request: &SaveRequest) -> Result<(), ApiFailure> {
    let bytes = Uint8Array::from(request.body.as_slice());
    let body: &JsValue = bytes.as_ref();
    let response = send(
        "POST",
        &config.save_invoice_url(),
        Some(body),
        Some("application/json"),
    )
    .await?;
    ensure_ok(response).await?;
    Ok(())
}

pub async fn health(config: &ApiConfig) -> Result<HealthStatus, ApiFailure> {
    let response = send("GET", &config.health_url(), None, None).await?;
    let response = ensure_ok(response).await?;
    let text = response_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| ApiFailure::InvalidResponse(e.to_string()))
}

async fn send(
    method: &str,
    url: &str,
    body: Option<&JsValue>,
    content_type: Option<&str>,
) -> Result<Response, ApiFailure> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_failure)?;
    if let Some(content_type) = content_type {
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(js_failure)?;
    }

    let window =
        web_sys::window().ok_or_else(|| ApiFailure::Transport("window is not available".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_failure)?;
    value.dyn_into::<Response>().map_err(js_failure)
}

async fn response_text(response: &Response) -> Result<String, ApiFailure> {
    let promise = response.text().map_err(js_failure)?;
    let value = JsFuture::from(promise).await.map_err(js_failure)?;
    Ok(value.as_string().unwrap_or_default())
}

async fn ensure_ok(response: Response) -> Result<Response, ApiFailure> {
    if response.ok() {
        return Ok(response);
    }
    let body = response_text(&response).await.unwrap_or_default();
    Err(ApiFailure::from_response(response.status(), &body))
}

/// fetchのreject（TypeError: Failed to fetch 等）を通信エラーにする
fn js_failure(err: JsValue) -> ApiFailure {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ApiFailure::Transport(message)
}
