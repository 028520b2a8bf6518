//! 抽出/保存コントローラの非同期ドライバ
//!
//! `Session` の begin → API呼び出し → finish を1回ずつ実行する。
//! 前提条件で拒否された場合は通信しない。

use nota_fiscal_common::{Action, ApiFailure, Rejected, SaveRequest, SelectedFile, Session};
use serde_json::Value;
use tracing::{debug, warn};

/// 抽出/保存APIの呼び出し口
#[allow(async_fn_in_trait)]
pub trait InvoiceApi {
    async fn upload_pdf(&self, file: &SelectedFile) -> Result<Value, ApiFailure>;

    async fn save_invoice(&self, request: &SaveRequest) -> Result<(), ApiFailure>;
}

/// 選択中のファイルを抽出APIへ送り、結果をセッションに反映する
///
/// `Err` は通信せずに拒否されたことを示す。通信結果は
/// `session.status(Action::Extract)` に入る。
pub async fn extract<A: InvoiceApi>(session: &mut Session, api: &A) -> Result<(), Rejected> {
    let file = session.begin_extract().inspect_err(|reason| {
        warn!(action = %Action::Extract, reason = %reason, "Rejected before request");
    })?;

    let outcome = api.upload_pdf(&file).await;
    debug!(ok = outcome.is_ok(), "Extraction finished");
    session.finish_extract(outcome);
    Ok(())
}

/// 抽出済みデータを保存APIへ送る
pub async fn save<A: InvoiceApi>(session: &mut Session, api: &A) -> Result<(), Rejected> {
    let request = session.begin_save().inspect_err(|reason| {
        warn!(action = %Action::Save, reason = %reason, "Rejected before request");
    })?;

    let outcome = api.save_invoice(&request).await;
    debug!(ok = outcome.is_ok(), "Save finished");
    session.finish_save(outcome);
    Ok(())
}
