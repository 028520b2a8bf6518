//! 画面全体の状態と抽出/保存/コピーの状態遷移
//!
//! HTTP呼び出しは行わない。`begin_*` が前提条件を確認して送信内容を返し、
//! 呼び出し側が通信した結果を `finish_*` に渡す。

use crate::api::ApiFailure;
use crate::messages;
use crate::status::{Action, Banner, UiStatus};
use crate::types::{ExtractedData, SelectedFile};
use serde_json::Value;
use thiserror::Error;

/// `begin_*` が送信前に拒否した理由
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    #[error("{}", messages::NO_FILE_SELECTED)]
    MissingFile,

    #[error("{}", messages::NOTHING_TO_SAVE)]
    NothingToSave,

    /// 同じアクションが通信中（状態は変更しない）
    #[error("{0} already in progress")]
    InFlight(Action),
}

/// 保存APIへ送る内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub body: Vec<u8>,
}

/// クリップボード書き込み先
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// 画面の状態（1ページ/1プロセスにつき1つ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    selected_file: Option<SelectedFile>,
    extracted: Option<ExtractedData>,
    extract_status: UiStatus,
    save_status: UiStatus,
    copy_status: UiStatus,
    last_action: Option<Action>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以前の抽出結果（ファイル保存したもの等）から復元
    pub fn from_extracted(data: ExtractedData) -> Self {
        Self {
            extracted: Some(data),
            ..Self::default()
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn extracted(&self) -> Option<&ExtractedData> {
        self.extracted.as_ref()
    }

    pub fn status(&self, action: Action) -> &UiStatus {
        match action {
            Action::Extract => &self.extract_status,
            Action::Save => &self.save_status,
            Action::Copy => &self.copy_status,
        }
    }

    pub fn is_loading(&self, action: Action) -> bool {
        self.status(action).is_loading()
    }

    /// 最後に操作したアクションのError/Successを返す
    pub fn banner(&self) -> Option<Banner> {
        self.last_action
            .and_then(|action| Banner::from_status(self.status(action)))
    }

    fn start_action(&mut self, action: Action) {
        self.extract_status.clear_message();
        self.save_status.clear_message();
        self.copy_status.clear_message();
        self.last_action = Some(action);
    }

    // ---- Drop Zone ----

    /// 受付済みファイル一覧を反映（先頭を選択し、抽出エラーを消す）
    ///
    /// 空なら何もせず `false` を返す。
    pub fn drop_files<I>(&mut self, accepted: I) -> bool
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let Some(first) = accepted.into_iter().next() else {
            return false;
        };
        self.selected_file = Some(first);
        if self.extract_status.error().is_some() {
            self.extract_status = UiStatus::Idle;
        }
        true
    }

    /// 選択ファイルを外す（抽出済みデータには触れない）
    pub fn remove_file(&mut self) {
        self.selected_file = None;
    }

    // ---- Extraction Controller ----

    /// 抽出開始。アップロードするファイルを返す
    pub fn begin_extract(&mut self) -> Result<SelectedFile, Rejected> {
        if self.extract_status.is_loading() {
            return Err(Rejected::InFlight(Action::Extract));
        }
        self.start_action(Action::Extract);

        let Some(file) = self.selected_file.clone() else {
            self.extract_status = UiStatus::Error(messages::NO_FILE_SELECTED.to_string());
            return Err(Rejected::MissingFile);
        };

        self.extract_status = UiStatus::Loading;
        Ok(file)
    }

    /// 抽出結果を反映。失敗時は既存の抽出データを残す
    ///
    /// バナーは最後に完了したアクションを表示する。
    pub fn finish_extract(&mut self, outcome: Result<Value, ApiFailure>) {
        match outcome {
            // nullはデータ無しとして扱う
            Ok(Value::Null) => {
                self.extracted = None;
                self.extract_status = UiStatus::Success(messages::EXTRACT_SUCCESS.to_string());
            }
            Ok(body) => {
                self.extracted = Some(ExtractedData::new(body));
                self.extract_status = UiStatus::Success(messages::EXTRACT_SUCCESS.to_string());
            }
            Err(failure) => {
                self.extract_status =
                    UiStatus::Error(format!("{}{}", messages::EXTRACT_FAILED_PREFIX, failure));
            }
        }
        self.last_action = Some(Action::Extract);
    }

    // ---- Save Controller ----

    /// 保存開始。送信するJSONボディを返す
    pub fn begin_save(&mut self) -> Result<SaveRequest, Rejected> {
        if self.save_status.is_loading() {
            return Err(Rejected::InFlight(Action::Save));
        }
        self.start_action(Action::Save);

        let Some(data) = self.extracted.as_ref() else {
            self.save_status = UiStatus::Error(messages::NOTHING_TO_SAVE.to_string());
            return Err(Rejected::NothingToSave);
        };

        let body = data.to_json_bytes();
        self.save_status = UiStatus::Loading;
        Ok(SaveRequest { body })
    }

    pub fn finish_save(&mut self, outcome: Result<(), ApiFailure>) {
        self.save_status = match outcome {
            Ok(()) => UiStatus::Success(messages::SAVE_SUCCESS.to_string()),
            Err(failure) => {
                UiStatus::Error(format!("{}{}", messages::SAVE_FAILED_PREFIX, failure))
            }
        };
        self.last_action = Some(Action::Save);
    }

    // ---- Result Viewer ----

    /// コピー開始。書き込む整形JSONを返す。データが無ければ `None`
    pub fn begin_copy(&mut self) -> Option<String> {
        let text = self.extracted.as_ref()?.to_pretty_json();
        self.start_action(Action::Copy);
        self.copy_status = UiStatus::Loading;
        Some(text)
    }

    /// クリップボード書き込みの結果を反映
    pub fn finish_copy(&mut self, outcome: Result<(), String>) {
        self.copy_status = match outcome {
            Ok(()) => UiStatus::Success(messages::COPY_SUCCESS.to_string()),
            Err(reason) => UiStatus::Error(format!("{}{}", messages::COPY_FAILED_PREFIX, reason)),
        };
        self.last_action = Some(Action::Copy);
    }

    /// 同期的に書き込めるクリップボード（CLI）へのコピー
    pub fn copy_json<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C) -> bool {
        let Some(text) = self.begin_copy() else {
            return false;
        };
        let outcome = clipboard.write_text(&text);
        self.finish_copy(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::BannerKind;
    use serde_json::json;

    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), String> {
            if self.fail {
                return Err("clipboard unavailable".into());
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, b"%PDF-1.4 test".to_vec())
    }

    fn session_with_data(value: Value) -> Session {
        let mut session = Session::new();
        session.drop_files([pdf("nf.pdf")]);
        session.begin_extract().unwrap();
        session.finish_extract(Ok(value));
        session
    }

    #[test]
    fn test_drop_selects_first_and_clears_extract_error() {
        let mut session = Session::new();
        assert_eq!(session.begin_extract(), Err(Rejected::MissingFile));
        assert!(session.status(Action::Extract).error().is_some());

        assert!(session.drop_files([pdf("a.pdf"), pdf("b.pdf")]));
        assert_eq!(session.selected_file().unwrap().name, "a.pdf");
        assert_eq!(session.status(Action::Extract), &UiStatus::Idle);
        assert_eq!(session.banner(), None);

        assert!(session.drop_files([pdf("c.pdf")]));
        assert_eq!(session.selected_file().unwrap().name, "c.pdf");
    }

    #[test]
    fn test_empty_drop_keeps_selection() {
        let mut session = Session::new();
        session.drop_files([pdf("a.pdf")]);
        assert!(!session.drop_files(Vec::new()));
        assert_eq!(session.selected_file().unwrap().name, "a.pdf");
    }

    #[test]
    fn test_extract_without_file_is_validation_error() {
        let mut session = Session::new();
        let result = session.begin_extract();

        assert_eq!(result, Err(Rejected::MissingFile));
        assert!(!session.is_loading(Action::Extract));
        let banner = session.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, messages::NO_FILE_SELECTED);
    }

    #[test]
    fn test_extract_success_stores_body_verbatim() {
        let body = json!({"numero_nota_fiscal": "123", "valor_total": 10.5, "itens": [{"q": 1}]});
        let mut session = Session::new();
        session.drop_files([pdf("nf.pdf")]);

        let file = session.begin_extract().unwrap();
        assert_eq!(file.name, "nf.pdf");
        assert!(session.is_loading(Action::Extract));
        assert_eq!(session.banner(), None);

        session.finish_extract(Ok(body.clone()));
        assert!(!session.is_loading(Action::Extract));
        assert_eq!(session.extracted().unwrap().as_value(), &body);
        assert_eq!(
            session.status(Action::Extract).success(),
            Some(messages::EXTRACT_SUCCESS)
        );
    }

    #[test]
    fn test_extract_failure_contains_server_detail_and_keeps_data() {
        let previous = json!({"total": 1});
        let mut session = session_with_data(previous.clone());

        session.begin_extract().unwrap();
        session.finish_extract(Err(ApiFailure::from_response(
            500,
            r#"{"error": "Falha na extração"}"#,
        )));

        let error = session.status(Action::Extract).error().unwrap();
        assert!(error.starts_with(messages::EXTRACT_FAILED_PREFIX));
        assert!(error.contains("Falha na extração"));
        assert_eq!(session.extracted().unwrap().as_value(), &previous);
        assert!(!session.is_loading(Action::Extract));
    }

    #[test]
    fn test_extract_transport_failure_uses_transport_text() {
        let mut session = Session::new();
        session.drop_files([pdf("nf.pdf")]);
        session.begin_extract().unwrap();
        session.finish_extract(Err(ApiFailure::Transport("Network Error".into())));

        assert_eq!(
            session.status(Action::Extract).error(),
            Some("Erro ao extrair dados: Network Error")
        );
        assert!(session.extracted().is_none());
    }

    #[test]
    fn test_extract_in_flight_rejected_without_state_change() {
        let mut session = Session::new();
        session.drop_files([pdf("nf.pdf")]);
        session.begin_extract().unwrap();
        let before = session.clone();

        assert_eq!(session.begin_extract(), Err(Rejected::InFlight(Action::Extract)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_save_without_data_is_validation_error() {
        let mut session = Session::new();
        assert_eq!(session.begin_save(), Err(Rejected::NothingToSave));
        assert_eq!(session.status(Action::Save).error(), Some(messages::NOTHING_TO_SAVE));
        assert!(!session.is_loading(Action::Save));
    }

    #[test]
    fn test_save_body_is_byte_identical_to_stored_data() {
        let body = json!({"fornecedor": {"cnpj": "1"}, "valor_total": 42, "a": null});
        let mut session = session_with_data(body);

        let request = session.begin_save().unwrap();
        let stored = session.extracted().unwrap().as_value();
        assert_eq!(request.body, serde_json::to_vec(stored).unwrap());
        assert!(session.is_loading(Action::Save));
        assert!(!session.is_loading(Action::Extract));
    }

    #[test]
    fn test_save_success_and_failure() {
        let body = json!({"total": 42});
        let mut session = session_with_data(body.clone());

        session.begin_save().unwrap();
        session.finish_save(Ok(()));
        assert_eq!(session.status(Action::Save).success(), Some(messages::SAVE_SUCCESS));
        assert_eq!(session.extracted().unwrap().as_value(), &body);

        session.begin_save().unwrap();
        assert_eq!(session.banner(), None);
        session.finish_save(Err(ApiFailure::from_response(400, r#"{"error": "Dados não fornecidos"}"#)));
        let banner = session.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, "Erro ao salvar dados: Dados não fornecidos");
        assert_eq!(session.extracted().unwrap().as_value(), &body);
    }

    #[test]
    fn test_new_action_clears_previous_messages() {
        let mut session = session_with_data(json!({"total": 42}));
        assert!(session.status(Action::Extract).success().is_some());

        session.begin_save().unwrap();
        assert_eq!(session.status(Action::Extract), &UiStatus::Idle);
        assert_eq!(session.banner(), None);
    }

    #[test]
    fn test_extract_and_save_run_independently() {
        let mut session = session_with_data(json!({"total": 1}));

        session.begin_extract().unwrap();
        session.begin_save().unwrap();
        assert!(session.is_loading(Action::Extract));
        assert!(session.is_loading(Action::Save));

        session.finish_save(Ok(()));
        assert!(session.is_loading(Action::Extract));
        assert!(!session.is_loading(Action::Save));
    }

    #[test]
    fn test_restored_session_can_save() {
        let data = ExtractedData::new(json!({"valor_total": 10}));
        let mut session = Session::from_extracted(data.clone());

        assert!(session.selected_file().is_none());
        assert_eq!(session.banner(), None);
        assert_eq!(session.begin_save().unwrap().body, data.to_json_bytes());
    }

    #[test]
    fn test_remove_file_keeps_extracted_data() {
        let body = json!({"total": 42});
        let mut session = session_with_data(body.clone());

        session.remove_file();
        assert!(session.selected_file().is_none());
        assert_eq!(session.extracted().unwrap().as_value(), &body);
    }

    #[test]
    fn test_copy_writes_pretty_json_and_sets_success() {
        let mut session = session_with_data(json!({"total": 42}));
        let mut clipboard = MemoryClipboard::default();

        assert!(session.copy_json(&mut clipboard));
        assert_eq!(clipboard.text.as_deref(), Some("{\n  \"total\": 42\n}"));
        let banner = session.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.message, messages::COPY_SUCCESS);
    }

    #[test]
    fn test_copy_without_data_does_nothing() {
        let mut session = Session::new();
        let mut clipboard = MemoryClipboard::default();

        assert!(!session.copy_json(&mut clipboard));
        assert!(clipboard.text.is_none());
        assert_eq!(session.banner(), None);
    }

    #[test]
    fn test_copy_failure_reported() {
        let mut session = session_with_data(json!({"total": 42}));
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };

        session.copy_json(&mut clipboard);
        assert_eq!(
            session.status(Action::Copy).error(),
            Some("Erro ao copiar JSON: clipboard unavailable")
        );
    }

    #[test]
    fn test_copy_result_applied_after_async_write() {
        let mut session = session_with_data(json!({"total": 42}));

        let text = session.begin_copy().unwrap();
        assert_eq!(text, "{\n  \"total\": 42\n}");
        assert!(session.is_loading(Action::Copy));
        assert_eq!(session.banner(), None);

        session.finish_copy(Err("Document is not focused.".into()));
        let banner = session.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, "Erro ao copiar JSON: Document is not focused.");
    }

    #[test]
    fn test_banner_follows_last_finished_action() {
        let mut session = session_with_data(json!({"total": 1}));

        session.begin_extract().unwrap();
        session.begin_save().unwrap();
        session.finish_extract(Err(ApiFailure::from_response(500, r#"{"error": "X"}"#)));

        let banner = session.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, "Erro ao extrair dados: X");

        session.finish_save(Ok(()));
        let banner = session.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Success);
        assert_eq!(banner.message, messages::SAVE_SUCCESS);
        assert_eq!(
            session.status(Action::Extract).error(),
            Some("Erro ao extrair dados: X")
        );
    }

    #[test]
    fn test_null_extraction_body_counts_as_no_data() {
        let mut session = session_with_data(Value::Null);

        assert!(session.extracted().is_none());
        assert_eq!(session.status(Action::Extract).success(), Some(messages::EXTRACT_SUCCESS));
        assert_eq!(session.begin_save(), Err(Rejected::NothingToSave));
        assert!(!session.copy_json(&mut MemoryClipboard::default()));
    }
}
