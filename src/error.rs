use nota_fiscal_common::{ApiFailure, Rejected};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotaFiscalError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("PDFファイルではありません: {0}")]
    NotPdf(String),

    #[error(transparent)]
    Rejected(#[from] Rejected),

    /// 抽出/保存が失敗した（メッセージはステータスバナーと同じ）
    #[error("{0}")]
    ActionFailed(String),

    #[error("API呼び出しエラー: {0}")]
    Api(#[from] ApiFailure),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] nota_fiscal_common::Error),
}

pub type Result<T> = std::result::Result<T, NotaFiscalError>;
