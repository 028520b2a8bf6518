//! 画面状態で扱うデータ型
//!
//! CLIとWeb(WASM)で共有される型:
//! - FileCandidate: ドロップ/選択されたファイルのメタデータ（中身の読込前）
//! - SelectedFile: アップロード対象として選ばれた1ファイル
//! - ExtractedData: 抽出APIが返した構造化データ（スキーマは仮定しない）

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ドロップ/選択されたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    /// ブラウザが報告するMIMEタイプ（不明な場合は空文字）
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// アップロード対象のファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// バイトサイズ
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// "1.50 MB" 形式のサイズ表記
    pub fn size_label(&self) -> String {
        format_size_mb(self.size())
    }
}

/// バイト数をMB表記（小数2桁）に変換
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// 抽出APIのレスポンス本体
///
/// 中身は検証も変換もせず、受信したJSONをそのまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedData(Value);

impl ExtractedData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// JSON文字列からパース
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// 表示・クリップボード用の整形JSON（インデント2、キー順は受信順）
    pub fn to_pretty_json(&self) -> String {
        // Valueのシリアライズは失敗しない
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// 保存APIへ送るリクエストボディ（コンパクトJSON）
    pub fn to_json_bytes(&self) -> Vec<u8> {
        self.0.to_string().into_bytes()
    }

    /// JSON Pointerで文字列/数値フィールドを取り出す（表示用）
    pub fn lookup(&self, pointer: &str) -> Option<String> {
        match self.0.pointer(pointer)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for ExtractedData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
