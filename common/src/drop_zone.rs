//! ドロップゾーンの受付ルール
//!
//! PDF 1件のみ受け付ける。複数ファイルのドロップは黙って破棄する。

use crate::types::{format_size_mb, FileCandidate, SelectedFile};

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const PDF_EXTENSION: &str = ".pdf";

/// ファイル選択ダイアログの `accept` 属性値
pub const ACCEPT_ATTRIBUTE: &str = "application/pdf,.pdf";

/// PDFとして受け付けるか（MIMEタイプまたは拡張子で判定）
pub fn is_pdf(candidate: &FileCandidate) -> bool {
    candidate.mime_type.eq_ignore_ascii_case(PDF_MIME_TYPE)
        || candidate.name.to_ascii_lowercase().ends_with(PDF_EXTENSION)
}

/// ドロップされたファイル一覧から受け付けるものを返す
///
/// 2件以上は全件拒否（単一ファイルモード）。
pub fn accepted_files(candidates: &[FileCandidate]) -> Vec<&FileCandidate> {
    if candidates.len() > 1 {
        return Vec::new();
    }
    candidates.iter().filter(|c| is_pdf(c)).collect()
}

/// 受け付けた先頭ファイルの位置（中身を読む前に判定する用）
pub fn first_accepted(candidates: &[FileCandidate]) -> Option<usize> {
    if candidates.len() > 1 {
        return None;
    }
    candidates.iter().position(is_pdf)
}

/// 拡張子からMIMEタイプを推定（CLI用）
pub fn guess_mime_type(name: &str) -> &'static str {
    if name.to_ascii_lowercase().ends_with(PDF_EXTENSION) {
        PDF_MIME_TYPE
    } else {
        "application/octet-stream"
    }
}

/// ドロップゾーンの表示状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropZoneState {
    Idle,
    DragActive,
    FileSelected { name: String, size_label: String },
}

impl DropZoneState {
    pub fn project(drag_active: bool, selected: Option<&SelectedFile>) -> Self {
        match (drag_active, selected) {
            (true, _) => Self::DragActive,
            (false, Some(file)) => Self::FileSelected {
                name: file.name.clone(),
                size_label: format_size_mb(file.size()),
            },
            (false, None) => Self::Idle,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Idle => "upload-area",
            Self::DragActive => "upload-area dragover",
            Self::FileSelected { .. } => "upload-area selected",
        }
    }
}
