//! CLI引数のパスをドロップゾーンの受付ルールに通す

use crate::error::{NotaFiscalError, Result};
use nota_fiscal_common::drop_zone::{accepted_files, guess_mime_type};
use nota_fiscal_common::{ExtractedData, FileCandidate, SelectedFile};
use std::path::Path;

/// PDFを読み込んで `SelectedFile` にする
pub fn load_pdf(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(NotaFiscalError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let candidates = [FileCandidate::new(name.clone(), guess_mime_type(&name))];
    if accepted_files(&candidates).is_empty() {
        return Err(NotaFiscalError::NotPdf(path.display().to_string()));
    }

    let content = std::fs::read(path)?;
    Ok(SelectedFile::new(name, content))
}

/// 以前出力した抽出結果JSONを読み込む
pub fn load_extracted(path: &Path) -> Result<ExtractedData> {
    if !path.is_file() {
        return Err(NotaFiscalError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(ExtractedData::from_json(&content)?)
}
