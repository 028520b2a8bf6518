//! ボタン/ドロップ操作からセッション遷移とAPI呼び出しをつなぐ

use crate::api;
use crate::clipboard;
use gloo::console;
use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nota_fiscal_common::{first_accepted, ApiConfig, FileCandidate, SelectedFile, Session};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

/// ドロップ/選択されたファイルを受け付ける（PDF 1件のみ）
pub fn select_files(session: RwSignal<Session>, files: FileList) {
    let files: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
    let candidates: Vec<FileCandidate> = files
        .iter()
        .map(|f| FileCandidate::new(f.name(), f.type_()))
        .collect();

    let Some(index) = first_accepted(&candidates) else {
        console::log!(format!("drop ignored: {} file(s), none accepted", candidates.len()));
        return;
    };
    let file = files[index].clone();

    spawn_local(async move {
        match read_file(&file).await {
            Ok(selected) => session.update(|s| {
                s.drop_files([selected]);
            }),
            Err(e) => console::error!("failed to read file", e),
        }
    });
}

async fn read_file(file: &File) -> Result<SelectedFile, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let content = Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), content))
}

pub fn remove_file(session: RwSignal<Session>) {
    session.update(|s| s.remove_file());
}

/// 抽出APIを呼ぶ（通信は1クリックにつき1回）
pub fn extract(session: RwSignal<Session>, config: ApiConfig) {
    let Some(begun) = session.try_update(|s| s.begin_extract()) else {
        return;
    };
    let file = match begun {
        Ok(file) => file,
        Err(reason) => {
            console::warn!(format!("extract rejected: {}", reason));
            return;
        }
    };

    spawn_local(async move {
        let outcome = api::upload_pdf(&config, &file).await;
        if let Err(failure) = &outcome {
            console::error!(format!("upload-pdf failed: {}", failure));
        }
        session.update(|s| s.finish_extract(outcome));
    });
}

/// 保存APIを呼ぶ
pub fn save(session: RwSignal<Session>, config: ApiConfig) {
    let Some(begun) = session.try_update(|s| s.begin_save()) else {
        return;
    };
    let request = match begun {
        Ok(request) => request,
        Err(reason) => {
            console::warn!(format!("save rejected: {}", reason));
            return;
        }
    };

    spawn_local(async move {
        let outcome = api::save_invoice(&config, &request).await;
        if let Err(failure) = &outcome {
            console::error!(format!("save-invoice failed: {}", failure));
        }
        session.update(|s| s.finish_save(outcome));
    });
}

/// 整形JSONをクリップボードへ書き込み、結果を反映する
pub fn copy_json(session: RwSignal<Session>) {
    let Some(text) = session.try_update(|s| s.begin_copy()).flatten() else {
        return;
    };

    spawn_local(async move {
        let outcome = clipboard::write_text(&text).await;
        if let Err(reason) = &outcome {
            console::error!(format!("clipboard write failed: {}", reason));
        }
        session.update(|s| s.finish_copy(outcome));
    });
}
