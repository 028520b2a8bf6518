//! アップロードエリアコンポーネント（PDF 1件）

use super::file_info::FileInfo;
use crate::config::AppConfig;
use crate::controllers;
use leptos::html;
use leptos::prelude::*;
use nota_fiscal_common::drop_zone::ACCEPT_ATTRIBUTE;
use nota_fiscal_common::{Action, DropZoneState, Session};
use web_sys::{DragEvent, HtmlInputElement};

#[component]
pub fn UploadArea(session: RwSignal<Session>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let state = move || {
        session.with(|s| DropZoneState::project(is_dragover.get(), s.selected_file()))
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            controllers::select_files(session, files);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ゾーンのクリックで非表示のinputのダイアログを開く
    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            controllers::select_files(session, files);
        }
        // 同じファイルを再選択してもchangeが発火するように
        input.set_value("");
    };

    let is_extracting = move || session.with(|s| s.is_loading(Action::Extract));
    let has_file = move || session.with(|s| s.selected_file().is_some());
    let on_extract = move |_| controllers::extract(session, config.api.clone());

    view! {
        <div class="card">
            <h3>"📤 Upload de Arquivo"</h3>
            // ドロップゾーンの外に置く（input.click()がゾーンへバブリングしないように）
            <input
                type="file"
                accept=ACCEPT_ATTRIBUTE
                style="display: none"
                node_ref=input_ref
                on:change=on_change
            />
            <div
                class=move || state().css_class()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <div class="upload-icon">"📄"</div>
                <Show
                    when=move || matches!(state(), DropZoneState::DragActive)
                    fallback=|| view! {
                        <p><strong>"Arraste e solte seu PDF aqui"</strong></p>
                        <p>"ou clique para selecionar o arquivo"</p>
                        <div class="file-types">"Aceita apenas arquivos PDF"</div>
                    }
                >
                    <p><strong>"Solte o arquivo aqui..."</strong></p>
                </Show>
            </div>

            <FileInfo session=session />

            <div class="button-group">
                <button
                    class="btn btn-primary btn-large"
                    disabled=move || is_extracting() || !has_file()
                    on:click=on_extract
                >
                    {move || if is_extracting() {
                        view! { <div class="spinner"></div>"Processando..." }.into_any()
                    } else {
                        view! { "🔍 Extrair Dados" }.into_any()
                    }}
                </button>
            </div>
        </div>
    }
}
