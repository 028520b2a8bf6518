//! 選択中ファイルの表示と削除ボタン

use crate::controllers;
use leptos::prelude::*;
use nota_fiscal_common::Session;

#[component]
pub fn FileInfo(session: RwSignal<Session>) -> impl IntoView {
    let file_meta = move || {
        session.with(|s| s.selected_file().map(|f| (f.name.clone(), f.size_label())))
    };

    view! {
        {move || file_meta().map(|(name, size)| view! {
            <div class="file-info">
                <span class="file-icon">"📄"</span>
                <div class="file-details">
                    <strong>{name}</strong>
                    <div class="file-size">{size}</div>
                </div>
                <button
                    class="btn btn-remove"
                    title="Remover arquivo"
                    on:click=move |_| controllers::remove_file(session)
                >
                    "✕"
                </button>
            </div>
        })}
    }
}
