//! 抽出結果のJSON表示・コピー・保存

use crate::config::AppConfig;
use crate::controllers;
use leptos::prelude::*;
use nota_fiscal_common::{Action, Session};

#[component]
pub fn ResultViewer(session: RwSignal<Session>) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let pretty_json = move || session.with(|s| s.extracted().map(|d| d.to_pretty_json()));
    let is_saving = move || session.with(|s| s.is_loading(Action::Save));
    let on_save = move |_| controllers::save(session, config.api.clone());

    view! {
        <Show when=move || pretty_json().is_some()>
            <div class="card">
                <h3>"📊 Dados Extraídos"</h3>

                <div class="button-group">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| controllers::copy_json(session)
                    >
                        "📋 Copiar JSON"
                    </button>
                    <button
                        class="btn btn-success"
                        disabled=is_saving
                        on:click=on_save.clone()
                    >
                        {move || if is_saving() {
                            view! { <div class="spinner"></div>"Salvando..." }.into_any()
                        } else {
                            view! { "💾 Salvar no Banco" }.into_any()
                        }}
                    </button>
                </div>

                <div class="json-container">
                    <h4>"📋 Dados em JSON"</h4>
                    <pre>{move || pretty_json().unwrap_or_default()}</pre>
                </div>

                <div class="info-text">
                    <p>"💡 Este JSON contém todos os dados extraídos da nota fiscal e pode ser usado para integração com outros sistemas."</p>
                </div>
            </div>
        </Show>
    }
}
