//! ヘッダーコンポーネント

use crate::api;
use crate::config::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    // None: 確認中
    let api_online = RwSignal::new(None::<bool>);

    spawn_local(async move {
        let online = api::health(&config.api)
            .await
            .map(|h| h.is_ok())
            .unwrap_or(false);
        api_online.set(Some(online));
    });

    let status_class = move || match api_online.get() {
        Some(true) => "api-status online",
        Some(false) => "api-status offline",
        None => "api-status",
    };
    let status_text = move || match api_online.get() {
        Some(true) => "API online",
        Some(false) => "API offline",
        None => "Verificando API...",
    };

    view! {
        <header class="header">
            <h1>"🧾 Extração de Dados de Nota Fiscal"</h1>
            <p>"Carregue um PDF da nota fiscal e extraia os dados automaticamente usando IA"</p>
            <span class=status_class>{status_text}</span>
        </header>
    }
}
