//! メインアプリケーションコンポーネント

use crate::components::{
    header::Header, result_viewer::ResultViewer, status_banner::StatusBanner,
    upload_area::UploadArea,
};
use crate::config::AppConfig;
use leptos::prelude::*;
use nota_fiscal_common::Session;

/// 画面全体の状態は `Session` 1つに集約する
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);
    let session = RwSignal::new(Session::new());

    view! {
        <div class="container">
            <Header />
            <main class="main-content">
                <UploadArea session=session />
                <StatusBanner session=session />
                <ResultViewer session=session />
            </main>
        </div>
    }
}
