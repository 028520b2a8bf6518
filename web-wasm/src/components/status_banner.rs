//! ステータスバナー

use leptos::prelude::*;
use nota_fiscal_common::Session;

#[component]
pub fn StatusBanner(session: RwSignal<Session>) -> impl IntoView {
    let banner = move || session.with(|s| s.banner());

    view! {
        {move || banner().map(|b| {
            let class = b.css_class();
            let text = b.to_string();
            view! { <div class=class>{text}</div> }
        })}
    }
}
