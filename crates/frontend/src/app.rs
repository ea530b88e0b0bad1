use crate::domain::a001_barang::ui::details::BarangDetails;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!(
        "backend: '{}', timeout {} ms",
        config.backend_base_url,
        config.request_timeout_ms
    );

    view! {
        <main class="app-main">
            <BarangDetails config=config />
        </main>
    }
}
