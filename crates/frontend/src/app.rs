use leptos::prelude::*;

use crate::logs::ui::list::widget::LogsPage;
use crate::shared::config;

#[component]
pub fn App() -> impl IntoView {
    // A missing base URL is fatal: shown once, blocks every request.
    match config::get() {
        Err(e) => view! {
            <div class="fatal-config">
                <h1>"Log viewer is not configured"</h1>
                <p>{e.to_string()}</p>
                <p>"Set LOGVIEW_API_BASE on the embedding page and reload."</p>
            </div>
        }
        .into_any(),
        Ok(_) => view! {
            <header class="appbar">
                <div class="appbar-inner">
                    <div class="brand"><b>"Terraform"</b>" LogViewer"</div>
                </div>
            </header>
            <main class="container">
                <h1 class="h1">"Terraform LogViewer — Logs"</h1>
                <LogsPage />
            </main>
        }
        .into_any(),
    }
}
