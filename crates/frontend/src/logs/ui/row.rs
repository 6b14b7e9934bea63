use contracts::logs::{level_badge_class, level_label, BodyPart, LogEntry};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::logs::api;
use crate::shared::api_utils::ApiError;
use crate::shared::download::download_text;
use crate::shared::text_utils::{extract_summary, format_ts, preview_text};

/// One log record. Body previews are fetched on the first expand, one request
/// per present part, and stay cached for the lifetime of this row's mount.
#[component]
pub fn LogRow(
    /// The record to render (read-only; the list owns it)
    log: LogEntry,
    /// Fired with `(id, is_read)` when the user toggles the read flag
    on_marked: Callback<(i64, bool)>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let (body_loading, set_body_loading) = signal(false);
    let (body_loaded, set_body_loaded) = signal(false);
    let (req_peek, set_req_peek) = signal(None::<String>);
    let (res_peek, set_res_peek) = signal(None::<String>);

    let id = log.id;
    let is_read = log.is_read;
    let has_req = log.has_req_body;
    let has_res = log.has_res_body;
    let ts = log.ts.as_deref().map(format_ts).unwrap_or_default();
    let summary = extract_summary(log.summary.as_deref());
    let level_text = level_label(log.level.as_deref());
    let level_class = level_badge_class(log.level.as_deref());
    let meta = StoredValue::new(format!(
        "ID: {} · section: {} · tf_req_id: {}",
        id,
        log.section.as_deref().unwrap_or("—"),
        log.tf_req_id.as_deref().unwrap_or("—"),
    ));

    // The loading flag guards against re-expansion while the first fetch is
    // still in flight: exactly one request per present part, ever.
    let ensure_body_loaded = move || {
        if body_loaded.get_untracked() || body_loading.get_untracked() {
            return;
        }
        set_body_loading.set(true);
        spawn_local(async move {
            if has_req {
                set_req_peek.set(load_peek(id, BodyPart::Req).await);
            }
            if has_res {
                set_res_peek.set(load_peek(id, BodyPart::Res).await);
            }
            set_body_loaded.set(true);
            set_body_loading.set(false);
        });
    };

    let toggle_expand = move |_| {
        let next = !expanded.get_untracked();
        set_expanded.set(next);
        if next {
            ensure_body_loaded();
        }
    };

    view! {
        <div class="card">
            <div class="row">
                <div class="ts">{ts}</div>
                <div class="row-badges">
                    <span class=level_class>{level_text}</span>
                    {is_read.then(|| view! { <span class="badge badge-muted">"READ"</span> })}
                </div>
                <div class="msg">
                    {summary}
                    {(has_req || has_res)
                        .then(|| {
                            view! {
                                " "
                                <button class="linklike" on:click=toggle_expand>
                                    {move || if expanded.get() { "Hide body" } else { "Expand body" }}
                                </button>
                            }
                        })}
                </div>
                <div class="actions">
                    <button class="button" on:click=move |_| on_marked.run((id, !is_read))>
                        {if is_read { "Unmark" } else { "Mark as read" }}
                    </button>
                </div>
            </div>
            <Show when=move || expanded.get()>
                <div class="json">
                    <Show
                        when=move || !body_loading.get()
                        fallback=|| view! { <div>"Loading body…"</div> }
                    >
                        <BodyLine part=BodyPart::Req peek=req_peek log_id=id />
                        <BodyLine part=BodyPart::Res peek=res_peek log_id=id />
                        <div class="row-meta">
                            <small>{meta.get_value()}</small>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Fetch one part and reduce it to a preview string. Absence, whether flagged
/// by 404 or an empty payload, is a placeholder, never a user-facing error.
async fn load_peek(id: i64, part: BodyPart) -> Option<String> {
    match api::fetch_body(id, part).await {
        Ok(payload) => payload.json.as_ref().and_then(preview_text),
        Err(ApiError::NotFound) => None,
        Err(e) => {
            log::warn!("body fetch failed for log {}: {}", id, e);
            None
        }
    }
}

#[component]
fn BodyLine(
    part: BodyPart,
    #[prop(into)] peek: Signal<Option<String>>,
    log_id: i64,
) -> impl IntoView {
    let label = part.as_str();

    let download = move |_| {
        if let Some(text) = peek.get_untracked() {
            if let Err(e) = download_text(&text, &format!("log-{}-{}.txt", log_id, label)) {
                log::warn!("download failed: {}", e);
            }
        }
    };

    view! {
        <div class="body-line">
            <div>
                <b>{label}</b>
                " "
                {move || match peek.get() {
                    Some(text) => view! { <kbd class="kbd">{text}</kbd> }.into_any(),
                    None => view! { <i>"—"</i> }.into_any(),
                }}
            </div>
            {move || {
                peek.get()
                    .map(|_| {
                        view! {
                            <button
                                class="linklike"
                                on:click=download
                                title=format!("Download {} preview", label)
                            >
                                {format!("Download {}", label)}
                            </button>
                        }
                    })
            }}
        </div>
    }
}
