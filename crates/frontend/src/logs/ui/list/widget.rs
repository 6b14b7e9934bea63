use chrono::Utc;
use contracts::import::{ImportBatchSummary, ImportStatus};
use contracts::logs::{apply_read_flag, count_levels, LogEntry, LogLevel};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{create_state, ListPhase, PAGE_SIZE};
use crate::logs::api;
use crate::logs::filter::FilterCriteria;
use crate::logs::ui::filters::FiltersBar;
use crate::logs::ui::row::LogRow;
use crate::shared::components::toast::Toast;
use crate::shared::config;
use crate::usecases::import_files::api as import_api;
use crate::usecases::import_files::view::ImportButton;

#[component]
pub fn LogsPage() -> impl IntoView {
    let state = create_state();
    let criteria = RwSignal::new(FilterCriteria::default());
    let (items, set_items) = signal(Vec::<LogEntry>::new());
    let (last_import, set_last_import) = signal(None::<(ImportBatchSummary, String)>);
    let (toast, set_toast) = signal(String::new());

    // Monotonic fetch tag: a slow response whose tag is no longer current
    // lost the race and is dropped instead of overwriting a newer page.
    let request_seq = StoredValue::new(0u64);

    let show_toast = move |message: String| {
        set_toast.set(message);
        spawn_local(async move {
            TimeoutFuture::new(3_500).await;
            set_toast.set(String::new());
        });
    };

    let load = move || {
        state.update(|s| s.phase = ListPhase::Loading);
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        let current = criteria.get_untracked();
        let (limit, offset) = state.with_untracked(|s| (s.limit, s.offset));
        spawn_local(async move {
            let result = api::fetch_logs(&current, limit, offset).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    // Degrade to an empty page; the view stays usable.
                    log::warn!("log list fetch failed: {}", e);
                    set_items.set(Vec::new());
                    show_toast(format!("Failed to load logs: {}", e));
                }
            }
            state.update(|s| s.phase = ListPhase::Loaded);
        });
    };

    // Initial page load; every later load is driven by an explicit handler.
    let started = StoredValue::new(false);
    Effect::new(move |_| {
        if !started.get_value() {
            started.set_value(true);
            load();
        }
    });

    let on_filters_change = Callback::new(move |next: FilterCriteria| {
        criteria.set(next);
        load();
    });

    let go_prev = move |_| {
        if state.with_untracked(|s| s.at_first_page()) {
            return;
        }
        state.update(|s| s.offset = s.prev_offset());
        load();
    };
    let go_next = move |_| {
        state.update(|s| s.offset = s.next_offset());
        load();
    };

    let on_marked = Callback::new(move |(id, is_read): (i64, bool)| {
        // Optimistic: flip the one matching row first, then tell the server.
        set_items.update(|rows| apply_read_flag(rows, id, is_read));
        spawn_local(async move {
            if let Err(e) = api::mark_read(id, is_read).await {
                // Deliberately not rolled back; the next refetch converges.
                log::warn!("mark_read({}, {}) failed: {}", id, is_read, e);
            }
        });
    });

    let on_import_done = Callback::new(move |summary: ImportBatchSummary| {
        let at = Utc::now().format("%H:%M:%S").to_string();
        let message = if summary.failed > 0 {
            format!(
                "Imported {} • Skipped {} • Failed {}",
                summary.imported, summary.skipped, summary.failed
            )
        } else {
            format!("Imported {} • Skipped {}", summary.imported, summary.skipped)
        };
        set_last_import.set(Some((summary, at)));
        show_toast(message);

        // Newly imported rows must be visible, so the refresh restarts from
        // the first page.
        state.update(|s| s.offset = 0);
        load();

        if config::get().map(|cfg| cfg.demo_seed).unwrap_or(false) {
            let current = criteria.get_untracked();
            spawn_local(async move {
                // Inspect the refreshed first page directly instead of racing
                // the in-flight list load.
                let rows = match api::fetch_logs(&current, PAGE_SIZE, 0).await {
                    Ok(rows) => rows,
                    Err(_) => return,
                };
                if rows.iter().any(LogEntry::has_any_body) {
                    return;
                }
                match import_api::seed_demo().await {
                    Ok(seeded) => {
                        show_toast(format!(
                            "Demo added ({}) so you can show Req/Res.",
                            seeded.inserted
                        ));
                        load();
                    }
                    Err(e) => log::warn!("demo seed failed: {}", e),
                }
            });
        }
    });

    // Per-level counts are derived from the loaded page only.
    let breakdown = Memo::new(move |_| count_levels(&items.get()));

    view! {
        <div class="logs-page">
            <Toast
                message=toast
                on_dismiss=Callback::new(move |_| set_toast.set(String::new()))
            />

            <div class="toolbar-row">
                <FiltersBar on_change=on_filters_change />
                <ImportButton on_done=on_import_done />
            </div>

            <div class="footer" role="status" aria-live="polite">
                {move || match last_import.get() {
                    Some((summary, at)) => {
                        let imported_class = if summary.status == ImportStatus::Ok {
                            "badge badge-info"
                        } else {
                            "badge badge-error"
                        };
                        view! {
                            "Last import: "
                            <span class=imported_class>
                                {format!("Imported {}", summary.imported)}
                            </span>
                            " · "
                            <span class="badge badge-debug">
                                {format!("Skipped {}", summary.skipped)}
                            </span>
                            {format!(" @ {}", at)}
                        }
                            .into_any()
                    }
                    None => view! { "No imports yet" }.into_any(),
                }}
            </div>

            <div class="list-meta">
                <div>"Shown: " <b>{move || items.get().len()}</b></div>
                <div class="pager">
                    <button
                        class="button"
                        on:click=go_prev
                        disabled=move || state.get().at_first_page()
                    >
                        "Prev"
                    </button>
                    <button class="button" on:click=go_next>
                        "Next"
                    </button>
                </div>
            </div>

            {move || match state.get().phase {
                ListPhase::Idle | ListPhase::Loading => {
                    view! { <div class="loading">"Loading…"</div> }.into_any()
                }
                ListPhase::Loaded if items.get().is_empty() => {
                    view! { <div class="empty">"No logs match current filters."</div> }
                        .into_any()
                }
                ListPhase::Loaded => {
                    view! {
                        <div class="log-list">
                            {items
                                .get()
                                .into_iter()
                                .map(|log| view! { <LogRow log=log on_marked=on_marked /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="footer breakdown">
                <span>"Page breakdown:"</span>
                {LogLevel::ALL
                    .iter()
                    .map(|&level| {
                        view! {
                            <span class=level.badge_class()>
                                {move || {
                                    format!("{} {}", level.short_label(), breakdown.get().get(level))
                                }}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
