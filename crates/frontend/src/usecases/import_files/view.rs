use contracts::import::{summarize, ImportBatchSummary, ImportOutcome};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::api;

/// Files accepted by the picker; mirrors what the backend parser ingests.
const ACCEPT: &str = ".json,.ndjson,.log,.txt,application/json";

/// Upper bound per batch. The backend takes files one at a time anyway; the
/// cap only keeps a single batch's progress line readable.
pub const MAX_FILES_PER_BATCH: usize = 20;

/// Progress of the running batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportProgress {
    pub done: usize,
    pub total: usize,
}

/// File picker plus sequential upload orchestrator.
///
/// Uploads never run concurrently: the next file starts only after the
/// previous outcome is known, which keeps `done/total` attribution exact.
/// A failed file records a failure marker and the batch continues.
#[component]
pub fn ImportButton(
    /// Fired once per finished batch with the aggregated totals
    on_done: Callback<ImportBatchSummary>,
) -> impl IntoView {
    let (importing, set_importing) = signal(false);
    let (progress, set_progress) = signal(None::<ImportProgress>);

    let input_ref = NodeRef::<Input>::new();

    let on_pick = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(list) = input.files() else {
            return;
        };
        let mut files = Vec::new();
        for index in 0..list.length().min(MAX_FILES_PER_BATCH as u32) {
            if let Some(file) = list.get(index) {
                files.push(file);
            }
        }
        // Reset so re-selecting the same file fires the change event again.
        input.set_value("");
        if files.is_empty() {
            return;
        }

        set_importing.set(true);
        set_progress.set(Some(ImportProgress {
            done: 0,
            total: files.len(),
        }));
        spawn_local(async move {
            let total = files.len();
            let mut outcomes = Vec::with_capacity(total);
            for (index, file) in files.iter().enumerate() {
                let outcome = match api::upload_file(file).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        log::warn!("import of {} failed: {}", file.name(), e);
                        ImportOutcome::Failure
                    }
                };
                outcomes.push(outcome);
                set_progress.set(Some(ImportProgress {
                    done: index + 1,
                    total,
                }));
            }
            set_importing.set(false);
            set_progress.set(None);
            on_done.run(summarize(&outcomes));
        });
    };

    let open_picker = move |_| {
        if importing.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let label = move || match (importing.get(), progress.get()) {
        (true, Some(p)) => format!("Importing… {}/{}", p.done, p.total),
        (true, None) => "Importing…".to_string(),
        _ => "Import files".to_string(),
    };

    view! {
        <button class="button primary" on:click=open_picker disabled=move || importing.get()>
            {label}
        </button>
        <input
            node_ref=input_ref
            type="file"
            style="display: none"
            multiple=true
            accept=ACCEPT
            on:change=on_pick
        />
    }
}
