use contracts::logs::LogLevel;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::logs::filter::FilterCriteria;

/// Quiet period between the last filter edit and the change notification.
const DEBOUNCE_MS: i32 = 200;

/// Editable filter fields. The whole criteria value is delivered downstream
/// after the debounce window; every edit resets the timer so only the final
/// state of a burst triggers a fetch.
#[component]
pub fn FiltersBar(
    /// Fired with the settled criteria after each quiet period
    on_change: Callback<FilterCriteria>,
) -> impl IntoView {
    let criteria = RwSignal::new(FilterCriteria::default());

    let debounce_timeout = StoredValue::new(None::<i32>);
    let first_run = StoredValue::new(true);
    Effect::new(move |_| {
        let current = criteria.get();

        // The mount run only sees the defaults; the page does its own
        // initial load.
        if first_run.get_value() {
            first_run.set_value(false);
            return;
        }

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(current.clone());
        }) as Box<dyn Fn()>);

        let window = web_sys::window().expect("no window");
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                DEBOUNCE_MS,
            )
            .expect("setTimeout failed");
        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    });

    view! {
        <div class="toolbar">
            <div class="toolbar-filters">
                <input
                    class="input"
                    placeholder="Search (full-text)…"
                    prop:value=move || criteria.get().q
                    on:input=move |ev| criteria.update(|c| c.q = event_target_value(&ev))
                />
                <select
                    class="input"
                    prop:value=move || criteria.get().level
                    on:change=move |ev| criteria.update(|c| c.level = event_target_value(&ev))
                >
                    <option value="">"Level"</option>
                    {LogLevel::ALL
                        .iter()
                        .map(|level| {
                            view! { <option value=level.label()>{level.label()}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    class="input"
                    prop:value=move || criteria.get().section
                    on:change=move |ev| criteria.update(|c| c.section = event_target_value(&ev))
                >
                    <option value="">"Section"</option>
                    <option value="core">"core"</option>
                    <option value="provider">"provider"</option>
                    <option value="plan">"plan"</option>
                    <option value="apply">"apply"</option>
                </select>
                <input
                    class="input"
                    type="date"
                    prop:value=move || criteria.get().from
                    on:change=move |ev| criteria.update(|c| c.from = event_target_value(&ev))
                />
                <input
                    class="input"
                    type="date"
                    prop:value=move || criteria.get().to
                    on:change=move |ev| criteria.update(|c| c.to = event_target_value(&ev))
                />
            </div>
            <div class="toolbar-flags">
                <label class="flag">
                    <input
                        type="checkbox"
                        prop:checked=move || criteria.get().has_req
                        on:change=move |ev| criteria.update(|c| c.has_req = event_target_checked(&ev))
                    />
                    <span>"Req body"</span>
                </label>
                <label class="flag">
                    <input
                        type="checkbox"
                        prop:checked=move || criteria.get().has_res
                        on:change=move |ev| criteria.update(|c| c.has_res = event_target_checked(&ev))
                    />
                    <span>"Res body"</span>
                </label>
                <label class="flag">
                    <input
                        type="checkbox"
                        prop:checked=move || criteria.get().unread_only
                        on:change=move |ev| {
                            criteria.update(|c| c.unread_only = event_target_checked(&ev))
                        }
                    />
                    <span>"Unread only"</span>
                </label>
                {move || {
                    let count = criteria.get().active_count();
                    (count > 0)
                        .then(|| {
                            view! {
                                <span class="badge badge--primary">{count}" filters"</span>
                            }
                        })
                }}
            </div>
        </div>
    }
}
