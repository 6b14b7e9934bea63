use leptos::prelude::*;

/// Transient notification shown bottom-right; click to dismiss early.
#[component]
pub fn Toast(
    /// Current message; an empty string hides the toast
    #[prop(into)]
    message: Signal<String>,
    /// Invoked when the user dismisses the toast by clicking it
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="toast" role="status" aria-live="polite" on:click=move |_| on_dismiss.run(())>
                {move || message.get()}
            </div>
        </Show>
    }
}
