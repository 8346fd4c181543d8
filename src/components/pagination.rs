use leptos::*;

/// Previous/next controls shared by the dashboard tables. Callers derive
/// the disabled flags from their list state.
#[component]
pub fn PaginationControls(
    #[prop(into)] prev_disabled: Signal<bool>,
    #[prop(into)] next_disabled: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <button
                type="button"
                class="px-3 py-1 rounded border border-border text-sm text-fg"
                disabled=move || prev_disabled.get()
                on:click=move |_| on_prev.call(())
            >
                "«"
            </button>
            <button
                type="button"
                class="px-3 py-1 rounded border border-border text-sm text-fg"
                disabled=move || next_disabled.get()
                on:click=move |_| on_next.call(())
            >
                "»"
            </button>
        </div>
    }
}
