use crate::{
    api::Role,
    state::auth::{self, use_auth},
    utils::browser,
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let is_admin = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.has_role(Role::Admin))
            .unwrap_or(false)
    };
    let is_authenticated = move || auth.get().is_authenticated;

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    {
        create_effect(move |_| {
            if logout_action.value().get().is_some() {
                browser::navigate_to("/");
            }
        });
    }
    let on_logout = {
        move |_| {
            if logout_pending.get_untracked() {
                return;
            }
            logout_action.dispatch(());
        }
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "JWT Pizza"
                        </h1>
                    </div>
                    <nav class="flex space-x-4 items-center">
                        <a href="/" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Home"
                        </a>
                        <Show when=is_admin>
                            <a href="/admin-dashboard" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                "Admin"
                            </a>
                        </Show>
                        <Show
                            when=is_authenticated
                            fallback=move || view! {
                                <a href="/login" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    "Login"
                                </a>
                            }
                        >
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                disabled=move || logout_pending.get()
                            >
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Error banner with a retry button, used by the dashboard tables.
#[component]
pub fn RetryableError(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex items-center justify-between gap-3">
                <p class="text-sm">{move || message.get()}</p>
                <button
                    type="button"
                    class="px-3 py-1 rounded border border-status-error-border text-sm font-medium"
                    on:click=move |_| on_retry.call(())
                >
                    "Retry"
                </button>
            </div>
        </div>
    }
}
