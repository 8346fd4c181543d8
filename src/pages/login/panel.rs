use crate::{
    api::LoginRequest,
    components::layout::{ErrorMessage, Layout},
    pages::login::utils,
    state::auth,
    utils::browser,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(_) => {
                        set_error.set(None);
                        browser::navigate_to("/");
                    }
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            }
        });
    }

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&email, &password) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        login_action.dispatch(LoginRequest { email, password });
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-2xl font-bold text-fg">"Welcome back"</h2>
                <Show when=move || error.get().is_some()>
                    <div class="mt-4">
                        <ErrorMessage message={error.get().unwrap_or_default()} />
                    </div>
                </Show>
                <form class="mt-4 space-y-4" on:submit=handle_submit>
                    <input
                        type="email"
                        class="w-full border border-border rounded px-3 py-2 text-sm"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="w-full border border-border rounded px-3 py-2 text-sm"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="w-full bg-action-primary-bg text-action-primary-text rounded px-4 py-2 text-sm font-medium"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
