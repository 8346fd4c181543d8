use crate::{api::User, test_support::helpers};
use leptos::*;

/// Runs `f` inside a fresh reactive runtime, disposing it afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-renders a view to an HTML string. Resource loading is suppressed,
/// so rendered components never issue network calls.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let runtime = create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    // SSR escapes text nodes (e.g. ' becomes &#x27;); decode so tests can
    // assert against the literal source text.
    html.replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Server-renders a view underneath an auth context for `user`; `None`
/// renders the signed-out experience.
pub fn render_signed_in<F, N>(user: Option<User>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        helpers::provide_auth(user);
        view()
    })
}
