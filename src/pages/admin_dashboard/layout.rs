use leptos::*;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Mama Ricci's kitchen"</h1>
                <p class="mt-1 text-sm text-fg-muted">
                    "Keep the dough rolling and the franchises happy."
                </p>
            </div>
            {children()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_frame_renders_header() {
        let html = render_to_string(move || {
            view! {
                <DashboardFrame>
                    <div>{"child"}</div>
                </DashboardFrame>
            }
        });
        assert!(html.contains("Mama Ricci's kitchen"));
        assert!(html.contains("child"));
    }
}
