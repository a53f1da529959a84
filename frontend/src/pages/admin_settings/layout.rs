use leptos::*;

#[component]
pub fn AdminSettingsFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{"Login Settings"}</h1>
                <p class="mt-1 text-sm text-fg-muted">
                    {"Choose which users may sign in with Google."}
                </p>
            </div>
            <div class="bg-surface-elevated shadow rounded-lg p-4">{children()}</div>
        </div>
    }
}
