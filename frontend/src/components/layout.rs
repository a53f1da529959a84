use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Admin"</h1>
                    <nav class="flex space-x-4">
                        <a
                            href="/admin/settings"
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Settings"
                        </a>
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
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
            role="alert"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
            role="status"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}
