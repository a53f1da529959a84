use leptos::*;
use std::future::Future;

use crate::pages::admin_settings::store::SettingsStore;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Drives `f` on a current-thread runtime inside a `LocalSet`, which is what
/// `spawn_local` and `create_action` need off the browser.
pub fn with_local_runtime_async<F, Fut>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    tokio::task::LocalSet::new().block_on(&rt, f());
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders a component that reads page state from a signal seeded with `store`.
pub fn render_with_store<F, N>(store: SettingsStore, view: F) -> String
where
    F: FnOnce(Signal<SettingsStore>) -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        let signal = create_rw_signal(store);
        view(signal.into())
    })
}
