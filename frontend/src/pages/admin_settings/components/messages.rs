use crate::{
    components::layout::{ErrorMessage, SuccessMessage},
    pages::admin_settings::store::SettingsStore,
};
use leptos::*;

/// Error and success notices above the table. Both may be visible at once.
#[component]
pub fn SettingsMessages(#[prop(into)] store: Signal<SettingsStore>) -> impl IntoView {
    let error = Signal::derive(move || store.with(|state| state.error.clone()));
    let success = Signal::derive(move || store.with(|state| state.success.clone()));

    view! {
        {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
        {move || success.get().map(|message| view! { <SuccessMessage message=message /> })}
    }
}
