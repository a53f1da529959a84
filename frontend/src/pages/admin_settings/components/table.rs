use crate::{
    api::User,
    components::switch::ToggleSwitch,
    pages::admin_settings::store::{SettingsStore, TableState},
};
use leptos::*;

pub const HEAD_CELLS: [&str; 3] = ["Email Address", "Role", "Google Login"];
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No users found.";
pub const MISSING_EMAIL: &str = "N/A";

pub fn status_label(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

#[component]
fn PlaceholderRow(text: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td
                colspan=HEAD_CELLS.len().to_string()
                class="px-6 py-4 text-sm text-fg-muted"
            >
                {text}
            </td>
        </tr>
    }
}

#[component]
fn LoginSettingsRow(
    user: User,
    store: Signal<SettingsStore>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let key = user.settings_key().to_string();
    let email = user
        .user_details
        .email
        .clone()
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| MISSING_EMAIL.to_string());
    let checked = Signal::derive({
        let key = key.clone();
        move || store.with(|state| state.status(&key))
    });
    let on_change = Callback::new(move |enabled: bool| on_toggle.call((key.clone(), enabled)));
    let switch_label = format!("Google login for {}", email);

    view! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{email}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">{user.role.clone()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                <label class="inline-flex items-center gap-3">
                    <ToggleSwitch checked=checked on_change=on_change label=switch_label />
                    <span>{move || status_label(checked.get())}</span>
                </label>
            </td>
        </tr>
    }
}

#[component]
pub fn LoginSettingsTable(
    #[prop(into)] store: Signal<SettingsStore>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let table_state = Signal::derive(move || store.with(SettingsStore::table_state));
    let users = Signal::derive(move || store.with(|state| state.users.clone()));

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead>
                    <tr>
                        {HEAD_CELLS
                            .iter()
                            .map(|label| {
                                view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                        {*label}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    {move || match table_state.get() {
                        TableState::Loading => view! { <PlaceholderRow text=LOADING_TEXT /> }.into_view(),
                        TableState::Empty => view! { <PlaceholderRow text=EMPTY_TEXT /> }.into_view(),
                        TableState::Rows => {
                            view! {
                                <For
                                    each=move || users.get()
                                    key=|user| user.id.clone()
                                    children=move |user: User| {
                                        view! { <LoginSettingsRow user=user store=store on_toggle=on_toggle /> }
                                    }
                                />
                            }
                            .into_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
