use super::{
    repository::AdminSettingsRepository,
    store::{SettingsStore, SuccessTicket, SUCCESS_CLEAR_DELAY_MS},
};
use crate::api::ApiClient;
use gloo_timers::callback::Timeout;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminSettingsViewModel {
    pub store: RwSignal<SettingsStore>,
    pub toggle_action: Action<(String, bool), ()>,
}

impl AdminSettingsViewModel {
    pub fn toggle(&self, user_id: String, enabled: bool) {
        self.toggle_action.dispatch((user_id, enabled));
    }
}

pub fn use_admin_settings_view_model() -> AdminSettingsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminSettingsRepository::new_with_client(Rc::new(api));

    let store = create_rw_signal(SettingsStore::default());
    let success_timer = store_value(None::<Timeout>);

    on_cleanup(move || {
        // Dropping the pending Timeout cancels it.
        let _ = success_timer.try_update_value(|slot| slot.take());
    });

    // The two loads are independent; whichever lands first renders first.
    // Writes go through try_update so a late response after unmount is dropped.
    let repo_for_users = repository.clone();
    spawn_local(async move {
        let result = repo_for_users.fetch_users().await;
        match &result {
            Ok(users) => log::debug!("Loaded {} active users", users.len()),
            Err(err) => log::error!("Error fetching users: {}", err),
        }
        let _ = store.try_update(|state| state.apply_users(result));
    });

    let repo_for_flags = repository.clone();
    spawn_local(async move {
        let result = repo_for_flags.fetch_login_flags().await;
        if let Err(err) = &result {
            log::error!("Error fetching Google login statuses: {}", err);
        }
        let _ = store.try_update(|state| state.apply_login_flags(result));
    });

    let repo_for_toggle = repository.clone();
    let toggle_action = create_action(move |(user_id, enabled): &(String, bool)| {
        let repo = repo_for_toggle.clone();
        let user_id = user_id.clone();
        let enabled = *enabled;
        async move {
            let result = repo.update_login_flag(&user_id, enabled).await;
            if let Err(err) = &result {
                log::error!("Error updating Google login setting for {}: {}", user_id, err);
            }
            let ticket = store
                .try_update(|state| state.apply_update(&user_id, enabled, result))
                .flatten();
            if let Some(ticket) = ticket {
                schedule_success_clear(store, success_timer, ticket, SUCCESS_CLEAR_DELAY_MS);
            }
        }
    });

    AdminSettingsViewModel {
        store,
        toggle_action,
    }
}

/// Arms the auto-clear for `ticket`, replacing (and so cancelling) any timer
/// still pending from an earlier success.
fn schedule_success_clear(
    store: RwSignal<SettingsStore>,
    timer: StoredValue<Option<Timeout>>,
    ticket: SuccessTicket,
    delay_ms: u32,
) {
    let timeout = Timeout::new(delay_ms, move || {
        let _ = store.try_update(|state| state.clear_success(ticket));
    });
    let _ = timer.try_update_value(move |slot| *slot = Some(timeout));
}
