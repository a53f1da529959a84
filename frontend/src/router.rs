use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{api::ApiClient, pages::admin_settings::AdminSettingsPage, state::session::Session};

pub const SETTINGS_PATH: &str = "/admin/settings";

pub const ROUTE_PATHS: &[&str] = &["/", SETTINGS_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Reads the session once and shares a configured client with every page.
pub fn app_root() -> impl IntoView {
    let session = Session::from_local_storage();
    if !session.is_authenticated() {
        log::warn!("No session token found; API requests will be unauthenticated");
    }
    provide_context(ApiClient::new().with_session(session));
    provide_meta_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=SETTINGS_PATH/> }/>
                <Route path=SETTINGS_PATH view=AdminSettingsPage/>
            </Routes>
        </Router>
    }
}
