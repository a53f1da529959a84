use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

use super::{
    components::{messages::SettingsMessages, table::LoginSettingsTable},
    layout::AdminSettingsFrame,
    view_model::use_admin_settings_view_model,
};

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let vm = use_admin_settings_view_model();
    let on_toggle = Callback::new(move |(user_id, enabled): (String, bool)| {
        vm.toggle(user_id, enabled);
    });

    view! {
        <Title text="Login Settings"/>
        <Layout>
            <AdminSettingsFrame>
                <SettingsMessages store=vm.store />
                <LoginSettingsTable store=vm.store on_toggle=on_toggle />
            </AdminSettingsFrame>
        </Layout>
    }
}
