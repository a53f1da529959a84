use leptos::*;

/// Compact on/off switch. Purely presentational: it reports the requested
/// state through `on_change` and renders whatever `checked` says.
#[component]
pub fn ToggleSwitch(
    #[prop(into)] checked: MaybeSignal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let track_class = move || {
        if checked.get() {
            "relative inline-flex h-5 w-10 shrink-0 items-center rounded-full bg-action-primary-bg transition-colors disabled:opacity-50"
        } else {
            "relative inline-flex h-5 w-10 shrink-0 items-center rounded-full bg-[#bfbfbf] transition-colors disabled:opacity-50"
        }
    };
    let thumb_class = move || {
        if checked.get() {
            "inline-block h-4 w-4 rounded-full bg-white shadow translate-x-[22px] transition-transform active:w-[15px]"
        } else {
            "inline-block h-4 w-4 rounded-full bg-white shadow translate-x-[2px] transition-transform active:w-[15px]"
        }
    };
    let on_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        on_change.call(!checked.get_untracked());
    };

    view! {
        <button
            type="button"
            role="switch"
            class=track_class
            aria-checked=move || checked.get().to_string()
            aria-label=label
            disabled=move || disabled.get()
            on:click=on_click
        >
            <span class=thumb_class></span>
        </button>
    }
}
