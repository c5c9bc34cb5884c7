//! Labelled `<select>` over a fixed option list.

use leptos::prelude::*;

/// `options` are `(value, label)` pairs; `on_change` receives the chosen value.
#[component]
pub fn FilterSelect(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter">
            <span class="filter__label">{label}</span>
            <select
                class="filter__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(option, text)| view! { <option value=*option>{*text}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
