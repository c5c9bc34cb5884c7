//! Inline status banners.

use leptos::prelude::*;

/// Red banner shown while `message` holds text.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="banner banner--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="banner banner--success" role="status">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
