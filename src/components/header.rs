//! Top navigation bar with search and session controls.

use leptos::prelude::*;
use leptos_router::components::A;

use super::auth_provider::use_session;
use super::search_bar::SearchBar;
use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();
    let menu_open = RwSignal::new(false);
    let signed_in = move || auth.with(|a| a.user.is_some());

    let on_logout = move |_| session.with_value(|s| s.logout());

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                "Gauteng Housing Empowerment Initiative"
            </A>
            <Show when=signed_in>
                <SearchBar/>
            </Show>
            <button
                class="site-header__menu-toggle"
                aria-label="Toggle navigation"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "Close" } else { "Menu" }}
            </button>
            <nav class="site-header__nav" class:site-header__nav--open=move || menu_open.get()>
                <A href="/">"Home"</A>
                <A href="/apply">"Apply Now"</A>
                <A href="/contact">"Contact"</A>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <A href="/login">"Login"</A>
                            <A href="/register" attr:class="site-header__cta">"Sign Up"</A>
                        }
                    }
                >
                    <A href="/dashboard">"Dashboard"</A>
                    <A href="/resources">"Resources"</A>
                    <A href="/forum">"Forum"</A>
                    <A href="/courses">"Courses"</A>
                    <A href="/profile">"Profile"</A>
                    <Show when=move || auth.with(AuthState::is_admin)>
                        <A href="/admin">"Admin"</A>
                    </Show>
                    <button class="site-header__logout" on:click=on_logout>"Logout"</button>
                </Show>
            </nav>
        </header>
    }
}
