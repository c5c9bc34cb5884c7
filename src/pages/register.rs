//! Account registration. Success sends the user to sign in; it does not
//! start a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_provider::use_session;
use crate::components::banner::ErrorBanner;
use crate::util::forms::{Form, REGISTER_ROLES, RegisterForm};
use crate::util::route_guard::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Some(message) = current.first_error() {
            error.set(Some(message));
            return;
        }
        busy.set(true);
        error.set(None);

        let manager = session.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match manager.register(&current.request()).await {
                Ok(_) => navigate(LOGIN_PATH, NavigateOptions::default()),
                Err(e) => {
                    error.set(Some(e.banner()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <ErrorBanner message=move || error.get()/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email address"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || form.with(|f| f.role.clone())
                        on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                    >
                        {REGISTER_ROLES
                            .iter()
                            .map(|role| view! { <option value=*role>{*role}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="auth-footer">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
