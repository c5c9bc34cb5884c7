//! Login page: email + password, or a social provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::auth_provider::use_session;
use crate::components::banner::ErrorBanner;
use crate::util::forms::{Form, LoginForm};
use crate::util::route_guard::return_path;

/// Providers offered as one-click sign-in.
const SOCIAL_PROVIDERS: &[(&str, &str)] = &[("google", "Continue with Google"), ("facebook", "Continue with Facebook")];

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();
    let form = RwSignal::new(LoginForm::default());
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
        let target = return_path(query.with_untracked(|q| q.get("from")).as_deref());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match manager.login(&current.credentials()).await {
                Ok(_) => navigate(&target, NavigateOptions::default()),
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
                <h1>"Sign in"</h1>
                <ErrorBanner message=move || error.get()/>
                <form class="auth-form" on:submit=on_submit>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="auth-divider">"Or"</div>
                {SOCIAL_PROVIDERS
                    .iter()
                    .map(|(provider, label)| {
                        view! {
                            <button
                                class="btn btn--social"
                                on:click=move |_| session.with_value(|s| s.social_login(provider))
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <p class="auth-footer">
                    "No account yet? " <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
