//! Member dashboard: greeting and shortcuts into each section.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

const SECTIONS: &[(&str, &str, &str)] = &[
    ("/resources", "Resource library", "Guides, templates and videos on housing and tenancy."),
    ("/courses", "Courses", "Self-paced courses with completion certificates."),
    ("/forum", "Community forum", "Ask questions and share experience with other members."),
    ("/profile", "Your profile", "Contact details and notification preferences."),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <div class="dashboard-page">
            <h1>"Welcome back, " {name}</h1>
            <div class="dashboard-page__grid">
                {SECTIONS
                    .iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <A href=*href attr:class="dashboard-card">
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
