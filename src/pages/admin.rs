//! Admin overview: catalogue sizes across courses, resources and forum.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api;

fn count<T>(result: Option<Result<Vec<T>, ClientError>>) -> String {
    match result {
        None => "...".to_owned(),
        Some(Ok(items)) => items.len().to_string(),
        Some(Err(e)) => {
            leptos::logging::warn!("{e}");
            "n/a".to_owned()
        }
    }
}

#[component]
fn StatCard(title: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let courses = {
        let config = config.clone();
        LocalResource::new(move || {
            let config = config.clone();
            async move { api::fetch_courses(&config, &[]).await }
        })
    };
    let resources = {
        let config = config.clone();
        LocalResource::new(move || {
            let config = config.clone();
            async move { api::fetch_resources(&config, &[]).await }
        })
    };
    let topics = LocalResource::new(move || {
        let config = config.clone();
        async move { api::fetch_topics(&config, &[]).await }
    });

    view! {
        <div class="admin-page">
            <h1>"Admin dashboard"</h1>
            <div class="admin-page__stats">
                <StatCard title="Total Courses" value=Signal::derive(move || count(courses.get()))/>
                <StatCard title="Total Resources" value=Signal::derive(move || count(resources.get()))/>
                <StatCard title="Forum Topics" value=Signal::derive(move || count(topics.get()))/>
            </div>
        </div>
    }
}
