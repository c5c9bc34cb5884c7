//! New forum topic form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::banner::ErrorBanner;
use crate::config::ClientConfig;
use crate::net::api;
use crate::state::forum::{FORUM_CATEGORIES, topic_path};
use crate::util::forms::{Form, TopicForm};

use super::current_user_id;

#[component]
pub fn NewTopicPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let form = RwSignal::new(TopicForm::default());
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
        let Some(author_id) = current_user_id() else {
            return;
        };
        busy.set(true);
        error.set(None);

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::create_topic(&config, &current.request(&author_id)).await {
                Ok(created) => navigate(&topic_path(&created.id), NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::warn!("{e}");
                    error.set(Some(e.banner()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="topic-form-page">
            <h1>"Start a new topic"</h1>
            <ErrorBanner message=move || error.get()/>
            <form class="topic-form" on:submit=on_submit>
                <label class="form-field">
                    <span class="form-field__label">"Title"</span>
                    <input
                        class="form-field__input"
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Category"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || form.with(|f| f.category.clone())
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        {FORUM_CATEGORIES
                            .iter()
                            .filter(|(value, _)| !value.is_empty())
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Content"</span>
                    <textarea
                        class="form-field__input"
                        rows="8"
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Tags (comma separated)"</span>
                    <input
                        class="form-field__input"
                        type="text"
                        prop:value=move || form.with(|f| f.tags.clone())
                        on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Posting..." } else { "Create Topic" }}
                </button>
            </form>
        </div>
    }
}
