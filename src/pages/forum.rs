//! Forum topic listing with filters and moderation reports.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::banner::{ErrorBanner, SuccessBanner};
use crate::components::filter_select::FilterSelect;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::Topic;
use crate::state::fetch::FetchState;
use crate::state::forum::{FORUM_CATEGORIES, NEW_TOPIC_PATH, SORT_OPTIONS, TopicFilters, report_from, topic_path};

use super::current_user_id;

#[component]
pub fn ForumPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let filters = RwSignal::new(TopicFilters::default());
    let topics = RwSignal::new(FetchState::<Vec<Topic>>::default());
    let notice = RwSignal::new(None::<String>);

    {
        let config = config.clone();
        Effect::new(move || {
            let filters = filters.get();
            let config = config.clone();
            topics.update(FetchState::begin);
            leptos::task::spawn_local(async move {
                let result = api::fetch_topics(&config, &filters.pairs()).await;
                topics.try_update(|t| t.finish(result));
            });
        });
    }

    let report = move |topic_id: String| {
        let Some(user_id) = current_user_id() else {
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match api::report_topic(&config, &topic_id, &report_from(&user_id)).await {
                Ok(()) => {
                    notice.set(Some("Topic reported successfully".to_owned()));
                }
                Err(e) => {
                    topics.try_update(|t| t.fail(&e));
                }
            }
        });
    };

    view! {
        <div class="forum-page">
            <div class="forum-page__header">
                <h1>"Community forum"</h1>
                <A href=NEW_TOPIC_PATH attr:class="btn btn--primary">"New Topic"</A>
            </div>
            <ErrorBanner message=move || topics.with(|t| t.error.clone())/>
            <SuccessBanner message=move || notice.get()/>
            <div class="filters">
                <FilterSelect
                    label="Category"
                    options=FORUM_CATEGORIES
                    value=Signal::derive(move || filters.with(|f| f.category.clone()))
                    on_change=Callback::new(move |v: String| filters.update(|f| f.category = v))
                />
                <FilterSelect
                    label="Sort by"
                    options=SORT_OPTIONS
                    value=Signal::derive(move || filters.with(|f| f.sort_by.clone()))
                    on_change=Callback::new(move |v: String| filters.update(|f| f.sort_by = v))
                />
            </div>
            <Show
                when=move || !topics.with(|t| t.loading && t.data.is_empty())
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="topic-list">
                    {
                        let report = report.clone();
                        move || {
                            topics
                                .with(|t| t.data.clone())
                                .into_iter()
                                .map(|topic| {
                                    let report = report.clone();
                                    let id = topic.id.clone();
                                    view! {
                                        <li class="topic-item">
                                            <A href=topic_path(&topic.id) attr:class="topic-item__title">
                                                {topic.title}
                                            </A>
                                            <p class="topic-item__meta">
                                                {topic.author_name.unwrap_or_default()} " · " {topic.category}
                                            </p>
                                            <div class="topic-item__tags">
                                                {topic
                                                    .tags
                                                    .into_iter()
                                                    .map(|tag| view! { <span class="tag">{tag}</span> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                            <button class="btn btn--link" on:click=move |_| report(id.clone())>
                                                "Report"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }
                    }
                </ul>
            </Show>
        </div>
    }
}
