//! Single topic with its comment thread.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::banner::{ErrorBanner, SuccessBanner};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api;
use crate::state::fetch::FetchState;
use crate::state::forum::{Thread, report_from};
use crate::util::forms::{CommentForm, Form};

use super::current_user_id;

async fn load_thread(config: &ClientConfig, topic_id: &str) -> Result<Option<Thread>, ClientError> {
    let topic = api::fetch_topic(config, topic_id).await?;
    let comments = api::fetch_comments(config, topic_id).await?;
    Ok(Some(Thread { topic, comments }))
}

#[component]
pub fn TopicPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let thread = RwSignal::new(FetchState::<Option<Thread>>::default());
    let draft = RwSignal::new(CommentForm::default());
    let notice = RwSignal::new(None::<String>);
    let topic_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    {
        let config = config.clone();
        Effect::new(move || {
            let id = topic_id();
            let config = config.clone();
            thread.update(FetchState::begin);
            leptos::task::spawn_local(async move {
                let result = load_thread(&config, &id).await;
                thread.try_update(|t| t.finish(result));
            });
        });
    }

    let on_comment = {
        let config = config.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let form = draft.get_untracked();
            if let Some(message) = form.first_error() {
                thread.update(|t| t.error = Some(message));
                return;
            }
            let Some(user_id) = current_user_id() else {
                return;
            };
            let config = config.clone();
            let id = topic_id();
            leptos::task::spawn_local(async move {
                match api::post_comment(&config, &id, &form.request(&user_id)).await {
                    Ok(comment) => {
                        thread.try_update(|t| {
                            t.clear_error();
                            if let Some(thread) = t.data.as_mut() {
                                thread.push_comment(comment);
                            }
                        });
                        draft.set(CommentForm::default());
                    }
                    Err(e) => {
                        thread.try_update(|t| t.fail(&e));
                    }
                }
            });
        }
    };

    let report_comment = move |comment_id: String| {
        let Some(user_id) = current_user_id() else {
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match api::report_comment(&config, &comment_id, &report_from(&user_id)).await {
                Ok(()) => notice.set(Some("Comment reported successfully".to_owned())),
                Err(e) => {
                    thread.try_update(|t| t.fail(&e));
                }
            }
        });
    };

    view! {
        <div class="topic-page">
            <A href="/forum" attr:class="btn btn--link">"Back to forum"</A>
            <ErrorBanner message=move || thread.with(|t| t.error.clone())/>
            <SuccessBanner message=move || notice.get()/>
            {move || {
                let report_comment = report_comment.clone();
                let (loading, data) = thread.with(|t| (t.loading, t.data.clone()));
                match data {
                    None if loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    None => view! { <p>"Topic not found"</p> }.into_any(),
                    Some(Thread { topic, comments }) => {
                        view! {
                            <article class="topic">
                                <h1>{topic.title}</h1>
                                <p class="topic__meta">{topic.author_name.unwrap_or_default()}</p>
                                <div class="topic__content">{topic.content}</div>
                            </article>
                            <section class="comments">
                                <h2>"Comments"</h2>
                                {comments
                                    .into_iter()
                                    .map(|comment| {
                                        let report_comment = report_comment.clone();
                                        let id = comment.id.clone();
                                        view! {
                                            <div class="comment">
                                                <p class="comment__meta">{comment.author_name.unwrap_or_default()}</p>
                                                <p>{comment.content}</p>
                                                <button
                                                    class="btn btn--link"
                                                    on:click=move |_| report_comment(id.clone())
                                                >
                                                    "Report"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </section>
                        }
                            .into_any()
                    }
                }
            }}
            <form class="comment-form" on:submit=on_comment>
                <textarea
                    class="form-field__input"
                    placeholder="Add a comment"
                    prop:value=move || draft.with(|d| d.content.clone())
                    on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit">"Post Comment"</button>
            </form>
        </div>
    }
}
