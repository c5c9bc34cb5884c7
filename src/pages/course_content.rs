//! In-course reader: module sidebar, active module and progression.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::banner::ErrorBanner;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api;
use crate::state::courses::{CourseView, Progression, certificate_path};
use crate::state::fetch::FetchState;

use super::current_user_id;

/// Record the active module, advance, and request the certificate after the last one.
///
/// Returns `Ok(None)` without touching the server when no module is active.
async fn complete_module(
    config: &ClientConfig,
    course_id: &str,
    user_id: &str,
    view: RwSignal<FetchState<Option<CourseView>>>,
) -> Result<Option<Progression>, ClientError> {
    let Some(module_id) =
        view.with_untracked(|v| v.data.as_ref().and_then(|c| c.active_module().map(|m| m.id.clone())))
    else {
        return Ok(None);
    };
    api::record_progress(config, course_id, user_id, &module_id).await?;
    let progression = view.try_update(|v| v.data.as_mut().and_then(CourseView::complete_active)).flatten();
    if progression == Some(Progression::Complete) {
        api::issue_certificate(config, course_id, user_id).await?;
    }
    Ok(progression)
}

#[component]
pub fn CourseContentPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let params = use_params_map();
    let view_state = RwSignal::new(FetchState::<Option<CourseView>>::default());
    let busy = RwSignal::new(false);
    let course_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    {
        let config = config.clone();
        Effect::new(move || {
            let id = course_id();
            let config = config.clone();
            view_state.update(FetchState::begin);
            leptos::task::spawn_local(async move {
                let result = api::fetch_course(&config, &id).await.map(|c| Some(CourseView::new(c)));
                view_state.try_update(|v| v.finish(result));
            });
        });
    }

    let on_complete = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        let Some(user_id) = current_user_id() else {
            return;
        };
        busy.set(true);
        let config = config.clone();
        let navigate = navigate.clone();
        let id = course_id();
        leptos::task::spawn_local(async move {
            match complete_module(&config, &id, &user_id, view_state).await {
                Ok(Some(Progression::Complete)) => navigate(&certificate_path(&id), NavigateOptions::default()),
                Ok(Some(Progression::Next(next))) => log::debug!("advanced to module {next}"),
                Ok(None) => log::debug!("no active module to complete"),
                Err(e) => {
                    view_state.try_update(|v| v.fail(&e));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="course-content">
            <ErrorBanner message=move || view_state.with(|v| v.error.clone())/>
            {move || {
                let (loading, data) = view_state.with(|v| (v.loading, v.data.clone()));
                match data {
                    None if loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    None => view! { <p>"Course not found"</p> }.into_any(),
                    Some(course) => {
                        let percent = course.percent();
                        let modules = course
                            .course
                            .modules
                            .iter()
                            .map(|module| {
                                let id = module.id.clone();
                                let class = match (course.is_active(&module.id), module.completed) {
                                    (true, _) => "module-link module-link--active",
                                    (false, true) => "module-link module-link--done",
                                    (false, false) => "module-link",
                                };
                                view! {
                                    <li>
                                        <button
                                            class=class
                                            on:click=move |_| {
                                                view_state.update(|v| {
                                                    if let Some(c) = v.data.as_mut() {
                                                        c.select(&id);
                                                    }
                                                })
                                            }
                                        >
                                            {module.title.clone()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>();
                        let active = course.active_module().cloned();
                        view! {
                            <aside class="course-content__sidebar">
                                <h2>{course.course.title.clone()}</h2>
                                <div class="progress">
                                    <div class="progress__bar" style=format!("width: {percent}%")></div>
                                </div>
                                <ul>{modules}</ul>
                            </aside>
                            <section class="course-content__module">
                                {match active {
                                    Some(module) => {
                                        view! {
                                            <h1>{module.title}</h1>
                                            <div class="course-content__body">{module.content}</div>
                                        }
                                            .into_any()
                                    }
                                    None => view! { <p>"This course has no modules yet"</p> }.into_any(),
                                }}
                            </section>
                        }
                            .into_any()
                    }
                }
            }}
            <button
                class="btn btn--primary"
                disabled=move || {
                    busy.get() || view_state.with(|v| v.data.as_ref().and_then(CourseView::active_module).is_none())
                }
                on:click=on_complete
            >
                {move || if busy.get() { "Saving..." } else { "Mark Complete" }}
            </button>
        </div>
    }
}
