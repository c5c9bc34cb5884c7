//! Course catalog with filters and enrollment.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::banner::ErrorBanner;
use crate::components::filter_select::FilterSelect;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::Course;
use crate::state::LANGUAGE_FILTERS;
use crate::state::courses::{COURSE_CATEGORIES, CourseFilters, PROGRESS_FILTERS};
use crate::state::fetch::FetchState;

use super::current_user_id;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let filters = RwSignal::new(CourseFilters::default());
    let courses = RwSignal::new(FetchState::<Vec<Course>>::default());

    {
        let config = config.clone();
        Effect::new(move || {
            let filters = filters.get();
            let config = config.clone();
            courses.update(FetchState::begin);
            leptos::task::spawn_local(async move {
                let result = api::fetch_courses(&config, &filters.pairs()).await;
                courses.try_update(|c| c.finish(result));
            });
        });
    }

    let enroll = move |course_id: String| {
        let Some(user_id) = current_user_id() else {
            return;
        };
        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::enroll(&config, &course_id, &user_id).await {
                Ok(()) => navigate(&format!("/courses/{course_id}"), NavigateOptions::default()),
                Err(e) => {
                    courses.try_update(|c| c.fail(&e));
                }
            }
        });
    };

    let set_filter =
        |apply: fn(&mut CourseFilters, String)| Callback::new(move |v: String| filters.update(|f| apply(f, v)));

    view! {
        <div class="courses-page">
            <h1>"Courses"</h1>
            <ErrorBanner message=move || courses.with(|c| c.error.clone())/>
            <div class="filters">
                <FilterSelect
                    label="Category"
                    options=COURSE_CATEGORIES
                    value=Signal::derive(move || filters.with(|f| f.category.clone()))
                    on_change=set_filter(|f, v| f.category = v)
                />
                <FilterSelect
                    label="Language"
                    options=LANGUAGE_FILTERS
                    value=Signal::derive(move || filters.with(|f| f.language.clone()))
                    on_change=set_filter(|f, v| f.language = v)
                />
                <FilterSelect
                    label="Progress"
                    options=PROGRESS_FILTERS
                    value=Signal::derive(move || filters.with(|f| f.progress.clone()))
                    on_change=set_filter(|f, v| f.progress = v)
                />
            </div>
            <Show
                when=move || !courses.with(|c| c.loading && c.data.is_empty())
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <div class="course-grid">
                    {
                        let enroll = enroll.clone();
                        move || {
                            courses
                                .with(|c| c.data.clone())
                                .into_iter()
                                .map(|course| {
                                    let enroll = enroll.clone();
                                    let id = course.id.clone();
                                    let percent = course.progress.unwrap_or(0.0).clamp(0.0, 100.0);
                                    let label = if course.progress.is_some() { "Continue" } else { "Enroll" };
                                    view! {
                                        <div class="course-card">
                                            <h3>{course.title}</h3>
                                            <p>{course.description}</p>
                                            <span class="tag">{course.category}</span>
                                            <div class="progress">
                                                <div class="progress__bar" style=format!("width: {percent}%")></div>
                                            </div>
                                            <button class="btn btn--primary" on:click=move |_| enroll(id.clone())>
                                                {label}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }
                    }
                </div>
            </Show>
        </div>
    }
}
