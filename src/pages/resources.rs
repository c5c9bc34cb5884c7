//! Resource library with filters, inline preview and download links.
//!
//! `/resources/:id` opens the same page with that resource's preview showing,
//! which is where search results for the library land.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::banner::ErrorBanner;
use crate::components::filter_select::FilterSelect;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::Resource;
use crate::state::LANGUAGE_FILTERS;
use crate::state::fetch::FetchState;
use crate::state::resources::{
    PreviewPanel, RESOURCE_CATEGORIES, RESOURCE_TYPES, ResourceFilters, download_name, download_url,
};

fn open_preview(
    config: ClientConfig,
    resource_id: String,
    panel: RwSignal<PreviewPanel>,
    list: RwSignal<FetchState<Vec<Resource>>>,
) {
    leptos::task::spawn_local(async move {
        match api::fetch_resource_preview(&config, &resource_id).await {
            Ok(preview) => {
                panel.try_update(|p| p.show(preview));
            }
            Err(e) => {
                list.try_update(|l| l.fail(&e));
            }
        }
    });
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let filters = RwSignal::new(ResourceFilters::default());
    let list = RwSignal::new(FetchState::<Vec<Resource>>::default());
    let panel = RwSignal::new(PreviewPanel::default());

    {
        let config = config.clone();
        Effect::new(move || {
            let filters = filters.get();
            let config = config.clone();
            list.update(FetchState::begin);
            leptos::task::spawn_local(async move {
                let result = api::fetch_resources(&config, &filters.pairs()).await;
                list.try_update(|l| l.finish(result));
            });
        });
    }

    {
        let config = config.clone();
        Effect::new(move || {
            if let Some(id) = params.with(|p| p.get("id")) {
                open_preview(config.clone(), id, panel, list);
            }
        });
    }

    let set_filter =
        |apply: fn(&mut ResourceFilters, String)| Callback::new(move |v: String| filters.update(|f| apply(f, v)));

    view! {
        <div class="resources-page">
            <h1>"Resource library"</h1>
            <ErrorBanner message=move || list.with(|l| l.error.clone())/>
            <div class="filters">
                <FilterSelect
                    label="Type"
                    options=RESOURCE_TYPES
                    value=Signal::derive(move || filters.with(|f| f.kind.clone()))
                    on_change=set_filter(|f, v| f.kind = v)
                />
                <FilterSelect
                    label="Category"
                    options=RESOURCE_CATEGORIES
                    value=Signal::derive(move || filters.with(|f| f.category.clone()))
                    on_change=set_filter(|f, v| f.category = v)
                />
                <FilterSelect
                    label="Language"
                    options=LANGUAGE_FILTERS
                    value=Signal::derive(move || filters.with(|f| f.language.clone()))
                    on_change=set_filter(|f, v| f.language = v)
                />
            </div>
            <Show
                when=move || !list.with(|l| l.loading && l.data.is_empty())
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <ul class="resource-list">
                    {
                        let config = config.clone();
                        move || {
                            let config = config.clone();
                            list.with(|l| l.data.clone())
                                .into_iter()
                                .map(|resource| {
                                    let href = download_url(&config, &resource.id);
                                    let file_name = download_name(&resource.id);
                                    let preview_config = config.clone();
                                    let id = resource.id.clone();
                                    view! {
                                        <li class="resource-item">
                                            <div class="resource-item__body">
                                                <h3>{resource.title}</h3>
                                                <p>{resource.description}</p>
                                                <span class="tag">{resource.kind}</span>
                                                <span class="tag">{resource.category}</span>
                                            </div>
                                            <div class="resource-item__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| open_preview(preview_config.clone(), id.clone(), panel, list)
                                                >
                                                    "Preview"
                                                </button>
                                                <a class="btn btn--primary" href=href download=file_name>
                                                    "Download"
                                                </a>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }
                    }
                </ul>
            </Show>
            {move || {
                panel
                    .with(|p| p.current.clone())
                    .map(|preview| {
                        view! {
                            <div class="modal" role="dialog">
                                <div class="modal__content">
                                    <h2>{preview.title}</h2>
                                    {preview.content.map(|c| view! { <div class="modal__text">{c}</div> })}
                                    {preview
                                        .url
                                        .map(|u| view! { <iframe class="modal__frame" src=u title="Preview"></iframe> })}
                                    <button class="btn" on:click=move |_| panel.update(PreviewPanel::close)>
                                        "Close"
                                    </button>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
