//! Header search across resources, forum topics, and courses.
//!
//! DESIGN
//! ======
//! Keystrokes update `SearchState` immediately; the request waits for the
//! input to settle through a [`Debouncer`]. Responses are applied through the
//! state's sequence check, so only the newest query's results ever show.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{ClientConfig, SEARCH_DEBOUNCE};
use crate::net::types::SearchItem;
use crate::state::search::{SearchCategory, SearchState};
use crate::util::debounce::Debouncer;
use crate::util::timer::default_scheduler;

/// Issue the request for whatever the query holds once the debounce fires.
fn run_search(state: RwSignal<SearchState>, config: ClientConfig) {
    let Some(ticket) = state.try_update(SearchState::begin_request).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = crate::net::api::search(&config, &ticket.query).await;
        if let Err(e) = &result {
            leptos::logging::warn!("search failed: {e}");
        }
        state.try_update(|s| s.apply_response(ticket.seq, result));
    });
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = StoredValue::new_local(use_navigate());
    let state = RwSignal::new(SearchState::default());
    let debouncer = StoredValue::new_local(Debouncer::new(default_scheduler(), SEARCH_DEBOUNCE));
    let root = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            let Some(container) = root.get_untracked() else {
                return;
            };
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !container.contains(target.as_ref()) {
                state.update(SearchState::close);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_query(value));
        let config = config.clone();
        debouncer.update_value(|d| d.call(move || run_search(state, config)));
    };

    let on_select = move |category: SearchCategory, id: String| {
        debouncer.update_value(Debouncer::cancel);
        if let Some(path) = state.try_update(|s| s.select(category, &id)) {
            navigate.with_value(|nav| nav(&path, NavigateOptions::default()));
        }
    };

    view! {
        <div class="search-bar" node_ref=root>
            <input
                class="search-bar__input"
                type="text"
                placeholder="Search resources, forum topics, or courses..."
                prop:value=move || state.with(|s| s.query.clone())
                on:input=on_input
                on:focus=move |_| state.update(SearchState::focus)
            />
            <Show when=move || state.with(|s| s.loading)>
                <span class="search-bar__spinner" aria-hidden="true"></span>
            </Show>
            <Show when=move || state.with(|s| s.open)>
                <div class="search-bar__panel">
                    {move || {
                        let (groups, error) = state.with(|s| {
                            let groups: Vec<(SearchCategory, Vec<SearchItem>)> =
                                s.groups().into_iter().map(|(c, items)| (c, items.to_vec())).collect();
                            (groups, s.error.clone())
                        });
                        if let Some(message) = error {
                            return view! { <div class="search-bar__empty">{message}</div> }.into_any();
                        }
                        if groups.is_empty() {
                            return view! { <div class="search-bar__empty">"No results found"</div> }.into_any();
                        }
                        groups
                            .into_iter()
                            .map(|(category, items)| {
                                view! {
                                    <div class="search-bar__group">
                                        <h3 class="search-bar__heading">{category.label()}</h3>
                                        {items
                                            .into_iter()
                                            .map(|item| {
                                                                let id = item.id.clone();
                                                view! {
                                                    <button
                                                        class="search-bar__result"
                                                        on:click=move |_| on_select(category, id.clone())
                                                    >
                                                        <div class="search-bar__title">{item.title}</div>
                                                        {item
                                                            .description
                                                            .map(|d| view! { <div class="search-bar__description">{d}</div> })}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
