//! Member profile view and editor.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::UserProfile;
use crate::state::LANGUAGE_OPTIONS;
use crate::state::profile::{ProfileEditor, StatusKind};

use super::current_user_id;

#[component]
fn ProfileInput(
    editor: RwSignal<ProfileEditor>,
    label: &'static str,
    get: fn(&UserProfile) -> String,
    set: fn(&mut UserProfile, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type="text"
                prop:value=move || editor.with(|e| get(&e.draft))
                disabled=move || editor.with(|e| !e.editing)
                on:input=move |ev| editor.update(|e| set(&mut e.draft, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let editor = RwSignal::new(ProfileEditor::default());
    let user_id = current_user_id().unwrap_or_default();

    {
        let config = config.clone();
        let user_id = user_id.clone();
        Effect::new(move || {
            let config = config.clone();
            let user_id = user_id.clone();
            leptos::task::spawn_local(async move {
                let result = api::fetch_profile(&config, &user_id).await;
                editor.try_update(|e| e.loaded(result));
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(profile)) = editor.try_update(ProfileEditor::prepare_save) else {
            return;
        };
        let config = config.clone();
        let user_id = user_id.clone();
        leptos::task::spawn_local(async move {
            let result = api::update_profile(&config, &user_id, &profile).await;
            editor.try_update(|e| e.saved(result));
        });
    };

    view! {
        <div class="profile-page">
            <div class="profile-page__header">
                <h1>"Profile"</h1>
                <button class="btn btn--primary" on:click=move |_| editor.update(ProfileEditor::toggle_editing)>
                    {move || if editor.with(|e| e.editing) { "Cancel" } else { "Edit Profile" }}
                </button>
            </div>
            {move || {
                editor
                    .with(|e| e.status.clone())
                    .map(|status| {
                        let class = match status.kind {
                            StatusKind::Success => "banner banner--success",
                            StatusKind::Error => "banner banner--error",
                        };
                        view! { <div class=class role="alert">{status.message}</div> }
                    })
            }}
            <form class="profile-form" on:submit=on_submit>
                <ProfileInput editor=editor label="Name" get=|p| p.name.clone() set=|p, v| p.name = v/>
                <ProfileInput editor=editor label="Email" get=|p| p.email.clone() set=|p, v| p.email = v/>
                <ProfileInput editor=editor label="Phone" get=|p| p.phone.clone() set=|p, v| p.phone = v/>
                <ProfileInput editor=editor label="Address" get=|p| p.address.clone() set=|p, v| p.address = v/>
                <p class="profile-form__type">
                    "Account type: " {move || editor.with(|e| e.draft.user_type.clone())}
                </p>
                <fieldset class="profile-form__preferences" disabled=move || editor.with(|e| !e.editing)>
                    <legend>"Preferences"</legend>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || editor.with(|e| e.draft.preferences.notifications)
                            on:change=move |ev| {
                                editor.update(|e| e.draft.preferences.notifications = event_target_checked(&ev));
                            }
                        />
                        "Email notifications"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || editor.with(|e| e.draft.preferences.newsletter)
                            on:change=move |ev| {
                                editor.update(|e| e.draft.preferences.newsletter = event_target_checked(&ev));
                            }
                        />
                        "Newsletter"
                    </label>
                    <select
                        prop:value=move || editor.with(|e| e.draft.preferences.language.clone())
                        on:change=move |ev| editor.update(|e| e.draft.preferences.language = event_target_value(&ev))
                    >
                        {LANGUAGE_OPTIONS
                            .iter()
                            .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </fieldset>
                <Show when=move || editor.with(|e| e.editing)>
                    <button class="btn btn--primary" type="submit">"Save changes"</button>
                </Show>
            </form>
        </div>
    }
}
