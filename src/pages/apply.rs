//! Housing application form.

use leptos::prelude::*;

use crate::components::banner::{ErrorBanner, SuccessBanner};
use crate::config::ClientConfig;
use crate::util::forms::{ApplicationForm, EMPLOYMENT_STATUSES, Form, HOUSING_PROGRAMS};

/// Text input bound to one `ApplicationForm` field by schema name.
#[component]
fn ApplicationInput(
    form: RwSignal<ApplicationForm>,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=kind
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn ApplicationSelect(
    form: RwSignal<ApplicationForm>,
    field: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:change=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
pub fn ApplyPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let form = RwSignal::new(ApplicationForm::default());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
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
        busy.set(true);
        error.set(None);
        success.set(None);

        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_application(&config, &current).await {
                Ok(()) => {
                    form.set(ApplicationForm::default());
                    success.set(Some("Application submitted successfully".to_owned()));
                }
                Err(e) => error.set(Some(e.banner())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="apply-page">
            <h1>"Housing application"</h1>
            <ErrorBanner message=move || error.get()/>
            <SuccessBanner message=move || success.get()/>
            <form class="apply-form" on:submit=on_submit>
                <ApplicationInput form=form field="full_name" label="Full name"/>
                <ApplicationInput form=form field="email" label="Email" kind="email"/>
                <ApplicationInput form=form field="phone" label="Phone number" kind="tel"/>
                <ApplicationInput form=form field="id_number" label="ID number"/>
                <ApplicationInput form=form field="address" label="Address"/>
                <ApplicationSelect
                    form=form
                    field="employment_status"
                    label="Employment status"
                    options=EMPLOYMENT_STATUSES
                />
                <ApplicationInput form=form field="monthly_income" label="Monthly income (R)" kind="number"/>
                <ApplicationSelect form=form field="housing_program" label="Housing program" options=HOUSING_PROGRAMS/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit application" }}
                </button>
            </form>
        </div>
    }
}
