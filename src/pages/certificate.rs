//! Printable completion certificate.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::banner::ErrorBanner;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api;
use crate::net::types::Certificate;
use crate::state::fetch::FetchState;

use super::current_user_id;

fn print_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.print().is_err() {
                leptos::logging::warn!("print dialog unavailable");
            }
        }
    }
}

#[component]
pub fn CertificatePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let certificate = RwSignal::new(FetchState::<Option<Certificate>>::default());

    Effect::new(move || {
        let course_id = params.with(|p| p.get("id")).unwrap_or_default();
        let config = config.clone();
        certificate.update(FetchState::begin);
        leptos::task::spawn_local(async move {
            let result = match current_user_id() {
                Some(user_id) => api::fetch_certificate(&config, &course_id, &user_id).await.map(Some),
                None => Err(ClientError::fetch("load certificate", "no signed-in user")),
            };
            certificate.try_update(|c| c.finish(result));
        });
    });

    view! {
        <div class="certificate-page">
            <ErrorBanner message=move || certificate.with(|c| c.error.clone())/>
            {move || {
                let (loading, data) = certificate.with(|c| (c.loading, c.data.clone()));
                match data {
                    None if loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                    None => view! { <p>"Certificate not found"</p> }.into_any(),
                    Some(cert) => {
                        view! {
                            <div class="certificate">
                                <h1>"Certificate of Completion"</h1>
                                <p>"This certifies that"</p>
                                <h2 class="certificate__name">{cert.user_name}</h2>
                                <p>"has successfully completed"</p>
                                <h3 class="certificate__course">{cert.course_title}</h3>
                                {cert.issued_at.map(|d| view! { <p class="certificate__date">"Issued " {d}</p> })}
                                <p class="certificate__id">"Certificate ID: " {cert.id}</p>
                            </div>
                            <button class="btn btn--primary no-print" on:click=move |_| print_page()>
                                "Print Certificate"
                            </button>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
