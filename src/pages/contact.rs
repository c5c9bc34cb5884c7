//! Contact details.

use leptos::prelude::*;

const CHANNELS: &[(&str, &str, &str)] = &[
    ("Phone", "Mon-Fri from 8am to 5pm", "+27 (011) 123-4567"),
    ("Email", "We'll respond within 24 hours", "info@ghei.org.za"),
    ("Office", "123 Main Street", "Johannesburg, Gauteng"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Contact us"</h1>
            <div class="contact-page__grid">
                {CHANNELS
                    .iter()
                    .map(|(title, note, detail)| {
                        view! {
                            <div class="contact-card">
                                <h3>{*title}</h3>
                                <p>{*note}</p>
                                <p class="contact-card__detail">{*detail}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
