//! Landing page: mission statement and programme overview.

use leptos::prelude::*;
use leptos_router::components::A;

struct Initiative {
    title: &'static str,
    summary: &'static str,
}

const INITIATIVES: &[Initiative] = &[
    Initiative {
        title: "Affordable Housing",
        summary: "Help applying for subsidised, social and rental housing programmes.",
    },
    Initiative {
        title: "Tenant Education",
        summary: "Free courses on tenant rights, budgeting and property maintenance.",
    },
    Initiative {
        title: "Community Support",
        summary: "A moderated forum where tenants and landlords share advice.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Empowering communities through housing"</h1>
                <p class="hero__subtitle">
                    "We connect Gauteng residents with housing programmes, legal resources and education."
                </p>
                <div class="hero__actions">
                    <A href="/apply" attr:class="btn btn--primary">"Apply for housing"</A>
                    <A href="/register" attr:class="btn">"Join the community"</A>
                </div>
            </section>
            <section class="initiatives">
                <h2>"Our initiatives"</h2>
                <div class="initiatives__grid">
                    {INITIATIVES
                        .iter()
                        .map(|i| {
                            view! {
                                <article class="initiative-card">
                                    <h3>{i.title}</h3>
                                    <p>{i.summary}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
