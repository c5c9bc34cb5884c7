//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::header::Header;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{
    admin::AdminPage, apply::ApplyPage, certificate::CertificatePage, contact::ContactPage,
    course_content::CourseContentPage, courses::CoursesPage, dashboard::DashboardPage, forum::ForumPage,
    home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage, resources::ResourcesPage,
    topic::TopicPage, topic_form::NewTopicPage,
};
use crate::state::auth::AuthState;

/// Route path covering `/{name}` and everything below it, so deep links
/// into a guarded section still reach the guard.
fn section(name: &'static str) -> (StaticSegment<&'static str>, WildcardSegment) {
    (StaticSegment(name), WildcardSegment("rest"))
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API config and auth state, then mounts the session manager
/// inside the router so logout and guards can navigate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_build_env());
    provide_context(RwSignal::new(AuthState::checking()));

    view! {
        <Stylesheet id="leptos" href="/pkg/ghei-ui.css"/>
        <Title text="GHEI"/>

        <Router>
            <AuthProvider>
                <Header/>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                        <Route path=StaticSegment("apply") view=ApplyPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>

                        <Route
                            path=section("dashboard")
                            view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("profile")
                            view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("resources")
                            view=|| view! { <ProtectedRoute><ResourcesPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("resources"), ParamSegment("id"))
                            view=|| view! { <ProtectedRoute><ResourcesPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("forum")
                            view=|| view! { <ProtectedRoute><ForumPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("forum"), StaticSegment("new"))
                            view=|| view! { <ProtectedRoute><NewTopicPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("forum"), StaticSegment("topic"), ParamSegment("id"))
                            view=|| view! { <ProtectedRoute><TopicPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("courses")
                            view=|| view! { <ProtectedRoute><CoursesPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("courses"), ParamSegment("id"))
                            view=|| view! { <ProtectedRoute><CourseContentPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("courses"), ParamSegment("id"), StaticSegment("certificate"))
                            view=|| view! { <ProtectedRoute><CertificatePage/></ProtectedRoute> }
                        />

                        <Route
                            path=section("admin")
                            view=|| view! { <ProtectedRoute admin_only=true><AdminPage/></ProtectedRoute> }
                        />
                    </Routes>
                </main>
            </AuthProvider>
        </Router>
    }
}
