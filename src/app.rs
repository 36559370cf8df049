//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::ProtectedRoute;
use crate::components::notices::NoticeHost;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, register::RegisterPage,
};
use crate::state::notices::NoticeState;
use crate::state::session::AppSession;

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
/// Provides the session store and notice stack through context, sets up
/// routing, and kicks off the startup credential probe.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::from_browser();
    let notices = RwSignal::new(NoticeState::default());
    provide_context(session);
    provide_context(notices);

    // Settle persisted credentials against the server once per load.
    #[cfg(feature = "hydrate")]
    {
        if session.has_credentials() {
            leptos::task::spawn_local(async move {
                session.fetch_user().await;
            });
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/techkatta-client.css"/>
        <Title text="TechKatta"/>

        <Router>
            <NoticeHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=ProtectedDashboard/>
            </Routes>
        </Router>
    }
}

/// Dashboard route wrapped in the auth guard.
#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardPage/>
        </ProtectedRoute>
    }
}
