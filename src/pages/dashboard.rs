//! Protected dashboard shell: sidebar, welcome header, stat cards, feed stub.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatCard;
use crate::net::types::User;
use crate::state::session::AppSession;

const NAV_ITEMS: [&str; 6] =
    ["Home", "Communities", "Hackathons", "Messages", "Notifications", "Settings"];

/// Uppercased first character of the username, for the avatar badge.
pub fn avatar_initial(user: &User) -> String {
    user.username.chars().next().map_or_else(String::new, |c| c.to_uppercase().collect())
}

/// Name used in the welcome header: full name, else username, else a
/// neutral greeting while the profile is still loading.
pub fn welcome_name(user: Option<&User>) -> String {
    match user {
        Some(user) => user.full_name.clone().unwrap_or_else(|| user.username.clone()),
        None => "there".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let state = session.state();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <aside class="dashboard-page__sidebar">
                <div class="dashboard-page__identity">
                    <div class="dashboard-page__avatar">
                        {move || state.get().user.as_ref().map(avatar_initial).unwrap_or_default()}
                    </div>
                    <div>
                        <div class="dashboard-page__username">
                            {move || state.get().user.as_ref().map(|u| u.username.clone()).unwrap_or_default()}
                        </div>
                        <div class="dashboard-page__email">
                            {move || state.get().user.as_ref().map(|u| u.email.clone()).unwrap_or_default()}
                        </div>
                    </div>
                </div>

                <nav class="dashboard-page__nav">
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, label)| {
                            let class = if index == 0 {
                                "dashboard-page__nav-item dashboard-page__nav-item--active"
                            } else {
                                "dashboard-page__nav-item"
                            };
                            view! { <span class=class>{*label}</span> }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <button class="btn btn--secondary dashboard-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </aside>

            <main class="dashboard-page__main">
                <h1 class="dashboard-page__welcome">
                    {move || format!("Welcome back, {}!", welcome_name(state.get().user.as_ref()))}
                </h1>

                <div class="dashboard-page__stats">
                    <StatCard title="Communities" value="12" change="+2 this week"/>
                    <StatCard title="Hackathons" value="5" change="3 upcoming"/>
                    <StatCard title="Reputation" value="1,234" change="+45 this month"/>
                </div>

                <div class="dashboard-page__feed">
                    <h2>"Recommended for You"</h2>
                    <p>
                        "Your personalized feed will appear here. Start by joining communities \
                         and connecting with other students!"
                    </p>
                </div>
            </main>
        </div>
    }
}
