//! Dashboard stat tile.

use leptos::prelude::*;

/// Small presentational card: a metric title, its value, and a change line.
#[component]
pub fn StatCard(
    title: &'static str,
    value: &'static str,
    change: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
            <p class="stat-card__change">{change}</p>
        </div>
    }
}
