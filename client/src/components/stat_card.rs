//! Dashboard counter card linking to its section.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] href: String,
) -> impl IntoView {
    view! {
        <a class="stat-card" href=href>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </a>
    }
}
