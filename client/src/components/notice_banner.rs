//! Dismissible page-wide notice.

use leptos::prelude::*;

use crate::state::notice::Notice;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = expect_context::<RwSignal<Option<Notice>>>();

    move || {
        notice.get().map(|n| {
            view! {
                <div class=n.tone.class() role="status">
                    <span>{n.message}</span>
                    <button class="notice__dismiss" title="Dismiss" on:click=move |_| notice.set(None)>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
