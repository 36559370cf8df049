//! Toast stack rendering.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticeState};

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "notice notice--info",
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    }
}

/// Fixed-position host for the notice stack. Clicking a notice dismisses it.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-host" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id.clone()
                children=move |notice| {
                    let id = notice.id.clone();
                    view! {
                        <button
                            class=kind_class(notice.kind)
                            on:click=move |_| notices.update(|n| n.dismiss(&id))
                        >
                            {notice.message}
                        </button>
                    }
                }
            />
        </div>
    }
}
