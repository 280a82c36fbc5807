//! 読み筋リスト

use leptos::prelude::*;

use crate::session_handle::SessionHandle;

#[component]
pub fn VariationList(session: SessionHandle) -> impl IntoView {
    let variations = move || session.with(|s| s.rendered().variations.clone());

    view! {
        <div class="variations">
            {move || {
                variations()
                    .into_iter()
                    .map(|v| {
                        view! {
                            <div class="variation mb-3">
                                <h6 class="mb-2">
                                    {v.label}
                                    <span class=format!("{} ms-2", v.badge.severity.css_class())>
                                        {v.badge.text}
                                    </span>
                                </h6>
                                <div class="small text-muted">{v.moves}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
