//! Message element showing the current notice.

#[cfg(test)]
#[path = "notice_banner_test.rs"]
mod notice_banner_test;

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;

#[component]
pub fn NoticeBanner(state: RwSignal<ActivitiesState>) -> impl IntoView {
    let class = Memo::new(move |_| state.with(|s| s.notice.class_list()));
    let text = Memo::new(move |_| {
        state.with(|s| s.notice.current().map(|n| n.text.clone()).unwrap_or_default())
    });

    view! { <div id="message" class=move || class.get()>{move || text.get()}</div> }
}
