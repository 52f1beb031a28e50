//! Activity list area: loading placeholder, cards, or the failure notice.

#[cfg(test)]
#[path = "activity_list_test.rs"]
mod activity_list_test;

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::state::activities::Listing;

#[component]
pub fn ActivityList(#[prop(into)] listing: Signal<Listing>, on_remove: Callback<(String, String)>) -> impl IntoView {
    view! {
        <div id="activities-list">
            {move || match listing.get() {
                Listing::Loading => view! { <p>"Loading activities..."</p> }.into_any(),
                Listing::Failed => {
                    view! { <p>"Failed to load activities. Please try again later."</p> }.into_any()
                }
                Listing::Loaded(entries) => entries
                    .into_iter()
                    .map(|(name, activity)| view! { <ActivityCard name=name activity=activity on_remove=on_remove/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
