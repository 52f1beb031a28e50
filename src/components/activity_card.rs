//! Card for one activity with its participant list.

use leptos::prelude::*;

use crate::net::types::Activity;

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

/// Availability line, recomputed from the participant list on every render.
fn availability_text(activity: &Activity) -> String {
    format!("{} spots left", activity.spots_left())
}

/// One activity card. Every participant row carries a removal button tagged
/// with its email; clicking it hands `(activity, email)` to `on_remove`.
#[component]
pub fn ActivityCard(name: String, activity: Activity, on_remove: Callback<(String, String)>) -> impl IntoView {
    let availability = availability_text(&activity);

    let rows = if activity.participants.is_empty() {
        view! { <li class="no-participants">"No participants yet"</li> }.into_any()
    } else {
        activity
            .participants
            .into_iter()
            .map(|email| {
                let activity_name = name.clone();
                let label = email.clone();
                let target = email.clone();
                view! {
                    <li class="participant-item">
                        <span class="participant-email">{label}</span>
                        <button
                            class="participant-delete"
                            data-email=email
                            title="Unregister"
                            on:click=move |_| on_remove.run((activity_name.clone(), target.clone()))
                        >
                            "✖"
                        </button>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{activity.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {activity.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-section">
                <h5>"Participants"</h5>
                <ul class="participants-list">{rows}</ul>
            </div>
        </div>
    }
}
