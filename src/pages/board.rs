//! Activity board page: list, signup form, and message area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the board's reactive state and the form fields, builds the
//! controller for the browser, and runs every controller call on the local
//! event loop. Calls are neither serialized nor cancelled; whichever
//! response lands last decides what is on screen.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::future::Future;

use leptos::prelude::*;

use crate::board::{ActivityBoard, BoardStore, SignupOutcome};
use crate::components::activity_list::ActivityList;
use crate::components::notice_banner::NoticeBanner;
use crate::components::signup_form::SignupForm;
use crate::config::BoardConfig;
use crate::state::activities::ActivitiesState;

/// Run a UI future on the browser event loop. Native builds have no event
/// loop and skip it.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn run_local(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn sleep_ms(ms: u32) {
    #[cfg(feature = "csr")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Clear the form once a signup has been accepted and the list refreshed.
/// Rejected and failed submissions keep what the user typed.
pub(crate) fn reset_after_signup(outcome: SignupOutcome, activity: RwSignal<String>, email: RwSignal<String>) {
    if outcome == SignupOutcome::Accepted {
        activity.set(String::new());
        email.set(String::new());
    }
}

/// Hide notice `seq` once its delay has elapsed. A newer notice stays up.
pub(crate) fn expire_notice(store: &impl BoardStore, seq: u64) {
    store.apply(|s| {
        s.notice.hide(seq);
    });
}

/// `(seq, delay)` of the notice currently waiting to hide. Changes exactly
/// when a new notice is shown, so the hide timer starts at show time.
pub(crate) fn hide_ticket(state: RwSignal<ActivitiesState>) -> Memo<Option<(u64, u32)>> {
    Memo::new(move |_| state.with(|s| s.notice.pending_hide()))
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let board = ActivityBoard::for_browser(BoardConfig::from_document());
    let state = RwSignal::new(ActivitiesState::default());
    let activity = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let listing = Memo::new(move |_| state.with(|s| s.listing.clone()));
    let options = Memo::new(move |_| state.with(|s| s.options.clone()));

    let ticket = hide_ticket(state);
    Effect::new(move |_| {
        if let Some((seq, delay)) = ticket.get() {
            run_local(async move {
                sleep_ms(delay).await;
                expire_notice(&state, seq);
            });
        }
    });

    // Initial load, once per mount.
    run_local({
        let board = board.clone();
        async move {
            board.load_activities(&state).await;
        }
    });

    let on_submit = Callback::new({
        let board = board.clone();
        move |()| {
            let board = board.clone();
            let activity_name = activity.get_untracked();
            let email_value = email.get_untracked();
            run_local(async move {
                // Reset only after the refresh so the selection survives it.
                let outcome = board.submit_signup(&state, &activity_name, &email_value).await;
                reset_after_signup(outcome, activity, email);
            });
        }
    });

    let on_remove = Callback::new(move |(activity_name, participant): (String, String)| {
        let board = board.clone();
        run_local(async move {
            board.remove_participant(&state, &activity_name, &participant).await;
        });
    });

    view! {
        <main class="activity-board">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList listing=listing on_remove=on_remove/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm options=options activity=activity email=email on_submit=on_submit/>
                <NoticeBanner state=state/>
            </section>
        </main>
    }
}
