//! `ActivityBoard` controller: load, signup, and removal cycles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call into the controller from spawned local futures. The controller
//! talks to the Activity API through [`ActivityApi`], asks the user through
//! [`Confirm`], and writes results into whatever [`BoardStore`] it is handed
//! (an `RwSignal` in the browser, a plain cell in tests).
//!
//! ERROR HANDLING
//! ==============
//! Every operation is all-or-nothing per user action. Transport failures are
//! logged and surfaced with a generic notice; application failures surface
//! the server's `detail`. Nothing here retries.
//!
//! The client never edits the snapshot after a mutation. Successful signups
//! and removals re-fetch the whole list instead.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::logging;
use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::net::api::{ActivityApi, HttpActivityApi};
use crate::state::activities::ActivitiesState;
use crate::state::notice::NoticeKind;

const SIGNUP_SUCCESS_FALLBACK: &str = "Signed up successfully";
const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const REMOVAL_SUCCESS_FALLBACK: &str = "Removed participant";
const REMOVAL_REJECTED_FALLBACK: &str = "Failed to remove participant";
const REMOVAL_FAILED: &str = "Failed to remove participant. Try again.";

/// Blocking yes/no prompt shown before a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// `window.confirm`. Declines when no browser window is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn confirm(&self, prompt: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window().map_or(false, |w| w.confirm_with_message(prompt).unwrap_or(false))
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

/// Where the controller writes the board snapshot.
pub trait BoardStore {
    fn apply(&self, f: impl FnOnce(&mut ActivitiesState));
}

impl BoardStore for RwSignal<ActivitiesState> {
    fn apply(&self, f: impl FnOnce(&mut ActivitiesState)) {
        if self.try_update(f).is_none() {
            logging::warn!("activity board state disposed; dropping update");
        }
    }
}

/// Result of a signup submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// 2xx; the list was refreshed and the form may be reset.
    Accepted,
    /// Non-2xx; the server's detail is on screen.
    Rejected,
    /// Network or decode failure.
    Failed,
}

/// Result of a participant removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The user declined the prompt; no request was sent.
    Declined,
    Removed,
    Rejected,
    Failed,
}

/// Text of the removal confirmation prompt.
pub fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}?")
}

#[derive(Clone, Debug)]
pub struct ActivityBoard<A, C> {
    api: A,
    confirm: C,
    config: BoardConfig,
}

impl ActivityBoard<HttpActivityApi, BrowserConfirm> {
    /// Board wired to `fetch` and `window.confirm`.
    pub fn for_browser(config: BoardConfig) -> Self {
        let api = HttpActivityApi::new(config.api_base.clone());
        Self::new(api, BrowserConfirm, config)
    }
}

impl<A: ActivityApi, C: Confirm> ActivityBoard<A, C> {
    pub fn new(api: A, confirm: C, config: BoardConfig) -> Self {
        Self { api, confirm, config }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the activity list and replace the rendered snapshot.
    ///
    /// Returns `false` when the fetch failed and the list area now shows the
    /// failure notice.
    pub async fn load_activities(&self, store: &impl BoardStore) -> bool {
        match self.api.list_activities().await {
            Ok(activities) => {
                store.apply(|s| s.apply_activities(activities));
                true
            }
            Err(e) => {
                logging::error!("Error fetching activities: {e}");
                store.apply(ActivitiesState::fail_load);
                false
            }
        }
    }

    /// Sign `email` up for `activity`, then refresh on success.
    pub async fn submit_signup(&self, store: &impl BoardStore, activity: &str, email: &str) -> SignupOutcome {
        let delay = self.config.signup_notice_ms;
        match self.api.signup(activity, email).await {
            Ok(reply) if reply.is_success() => {
                let text = reply
                    .body
                    .message
                    .unwrap_or_else(|| SIGNUP_SUCCESS_FALLBACK.to_owned());
                store.apply(|s| {
                    s.notice.show(text, NoticeKind::Success, delay);
                });
                logging::log!("Signup success, refreshing activities... activity={activity} email={email}");
                self.load_activities(store).await;
                SignupOutcome::Accepted
            }
            Ok(reply) => {
                let text = reply
                    .body
                    .detail
                    .unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_owned());
                store.apply(|s| {
                    s.notice.show(text, NoticeKind::Error, delay);
                });
                SignupOutcome::Rejected
            }
            Err(e) => {
                logging::error!("Error signing up: {e}");
                store.apply(|s| {
                    s.notice.show(SIGNUP_FAILED, NoticeKind::Error, delay);
                });
                SignupOutcome::Failed
            }
        }
    }

    /// Ask for confirmation, unregister `email` from `activity`, and refresh
    /// on success.
    pub async fn remove_participant(&self, store: &impl BoardStore, activity: &str, email: &str) -> RemovalOutcome {
        if !self.confirm.confirm(&removal_prompt(activity, email)) {
            return RemovalOutcome::Declined;
        }

        let delay = self.config.removal_notice_ms;
        match self.api.unregister(activity, email).await {
            Ok(reply) if reply.is_success() => {
                let text = reply
                    .body
                    .message
                    .unwrap_or_else(|| REMOVAL_SUCCESS_FALLBACK.to_owned());
                store.apply(|s| {
                    s.notice.show(text, NoticeKind::Success, delay);
                });
                self.load_activities(store).await;
                RemovalOutcome::Removed
            }
            Ok(reply) => {
                let text = reply
                    .body
                    .detail
                    .unwrap_or_else(|| REMOVAL_REJECTED_FALLBACK.to_owned());
                store.apply(|s| {
                    s.notice.show(text, NoticeKind::Error, delay);
                });
                RemovalOutcome::Rejected
            }
            Err(e) => {
                logging::error!("Error removing participant: {e}");
                store.apply(|s| {
                    s.notice.show(REMOVAL_FAILED, NoticeKind::Error, delay);
                });
                RemovalOutcome::Failed
            }
        }
    }
}
