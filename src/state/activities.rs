//! Rendered snapshot of the board: list area, select options, notice.
//!
//! DESIGN
//! ======
//! The snapshot only ever holds what the last successful fetch returned.
//! Derived values (spots left, participant count) are computed by the views
//! from `Activity` at render time and never stored here.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use super::notice::NoticeSlot;
use crate::net::types::{Activity, ActivityMap};

/// State of the activity list area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Listing {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// Activities in server order.
    Loaded(Vec<(String, Activity)>),
    /// The last fetch failed; the area shows a static failure notice.
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    pub listing: Listing,
    /// Activity names offered by the signup select, after the empty option.
    pub options: Vec<String>,
    pub notice: NoticeSlot,
}

impl ActivitiesState {
    /// Replace the list and the select options with a fresh fetch.
    pub fn apply_activities(&mut self, activities: ActivityMap) {
        self.options = activities.names().map(str::to_owned).collect();
        self.listing = Listing::Loaded(activities.into_entries());
    }

    /// Mark the list as failed. The select options keep their last value.
    pub fn fail_load(&mut self) {
        self.listing = Listing::Failed;
    }

    pub fn activity(&self, name: &str) -> Option<&Activity> {
        match &self.listing {
            Listing::Loaded(entries) => entries.iter().find(|(n, _)| n == name).map(|(_, a)| a),
            Listing::Loading | Listing::Failed => None,
        }
    }
}
