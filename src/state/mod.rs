//! Client-side state for the activity board.
//!
//! DESIGN
//! ======
//! `notice` is kept apart from `activities` so the message slot can be
//! exercised without any activity data.

pub mod activities;
pub mod notice;
