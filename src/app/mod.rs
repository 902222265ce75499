//! Session logic: UI state, event handling, and action dispatch into the tally.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
